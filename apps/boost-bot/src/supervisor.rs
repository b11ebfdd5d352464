use anyhow::{anyhow, Result};
use std::future::Future;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, warn};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub struct Task {
    pub name: &'static str,
    pub handle: JoinHandle<Result<()>>,
}

impl Task {
    pub fn spawn<F>(name: &'static str, fut: F) -> Self
    where
        F: Future<Output = Result<()>> + Send + 'static,
    {
        Self {
            name,
            handle: tokio::spawn(fut),
        }
    }
}

enum Exit {
    First(Result<Result<()>, JoinError>),
    Second(Result<Result<()>, JoinError>),
    Signal,
}

/// Run two long-lived tasks side by side.
///
/// Whichever finishes first (or an external `stop` signal) triggers a
/// broadcast on `shutdown`; the survivor gets `SHUTDOWN_GRACE` to wind down
/// before being aborted. The first failure observed is returned.
pub async fn supervise<S>(
    mut first: Task,
    mut second: Task,
    shutdown: broadcast::Sender<()>,
    stop: S,
) -> Result<()>
where
    S: Future<Output = ()>,
{
    let exit = tokio::select! {
        res = &mut first.handle => Exit::First(res),
        res = &mut second.handle => Exit::Second(res),
        _ = stop => Exit::Signal,
    };

    let _ = shutdown.send(());

    match exit {
        Exit::First(res) => {
            let outcome = outcome(first.name, res);
            let rest = wind_down(second).await;
            outcome.and(rest)
        }
        Exit::Second(res) => {
            let outcome = outcome(second.name, res);
            let rest = wind_down(first).await;
            outcome.and(rest)
        }
        Exit::Signal => {
            info!("Shutdown requested, stopping tasks...");
            let a = wind_down(first).await;
            let b = wind_down(second).await;
            a.and(b)
        }
    }
}

async fn wind_down(task: Task) -> Result<()> {
    let Task { name, mut handle } = task;
    match tokio::time::timeout(SHUTDOWN_GRACE, &mut handle).await {
        Ok(res) => outcome(name, res),
        Err(_) => {
            warn!("{} did not stop within {:?}, aborting", name, SHUTDOWN_GRACE);
            handle.abort();
            Ok(())
        }
    }
}

fn outcome(name: &str, res: Result<Result<()>, JoinError>) -> Result<()> {
    match res {
        Ok(Ok(())) => {
            info!("{} stopped", name);
            Ok(())
        }
        Ok(Err(e)) => {
            error!("{} failed: {:#}", name, e);
            Err(e.context(format!("{} failed", name)))
        }
        Err(e) => {
            error!("{} task aborted: {}", name, e);
            Err(anyhow!("{} task aborted: {}", name, e))
        }
    }
}
