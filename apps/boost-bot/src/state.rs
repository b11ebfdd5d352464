use std::sync::Arc;

use crate::config::BotConfig;
use crate::services::pay_service::PayService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BotConfig>,
    pub pay_service: PayService,
}
