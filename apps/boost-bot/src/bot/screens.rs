use teloxide::types::{InlineKeyboardMarkup, KeyboardMarkup};

use crate::bot::keyboards;
use crate::catalog;

pub const START_FAILED: &str = "Произошла ошибка. Попробуйте снова позже.";
pub const CHOOSE_SECTION: &str = "Выберите нужный раздел:";

#[derive(Debug, Clone)]
pub enum Markup {
    Reply(KeyboardMarkup),
    Inline(InlineKeyboardMarkup),
    None,
}

/// Text plus keyboard for one bot reply.
#[derive(Debug, Clone)]
pub struct Screen {
    pub text: String,
    pub markup: Markup,
}

impl Screen {
    fn new(text: impl Into<String>, markup: Markup) -> Self {
        Self {
            text: text.into(),
            markup,
        }
    }
}

pub fn welcome(first_name: &str) -> Screen {
    Screen::new(
        format!(
            "Привет, {}! 👋\nДобро пожаловать в наш бот по покупке буста!\n{}",
            first_name, CHOOSE_SECTION
        ),
        Markup::Reply(keyboards::main_menu()),
    )
}

pub fn main_section() -> Screen {
    Screen::new(CHOOSE_SECTION, Markup::Reply(keyboards::main_menu()))
}

pub fn boost_menu() -> Screen {
    Screen::new("Выберите услугу:", Markup::Inline(keyboards::boost_menu()))
}

pub fn help(support_contact: &str) -> Screen {
    Screen::new(
        format!("Напишите нам в поддержку: {}", support_contact),
        Markup::None,
    )
}

pub fn my_order() -> Screen {
    Screen::new(
        "Ваш текущий заказ пока не найден. Оформите новый заказ через меню!",
        Markup::None,
    )
}

pub fn rank_menu() -> Screen {
    Screen::new("Выберите ранг для буста:", Markup::Inline(keyboards::rank_menu()))
}

pub fn mmr_info() -> Screen {
    Screen::new(
        "Вы выбрали буст MMR в Mobile Legends. Укажите ваш текущий MMR и желаемый MMR.",
        Markup::None,
    )
}

pub fn rank_confirmation(rank_key: &str) -> Screen {
    let (name, price) = catalog::name_and_price(rank_key);
    Screen::new(
        format!(
            "Вы выбрали ранг: {}. Стоимость: {} грн. \nПодтвердите свой выбор, если хотите продолжить.",
            name, price
        ),
        Markup::Inline(keyboards::confirm_keyboard(rank_key)),
    )
}

pub fn payment_link(rank_key: &str, link: &str) -> Screen {
    let (name, _) = catalog::name_and_price(rank_key);
    Screen::new(
        format!(
            "Вы подтвердили выбор ранга: {}. \nДля завершения заказа оплатите по ссылке: {}.",
            name, link
        ),
        Markup::None,
    )
}
