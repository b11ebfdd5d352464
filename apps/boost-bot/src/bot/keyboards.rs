use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

use crate::bot::router::{
    confirm_data, BTN_HELP, BTN_MY_ORDER, BTN_ORDER_BOOST, CB_BACK_BOOST, CB_BACK_MAIN,
    CB_BOOST_MMR, CB_BOOST_RANK,
};
use crate::catalog::RANKS;

const BACK: &str = "Назад";

pub fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(BTN_ORDER_BOOST), KeyboardButton::new(BTN_HELP)],
        vec![KeyboardButton::new(BTN_MY_ORDER)],
    ])
    .resize_keyboard()
}

pub fn boost_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("Ранги MLBB", CB_BOOST_RANK)],
        vec![InlineKeyboardButton::callback("MMR Mobile Legends", CB_BOOST_MMR)],
        vec![InlineKeyboardButton::callback(BACK, CB_BACK_MAIN)],
    ])
}

/// Two ranks per row, cheapest first, then a back button.
pub fn rank_menu() -> InlineKeyboardMarkup {
    let mut grid: Vec<Vec<InlineKeyboardButton>> = RANKS
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|rank| InlineKeyboardButton::callback(rank.button_label(), rank.key))
                .collect()
        })
        .collect();
    grid.push(vec![InlineKeyboardButton::callback(BACK, CB_BACK_BOOST)]);

    InlineKeyboardMarkup::new(grid)
}

pub fn confirm_keyboard(rank_key: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("Подтвердить", confirm_data(rank_key)),
        InlineKeyboardButton::callback(BACK, CB_BOOST_RANK),
    ]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callback_data(markup: &InlineKeyboardMarkup) -> Vec<Vec<String>> {
        markup
            .inline_keyboard
            .iter()
            .map(|row| {
                row.iter()
                    .map(|button| match &button.kind {
                        InlineKeyboardButtonKind::CallbackData(data) => data.clone(),
                        other => panic!("unexpected button kind: {:?}", other),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn main_menu_has_three_buttons_in_two_rows() {
        let menu = main_menu();
        let labels: Vec<Vec<&str>> = menu
            .keyboard
            .iter()
            .map(|row| row.iter().map(|b| b.text.as_str()).collect())
            .collect();
        assert_eq!(
            labels,
            vec![vec!["📈 Заказать буст", "ℹ️ Помощь"], vec!["Мой заказ"]]
        );
    }

    #[test]
    fn rank_menu_layout() {
        let data = callback_data(&rank_menu());
        assert_eq!(data.len(), 5);
        assert_eq!(data[0], vec!["rank_warrior", "rank_elite"]);
        assert_eq!(data[3], vec!["rank_mythic"]);
        assert_eq!(data[4], vec!["back_boost"]);
        assert_eq!(rank_menu().inline_keyboard[1][0].text, "Мастер (150 грн)");
    }

    #[test]
    fn confirm_keyboard_points_back_to_rank_menu() {
        let data = callback_data(&confirm_keyboard("rank_epic"));
        assert_eq!(data, vec![vec!["confirm_rank_epic", "boost_rank"]]);
    }
}
