/// Currency of every price in the table.
pub const CURRENCY: &str = "UAH";

/// Display name used when a callback carries a key that is not in the table.
pub const UNKNOWN_RANK_NAME: &str = "Неизвестный ранг";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub key: &'static str,
    pub name: &'static str,
    pub price: u32,
}

impl Rank {
    pub fn button_label(&self) -> String {
        format!("{} ({} грн)", self.name, self.price)
    }
}

pub static RANKS: [Rank; 7] = [
    Rank { key: "rank_warrior", name: "Воин", price: 50 },
    Rank { key: "rank_elite", name: "Элитный", price: 100 },
    Rank { key: "rank_master", name: "Мастер", price: 150 },
    Rank { key: "rank_grandmaster", name: "Грандмастер", price: 200 },
    Rank { key: "rank_epic", name: "Эпик", price: 300 },
    Rank { key: "rank_legend", name: "Легенда", price: 400 },
    Rank { key: "rank_mythic", name: "Мифик", price: 500 },
];

pub fn find(key: &str) -> Option<&'static Rank> {
    RANKS.iter().find(|rank| rank.key == key)
}

/// Name and price for `key`, falling back to the unknown name and zero.
pub fn name_and_price(key: &str) -> (&'static str, u32) {
    find(key)
        .map(|rank| (rank.name, rank.price))
        .unwrap_or((UNKNOWN_RANK_NAME, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_and_prices_positive() {
        for (i, rank) in RANKS.iter().enumerate() {
            assert!(rank.price > 0, "{}", rank.key);
            assert!(rank.key.starts_with("rank_"));
            assert!(RANKS[i + 1..].iter().all(|other| other.key != rank.key));
        }
    }

    #[test]
    fn known_rank_resolves() {
        assert_eq!(name_and_price("rank_master"), ("Мастер", 150));
        assert_eq!(name_and_price("rank_mythic"), ("Мифик", 500));
    }

    #[test]
    fn unknown_rank_falls_back_to_zero() {
        assert_eq!(name_and_price("rank_immortal"), (UNKNOWN_RANK_NAME, 0));
        assert!(find("").is_none());
    }

    #[test]
    fn button_label_shows_price() {
        let rank = find("rank_warrior").unwrap();
        assert_eq!(rank.button_label(), "Воин (50 грн)");
    }
}
