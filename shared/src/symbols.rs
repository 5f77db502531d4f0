use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Serialize, Deserialize};

/// Reel symbols in catalog order. The order matters: a settled reel shows the
/// catalog neighbours of its target above and below the payline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Cherry,
    Lemon,
    Orange,
    Grape,
    Diamond,
    Seven,
    Bell,
    Star,
    MoneyBag,
    Crown,
}

pub const CATALOG: [Symbol; 10] = [
    Symbol::Cherry,
    Symbol::Lemon,
    Symbol::Orange,
    Symbol::Grape,
    Symbol::Diamond,
    Symbol::Seven,
    Symbol::Bell,
    Symbol::Star,
    Symbol::MoneyBag,
    Symbol::Crown,
];

static WEIGHTS: Lazy<WeightedIndex<u32>> = Lazy::new(|| {
    WeightedIndex::new(CATALOG.iter().map(|s| s.weight()))
        .expect("symbol weights are static and non-zero")
});

impl Symbol {
    pub fn icon(self) -> &'static str {
        match self {
            Symbol::Cherry => "🍒",
            Symbol::Lemon => "🍋",
            Symbol::Orange => "🍊",
            Symbol::Grape => "🍇",
            Symbol::Diamond => "💎",
            Symbol::Seven => "7️⃣",
            Symbol::Bell => "🔔",
            Symbol::Star => "⭐",
            Symbol::MoneyBag => "💰",
            Symbol::Crown => "👑",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Symbol::Cherry => "Cherry",
            Symbol::Lemon => "Lemon",
            Symbol::Orange => "Orange",
            Symbol::Grape => "Grape",
            Symbol::Diamond => "Diamond",
            Symbol::Seven => "Seven",
            Symbol::Bell => "Bell",
            Symbol::Star => "Star",
            Symbol::MoneyBag => "Money Bag",
            Symbol::Crown => "Crown",
        }
    }

    /// Base payout value; every win-line multiplier is derived from it.
    pub fn value(self) -> u32 {
        match self {
            Symbol::Cherry => 2,
            Symbol::Lemon => 3,
            Symbol::Orange => 4,
            Symbol::Grape => 5,
            Symbol::Diamond => 10,
            Symbol::Seven => 20,
            Symbol::Bell => 15,
            Symbol::Star => 12,
            Symbol::MoneyBag => 25,
            Symbol::Crown => 50,
        }
    }

    /// Relative draw frequency. Higher is more common.
    pub fn weight(self) -> u32 {
        match self {
            Symbol::Cherry => 20,
            Symbol::Lemon => 15,
            Symbol::Orange => 12,
            Symbol::Grape => 10,
            Symbol::Diamond => 8,
            Symbol::Seven => 5,
            Symbol::Bell => 6,
            Symbol::Star => 7,
            Symbol::MoneyBag => 3,
            Symbol::Crown => 2,
        }
    }

    pub fn catalog_index(self) -> usize {
        CATALOG
            .iter()
            .position(|&s| s == self)
            .unwrap_or_default()
    }

    /// Symbol `offset` places away in catalog order, wrapping at both ends.
    pub fn neighbour(self, offset: isize) -> Symbol {
        let len = CATALOG.len() as isize;
        let idx = (self.catalog_index() as isize + offset).rem_euclid(len);
        CATALOG[idx as usize]
    }

    pub fn from_icon(icon: &str) -> Option<Symbol> {
        CATALOG.iter().copied().find(|s| s.icon() == icon)
    }

    /// Weighted random draw over the whole catalog.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Symbol {
        CATALOG[WEIGHTS.sample(rng)]
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.icon())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSymbol(pub String);

impl fmt::Display for UnknownSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown symbol: {}", self.0)
    }
}

impl std::error::Error for UnknownSymbol {}

/// Accepts an icon, a display name, or a snake_case identifier.
impl FromStr for Symbol {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(symbol) = Symbol::from_icon(s) {
            return Ok(symbol);
        }
        let wanted = s.trim().to_ascii_lowercase().replace(' ', "_");
        CATALOG
            .iter()
            .copied()
            .find(|sym| sym.name().to_ascii_lowercase().replace(' ', "_") == wanted)
            .ok_or_else(|| UnknownSymbol(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn neighbours_wrap_around_catalog() {
        assert_eq!(Symbol::Cherry.neighbour(-1), Symbol::Crown);
        assert_eq!(Symbol::Crown.neighbour(1), Symbol::Cherry);
        assert_eq!(Symbol::Diamond.neighbour(1), Symbol::Seven);
    }

    #[test]
    fn parses_icons_names_and_ids() {
        assert_eq!("💰".parse::<Symbol>(), Ok(Symbol::MoneyBag));
        assert_eq!("Money Bag".parse::<Symbol>(), Ok(Symbol::MoneyBag));
        assert_eq!("money_bag".parse::<Symbol>(), Ok(Symbol::MoneyBag));
        assert!("banana".parse::<Symbol>().is_err());
    }

    #[test]
    fn serializes_as_snake_case_ids() {
        let json = serde_json::to_string(&[Symbol::Seven, Symbol::MoneyBag]).unwrap();
        assert_eq!(json, r#"["seven","money_bag"]"#);
    }

    #[test]
    fn weighted_draw_favours_heavy_symbols() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cherries = 0;
        let mut crowns = 0;
        for _ in 0..20_000 {
            match Symbol::draw(&mut rng) {
                Symbol::Cherry => cherries += 1,
                Symbol::Crown => crowns += 1,
                _ => {}
            }
        }
        // 20/88 vs 2/88 of the draws
        assert!(cherries > crowns * 5, "cherries={cherries} crowns={crowns}");
        assert!(crowns > 0);
    }
}
