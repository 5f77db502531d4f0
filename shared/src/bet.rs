use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetLimits {
    pub min: f64,
    pub max: f64,
}

pub const SLOT_BET_LIMITS: BetLimits = BetLimits { min: 1.0, max: 1000.0 };

impl BetLimits {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp_value(&self, amount: f64) -> f64 {
        if amount.is_nan() {
            return self.min;
        }
        amount.max(self.min).min(self.max)
    }

    /// Clamps typed input. Anything that is not a number falls back to the minimum.
    pub fn clamp(&self, input: &str) -> f64 {
        match input.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() => self.clamp_value(amount),
            _ => self.min,
        }
    }

    /// Typed input rewritten as the in-range value it stands for, ready to put
    /// back into the field.
    pub fn normalize(&self, input: &str) -> String {
        format_bet(self.clamp(input))
    }

    pub fn step_up(&self, current: f64, step: f64) -> f64 {
        self.clamp_value(current + step)
    }

    pub fn step_down(&self, current: f64, step: f64) -> f64 {
        self.clamp_value(current - step)
    }
}

/// Renders a bet for an input field: whole amounts without decimals.
pub fn format_bet(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_typed_bets() {
        let limits = BetLimits::new(1.0, 100.0);
        assert_eq!(limits.clamp("0.5"), 1.0);
        assert_eq!(limits.clamp("250"), 100.0);
        assert_eq!(limits.clamp(" 42 "), 42.0);
        assert_eq!(limits.clamp("abc"), 1.0);
        assert_eq!(limits.clamp(""), 1.0);
        assert_eq!(limits.clamp("NaN"), 1.0);
        assert_eq!(limits.clamp("inf"), 1.0);
    }

    #[test]
    fn out_of_range_input_is_rewritten_even_when_stored_bet_is_unchanged() {
        let limits = BetLimits::new(1.0, 50.0);
        let stored = limits.normalize("50");
        assert_eq!(limits.normalize("999"), stored);
        assert_eq!(limits.normalize("999"), "50");
        assert_eq!(limits.normalize("0"), "1");
        assert_eq!(SLOT_BET_LIMITS.normalize("5000"), "1000");
        assert_eq!(SLOT_BET_LIMITS.normalize("12.5"), "12.50");
    }

    #[test]
    fn steps_stay_in_range() {
        assert_eq!(SLOT_BET_LIMITS.step_down(1.0, 1.0), 1.0);
        assert_eq!(SLOT_BET_LIMITS.step_up(1000.0, 1.0), 1000.0);
        assert_eq!(SLOT_BET_LIMITS.step_up(10.0, 1.0), 11.0);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_bet(25.0), "25");
        assert_eq!(format_bet(2.5), "2.50");
        assert_eq!(format_money(1234.5), "$1234.50");
    }
}
