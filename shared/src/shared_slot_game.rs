use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Serialize, Deserialize};

use crate::bet::{format_bet, BetLimits, SLOT_BET_LIMITS};
use crate::reel::{Reel, ReelPhase};
use crate::symbols::Symbol;
use crate::win_lines::{SpinResult, SpinSummary, WinLine, REEL_COUNT};

/// Slot machine geometry and animation timings. All durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    pub reels: usize,
    pub rows: usize,
    pub reel_stagger_ms: u32,
    pub frame_ms: u32,
    pub fast_spins_min: u32,
    pub fast_spins_jitter: u32,
    pub slow_start_ms: u32,
    pub slow_spins: u32,
    pub slow_step_ms: u32,
    pub stop_bounce_ms: u32,
    pub settle_pause_ms: u32,
    pub auto_spin_interval_ms: u32,
    pub bet: BetLimits,
    pub bet_step: f64,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            reels: REEL_COUNT,
            rows: 3,
            reel_stagger_ms: 150,
            frame_ms: 16,
            fast_spins_min: 15,
            fast_spins_jitter: 10,
            slow_start_ms: 100,
            slow_spins: 3,
            slow_step_ms: 150,
            stop_bounce_ms: 300,
            settle_pause_ms: 500,
            auto_spin_interval_ms: 3000,
            bet: SLOT_BET_LIMITS,
            bet_step: 1.0,
        }
    }
}

/// Everything a spin needs once it has been accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    pub outcome: SpinResult,
    pub bet: f64,
    pub fast_spins: [u32; REEL_COUNT],
}

/// Reel state, bet, and the result of the last spin. The machine itself has no
/// notion of time; `SlotController` drives it through the scheduler.
#[derive(Debug, Clone)]
pub struct SlotMachine {
    config: SlotConfig,
    reels: Vec<Reel>,
    is_spinning: bool,
    bet: f64,
    last_result: Option<SpinResult>,
    win_lines: Vec<WinLine>,
    rng: StdRng,
}

impl SlotMachine {
    pub fn new(config: SlotConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: SlotConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut config: SlotConfig, mut rng: StdRng) -> Self {
        if config.reels != REEL_COUNT {
            warn!("slot config asks for {} reels, using {}", config.reels, REEL_COUNT);
            config.reels = REEL_COUNT;
        }
        let reels = (0..REEL_COUNT).map(|_| Reel::new(config.rows, &mut rng)).collect();
        let bet = config.bet.min;
        Self {
            config,
            reels,
            is_spinning: false,
            bet,
            last_result: None,
            win_lines: Vec::new(),
            rng,
        }
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    pub fn reels(&self) -> &[Reel] {
        &self.reels
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    pub fn bet(&self) -> f64 {
        self.bet
    }

    pub fn bet_label(&self) -> String {
        format_bet(self.bet)
    }

    pub fn last_result(&self) -> Option<&SpinResult> {
        self.last_result.as_ref()
    }

    pub fn win_lines(&self) -> &[WinLine] {
        &self.win_lines
    }

    /// Typed bet input, clamped to the slot's limits.
    pub fn set_bet_input(&mut self, input: &str) -> f64 {
        self.bet = self.config.bet.clamp(input);
        self.bet
    }

    /// Bet already validated elsewhere, e.g. against a catalog game's own limits.
    /// Kept as is; only non-finite or negative amounts are refused.
    pub fn set_bet(&mut self, amount: f64) -> f64 {
        if amount.is_finite() && amount >= 0.0 {
            self.bet = amount;
        } else {
            warn!("ignoring bet {}", amount);
        }
        self.bet
    }

    pub fn bet_up(&mut self) -> f64 {
        self.bet = self.config.bet.step_up(self.bet, self.config.bet_step);
        self.bet
    }

    pub fn bet_down(&mut self) -> f64 {
        self.bet = self.config.bet.step_down(self.bet, self.config.bet_step);
        self.bet
    }

    /// Takes the spinning flag and fixes the outcome and bet for this spin.
    /// Returns `None` without touching anything while a spin is in progress.
    pub fn begin_spin(&mut self, outcome: Option<SpinResult>) -> Option<SpinPlan> {
        if self.is_spinning {
            warn!("spin requested while reels are still moving");
            return None;
        }
        self.is_spinning = true;
        self.win_lines.clear();

        let outcome = match outcome {
            Some(outcome) => outcome,
            None => SpinResult::random(&mut self.rng),
        };
        let mut fast_spins = [0; REEL_COUNT];
        for spins in fast_spins.iter_mut() {
            let jitter = if self.config.fast_spins_jitter > 0 {
                self.rng.gen_range(0..self.config.fast_spins_jitter)
            } else {
                0
            };
            *spins = self.config.fast_spins_min.max(1) + jitter;
        }
        for reel in self.reels.iter_mut() {
            reel.set_phase(ReelPhase::Spinning);
        }
        debug!("spin started: {:?} at bet {}", outcome.icons(), self.bet);

        Some(SpinPlan { outcome, bet: self.bet, fast_spins })
    }

    pub fn shift_reel(&mut self, reel: usize) {
        if let Some(r) = self.reels.get_mut(reel) {
            r.shift(&mut self.rng);
        }
    }

    pub fn settle_reel(&mut self, reel: usize, target: Symbol) {
        if let Some(r) = self.reels.get_mut(reel) {
            r.settle(target);
            r.set_phase(ReelPhase::Stopping);
        }
    }

    pub fn set_reel_phase(&mut self, reel: usize, phase: ReelPhase) {
        if let Some(r) = self.reels.get_mut(reel) {
            r.set_phase(phase);
        }
    }

    /// Writes the outcome to the payline, evaluates it and releases the spinning flag.
    pub fn finish_spin(&mut self, outcome: SpinResult, bet: f64) -> SpinSummary {
        for (reel, symbol) in self.reels.iter_mut().zip(outcome.symbols()) {
            reel.set_payline(*symbol);
            reel.set_phase(ReelPhase::Idle);
        }
        let summary = SpinSummary::new(outcome, bet);
        self.win_lines = summary.win_lines.clone();
        self.last_result = Some(outcome);
        self.is_spinning = false;
        debug!("spin finished: {} lines, won {}", summary.win_lines.len(), summary.total_win);
        summary
    }

    /// Clears the last result and refills every reel. Ignored while spinning.
    pub fn reset(&mut self) -> bool {
        if self.is_spinning {
            warn!("reset ignored while spinning");
            return false;
        }
        self.win_lines.clear();
        self.last_result = None;
        for reel in self.reels.iter_mut() {
            reel.refill(&mut self.rng);
            reel.set_phase(ReelPhase::Idle);
        }
        true
    }

    /// Per reel, per visible row: whether the cell belongs to a winning line.
    pub fn highlights(&self) -> Vec<Vec<bool>> {
        let mut mask: Vec<Vec<bool>> = self
            .reels
            .iter()
            .map(|r| vec![false; r.rows()])
            .collect();
        for line in &self.win_lines {
            for (offset, symbol) in line.symbols.iter().enumerate() {
                let index = line.start + offset;
                let (Some(reel), Some(row_mask)) = (self.reels.get(index), mask.get_mut(index)) else {
                    continue;
                };
                for (row, cell) in reel.visible().iter().enumerate() {
                    if cell == symbol {
                        row_mask[row] = true;
                    }
                }
            }
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::Symbol::*;

    fn machine() -> SlotMachine {
        SlotMachine::with_seed(SlotConfig::default(), 42)
    }

    #[test]
    fn second_begin_is_rejected_without_changes() {
        let mut m = machine();
        let plan = m.begin_spin(Some(SpinResult::new([Cherry; 5]))).unwrap();
        assert!(m.is_spinning());
        let reels = m.reels().to_vec();
        assert!(m.begin_spin(None).is_none());
        assert_eq!(m.reels(), &reels[..]);
        assert!(plan.fast_spins.iter().all(|&n| (15..25).contains(&n)));
    }

    #[test]
    fn finish_writes_payline_and_releases_flag() {
        let mut m = machine();
        let outcome = SpinResult::new([Cherry, Cherry, Lemon, Lemon, Orange]);
        let plan = m.begin_spin(Some(outcome)).unwrap();
        let summary = m.finish_spin(plan.outcome, plan.bet);
        assert!(!m.is_spinning());
        let payline: Vec<_> = m.reels().iter().map(|r| r.payline_symbol()).collect();
        assert_eq!(payline, vec![Cherry, Cherry, Lemon, Lemon, Orange]);
        assert_eq!(summary.total_win, 5.0);
        assert_eq!(m.win_lines().len(), 2);
    }

    #[test]
    fn bet_is_fixed_when_the_spin_starts() {
        let mut m = machine();
        m.set_bet_input("10");
        let plan = m.begin_spin(None).unwrap();
        m.set_bet_input("20");
        assert_eq!(plan.bet, 10.0);
    }

    #[test]
    fn bet_controls_clamp() {
        let mut m = machine();
        assert_eq!(m.bet(), 1.0);
        assert_eq!(m.bet_down(), 1.0);
        assert_eq!(m.bet_up(), 2.0);
        assert_eq!(m.set_bet_input("5000"), 1000.0);
        assert_eq!(m.set_bet_input("x"), 1.0);
    }

    #[test]
    fn highlights_follow_line_offset() {
        let mut m = machine();
        let outcome = SpinResult::new([Lemon, Grape, Grape, Grape, Crown]);
        for (i, s) in outcome.symbols().iter().enumerate() {
            m.settle_reel(i, *s);
        }
        let plan = m.begin_spin(Some(outcome)).unwrap();
        m.finish_spin(plan.outcome, plan.bet);

        let mask = m.highlights();
        assert!(!mask[0][1]);
        assert!(mask[1][1] && mask[2][1] && mask[3][1]);
        assert!(!mask[4][1]);
    }

    #[test]
    fn reset_is_ignored_mid_spin() {
        let mut m = machine();
        m.begin_spin(None).unwrap();
        assert!(!m.reset());
        let plan_outcome = SpinResult::new([Bell; 5]);
        m.finish_spin(plan_outcome, 1.0);
        assert!(m.reset());
        assert!(m.win_lines().is_empty());
        assert!(m.last_result().is_none());
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config: SlotConfig = serde_json::from_str(r#"{"rows": 3, "frame_ms": 20}"#).unwrap();
        assert_eq!(config.frame_ms, 20);
        assert_eq!(config.reel_stagger_ms, 150);
        assert_eq!(config.bet, SLOT_BET_LIMITS);
    }
}
