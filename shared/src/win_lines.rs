use std::fmt;
use std::ops::Index;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::symbols::Symbol;

pub const REEL_COUNT: usize = 5;

/// Positions that must agree with a special pattern for it to pay.
pub const SPECIAL_MIN_MATCHES: usize = 4;

/// One symbol per reel. The fixed-size array makes a short or long outcome
/// unrepresentable; injected outcomes go through `TryFrom<Vec<Symbol>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct SpinResult([Symbol; REEL_COUNT]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeLengthError {
    pub expected: usize,
    pub got: usize,
}

impl fmt::Display for OutcomeLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} symbols, got {}", self.expected, self.got)
    }
}

impl std::error::Error for OutcomeLengthError {}

impl SpinResult {
    pub fn new(symbols: [Symbol; REEL_COUNT]) -> Self {
        Self(symbols)
    }

    /// Independent weighted draw for every reel.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut symbols = [Symbol::Cherry; REEL_COUNT];
        for slot in symbols.iter_mut() {
            *slot = Symbol::draw(rng);
        }
        Self(symbols)
    }

    pub fn symbols(&self) -> &[Symbol; REEL_COUNT] {
        &self.0
    }

    pub fn icons(&self) -> Vec<&'static str> {
        self.0.iter().map(|s| s.icon()).collect()
    }
}

impl Index<usize> for SpinResult {
    type Output = Symbol;

    fn index(&self, reel: usize) -> &Symbol {
        &self.0[reel]
    }
}

impl TryFrom<Vec<Symbol>> for SpinResult {
    type Error = OutcomeLengthError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self, Self::Error> {
        let got = symbols.len();
        <[Symbol; REEL_COUNT]>::try_from(symbols)
            .map(SpinResult)
            .map_err(|_| OutcomeLengthError { expected: REEL_COUNT, got })
    }
}

impl From<SpinResult> for Vec<Symbol> {
    fn from(result: SpinResult) -> Self {
        result.0.to_vec()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinKind {
    Jackpot,
    FourOfAKind,
    ThreeOfAKind,
    Pair,
    Special,
}

impl WinKind {
    pub fn label(self) -> &'static str {
        match self {
            WinKind::Jackpot => "jackpot",
            WinKind::FourOfAKind => "four_of_a_kind",
            WinKind::ThreeOfAKind => "three_of_a_kind",
            WinKind::Pair => "pair",
            WinKind::Special => "special",
        }
    }
}

impl fmt::Display for WinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinLine {
    pub line: u8,
    pub kind: WinKind,
    /// First reel covered by the line.
    pub start: usize,
    pub symbols: Vec<Symbol>,
    pub multiplier: u32,
    pub win: f64,
}

impl WinLine {
    fn new(line: u8, kind: WinKind, start: usize, symbols: &[Symbol], multiplier: u32, bet: f64) -> Self {
        Self {
            line,
            kind,
            start,
            symbols: symbols.to_vec(),
            multiplier,
            win: bet * multiplier as f64,
        }
    }

    /// Reel indices this line covers.
    pub fn reels(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.symbols.len()
    }
}

pub struct SpecialPattern {
    pub symbols: [Symbol; REEL_COUNT],
    pub multiplier: u32,
}

pub const SPECIAL_PATTERNS: [SpecialPattern; 4] = [
    SpecialPattern {
        symbols: [Symbol::Cherry, Symbol::Cherry, Symbol::Cherry, Symbol::Seven, Symbol::Seven],
        multiplier: 50,
    },
    SpecialPattern {
        symbols: [Symbol::Diamond, Symbol::Diamond, Symbol::Diamond, Symbol::Star, Symbol::Star],
        multiplier: 30,
    },
    SpecialPattern {
        symbols: [Symbol::Bell; REEL_COUNT],
        multiplier: 100,
    },
    SpecialPattern {
        symbols: [Symbol::Crown, Symbol::MoneyBag, Symbol::Diamond, Symbol::Star, Symbol::Bell],
        multiplier: 25,
    },
];

/// Run lengths checked at every offset, with their multiplier factor on the symbol value.
const RUNS: [(WinKind, usize, u32); 3] = [
    (WinKind::FourOfAKind, 4, 10),
    (WinKind::ThreeOfAKind, 3, 3),
    (WinKind::Pair, 2, 1),
];

/// Every line the result satisfies. Rules are independent and stack: a jackpot
/// also pays each four, three and pair it contains. Line ids are positional, so
/// the same line always carries the same id whether or not it fired.
pub fn evaluate(result: &SpinResult, bet: f64) -> Vec<WinLine> {
    let reels = result.symbols();
    let mut lines = Vec::new();
    let mut line_id: u8 = 1;

    let first = reels[0];
    if reels.iter().all(|&s| s == first) {
        lines.push(WinLine::new(line_id, WinKind::Jackpot, 0, reels, first.value() * 100, bet));
    }
    line_id += 1;

    for (kind, run, factor) in RUNS {
        for (start, window) in reels.windows(run).enumerate() {
            if window.iter().all(|&s| s == window[0]) {
                lines.push(WinLine::new(line_id, kind, start, window, window[0].value() * factor, bet));
            }
            line_id += 1;
        }
    }

    for pattern in SPECIAL_PATTERNS.iter() {
        let matches = pattern
            .symbols
            .iter()
            .zip(reels.iter())
            .filter(|(want, got)| want == got)
            .count();
        if matches >= SPECIAL_MIN_MATCHES {
            lines.push(WinLine::new(line_id, WinKind::Special, 0, reels, pattern.multiplier, bet));
        }
        line_id += 1;
    }

    lines
}

pub fn total_win(lines: &[WinLine]) -> f64 {
    lines.iter().map(|l| l.win).sum()
}

/// What a finished spin reports back to its caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinSummary {
    pub outcome: SpinResult,
    pub win_lines: Vec<WinLine>,
    pub bet: f64,
    pub total_win: f64,
}

impl SpinSummary {
    pub fn new(outcome: SpinResult, bet: f64) -> Self {
        let win_lines = evaluate(&outcome, bet);
        let total_win = total_win(&win_lines);
        Self { outcome, win_lines, bet, total_win }
    }

    pub fn total_multiplier(&self) -> u32 {
        self.win_lines.iter().map(|l| l.multiplier).sum()
    }

    pub fn is_win(&self) -> bool {
        !self.win_lines.is_empty()
    }

    pub fn win_label(&self) -> String {
        format!("${:.2}", self.total_win)
    }

    pub fn multiplier_label(&self) -> String {
        let ratio = if self.bet > 0.0 { self.total_win / self.bet } else { 0.0 };
        format!("Multiplier: x{:.1}", ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::*;

    fn kinds(lines: &[WinLine]) -> Vec<(WinKind, usize, u32)> {
        lines.iter().map(|l| (l.kind, l.start, l.multiplier)).collect()
    }

    #[test]
    fn two_separate_pairs() {
        let result = SpinResult::new([Cherry, Cherry, Lemon, Lemon, Orange]);
        let lines = evaluate(&result, 1.0);
        assert_eq!(
            kinds(&lines),
            vec![(WinKind::Pair, 0, 2), (WinKind::Pair, 2, 3)]
        );
        assert_eq!(lines[0].line, 7);
        assert_eq!(lines[1].line, 9);
        assert_eq!(total_win(&lines), 5.0);
    }

    #[test]
    fn diamond_jackpot_stacks_every_lower_rule() {
        let result = SpinResult::new([Diamond; REEL_COUNT]);
        let lines = evaluate(&result, 2.0);

        let count = |kind: WinKind| lines.iter().filter(|l| l.kind == kind).count();
        assert_eq!(count(WinKind::Jackpot), 1);
        assert_eq!(count(WinKind::FourOfAKind), 2);
        assert_eq!(count(WinKind::ThreeOfAKind), 3);
        assert_eq!(count(WinKind::Pair), 4);
        assert_eq!(count(WinKind::Special), 0);

        assert!(lines.iter().filter(|l| l.kind == WinKind::Jackpot).all(|l| l.multiplier == 1000));
        assert!(lines.iter().filter(|l| l.kind == WinKind::FourOfAKind).all(|l| l.multiplier == 100));
        assert!(lines.iter().filter(|l| l.kind == WinKind::ThreeOfAKind).all(|l| l.multiplier == 30));
        assert!(lines.iter().filter(|l| l.kind == WinKind::Pair).all(|l| l.multiplier == 10));

        // 1000 + 2*100 + 3*30 + 4*10
        let summary = SpinSummary::new(result, 2.0);
        assert_eq!(summary.total_multiplier(), 1330);
        assert_eq!(summary.total_win, 2660.0);
    }

    #[test]
    fn every_jackpot_keeps_lower_rules() {
        for symbol in crate::symbols::CATALOG {
            let lines = evaluate(&SpinResult::new([symbol; REEL_COUNT]), 1.0);
            let jackpot = lines.iter().find(|l| l.kind == WinKind::Jackpot).unwrap();
            assert_eq!(jackpot.multiplier, symbol.value() * 100);
            assert_eq!(lines.iter().filter(|l| l.kind == WinKind::Pair).count(), 4);
            assert_eq!(lines.iter().filter(|l| l.kind == WinKind::ThreeOfAKind).count(), 3);
            assert_eq!(lines.iter().filter(|l| l.kind == WinKind::FourOfAKind).count(), 2);
        }
    }

    #[test]
    fn bell_jackpot_also_pays_bell_special() {
        let lines = evaluate(&SpinResult::new([Bell; REEL_COUNT]), 1.0);
        let special = lines.iter().find(|l| l.kind == WinKind::Special).unwrap();
        assert_eq!(special.multiplier, 100);
        assert_eq!(special.line, 13);
    }

    #[test]
    fn special_needs_four_of_five_positions() {
        // one position off: pays
        let near = SpinResult::new([Crown, MoneyBag, Diamond, Star, Cherry]);
        let lines = evaluate(&near, 1.0);
        assert_eq!(kinds(&lines), vec![(WinKind::Special, 0, 25)]);

        // two positions off: nothing
        let far = SpinResult::new([Crown, MoneyBag, Diamond, Lemon, Cherry]);
        assert!(evaluate(&far, 1.0).is_empty());
    }

    #[test]
    fn cherry_seven_special_with_its_runs() {
        let result = SpinResult::new([Cherry, Cherry, Cherry, Seven, Seven]);
        let lines = evaluate(&result, 1.0);
        assert_eq!(
            kinds(&lines),
            vec![
                (WinKind::ThreeOfAKind, 0, 6),
                (WinKind::Pair, 0, 2),
                (WinKind::Pair, 1, 2),
                (WinKind::Pair, 3, 20),
                (WinKind::Special, 0, 50),
            ]
        );
        assert_eq!(total_win(&lines), 80.0);
    }

    #[test]
    fn evaluation_is_pure() {
        let result = SpinResult::new([Grape, Grape, Grape, Grape, Lemon]);
        assert_eq!(evaluate(&result, 3.0), evaluate(&result, 3.0));
    }

    #[test]
    fn payout_is_bet_times_multiplier() {
        let result = SpinResult::new([Star, Star, Orange, Bell, Bell]);
        for line in evaluate(&result, 7.5) {
            assert!(line.multiplier > 0);
            assert_eq!(line.win, 7.5 * line.multiplier as f64);
        }
    }

    #[test]
    fn line_reels_follow_start_offset() {
        let lines = evaluate(&SpinResult::new([Lemon, Orange, Orange, Orange, Grape]), 1.0);
        let three = lines.iter().find(|l| l.kind == WinKind::ThreeOfAKind).unwrap();
        assert_eq!(three.reels(), 1..4);
    }

    #[test]
    fn outcome_must_cover_every_reel() {
        let short: Result<SpinResult, _> = vec![Cherry, Lemon].try_into();
        assert_eq!(short, Err(OutcomeLengthError { expected: 5, got: 2 }));

        let parsed: SpinResult =
            serde_json::from_str(r#"["crown","crown","bell","bell","star"]"#).unwrap();
        assert_eq!(parsed[0], Crown);
        assert!(serde_json::from_str::<SpinResult>(r#"["crown"]"#).is_err());
    }

    #[test]
    fn summary_labels() {
        let summary = SpinSummary::new(SpinResult::new([Cherry, Cherry, Lemon, Lemon, Orange]), 2.0);
        assert_eq!(summary.win_label(), "$10.00");
        assert_eq!(summary.multiplier_label(), "Multiplier: x5.0");
    }
}
