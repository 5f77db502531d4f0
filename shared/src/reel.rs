use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::symbols::Symbol;

/// Hidden cells around the visible window: one above, the rest below.
pub const REEL_PADDING: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReelPhase {
    Idle,
    Spinning,
    Stopping,
}

/// One column of symbols. The buffer always holds `rows + REEL_PADDING` cells,
/// the visible window is `1..=rows` and the payline sits in its centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reel {
    cells: Vec<Symbol>,
    rows: usize,
    phase: ReelPhase,
}

impl Reel {
    pub fn new<R: Rng + ?Sized>(rows: usize, rng: &mut R) -> Self {
        let rows = rows.max(1);
        let cells = (0..rows + REEL_PADDING).map(|_| Symbol::draw(rng)).collect();
        Self { cells, rows, phase: ReelPhase::Idle }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    pub fn visible(&self) -> &[Symbol] {
        &self.cells[1..=self.rows]
    }

    /// Buffer index of the payline cell.
    pub fn payline_index(&self) -> usize {
        1 + self.rows / 2
    }

    /// Row of the payline inside the visible window.
    pub fn payline_row(&self) -> usize {
        self.payline_index() - 1
    }

    pub fn payline_symbol(&self) -> Symbol {
        self.cells[self.payline_index()]
    }

    pub fn phase(&self) -> ReelPhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: ReelPhase) {
        self.phase = phase;
    }

    /// Moves every cell up by one and draws a fresh symbol into the bottom cell.
    pub fn shift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells.rotate_left(1);
        if let Some(bottom) = self.cells.last_mut() {
            *bottom = Symbol::draw(rng);
        }
    }

    /// Lands on `target`: the payline shows it with its catalog neighbours above and below.
    pub fn settle(&mut self, target: Symbol) {
        let p = self.payline_index();
        self.cells[p - 1] = target.neighbour(-1);
        self.cells[p] = target;
        self.cells[p + 1] = target.neighbour(1);
    }

    pub fn set_payline(&mut self, symbol: Symbol) {
        let p = self.payline_index();
        self.cells[p] = symbol;
    }

    pub fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = Symbol::draw(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn buffer_length_survives_shifts() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut reel = Reel::new(3, &mut rng);
        assert_eq!(reel.len(), 7);
        for _ in 0..50 {
            reel.shift(&mut rng);
            assert_eq!(reel.len(), 7);
        }
        reel.refill(&mut rng);
        assert_eq!(reel.len(), 7);
    }

    #[test]
    fn shift_moves_cells_up() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut reel = Reel::new(3, &mut rng);
        let before = reel.cells().to_vec();
        reel.shift(&mut rng);
        assert_eq!(&reel.cells()[..6], &before[1..]);
    }

    #[test]
    fn settle_shows_neighbours_around_payline() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut reel = Reel::new(3, &mut rng);
        reel.settle(Symbol::Cherry);
        assert_eq!(reel.payline_index(), 2);
        assert_eq!(reel.payline_row(), 1);
        assert_eq!(reel.visible(), &[Symbol::Crown, Symbol::Cherry, Symbol::Lemon]);
        assert_eq!(reel.payline_symbol(), Symbol::Cherry);
    }
}
