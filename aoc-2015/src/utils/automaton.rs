//! Simultaneous-update cellular automaton over a boolean grid

use crate::utils::grid::{Grid, Point};

/// Conway-style automaton: a lit cell stays lit with 2 or 3 lit neighbours,
/// a dark cell lights up with exactly 3.
///
/// Every round reads only the previous snapshot. Cells listed as stuck are
/// forced on before the first round and after each one.
#[derive(Debug, Clone)]
pub struct Automaton {
    current: Grid<bool>,
    next: Grid<bool>,
    stuck: Vec<Point>,
}

impl Automaton {
    pub fn new(grid: Grid<bool>) -> Self {
        Self::with_stuck(grid, Vec::new())
    }

    /// Stuck points outside the grid are ignored
    pub fn with_stuck(grid: Grid<bool>, stuck: Vec<Point>) -> Self {
        let stuck: Vec<Point> = stuck
            .into_iter()
            .filter(|p| grid.bounds().contains(*p))
            .collect();
        let mut automaton = Self {
            next: grid.clone(),
            current: grid,
            stuck,
        };
        automaton.force_stuck();
        automaton
    }

    fn force_stuck(&mut self) {
        for &point in &self.stuck {
            self.current.set(point, true);
        }
    }

    fn next_state(&self, point: Point) -> bool {
        let lit = self
            .current
            .neighbors(point)
            .filter(|&n| self.current.get(n).copied().unwrap_or(false))
            .count();
        match (self.current.get(point).copied().unwrap_or(false), lit) {
            (true, 2 | 3) => true,
            (false, 3) => true,
            _ => false,
        }
    }

    /// Advance one round
    pub fn step(&mut self) {
        for point in self.current.points() {
            let state = self.next_state(point);
            self.next.set(point, state);
        }
        std::mem::swap(&mut self.current, &mut self.next);
        self.force_stuck();
    }

    pub fn run(&mut self, rounds: usize) {
        for _ in 0..rounds {
            self.step();
        }
    }

    pub fn grid(&self) -> &Grid<bool> {
        &self.current
    }

    pub fn lit_count(&self) -> usize {
        self.current.count(|&lit| lit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(rows: &str) -> Grid<bool> {
        Grid::from_rows(rows.lines().map(|l| l.chars().map(|c| c == '#').collect())).unwrap()
    }

    const SAMPLE: &str = ".#.#.#\n...##.\n#....#\n..#...\n#.#..#\n####..";

    #[test]
    fn test_sample_four_rounds() {
        let mut automaton = Automaton::new(parse(SAMPLE));
        automaton.run(4);
        assert_eq!(automaton.lit_count(), 4);
    }

    #[test]
    fn test_sample_with_stuck_corners() {
        let grid = parse(SAMPLE);
        let corners = vec![Point::new(0, 0), Point::new(5, 0), Point::new(0, 5), Point::new(5, 5)];
        let mut automaton = Automaton::with_stuck(grid, corners);
        automaton.run(5);
        assert_eq!(automaton.lit_count(), 17);
    }

    #[test]
    fn test_blinker_uses_previous_snapshot() {
        let mut automaton = Automaton::new(parse(".....\n..#..\n..#..\n..#..\n....."));
        automaton.step();
        assert_eq!(automaton.grid(), &parse(".....\n.....\n.###.\n.....\n....."));
        automaton.step();
        assert_eq!(automaton.grid(), &parse(".....\n..#..\n..#..\n..#..\n....."));
    }
}
