//! Bounded coordinate grids and the rule-table transition engine

use crate::PuzzleError;
use crate::utils::records::{UnknownRule, capture_fields};
use anyhow::{Context, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .with_context(|| format!("expected 'x,y', got '{}'", s))?;
        Ok(Self::new(
            x.parse().with_context(|| format!("bad x coordinate '{}'", x))?,
            y.parse().with_context(|| format!("bad y coordinate '{}'", y))?,
        ))
    }
}

/// Closed rectangle, inclusive on both axes
///
/// `start <= stop` holds on each axis; [`Rect::new`] refuses anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    start: Point,
    stop: Point,
}

impl Rect {
    pub fn new(start: Point, stop: Point) -> anyhow::Result<Self> {
        if start.x > stop.x || start.y > stop.y {
            bail!("inverted rectangle {} through {}", start, stop);
        }
        Ok(Self { start, stop })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn stop(&self) -> Point {
        self.stop
    }

    pub fn width(&self) -> usize {
        self.stop.x - self.start.x + 1
    }

    pub fn height(&self) -> usize {
        self.stop.y - self.start.y + 1
    }

    /// Number of coordinates covered
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.start.x..=self.stop.x).contains(&point.x)
            && (self.start.y..=self.stop.y).contains(&point.y)
    }

    /// Every covered coordinate, row by row
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (start, stop) = (self.start, self.stop);
        (start.y..=stop.y).flat_map(move |y| (start.x..=stop.x).map(move |x| Point::new(x, y)))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} through {}", self.start, self.stop)
    }
}

/// Declared key space `0..width` by `0..height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    pub fn contains_rect(&self, rect: &Rect) -> bool {
        self.contains(rect.stop())
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Dense row-major container with one value per coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<V> {
    bounds: Bounds,
    cells: Vec<V>,
}

impl<V: Default + Clone> Grid<V> {
    /// Grid with `V::default()` everywhere
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![V::default(); bounds.area()],
        }
    }
}

impl<V> Grid<V> {
    /// Build from rows, which must all have the same non-zero length
    pub fn from_rows<I>(rows: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = Vec<V>>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (y, row) in rows.into_iter().enumerate() {
            match width {
                None if row.is_empty() => bail!("row {} is empty", y + 1),
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    bail!("row {} has {} cells, expected {}", y + 1, row.len(), w)
                }
                Some(_) => {}
            }
            cells.extend(row);
            height += 1;
        }
        let width = width.context("grid has no rows")?;
        Ok(Self {
            bounds: Bounds::new(width, height),
            cells,
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn index(&self, point: Point) -> Option<usize> {
        self.bounds
            .contains(point)
            .then(|| point.y * self.bounds.width + point.x)
    }

    pub fn get(&self, point: Point) -> Option<&V> {
        self.index(point).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, point: Point) -> Option<&mut V> {
        self.index(point).map(|i| &mut self.cells[i])
    }

    /// Store `value` at `point`, returning the previous value
    ///
    /// `None` when `point` is outside the grid; nothing is stored then.
    pub fn set(&mut self, point: Point, value: V) -> Option<V> {
        self.get_mut(point).map(|cell| std::mem::replace(cell, value))
    }

    pub fn cells(&self) -> impl Iterator<Item = &V> {
        self.cells.iter()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + use<V> {
        let Bounds { width, height } = self.bounds;
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    /// The up to eight surrounding coordinates that lie inside the grid
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> + use<V> {
        let bounds = self.bounds;
        let xs = point.x.saturating_sub(1)..=(point.x + 1).min(bounds.width.saturating_sub(1));
        let ys = point.y.saturating_sub(1)..=(point.y + 1).min(bounds.height.saturating_sub(1));
        ys.flat_map(move |y| xs.clone().map(move |x| Point::new(x, y)))
            .filter(move |&p| p != point && bounds.contains(p))
    }

    pub fn count<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&V) -> bool,
    {
        self.cells.iter().filter(|v| pred(v)).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    TurnOn,
    TurnOff,
    Toggle,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::TurnOn, Operation::TurnOff, Operation::Toggle];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::TurnOn => "turn on",
            Operation::TurnOff => "turn off",
            Operation::Toggle => "toggle",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

/// Transition function applied to a single cell value
pub type Rule = fn(u32) -> u32;

/// Meaning of each [`Operation`] on a `Grid<u32>`
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    pub turn_on: Rule,
    pub turn_off: Rule,
    pub toggle: Rule,
}

fn switch_on(_: u32) -> u32 {
    1
}

fn switch_off(_: u32) -> u32 {
    0
}

fn switch_toggle(value: u32) -> u32 {
    if value == 0 { 1 } else { 0 }
}

fn dim_up(value: u32) -> u32 {
    value.saturating_add(1)
}

fn dim_down(value: u32) -> u32 {
    value.saturating_sub(1)
}

fn dim_double_up(value: u32) -> u32 {
    value.saturating_add(2)
}

impl RuleTable {
    /// Lights are either on (1) or off (0)
    pub const SWITCH: RuleTable = RuleTable {
        turn_on: switch_on,
        turn_off: switch_off,
        toggle: switch_toggle,
    };

    /// Lights carry a brightness that never drops below zero
    pub const DIMMER: RuleTable = RuleTable {
        turn_on: dim_up,
        turn_off: dim_down,
        toggle: dim_double_up,
    };

    pub fn rule(&self, operation: Operation) -> Rule {
        match operation {
            Operation::TurnOn => self.turn_on,
            Operation::TurnOff => self.turn_off,
            Operation::Toggle => self.toggle,
        }
    }
}

/// One line of a light program: an operation over a closed region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub operation: Operation,
    pub region: Rect,
}

static INSTRUCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z]+(?: [a-z]+)*) (\d+,\d+) through (\d+,\d+)$")
        .expect("valid instruction pattern")
});

impl FromStr for Instruction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [operation, start, stop] = capture_fields(&INSTRUCTION, s)?;
        Ok(Self {
            operation: operation.parse()?,
            region: Rect::new(start.parse()?, stop.parse()?)?,
        })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operation, self.region)
    }
}

impl Grid<u32> {
    /// Write `rule(old)` into every coordinate of the instruction's region
    ///
    /// The region is checked against the bounds first, so a failing
    /// instruction leaves the grid untouched.
    pub fn apply(&mut self, instruction: &Instruction, rules: &RuleTable) -> Result<(), PuzzleError> {
        let region = instruction.region;
        if !self.bounds.contains_rect(&region) {
            return Err(PuzzleError::OutOfBounds {
                region: region.to_string(),
                bounds: self.bounds.to_string(),
            });
        }

        let rule = rules.rule(instruction.operation);
        let width = self.bounds.width;
        for y in region.start().y..=region.stop().y {
            let row = y * width;
            self.cells[row + region.start().x..=row + region.stop().x]
                .iter_mut()
                .for_each(|cell| *cell = rule(*cell));
        }
        Ok(())
    }

    pub fn lit_count(&self) -> usize {
        self.count(|value| *value > 0)
    }

    pub fn total_brightness(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }
}
