//! Search and aggregation drivers
//!
//! Exhaustive searches size their candidate space up front with the checked
//! counting helpers and [`check_search_space`], then stream candidates into
//! [`best`] or a [`ScoredSet`]. Counter-driven searches go through
//! [`bounded_find`] or [`bounded_successor`]. Both kinds give up with a
//! [`PuzzleError`] once a [`Limits`] ceiling is hit.

use crate::PuzzleError;
use aoc_solver::Limits;
use std::convert::Infallible;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    /// Whether `candidate` is strictly better than `incumbent`
    pub fn beats<S: Ord>(self, candidate: &S, incumbent: &S) -> bool {
        match self {
            Extremum::Max => candidate > incumbent,
            Extremum::Min => candidate < incumbent,
        }
    }
}

/// Extremal candidate of a finite stream together with its score
///
/// Ties keep the first candidate seen, so the returned score does not depend
/// on the order of the stream.
pub fn best<C, S, I, F>(candidates: I, mut score: F, extremum: Extremum) -> Option<(C, S)>
where
    I: IntoIterator<Item = C>,
    F: FnMut(&C) -> S,
    S: Ord,
{
    match try_best(candidates, |c| Ok::<S, Infallible>(score(c)), extremum) {
        Ok(chosen) => chosen,
        Err(never) => match never {},
    }
}

/// Like [`best`] with a fallible score; the first failure ends the search
pub fn try_best<C, S, E, I, F>(
    candidates: I,
    mut score: F,
    extremum: Extremum,
) -> Result<Option<(C, S)>, E>
where
    I: IntoIterator<Item = C>,
    F: FnMut(&C) -> Result<S, E>,
    S: Ord,
{
    let mut chosen: Option<(C, S)> = None;
    for candidate in candidates {
        let value = score(&candidate)?;
        if chosen
            .as_ref()
            .is_none_or(|(_, current)| extremum.beats(&value, current))
        {
            chosen = Some((candidate, value));
        }
    }
    Ok(chosen)
}

/// Every candidate of a search space scored once
///
/// Selection criteria are applied afterwards, as many times as needed,
/// without scoring again.
#[derive(Debug, Clone)]
pub struct ScoredSet<C, S> {
    entries: Vec<(C, S)>,
}

impl<C, S: Ord> ScoredSet<C, S> {
    pub fn evaluate<I, F>(candidates: I, mut score: F) -> Self
    where
        I: IntoIterator<Item = C>,
        F: FnMut(&C) -> S,
    {
        let entries: Vec<(C, S)> = candidates
            .into_iter()
            .map(|candidate| {
                let value = score(&candidate);
                (candidate, value)
            })
            .collect();
        debug!(candidates = entries.len(), "scored search space");
        Self { entries }
    }

    /// Like [`ScoredSet::evaluate`], stopping at the first scoring failure
    pub fn try_evaluate<I, F, E>(candidates: I, mut score: F) -> Result<Self, E>
    where
        I: IntoIterator<Item = C>,
        F: FnMut(&C) -> Result<S, E>,
    {
        let entries = candidates
            .into_iter()
            .map(|candidate| score(&candidate).map(|value| (candidate, value)))
            .collect::<Result<Vec<_>, E>>()?;
        debug!(candidates = entries.len(), "scored search space");
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(C, S)> {
        self.entries.iter()
    }

    pub fn best(&self, extremum: Extremum) -> Option<&(C, S)> {
        self.best_where(extremum, |_, _| true)
    }

    /// Best entry among those accepted by `predicate`; ties keep the first
    pub fn best_where<P>(&self, extremum: Extremum, mut predicate: P) -> Option<&(C, S)>
    where
        P: FnMut(&C, &S) -> bool,
    {
        let mut chosen: Option<&(C, S)> = None;
        for entry in self.entries.iter().filter(|(c, s)| predicate(c, s)) {
            if chosen.is_none_or(|current| extremum.beats(&entry.1, &current.1)) {
                chosen = Some(entry);
            }
        }
        chosen
    }

    pub fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&C, &S) -> bool,
    {
        self.entries.iter().filter(|(c, s)| predicate(c, s)).count()
    }
}

/// `n!`, or `None` on overflow
pub fn factorial(n: u64) -> Option<u64> {
    (1..=n).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// `n` choose `k`, or `None` on overflow
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    // each prefix product is itself a binomial coefficient, so the division is exact
    (0..k).try_fold(1u64, |acc, i| acc.checked_mul(n - i).map(|v| v / (i + 1)))
}

/// Number of subsets of an `n`-element set, or `None` on overflow
pub fn subset_count(n: usize) -> Option<u64> {
    u32::try_from(n).ok().and_then(|n| 1u64.checked_shl(n))
}

/// Refuse to enumerate more than `limits.max_candidates` candidates
///
/// `size` is `None` when counting the space already overflowed.
pub fn check_search_space(size: Option<u64>, limits: &Limits) -> Result<u64, PuzzleError> {
    match size {
        Some(size) if size <= limits.max_candidates => {
            debug!(size, limit = limits.max_candidates, "enumerating search space");
            Ok(size)
        }
        size => Err(PuzzleError::SearchSpaceTooLarge {
            size,
            limit: limits.max_candidates,
        }),
    }
}

/// First `n >= start` accepted by `predicate`, trying at most
/// `limits.max_iterations` values
pub fn bounded_find<P>(start: u64, limits: &Limits, mut predicate: P) -> Result<u64, PuzzleError>
where
    P: FnMut(u64) -> bool,
{
    let found = (0..limits.max_iterations)
        .map_while(|offset| start.checked_add(offset))
        .find(|&n| predicate(n))
        .ok_or(PuzzleError::IterationLimit(limits.max_iterations))?;
    debug!(start, found, "counter search finished");
    Ok(found)
}

/// First successor of `start` (never `start` itself) accepted by `accept`,
/// stepping with `next` at most `limits.max_iterations` times
pub fn bounded_successor<T, N, P>(
    start: T,
    limits: &Limits,
    mut next: N,
    mut accept: P,
) -> Result<T, PuzzleError>
where
    N: FnMut(&T) -> T,
    P: FnMut(&T) -> bool,
{
    let mut current = start;
    for step in 1..=limits.max_iterations {
        current = next(&current);
        if accept(&current) {
            debug!(steps = step, "successor search finished");
            return Ok(current);
        }
    }
    Err(PuzzleError::IterationLimit(limits.max_iterations))
}
