use crate::PuzzleError;
use crate::utils::records::{capture_fields, parse_lines};
use crate::utils::search::{Extremum, ScoredSet, binomial, check_search_space};
use anyhow::Context;
use aoc_solver::{AocParser, Limits, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 15, tags = ["search", "combinations"])]
pub struct Solver;

pub const TEASPOONS: u32 = 100;
pub const CALORIE_TARGET: i64 = 500;
const CALORIES: &str = "calories";

static INGREDIENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+): (.+)$").expect("valid ingredient pattern"));
static PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+) (-?\d+)$").expect("valid property pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient<'a> {
    pub name: &'a str,
    pub properties: Vec<(&'a str, i64)>,
}

impl<'a> Ingredient<'a> {
    fn parse(line: &'a str) -> anyhow::Result<Self> {
        let [name, properties] = capture_fields(&INGREDIENT, line)?;
        let properties = properties
            .split(", ")
            .map(|chunk| -> anyhow::Result<(&str, i64)> {
                let [property, value] = capture_fields(&PROPERTY, chunk)?;
                let value = value
                    .parse()
                    .with_context(|| format!("bad amount '{}'", value))?;
                Ok((property, value))
            })
            .collect::<anyhow::Result<_>>()?;
        Ok(Self { name, properties })
    }

    fn property_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.properties.iter().map(|(name, _)| *name)
    }
}

/// Ways to split `total` teaspoons between `parts` ingredients
///
/// Non-decreasing cut points in `0..=total` map one to one onto
/// compositions, so there are `C(total + parts - 1, parts - 1)` of them.
pub fn compositions(total: u32, parts: usize) -> Box<dyn Iterator<Item = Vec<u32>>> {
    match parts {
        0 => Box::new(std::iter::empty()),
        1 => Box::new(std::iter::once(vec![total])),
        _ => Box::new(
            (0..=total)
                .combinations_with_replacement(parts - 1)
                .map(move |cuts| {
                    std::iter::once(0)
                        .chain(cuts.iter().copied())
                        .chain(std::iter::once(total))
                        .tuple_windows()
                        .map(|(a, b)| b - a)
                        .collect()
                }),
        ),
    }
}

/// Product of the non-calorie property totals (each floored at zero), and the calories
pub fn score(ingredients: &[Ingredient<'_>], amounts: &[u32]) -> Result<(i64, i64), PuzzleError> {
    let Some(first) = ingredients.first() else {
        return Ok((0, 0));
    };
    let overflow = || PuzzleError::Overflow(format!("score of recipe {:?}", amounts));
    let mut product = 1i64;
    let mut calories = 0i64;
    for (column, property) in first.property_names().enumerate() {
        let total = ingredients
            .iter()
            .zip(amounts)
            .try_fold(0i64, |total, (ingredient, &amount)| {
                total.checked_add(i64::from(amount).checked_mul(ingredient.properties[column].1)?)
            })
            .ok_or_else(overflow)?;
        if property == CALORIES {
            calories = total;
        } else {
            product = product.checked_mul(total.max(0)).ok_or_else(overflow)?;
        }
    }
    Ok((product, calories))
}

pub struct SharedData<'a> {
    ingredients: Vec<Ingredient<'a>>,
    limits: Limits,
    recipes: Option<ScoredSet<Vec<u32>, (i64, i64)>>,
}

fn recipes<'s>(shared: &'s mut SharedData<'_>) -> Result<&'s ScoredSet<Vec<u32>, (i64, i64)>, SolveError> {
    if shared.recipes.is_none() {
        let parts = shared.ingredients.len();
        check_search_space(
            binomial(u64::from(TEASPOONS) + parts as u64 - 1, parts as u64 - 1),
            &shared.limits,
        )?;
        let ingredients = &shared.ingredients;
        let set = ScoredSet::try_evaluate(compositions(TEASPOONS, parts), |amounts| {
            score(ingredients, amounts)
        })?;
        shared.recipes = Some(set);
    }
    shared
        .recipes
        .as_ref()
        .ok_or_else(|| PuzzleError::NotFound("recipe".to_string()).into())
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Self::parse_with_limits(input, &Limits::default())
    }

    fn parse_with_limits<'a>(
        input: &'a str,
        limits: &Limits,
    ) -> Result<Self::SharedData<'a>, ParseError> {
        let ingredients = parse_lines(input, Ingredient::parse)?;
        let first = ingredients
            .first()
            .ok_or_else(|| ParseError::MissingData("no ingredients".to_string()))?;
        if let Some(odd) = ingredients
            .iter()
            .find(|i| !i.property_names().eq(first.property_names()))
        {
            return Err(ParseError::InvalidFormat(format!(
                "{} lists different properties than {}",
                odd.name, first.name
            )));
        }
        Ok(SharedData {
            ingredients,
            limits: *limits,
            recipes: None,
        })
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "best score";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, (best, _)) = recipes(shared)?
            .best(Extremum::Max)
            .ok_or_else(|| PuzzleError::NotFound("recipe".to_string()))?;
        Ok(best.to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "best score";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, (best, _)) = recipes(shared)?
            .best_where(Extremum::Max, |_, (_, calories)| *calories == CALORIE_TARGET)
            .ok_or_else(|| {
                PuzzleError::NotFound(format!("recipe with {} calories", CALORIE_TARGET))
            })?;
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
Butterscotch: capacity -1, durability -2, flavor 6, texture 3, calories 8
Cinnamon: capacity 2, durability 3, flavor -2, texture -1, calories 3";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "62842880");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "57600000");
        assert_eq!(shared.recipes.as_ref().map(|r| r.len()), Some(101));
    }

    #[test]
    fn test_score() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(score(&shared.ingredients, &[44, 56]), Ok((62842880, 520)));
    }

    #[test]
    fn test_compositions() {
        let all: Vec<Vec<u32>> = compositions(3, 3).collect();
        assert_eq!(all.len() as u64, binomial(5, 2).unwrap());
        assert!(all.iter().all(|c| c.len() == 3 && c.iter().sum::<u32>() == 3));
        assert_eq!(all.iter().unique().count(), all.len());
        assert_eq!(compositions(100, 1).collect::<Vec<_>>(), vec![vec![100]]);
    }

    #[test]
    fn test_no_recipe_at_target_calories() {
        let input = "Sugar: capacity 1, calories 1";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "100");
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }

    #[test]
    fn test_huge_property_overflows() {
        let input = "A: capacity 999999999999999999, calories 1\nB: capacity 1, calories 1";
        let mut shared = Solver::parse(input).unwrap();
        let err = Solver::solve_part(&mut shared, 1).unwrap_err();
        assert!(err.to_string().contains("overflows"));
        assert!(shared.recipes.is_none());
    }

    #[test]
    fn test_mismatched_properties() {
        let input = "A: capacity 1, calories 2\nB: flavor 1, calories 2";
        assert!(matches!(Solver::parse(input), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_candidate_ceiling() {
        let mut shared = Solver::parse_with_limits(SAMPLE, &Limits::new(0, 100)).unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_err());
    }
}
