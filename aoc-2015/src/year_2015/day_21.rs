use crate::PuzzleError;
use crate::utils::records::{UnknownRule, capture_fields, parse_lines};
use crate::utils::search::{Extremum, ScoredSet, check_search_space};
use anyhow::{Context, bail};
use aoc_solver::{AocParser, Limits, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 21, tags = ["search", "simulation"])]
pub struct Solver;

pub const PLAYER_HIT_POINTS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub name: &'static str,
    pub cost: u32,
    pub damage: u32,
    pub armor: u32,
}

const fn item(name: &'static str, cost: u32, damage: u32, armor: u32) -> Item {
    Item {
        name,
        cost,
        damage,
        armor,
    }
}

pub const WEAPONS: [Item; 5] = [
    item("Dagger", 8, 4, 0),
    item("Shortsword", 10, 5, 0),
    item("Warhammer", 25, 6, 0),
    item("Longsword", 40, 7, 0),
    item("Greataxe", 74, 8, 0),
];

pub const ARMOR: [Item; 5] = [
    item("Leather", 13, 0, 1),
    item("Chainmail", 31, 0, 2),
    item("Splintmail", 53, 0, 3),
    item("Bandedmail", 75, 0, 4),
    item("Platemail", 102, 0, 5),
];

pub const RINGS: [Item; 6] = [
    item("Damage +1", 25, 1, 0),
    item("Damage +2", 50, 2, 0),
    item("Damage +3", 100, 3, 0),
    item("Defense +1", 20, 0, 1),
    item("Defense +2", 40, 0, 2),
    item("Defense +3", 80, 0, 3),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fighter {
    pub hit_points: u32,
    pub damage: u32,
    pub armor: u32,
}

impl Fighter {
    fn hit(&self, defender: &Fighter) -> u32 {
        self.damage.saturating_sub(defender.armor).max(1)
    }
}

/// Fight turn by turn, player striking first; true when the player wins
pub fn player_wins(player: &Fighter, boss: &Fighter) -> bool {
    let (mut player_hp, mut boss_hp) = (player.hit_points, boss.hit_points);
    loop {
        boss_hp = boss_hp.saturating_sub(player.hit(boss));
        if boss_hp == 0 {
            return true;
        }
        player_hp = player_hp.saturating_sub(boss.hit(player));
        if player_hp == 0 {
            return false;
        }
    }
}

/// One weapon, at most one armor and at most two different rings
pub fn loadouts() -> impl Iterator<Item = Vec<Item>> {
    let armor_choices = || std::iter::once(None).chain(ARMOR.iter().copied().map(Some));
    let ring_choices = || (0..=2).flat_map(|count| RINGS.iter().copied().combinations(count));
    WEAPONS.iter().copied().flat_map(move |weapon| {
        armor_choices().flat_map(move |armor| {
            ring_choices().map(move |rings| {
                std::iter::once(weapon)
                    .chain(armor)
                    .chain(rings)
                    .collect::<Vec<_>>()
            })
        })
    })
}

fn loadout_count() -> u64 {
    let rings = RINGS.len() as u64;
    let ring_choices = 1 + rings + rings * (rings - 1) / 2;
    WEAPONS.len() as u64 * (ARMOR.len() as u64 + 1) * ring_choices
}

fn equip(items: &[Item]) -> Fighter {
    Fighter {
        hit_points: PLAYER_HIT_POINTS,
        damage: items.iter().map(|i| i.damage).sum(),
        armor: items.iter().map(|i| i.armor).sum(),
    }
}

static STAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z ]+): (\d+)$").expect("valid stat pattern"));

fn parse_boss(input: &str) -> Result<Fighter, ParseError> {
    let (mut hit_points, mut damage, mut armor) = (None, None, None);
    parse_lines(input, |line| {
        let [name, value] = capture_fields(&STAT, line)?;
        let value: u32 = value
            .parse()
            .with_context(|| format!("bad value '{}'", value))?;
        let slot = match name {
            "Hit Points" => &mut hit_points,
            "Damage" => &mut damage,
            "Armor" => &mut armor,
            other => return Err(UnknownRule(other.to_string()).into()),
        };
        if slot.replace(value).is_some() {
            bail!("{} given twice", name);
        }
        Ok(())
    })?;
    let missing = |stat: &str| ParseError::MissingData(format!("boss {}", stat));
    Ok(Fighter {
        hit_points: hit_points.ok_or_else(|| missing("hit points"))?,
        damage: damage.ok_or_else(|| missing("damage"))?,
        armor: armor.ok_or_else(|| missing("armor"))?,
    })
}

pub struct SharedData {
    boss: Fighter,
    limits: Limits,
    /// Every loadout scored by (cost, whether it beats the boss)
    outcomes: Option<ScoredSet<Vec<Item>, (u32, bool)>>,
}

fn outcomes(shared: &mut SharedData) -> Result<&ScoredSet<Vec<Item>, (u32, bool)>, SolveError> {
    if shared.outcomes.is_none() {
        check_search_space(Some(loadout_count()), &shared.limits)?;
        let boss = shared.boss;
        let set = ScoredSet::evaluate(loadouts(), |items| {
            let cost = items.iter().map(|i| i.cost).sum();
            (cost, player_wins(&equip(items), &boss))
        });
        shared.outcomes = Some(set);
    }
    shared
        .outcomes
        .as_ref()
        .ok_or_else(|| PuzzleError::NotFound("loadout".to_string()).into())
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Self::parse_with_limits(input, &Limits::default())
    }

    fn parse_with_limits<'a>(
        input: &'a str,
        limits: &Limits,
    ) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            boss: parse_boss(input)?,
            limits: *limits,
            outcomes: None,
        })
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "least gold to win";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, (cost, _)) = outcomes(shared)?
            .best_where(Extremum::Min, |_, (_, wins)| *wins)
            .ok_or_else(|| PuzzleError::NotFound("winning loadout".to_string()))?;
        Ok(cost.to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "most gold to lose";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, (cost, _)) = outcomes(shared)?
            .best_where(Extremum::Max, |_, (_, wins)| !*wins)
            .ok_or_else(|| PuzzleError::NotFound("losing loadout".to_string()))?;
        Ok(cost.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_fight() {
        let player = Fighter { hit_points: 8, damage: 5, armor: 5 };
        let boss = Fighter { hit_points: 12, damage: 7, armor: 2 };
        assert_eq!(player.hit(&boss), 3);
        assert_eq!(boss.hit(&player), 2);
        assert!(player_wins(&player, &boss));
        // with the roles swapped the boss strikes first and wins
        assert!(player_wins(&boss, &player));
    }

    #[test]
    fn test_minimum_damage_is_one() {
        let weak = Fighter { hit_points: 1, damage: 0, armor: 0 };
        let tank = Fighter { hit_points: 3, damage: 0, armor: 50 };
        assert_eq!(weak.hit(&tank), 1);
        assert!(!player_wins(&tank, &Fighter { hit_points: 10, ..weak }));
    }

    #[test]
    fn test_loadouts() {
        let all: Vec<Vec<Item>> = loadouts().collect();
        assert_eq!(all.len() as u64, loadout_count());
        assert_eq!(all.len(), 660);
        assert!(all.iter().all(|l| l.iter().filter(|i| WEAPONS.contains(i)).count() == 1));
        assert!(all.iter().all(|l| l.iter().filter(|i| ARMOR.contains(i)).count() <= 1));
        assert!(all.iter().all(|l| l.iter().filter(|i| RINGS.contains(i)).count() <= 2));
    }

    #[test]
    fn test_boss_costs() {
        for (input, win, lose) in [
            ("Hit Points: 104\nDamage: 8\nArmor: 1\n", "78", "148"),
            ("Armor: 2\nHit Points: 100\nDamage: 8\n", "91", "158"),
        ] {
            let mut shared = Solver::parse(input).unwrap();
            assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), win);
            assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), lose);
        }
    }

    #[test]
    fn test_unbeatable_player() {
        let mut shared = Solver::parse("Hit Points: 12\nDamage: 7\nArmor: 2").unwrap();
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }

    #[test]
    fn test_boss_parse_errors() {
        assert!(matches!(
            Solver::parse("Hit Points: 12\nDamage: 7"),
            Err(ParseError::MissingData(_))
        ));
        assert_eq!(
            Solver::parse("Hit Points: 12\nMana: 7").err(),
            Some(ParseError::UnknownRule {
                line: 2,
                name: "Mana".to_string()
            })
        );
        assert!(matches!(
            Solver::parse("Damage: 1\nDamage: 2"),
            Err(ParseError::InvalidLine { line: 2, .. })
        ));
    }
}
