//! Every 2015 solver is picked up through the plugin registry

use aoc_2015 as _;
use aoc_solver::{Limits, SolverRegistryBuilder};

const DAYS: [u8; 18] = [1, 2, 3, 4, 5, 6, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21];

#[test]
fn test_all_days_registered() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("no duplicate registrations")
        .build();

    let days: Vec<u8> = registry
        .storage()
        .iter_info()
        .filter(|info| info.year == 2015)
        .map(|info| info.day)
        .collect();
    assert_eq!(days, DAYS);
    assert!(registry.storage().iter_info().all(|info| info.parts == 2));
}

#[test]
fn test_tag_filter() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
        .unwrap()
        .build();
    let days: Vec<u8> = registry.storage().iter_info().map(|info| info.day).collect();
    assert_eq!(days, vec![6, 18]);
}

#[test]
fn test_solve_through_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry
        .create_solver(2015, 6, "turn on 0,0 through 2,2\ntoggle 0,0 through 0,0\nturn off 1,1 through 1,1", &Limits::default())
        .unwrap();
    let lit = solver.solve(1).unwrap();
    assert_eq!(lit.answer, "7");
    assert_eq!(lit.label, "turned on lights");

    let brightness = solver.solve(2).unwrap();
    assert_eq!(brightness.answer, "10");
    assert_eq!(brightness.label, "total brightness");
}

#[test]
fn test_limits_flow_into_solvers() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry
        .create_solver(2015, 13, "A would gain 1 happiness unit by sitting next to B.\nB would gain 1 happiness unit by sitting next to A.", &Limits::new(10, 0))
        .unwrap();
    assert!(solver.solve(1).is_err());
}
