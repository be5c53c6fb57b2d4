//! Registry and instance behaviour

use aoc_solver::{
    AocParser, AocSolver, ParseError, PartSolver, RegistrationError, SolveError, SolverError,
    SolverRegistryBuilder,
};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct LineStats;

impl AocParser for LineStats {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<_> = input.lines().collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no lines".into()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for LineStats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for LineStats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(|l| l.len())
            .max()
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::SolveFailed("empty".into()))
    }
}

#[test]
fn test_create_and_solve() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<LineStats>(2023, 3)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2023, 3, "ab\nabcd\n").unwrap();
    assert_eq!(solver.year(), 2023);
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.parts(), 2);
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());

    let part1 = solver.solve(1).unwrap();
    assert_eq!(part1.answer, "2");
    assert!(part1.duration() >= chrono::TimeDelta::zero());
    assert_eq!(solver.solve(2).unwrap().answer, "4");
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register_solver::<LineStats>(2023, 3)
        .unwrap()
        .register_solver::<LineStats>(2023, 3);

    assert!(matches!(result, Err(RegistrationError::Duplicate(2023, 3))));
}

#[test]
fn test_out_of_range_registration_rejected() {
    let result = SolverRegistryBuilder::new().register_solver::<LineStats>(2023, 26);
    assert!(matches!(result, Err(RegistrationError::InvalidPuzzle(2023, 26))));

    let result = SolverRegistryBuilder::new().register_solver::<LineStats>(2014, 1);
    assert!(matches!(result, Err(RegistrationError::InvalidPuzzle(2014, 1))));
}

#[test]
fn test_lookup_errors() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<LineStats>(2023, 3)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2023, 4, "x"),
        Err(SolverError::NotFound(2023, 4))
    ));
    assert!(matches!(
        registry.create_solver(2023, 0, "x"),
        Err(SolverError::InvalidPuzzle(2023, 0))
    ));
    assert!(matches!(
        registry.create_solver(2023, 3, ""),
        Err(SolverError::Parse(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_info_is_sorted() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<LineStats>(2023, 9)
        .unwrap()
        .register_solver::<LineStats>(2022, 25)
        .unwrap()
        .register_solver::<LineStats>(2023, 1)
        .unwrap()
        .build();

    let ids: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(ids, vec![(2022, 25), (2023, 1), (2023, 9)]);
    assert_eq!(registry.len(), 3);
    assert!(registry.contains(2023, 9));
    assert_eq!(registry.get_info(2023, 1).map(|i| i.parts), Some(2));
    assert!(registry.get_info(2023, 2).is_none());
}
