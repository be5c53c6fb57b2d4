use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

struct Readings {
    values: Vec<u32>,
    sorted: Option<Vec<u32>>,
}

impl Readings {
    fn sorted(&mut self) -> &[u32] {
        let values = &self.values;
        self.sorted.get_or_insert_with(|| {
            let mut sorted = values.clone();
            sorted.sort_unstable();
            sorted
        })
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Median;

impl AocParser for Median {
    type SharedData<'a> = Readings;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let values = input
            .lines()
            .map(|l| l.trim().parse().map_err(|_| ParseError::InvalidFormat(l.into())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Readings {
            values,
            sorted: None,
        })
    }
}

impl PartSolver<1> for Median {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sorted = shared.sorted();
        sorted
            .get(sorted.len() / 2)
            .map(u32::to_string)
            .ok_or_else(|| SolveError::SolveFailed("no readings".into()))
    }
}

impl PartSolver<2> for Median {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sorted = shared.sorted();
        Ok((sorted[sorted.len() - 1] - sorted[0]).to_string())
    }
}

#[test]
fn test_second_part_reuses_cached_work() {
    let mut shared = Median::parse("9\n1\n5\n7\n3").unwrap();

    assert_eq!(Median::solve_part(&mut shared, 1).unwrap(), "5");
    assert_eq!(shared.sorted.as_deref(), Some(&[1, 3, 5, 7, 9][..]));
    assert_eq!(Median::solve_part(&mut shared, 2).unwrap(), "8");
}

#[test]
fn test_failure_surfaces_as_solve_error() {
    let mut shared = Median::parse("").unwrap();
    assert!(matches!(
        Median::solve_part(&mut shared, 1),
        Err(SolveError::SolveFailed(_))
    ));
}
