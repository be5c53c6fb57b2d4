//! Day 4: Scratchcards

use crate::utils::{parse_failure, parse_ints, solve_failure, split_lines};
use anyhow::{Context, Result, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["parsing"])]
pub struct Solver;

/// Number of winning numbers found on a card
fn count_matches(line: &str) -> Result<usize> {
    let (_, numbers) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing `:` after card id"))?;
    let (winning, have) = numbers
        .split_once('|')
        .ok_or_else(|| anyhow!("missing `|` separator"))?;

    let winning: HashSet<u32> = parse_ints(winning)?.into_iter().collect();
    let have: Vec<u32> = parse_ints(have)?;
    Ok(have.iter().filter(|n| winning.contains(n)).count())
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<usize>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| {
                lines
                    .iter()
                    .enumerate()
                    .map(|(idx, line)| count_matches(line).with_context(|| format!("card {}", idx + 1)))
                    .collect()
            })
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0u64;
        for (idx, &matches) in shared.iter().enumerate() {
            if matches == 0 {
                continue;
            }
            total = u32::try_from(matches - 1)
                .ok()
                .and_then(|shift| 1u64.checked_shl(shift))
                .and_then(|points| total.checked_add(points))
                .ok_or_else(|| solve_failure(anyhow!("card {} scores past u64", idx + 1)))?;
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut copies = vec![1u64; shared.len()];
        for (idx, &matches) in shared.iter().enumerate() {
            let last = (idx + matches).min(copies.len() - 1);
            for next in idx + 1..=last {
                copies[next] = copies[next]
                    .checked_add(copies[idx])
                    .ok_or_else(|| solve_failure(anyhow!("copies of card {} overflow", next + 1)))?;
            }
        }
        copies
            .iter()
            .try_fold(0u64, |total, &n| total.checked_add(n))
            .map(|total| total.to_string())
            .ok_or_else(|| solve_failure(anyhow!("card count overflows")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::run_part;

    const EXAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn test_part_1_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 1), "13");
    }

    #[test]
    fn test_part_2_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 2), "30");
    }

    #[test]
    fn test_copies_clipped_at_last_card() {
        let input = "Card 1: 1 2 3 | 1 2 3\nCard 2: 4 | 5\n";
        assert_eq!(run_part::<Solver>(input, 2), "3");
    }

    #[test]
    fn test_duplicate_matches_score_overflow() {
        let have = vec!["7"; 64].join(" ");
        let input = format!("Card 1: 7 | {have}\n");
        assert_eq!(run_part::<Solver>(&input, 1), (1u64 << 63).to_string());

        let input = format!("Card 1: 7 | {have} 7\n");
        let mut cards = <Solver as AocParser>::parse(&input).unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut cards).is_err());
    }
}
