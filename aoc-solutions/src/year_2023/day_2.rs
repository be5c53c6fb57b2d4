//! Day 2: Cube Conundrum

use crate::utils::{parse_failure, parse_int, split_lines};
use anyhow::{Context, Result, anyhow, bail};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["parsing"])]
pub struct Solver;

/// Cubes available in the bag for part 1
const BAG: CubeSet = CubeSet {
    red: 12,
    green: 13,
    blue: 14,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeSet {
    red: u32,
    green: u32,
    blue: u32,
}

impl CubeSet {
    fn fits_in(&self, bag: &CubeSet) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn max(self, other: CubeSet) -> CubeSet {
        CubeSet {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

#[derive(Debug)]
pub struct Game {
    id: u32,
    draws: Vec<CubeSet>,
}

fn parse_draw(draw: &str) -> Result<CubeSet> {
    let mut set = CubeSet::default();
    for entry in draw.split(',') {
        let (count, colour) = entry
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected `<count> <colour>`, got {entry:?}"))?;
        let count: u32 = parse_int(count)?;
        match colour {
            "red" => set.red += count,
            "green" => set.green += count,
            "blue" => set.blue += count,
            other => bail!("unknown colour {other:?}"),
        }
    }
    Ok(set)
}

fn parse_game(line: &str) -> Result<Game> {
    let (header, draws) = line
        .split_once(": ")
        .ok_or_else(|| anyhow!("missing `: ` separator"))?;
    let id = header
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("expected `Game <id>`, got {header:?}"))?;

    Ok(Game {
        id: parse_int(id)?,
        draws: draws.split(';').map(parse_draw).collect::<Result<_>>()?,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| {
                lines
                    .iter()
                    .enumerate()
                    .map(|(idx, line)| parse_game(line).with_context(|| format!("line {}", idx + 1)))
                    .collect()
            })
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .filter(|game| game.draws.iter().all(|draw| draw.fits_in(&BAG)))
            .map(|game| game.id)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|game| {
                game.draws
                    .iter()
                    .fold(CubeSet::default(), |acc, draw| acc.max(*draw))
                    .power()
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::run_part;

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn test_part_1_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 1), "8");
    }

    #[test]
    fn test_part_2_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 2), "2286");
    }

    #[test]
    fn test_parse_game() {
        let game = parse_game("Game 12: 3 blue, 4 red; 2 green").unwrap();
        assert_eq!(game.id, 12);
        assert_eq!(
            game.draws,
            vec![
                CubeSet { red: 4, green: 0, blue: 3 },
                CubeSet { red: 0, green: 2, blue: 0 },
            ]
        );
    }

    #[test]
    fn test_unknown_colour_rejected() {
        let err = <Solver as AocParser>::parse("Game 1: 3 purple\n").unwrap_err();
        assert!(err.to_string().contains("purple"));
    }
}
