//! Day 8: Haunted Wasteland

use crate::utils::{lcm, parse_failure, solve_failure, split_lines};
use anyhow::{Context, Result, anyhow, bail, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::HashMap;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 8, tags = ["graph", "math"])]
pub struct Solver;

#[derive(Debug)]
pub struct Network<'a> {
    /// `true` for `R`
    instructions: Vec<bool>,
    nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
    /// Steps from `start` until `is_end` holds, cycling through the instructions.
    fn steps_until(&self, start: &'a str, is_end: impl Fn(&str) -> bool) -> Result<u64> {
        // past this many steps some (node, instruction) state has repeated
        let limit = (self.nodes.len() * self.instructions.len()) as u64;

        let mut node = start;
        let mut steps = 0u64;
        for &right in self.instructions.iter().cycle() {
            if is_end(node) {
                return Ok(steps);
            }
            ensure!(steps <= limit, "no end node reachable from {start}");
            let &(left_next, right_next) = self
                .nodes
                .get(node)
                .ok_or_else(|| anyhow!("unknown node {node}"))?;
            node = if right { right_next } else { left_next };
            steps += 1;
        }
        bail!("no instructions")
    }
}

fn parse_node(line: &str) -> Result<(&str, (&str, &str))> {
    let (name, targets) = line
        .split_once(" = ")
        .ok_or_else(|| anyhow!("expected `NAME = (LEFT, RIGHT)`"))?;
    let (left, right) = targets
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .and_then(|t| t.split_once(", "))
        .ok_or_else(|| anyhow!("malformed targets {targets:?}"))?;
    Ok((name, (left, right)))
}

fn parse_network<'a>(lines: &[&'a str]) -> Result<Network<'a>> {
    let (instructions, rest) = lines
        .split_first()
        .ok_or_else(|| anyhow!("missing instruction line"))?;
    let instructions = instructions
        .bytes()
        .map(|b| match b {
            b'L' => Ok(false),
            b'R' => Ok(true),
            other => Err(anyhow!("invalid instruction {:?}", other as char)),
        })
        .collect::<Result<Vec<_>>>()?;
    ensure!(!instructions.is_empty(), "empty instruction line");

    let nodes = rest
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, &line)| parse_node(line).with_context(|| format!("line {}", idx + 2)))
        .collect::<Result<_>>()?;

    Ok(Network {
        instructions,
        nodes,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| parse_network(&lines))
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .steps_until("AAA", |node| node == "ZZZ")
            .map(|steps| steps.to_string())
            .map_err(solve_failure)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut starts: Vec<&str> = shared
            .nodes
            .keys()
            .copied()
            .filter(|node| node.ends_with('A'))
            .collect();
        starts.sort_unstable();

        let lengths = starts
            .iter()
            .map(|&start| {
                let steps = shared.steps_until(start, |node| node.ends_with('Z'))?;
                debug!(start, steps, "ghost path length");
                Ok(steps)
            })
            .collect::<Result<Vec<_>>>()
            .map_err(solve_failure)?;

        Ok(lcm(&lengths).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::run_part;

    #[test]
    fn test_part_1_examples() {
        let input = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";
        assert_eq!(run_part::<Solver>(input, 1), "2");

        let input = "LLR\n\nAAA = (BBB, BBB)\nBBB = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)\n";
        assert_eq!(run_part::<Solver>(input, 1), "6");
    }

    #[test]
    fn test_part_2_example() {
        let input = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";
        assert_eq!(run_part::<Solver>(input, 2), "6");
    }

    #[test]
    fn test_unreachable_end_fails() {
        let mut network = <Solver as AocParser>::parse("L\n\nAAA = (AAA, AAA)\n").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut network).is_err());
    }
}
