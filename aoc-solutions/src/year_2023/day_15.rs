//! Day 15: Lens Library

use crate::utils::{parse_failure, parse_int};
use anyhow::{Context, Result, anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 15, tags = ["hashing"])]
pub struct Solver;

const BOX_COUNT: usize = 256;

/// Holiday ASCII String Helper
fn hash(s: &str) -> usize {
    s.bytes()
        .fold(0, |h, byte| (h + usize::from(byte)) * 17 % BOX_COUNT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Insert(u8),
    Remove,
}

#[derive(Debug)]
pub struct Step<'a> {
    raw: &'a str,
    label: &'a str,
    op: Operation,
}

fn parse_step(raw: &str) -> Result<Step<'_>> {
    let (label, op) = if let Some(label) = raw.strip_suffix('-') {
        (label, Operation::Remove)
    } else {
        let (label, focal) = raw
            .split_once('=')
            .ok_or_else(|| anyhow!("step must end in `-` or `=<focal length>`"))?;
        (label, Operation::Insert(parse_int(focal)?))
    };
    ensure!(!label.is_empty(), "empty label");
    Ok(Step { raw, label, op })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Step<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|raw| raw.trim())
            .filter(|raw| !raw.is_empty())
            .map(|raw| parse_step(raw).with_context(|| format!("step {raw:?}")))
            .collect::<Result<Vec<_>>>()
            .and_then(|steps| {
                ensure!(!steps.is_empty(), "no steps");
                Ok(steps)
            })
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: usize = shared.iter().map(|step| hash(step.raw)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut boxes: Vec<Vec<(&str, u8)>> = vec![Vec::new(); BOX_COUNT];

        for step in shared.iter() {
            let lenses = &mut boxes[hash(step.label)];
            let slot = lenses.iter().position(|&(label, _)| label == step.label);
            match (step.op, slot) {
                (Operation::Insert(focal), Some(idx)) => lenses[idx].1 = focal,
                (Operation::Insert(focal), None) => lenses.push((step.label, focal)),
                (Operation::Remove, Some(idx)) => {
                    lenses.remove(idx);
                }
                (Operation::Remove, None) => {}
            }
        }

        let power: usize = boxes
            .iter()
            .enumerate()
            .flat_map(|(box_idx, lenses)| {
                lenses
                    .iter()
                    .enumerate()
                    .map(move |(slot, &(_, focal))| (box_idx + 1) * (slot + 1) * usize::from(focal))
            })
            .sum();
        Ok(power.to_string())
    }
}
