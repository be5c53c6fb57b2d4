//! Day 19: Aplenty

use crate::utils::{parse_failure, parse_int, solve_failure, split_lines};
use anyhow::{Context, Result, anyhow, bail, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 19, tags = ["parsing", "intervals"])]
pub struct Solver;

const START: &str = "in";
const RATING_MIN: u64 = 1;
const RATING_MAX: u64 = 4000;

/// Ratings in `x`, `m`, `a`, `s` order
type Ratings = [u64; 4];
/// Inclusive rating ranges, `x`, `m`, `a`, `s`
type RatingRanges = [(u64, u64); 4];

fn category(name: &str) -> Result<usize> {
    match name {
        "x" => Ok(0),
        "m" => Ok(1),
        "a" => Ok(2),
        "s" => Ok(3),
        other => bail!("unknown category {other:?}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target<'a> {
    Accept,
    Reject,
    Workflow(&'a str),
}

impl<'a> Target<'a> {
    fn parse(s: &'a str) -> Self {
        match s {
            "A" => Target::Accept,
            "R" => Target::Reject,
            name => Target::Workflow(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    Less { category: usize, value: u64 },
    Greater { category: usize, value: u64 },
}

impl Condition {
    fn matches(&self, ratings: &Ratings) -> bool {
        match *self {
            Condition::Less { category, value } => ratings[category] < value,
            Condition::Greater { category, value } => ratings[category] > value,
        }
    }

    /// Split `ranges` into the part satisfying the condition and the rest
    fn split(&self, ranges: RatingRanges) -> (Option<RatingRanges>, Option<RatingRanges>) {
        let (category, matched, rest) = match *self {
            Condition::Less { category, value } => {
                let (lo, hi) = ranges[category];
                (category, (lo, hi.min(value.saturating_sub(1))), (lo.max(value), hi))
            }
            Condition::Greater { category, value } => {
                let (lo, hi) = ranges[category];
                (category, (lo.max(value.saturating_add(1)), hi), (lo, hi.min(value)))
            }
        };
        let with = |range: (u64, u64)| {
            (range.0 <= range.1).then(|| {
                let mut ranges = ranges;
                ranges[category] = range;
                ranges
            })
        };
        (with(matched), with(rest))
    }
}

#[derive(Debug, Clone, Copy)]
struct Rule<'a> {
    condition: Option<Condition>,
    target: Target<'a>,
}

fn parse_rule(rule: &str) -> Result<Rule<'_>> {
    let Some((test, target)) = rule.split_once(':') else {
        return Ok(Rule {
            condition: None,
            target: Target::parse(rule),
        });
    };

    let (op_at, op) = test
        .char_indices()
        .find(|&(_, c)| c == '<' || c == '>')
        .ok_or_else(|| anyhow!("condition {test:?} needs `<` or `>`"))?;
    let category = category(&test[..op_at])?;
    let value = parse_int(&test[op_at + 1..])?;
    let condition = if op == '<' {
        Condition::Less { category, value }
    } else {
        Condition::Greater { category, value }
    };

    Ok(Rule {
        condition: Some(condition),
        target: Target::parse(target),
    })
}

fn parse_workflow(line: &str) -> Result<(&str, Vec<Rule<'_>>)> {
    let (name, rules) = line
        .strip_suffix('}')
        .and_then(|l| l.split_once('{'))
        .ok_or_else(|| anyhow!("expected `name{{rules}}`"))?;
    let rules = rules.split(',').map(parse_rule).collect::<Result<Vec<_>>>()?;
    ensure!(
        rules.last().is_some_and(|rule| rule.condition.is_none()),
        "workflow {name} must end with an unconditional rule"
    );
    Ok((name, rules))
}

fn parse_ratings(line: &str) -> Result<Ratings> {
    let body = line
        .strip_prefix('{')
        .and_then(|l| l.strip_suffix('}'))
        .ok_or_else(|| anyhow!("expected `{{x=..,m=..,a=..,s=..}}`"))?;

    let mut ratings = [None; 4];
    for field in body.split(',') {
        let (name, value) = field
            .split_once('=')
            .ok_or_else(|| anyhow!("malformed rating {field:?}"))?;
        ratings[category(name)?] = Some(parse_int(value)?);
    }
    let [Some(x), Some(m), Some(a), Some(s)] = ratings else {
        bail!("part is missing a rating");
    };
    Ok([x, m, a, s])
}

#[derive(Debug)]
pub struct System<'a> {
    workflows: HashMap<&'a str, Vec<Rule<'a>>>,
    parts: Vec<Ratings>,
}

impl<'a> System<'a> {
    fn rules(&self, name: &str) -> Result<&[Rule<'a>]> {
        self.workflows
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| anyhow!("unknown workflow {name:?}"))
    }

    fn accepts(&self, ratings: &Ratings) -> Result<bool> {
        let mut current = START;
        // each workflow can be visited once on an acyclic path
        for _ in 0..=self.workflows.len() {
            let target = self
                .rules(current)?
                .iter()
                .find(|rule| rule.condition.is_none_or(|c| c.matches(ratings)))
                .map(|rule| rule.target)
                .ok_or_else(|| anyhow!("workflow {current} has no matching rule"))?;
            match target {
                Target::Accept => return Ok(true),
                Target::Reject => return Ok(false),
                Target::Workflow(next) => current = next,
            }
        }
        bail!("workflows loop")
    }

    /// Number of rating combinations within `ranges` that `target` accepts
    fn count_accepted(&self, target: Target<'a>, ranges: RatingRanges, depth: usize) -> Result<u64> {
        let name = match target {
            Target::Accept => {
                return Ok(ranges.iter().map(|(lo, hi)| hi - lo + 1).product());
            }
            Target::Reject => return Ok(0),
            Target::Workflow(name) => name,
        };
        ensure!(depth <= self.workflows.len(), "workflows loop");

        let mut total = 0;
        let mut remaining = Some(ranges);
        for rule in self.rules(name)? {
            let Some(ranges) = remaining else {
                break;
            };
            match rule.condition {
                None => {
                    total += self.count_accepted(rule.target, ranges, depth + 1)?;
                    remaining = None;
                }
                Some(condition) => {
                    let (matched, rest) = condition.split(ranges);
                    if let Some(matched) = matched {
                        total += self.count_accepted(rule.target, matched, depth + 1)?;
                    }
                    remaining = rest;
                }
            }
        }
        Ok(total)
    }
}

fn parse_system<'a>(lines: &[&'a str]) -> Result<System<'a>> {
    let split = lines
        .iter()
        .position(|line| line.is_empty())
        .ok_or_else(|| anyhow!("missing blank line between workflows and parts"))?;

    let workflows = lines[..split]
        .iter()
        .map(|&line| parse_workflow(line).with_context(|| format!("workflow {line:?}")))
        .collect::<Result<HashMap<_, _>>>()?;
    ensure!(workflows.contains_key(START), "no `{START}` workflow");

    let parts = lines[split + 1..]
        .iter()
        .filter(|line| !line.is_empty())
        .map(|&line| parse_ratings(line).with_context(|| format!("part {line:?}")))
        .collect::<Result<_>>()?;

    Ok(System { workflows, parts })
}

impl AocParser for Solver {
    type SharedData<'a> = System<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| parse_system(&lines))
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0u64;
        for ratings in &shared.parts {
            if shared.accepts(ratings).map_err(solve_failure)? {
                total = ratings
                    .iter()
                    .try_fold(total, |sum, &rating| sum.checked_add(rating))
                    .ok_or_else(|| solve_failure(anyhow!("rating sum overflows")))?;
            }
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .count_accepted(Target::Workflow(START), [(RATING_MIN, RATING_MAX); 4], 0)
            .map(|count| count.to_string())
            .map_err(solve_failure)
    }
}
