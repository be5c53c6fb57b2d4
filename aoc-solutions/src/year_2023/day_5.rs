//! Day 5: If You Give A Seed A Fertilizer

use crate::utils::{parse_failure, parse_ints, solve_failure, split_lines};
use anyhow::{Context, Result, anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["intervals"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MapRange {
    source: u64,
    destination: u64,
    len: u64,
}

impl MapRange {
    fn source_end(&self) -> u64 {
        self.source + self.len
    }

    fn translate(&self, value: u64) -> u64 {
        self.destination + (value - self.source)
    }
}

/// One `x-to-y map:` section, ranges sorted by source start
#[derive(Debug, Clone, Default)]
pub struct RangeMap {
    ranges: Vec<MapRange>,
}

impl RangeMap {
    /// Empty ranges map nothing and are dropped.
    fn new(mut ranges: Vec<MapRange>) -> Self {
        ranges.retain(|r| r.len > 0);
        ranges.sort_unstable_by_key(|r| r.source);
        Self { ranges }
    }

    /// Values not covered by any range map to themselves.
    pub fn lookup(&self, value: u64) -> u64 {
        let idx = self.ranges.partition_point(|r| r.source <= value);
        match idx.checked_sub(1).map(|i| &self.ranges[i]) {
            Some(range) if value < range.source_end() => range.translate(value),
            _ => value,
        }
    }

    /// Map the half-open interval `[start, end)`, splitting it at range
    /// boundaries. Gaps between ranges pass through unchanged.
    pub fn map_interval(&self, start: u64, end: u64, out: &mut Vec<(u64, u64)>) {
        let mut cur = start;
        let first = self.ranges.partition_point(|r| r.source_end() <= cur);

        for range in &self.ranges[first..] {
            if cur >= end {
                break;
            }
            if range.source > cur {
                let gap_end = end.min(range.source);
                out.push((cur, gap_end));
                cur = gap_end;
                if cur >= end {
                    break;
                }
            }
            let overlap_end = end.min(range.source_end());
            if overlap_end > cur {
                out.push((range.translate(cur), range.translate(overlap_end - 1) + 1));
                cur = overlap_end;
            }
        }

        if cur < end {
            out.push((cur, end));
        }
    }
}

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<u64>,
    maps: Vec<RangeMap>,
}

fn parse_section(lines: &[&str]) -> Result<RangeMap> {
    let (header, body) = lines
        .split_first()
        .ok_or_else(|| anyhow!("empty map section"))?;
    ensure!(header.ends_with("map:"), "expected a map header, got {header:?}");

    let ranges = body
        .iter()
        .map(|line| {
            let values: Vec<u64> = parse_ints(line)?;
            match values[..] {
                [destination, source, len] => {
                    ensure!(
                        source.checked_add(len).is_some() && destination.checked_add(len).is_some(),
                        "range {line:?} overflows u64"
                    );
                    Ok(MapRange {
                        source,
                        destination,
                        len,
                    })
                }
                _ => Err(anyhow!("expected `dest source len`, got {line:?}")),
            }
        })
        .collect::<Result<_>>()
        .with_context(|| format!("in {header:?}"))?;
    Ok(RangeMap::new(ranges))
}

fn parse_almanac(lines: &[&str]) -> Result<Almanac> {
    let mut sections = lines.split(|line| line.is_empty());
    let seeds = sections
        .next()
        .and_then(|s| s.first())
        .and_then(|line| line.strip_prefix("seeds:"))
        .ok_or_else(|| anyhow!("missing `seeds:` line"))?;
    let seeds = parse_ints(seeds)?;

    let maps = sections
        .filter(|section| !section.is_empty())
        .map(parse_section)
        .collect::<Result<Vec<_>>>()?;
    ensure!(!maps.is_empty(), "no maps found");

    Ok(Almanac { seeds, maps })
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| parse_almanac(&lines))
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .seeds
            .iter()
            .map(|&seed| shared.maps.iter().fold(seed, |value, map| map.lookup(value)))
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| solve_failure(anyhow!("no seeds")))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut intervals: Vec<(u64, u64)> = shared
            .seeds
            .chunks(2)
            .map(|pair| match *pair {
                [start, len] => start
                    .checked_add(len)
                    .map(|end| (start, end))
                    .ok_or_else(|| anyhow!("seed range {start} {len} overflows u64")),
                _ => Err(anyhow!("odd number of seed values")),
            })
            .collect::<Result<_>>()
            .map_err(solve_failure)?;

        for map in &shared.maps {
            let mut next = Vec::with_capacity(intervals.len());
            for &(start, end) in &intervals {
                map.map_interval(start, end, &mut next);
            }
            intervals = next;
        }

        intervals
            .iter()
            .filter(|(start, end)| start < end)
            .map(|&(start, _)| start)
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| solve_failure(anyhow!("no seed ranges")))
    }
}
