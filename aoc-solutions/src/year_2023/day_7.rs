//! Day 7: Camel Cards

use crate::utils::{parse_failure, parse_int, split_lines};
use anyhow::{Context, Result, anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["sorting"])]
pub struct Solver;

const CARD_ORDER: &[u8; 13] = b"23456789TJQKA";
const JOKER_CARD_ORDER: &[u8; 13] = b"J23456789TQKA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    fn classify(cards: &[u8; 5], jokers_wild: bool) -> Self {
        let jokers = if jokers_wild {
            cards.iter().filter(|&&c| c == b'J').count()
        } else {
            0
        };
        let mut counts: Vec<usize> = cards
            .iter()
            .filter(|&&c| !(jokers_wild && c == b'J'))
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();

        // jokers always join the largest group
        match counts.first_mut() {
            Some(largest) => *largest += jokers,
            None => counts.push(jokers),
        }

        match counts[..] {
            [5] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

#[derive(Debug)]
pub struct Hand {
    cards: [u8; 5],
    bid: u64,
}

impl Hand {
    /// Sort key: type first, then card strengths left to right
    fn strength(&self, jokers_wild: bool) -> (HandType, [usize; 5]) {
        let order = if jokers_wild { JOKER_CARD_ORDER } else { CARD_ORDER };
        let ranks = self
            .cards
            .map(|card| order.iter().position(|&c| c == card).unwrap_or_default());
        (HandType::classify(&self.cards, jokers_wild), ranks)
    }
}

fn parse_hand(line: &str) -> Result<Hand> {
    let (cards, bid) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected `<hand> <bid>`"))?;
    let cards: [u8; 5] = cards
        .as_bytes()
        .try_into()
        .map_err(|_| anyhow!("hand {cards:?} must have 5 cards"))?;
    ensure!(
        cards.iter().all(|c| CARD_ORDER.contains(c)),
        "hand {:?} contains an unknown card",
        String::from_utf8_lossy(&cards)
    );

    Ok(Hand {
        cards,
        bid: parse_int(bid.trim())?,
    })
}

fn total_winnings(hands: &[Hand], jokers_wild: bool) -> u64 {
    hands
        .iter()
        .map(|hand| (hand.strength(jokers_wild), hand.bid))
        .sorted_unstable()
        .zip(1..)
        .map(|((_, bid), rank)| bid * rank)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| {
                lines
                    .iter()
                    .enumerate()
                    .map(|(idx, line)| parse_hand(line).with_context(|| format!("line {}", idx + 1)))
                    .collect()
            })
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::run_part;

    const EXAMPLE: &str = "32T3K 765\nT55J5 684\nKK677 28\nKTJJT 220\nQQQJA 483\n";

    #[test]
    fn test_part_1_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 1), "6440");
    }

    #[test]
    fn test_part_2_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 2), "5905");
    }

    #[test]
    fn test_classify() {
        assert_eq!(HandType::classify(b"AAAAA", false), HandType::FiveOfAKind);
        assert_eq!(HandType::classify(b"23332", false), HandType::FullHouse);
        assert_eq!(HandType::classify(b"23432", false), HandType::TwoPair);
        assert_eq!(HandType::classify(b"KTJJT", false), HandType::TwoPair);
        assert_eq!(HandType::classify(b"KTJJT", true), HandType::FourOfAKind);
        assert_eq!(HandType::classify(b"JJJJJ", true), HandType::FiveOfAKind);
    }

    #[test]
    fn test_joker_is_weakest() {
        let jack = parse_hand("JKKK2 1").unwrap();
        let queen = parse_hand("QQQQ2 1").unwrap();
        assert!(jack.strength(true) < queen.strength(true));
        assert!(jack.strength(false) < queen.strength(false));
    }
}
