//! Seven-card poker hand evaluation used by the table side game. Independent of the board.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn parse(text: &str) -> Option<Self> {
        match text {
            "T" => Some(Rank::Ten),
            _ => Rank::ALL.into_iter().find(|rank| rank.symbol() == text),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'S' => Some(Suit::Spades),
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("empty card")]
    Empty,
    #[error("unknown rank in card {0:?}")]
    BadRank(String),
    #[error("unknown suit in card {0:?}")]
    BadSuit(String),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Rank then suit letter: `AS`, `10H`, `7c`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let Some(letter) = text.chars().last() else {
            return Err(CardParseError::Empty);
        };
        let suit = Suit::from_letter(letter)
            .ok_or_else(|| CardParseError::BadSuit(text.to_string()))?;
        let rank_text = text[..text.len() - letter.len_utf8()].to_ascii_uppercase();
        let rank = Rank::parse(&rank_text)
            .ok_or_else(|| CardParseError::BadRank(text.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.letter())
    }
}

/// Parses a whitespace separated list such as `"AS KD 10H"`.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, CardParseError> {
    text.split_whitespace().map(str::parse).collect()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandKind {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandKind {
    pub fn id(self) -> &'static str {
        match self {
            HandKind::HighCard => "high_card",
            HandKind::OnePair => "one_pair",
            HandKind::TwoPair => "two_pair",
            HandKind::ThreeOfAKind => "three_of_a_kind",
            HandKind::Straight => "straight",
            HandKind::Flush => "flush",
            HandKind::FullHouse => "full_house",
            HandKind::FourOfAKind => "four_of_a_kind",
            HandKind::StraightFlush => "straight_flush",
            HandKind::RoyalFlush => "royal_flush",
        }
    }
}

/// A ranked five-card hand. Ordering and equality compare strength only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    pub kind: HandKind,
    /// Tie-break ranks, most significant first.
    pub ranks: Vec<Rank>,
    pub cards: [Card; 5],
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.ranks.cmp(&other.ranks))
    }
}

pub fn evaluate_five(cards: &[Card; 5]) -> Hand {
    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    for card in cards {
        *rank_counts.entry(card.rank).or_insert(0) += 1;
    }
    // Bigger groups first, then higher ranks.
    let mut groups: Vec<(usize, Rank)> = rank_counts
        .into_iter()
        .map(|(rank, count)| (count, rank))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    let counts: Vec<usize> = groups.iter().map(|(count, _)| *count).collect();
    let grouped_ranks: Vec<Rank> = groups.iter().map(|(_, rank)| *rank).collect();

    let is_flush = cards.iter().all(|card| card.suit == cards[0].suit);
    let straight_high = straight_high(&grouped_ranks);

    let (kind, ranks) = match (straight_high, is_flush) {
        (Some(Rank::Ace), true) => (HandKind::RoyalFlush, vec![Rank::Ace]),
        (Some(high), true) => (HandKind::StraightFlush, vec![high]),
        _ if counts == [4, 1] => (HandKind::FourOfAKind, grouped_ranks),
        _ if counts == [3, 2] => (HandKind::FullHouse, grouped_ranks),
        (_, true) => (HandKind::Flush, grouped_ranks),
        (Some(high), false) => (HandKind::Straight, vec![high]),
        _ if counts == [3, 1, 1] => (HandKind::ThreeOfAKind, grouped_ranks),
        _ if counts == [2, 2, 1] => (HandKind::TwoPair, grouped_ranks),
        _ if counts == [2, 1, 1, 1] => (HandKind::OnePair, grouped_ranks),
        _ => (HandKind::HighCard, grouped_ranks),
    };
    Hand {
        kind,
        ranks,
        cards: *cards,
    }
}

// `ranks` is sorted high to low. The wheel (A-2-3-4-5) plays five-high.
fn straight_high(ranks: &[Rank]) -> Option<Rank> {
    if ranks.len() != 5 {
        return None;
    }
    if ranks[0].value() - ranks[4].value() == 4 {
        return Some(ranks[0]);
    }
    let wheel = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];
    (ranks == wheel).then_some(Rank::Five)
}

/// Strongest hand among the 21 five-card subsets of seven cards.
pub fn find_best_hand(cards: &[Card; 7]) -> Hand {
    let mut best: Option<Hand> = None;
    for skip_a in 0..cards.len() {
        for skip_b in skip_a + 1..cards.len() {
            let mut five = [cards[0]; 5];
            let kept = cards
                .iter()
                .enumerate()
                .filter(|(idx, _)| *idx != skip_a && *idx != skip_b)
                .map(|(_, card)| *card);
            for (slot, card) in five.iter_mut().zip(kept) {
                *slot = card;
            }
            let hand = evaluate_five(&five);
            if best.as_ref().map_or(true, |current| hand > *current) {
                best = Some(hand);
            }
        }
    }
    match best {
        Some(hand) => hand,
        None => unreachable!("seven cards always yield a five-card subset"),
    }
}
