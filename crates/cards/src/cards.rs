// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// Errors returned when building or parsing a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank is not in the range 2..=14.
    #[error("invalid card rank {0}, expected a value in 2..=14")]
    InvalidRank(u8),
    /// The suit is not one of the four suit symbols.
    #[error("invalid card suit {0:?}")]
    InvalidSuit(char),
    /// The text doesn't describe a card.
    #[error("invalid card {0:?}")]
    InvalidCard(String),
}

/// A Poker card.
///
/// A card packs its rank and suit in a single byte:
///
/// ```text
///   +--------+
///   |xxssrrrr|
///   +--------+
///   r = rank value (deuce=2,trey=3,...,ace=14)
///   s = suit index (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
///
/// Two cards are equal only if both rank and suit match, while ordering looks
/// at the rank only: cards with the same rank and different suits are not
/// comparable, use [Card::cmp_rank] to sort cards by rank.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self((rank as u8) | ((suit as u8) << 4))
    }

    /// Create a card from a numeric rank (2..=14) and a suit symbol.
    ///
    /// The suit can be one of `C`, `D`, `H`, `S` in either case, or one of
    /// the `♣`, `♦`, `♥`, `♠` symbols.
    pub fn try_new(rank: u8, suit: char) -> Result<Card, CardError> {
        let rank = Rank::from_value(rank).ok_or(CardError::InvalidRank(rank))?;
        let suit = Suit::from_char(suit).ok_or(CardError::InvalidSuit(suit))?;
        Ok(Self::new(rank, suit))
    }

    /// This card unique id in the range 0..52.
    pub fn id(&self) -> usize {
        self.suit() as usize * 13 + (self.rank_value() as usize - 2)
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.0 >> 4) as usize & 0x3]
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[self.rank_value() as usize - 2]
    }

    /// Returns the rank value (deuce=2,...,ace=14).
    #[inline]
    pub fn rank_value(&self) -> u8 {
        self.0 & 0xf
    }

    /// Compares two cards by rank ignoring suits.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.cmp_rank(other) {
            Ordering::Equal if self != other => None,
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidCard(s.to_string());

        let mut chars = s.trim().chars();
        let rank = match chars.next() {
            Some('1') if chars.next() == Some('0') => Rank::Ten,
            Some(c) => Rank::from_char(c).ok_or_else(invalid)?,
            None => return Err(invalid()),
        };

        let suit = match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::from_char(c).ok_or(CardError::InvalidSuit(c))?,
            _ => return Err(invalid()),
        };

        Ok(Card::new(rank, suit))
    }
}

impl From<Card> for String {
    fn from(card: Card) -> String {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Parses a whitespace separated list of cards, e.g. `"AS KD 7c"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for a value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            2..=14 => Some(Self::ALL[value as usize - 2]),
            _ => None,
        }
    }

    /// Returns this rank value (deuce=2,...,ace=14).
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the rank name, e.g. "Queen".
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuce",
            Rank::Trey => "Trey",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// Returns the plural rank name, e.g. "Sixes".
    pub fn plural(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuces",
            Rank::Trey => "Treys",
            Rank::Four => "Fours",
            Rank::Five => "Fives",
            Rank::Six => "Sixes",
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }

    fn from_char(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            '2'..='9' => Rank::from_value(c as u8 - b'0'),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// Returns the suit symbol, e.g. '♠'.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            'C' | 'c' | '♣' => Some(Suit::Clubs),
            'D' | 'd' | '♦' => Some(Suit::Diamonds),
            'H' | 'h' | '♥' => Some(Suit::Hearts),
            'S' | 's' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_encoding() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.rank(), rank);
                assert_eq!(card.suit(), suit);
                assert_eq!(card.rank_value(), rank.value());
            }
        }

        let ks = Card::new(Rank::King, Suit::Spades);
        assert_eq!(ks.id(), 3 * 13 + 11);

        let dc = Card::new(Rank::Deuce, Suit::Clubs);
        assert_eq!(dc.id(), 0);
    }

    #[test]
    fn card_try_new() {
        let c = Card::try_new(14, '♠').unwrap();
        assert_eq!(c, Card::new(Rank::Ace, Suit::Spades));

        let c = Card::try_new(2, 'd').unwrap();
        assert_eq!(c, Card::new(Rank::Deuce, Suit::Diamonds));

        assert_eq!(Card::try_new(1, 'S'), Err(CardError::InvalidRank(1)));
        assert_eq!(Card::try_new(15, 'S'), Err(CardError::InvalidRank(15)));
        assert_eq!(Card::try_new(0, 'S'), Err(CardError::InvalidRank(0)));
        assert_eq!(Card::try_new(10, 'X'), Err(CardError::InvalidSuit('X')));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(format!("{c:?}"), "Card(AC)");
    }

    #[test]
    fn card_from_str() {
        assert_eq!("AS".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("td".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("10♥".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!(" 7♣ ".parse::<Card>(), Ok(Card::new(Rank::Seven, Suit::Clubs)));

        assert_eq!("AX".parse::<Card>(), Err(CardError::InvalidSuit('X')));
        assert!(matches!("1S".parse::<Card>(), Err(CardError::InvalidCard(_))));
        assert!(matches!("ZS".parse::<Card>(), Err(CardError::InvalidCard(_))));
        assert!(matches!("A".parse::<Card>(), Err(CardError::InvalidCard(_))));
        assert!(matches!("ASS".parse::<Card>(), Err(CardError::InvalidCard(_))));
        assert!(matches!("".parse::<Card>(), Err(CardError::InvalidCard(_))));

        // Display output parses back to the same card.
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse::<Card>(), Ok(card));
            }
        }
    }

    #[test]
    fn cards_list() {
        let cards = parse_cards("AS KD  7c\n10h").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::King, Suit::Diamonds),
                Card::new(Rank::Seven, Suit::Clubs),
                Card::new(Rank::Ten, Suit::Hearts),
            ]
        );

        assert!(parse_cards("AS KX").is_err());
        assert!(parse_cards("").unwrap().is_empty());
    }

    #[test]
    fn card_ordering() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        let kh = Card::new(Rank::King, Suit::Hearts);

        assert!(ah > kh);
        assert!(kh < ad);
        assert_eq!(ah.partial_cmp(&ah), Some(Ordering::Equal));

        // Same rank different suit are not equal and not ordered.
        assert_ne!(ah, ad);
        assert_eq!(ah.partial_cmp(&ad), None);
        assert_eq!(ah.cmp_rank(&ad), Ordering::Equal);

        let mut cards = vec![kh, ah, Card::new(Rank::Deuce, Suit::Spades)];
        cards.sort_by(Card::cmp_rank);
        assert_eq!(cards[0].rank(), Rank::Deuce);
        assert_eq!(cards[2], ah);
    }

    #[test]
    fn card_serde() {
        let c = Card::new(Rank::Queen, Suit::Clubs);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"QC\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), c);
        assert!(serde_json::from_str::<Card>("\"1C\"").is_err());
    }
}
