use crate::model::card::Card;
use crate::model::special::SpecialCard;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Serialize, Serializer};

/// Effective value of a slot once the converter has resolved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// An ordinary card, passed through untouched.
    Face { rank: u8, suit: Suit },
    /// `-1`: a Kraken swallowed by an earlier White Whale.
    Void,
    /// `00`
    Nullified,
    /// `0`, `7` or `8`: reduced values under an active White Whale.
    Reduced(u8),
    /// `11` through `15`: still ranked as a special card.
    Rank(u8),
}

impl Value {
    pub const SIREN: Value = Value::Rank(11);
    pub const PIRATE: Value = Value::Rank(12);
    pub const SKULL_KING: Value = Value::Rank(13);
    pub const COMBO_SIREN: Value = Value::Rank(14);
    pub const KRAKEN: Value = Value::Rank(15);

    pub const fn is_special_rank(self) -> bool {
        matches!(self, Value::Rank(11..=15))
    }

    /// Numeric value of the special rank, if this is one.
    pub const fn special_rank(self) -> Option<i8> {
        match self {
            Value::Rank(rank @ 11..=15) => Some(rank as i8),
            _ => None,
        }
    }

    /// Numeric value of the first character of the textual token.
    pub const fn lead_digit(self) -> i8 {
        match self {
            Value::Face { rank, .. } => rank as i8,
            Value::Void => -1,
            Value::Nullified => 0,
            Value::Reduced(value) => value as i8,
            Value::Rank(rank) => (rank / 10) as i8,
        }
    }

    /// Second character of the textual token, if it has one.
    pub const fn letter(self) -> Option<char> {
        match self {
            Value::Face { suit, .. } => Some(suit.letter()),
            Value::Void => Some('1'),
            Value::Nullified => Some('0'),
            Value::Reduced(_) => None,
            Value::Rank(rank) => char::from_digit((rank % 10) as u32, 10),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Face { rank, suit } => write!(f, "{rank}{suit}"),
            Value::Void => f.write_str("-1"),
            Value::Nullified => f.write_str("00"),
            Value::Reduced(value) | Value::Rank(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One slot of the round during evaluation: the raw card, or the value it
/// has already been rewritten to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Card(Card),
    Value(Value),
}

impl Token {
    pub const fn letter(self) -> Option<char> {
        match self {
            Token::Card(card) => Some(card.letter()),
            Token::Value(value) => value.letter(),
        }
    }

    /// True only while the slot still holds this exact special card.
    pub fn is(self, wanted: SpecialCard) -> bool {
        self == Token::Card(Card::Special(wanted))
    }
}

impl From<Card> for Token {
    fn from(card: Card) -> Self {
        Token::Card(card)
    }
}

impl From<Value> for Token {
    fn from(value: Value) -> Self {
        Token::Value(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Card(card) => write!(f, "{card}"),
            Token::Value(value) => write!(f, "{value}"),
        }
    }
}
