use crate::model::special::SpecialCard;
use crate::model::suit::Suit;
use core::fmt;
use core::str::FromStr;
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Ordinary { rank: u8, suit: Suit },
    Special(SpecialCard),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{token}' is neither an ordinary card (digit 1-9 and a suit letter) nor a special code")]
pub struct MalformedCard {
    pub token: String,
}

impl Card {
    pub const fn ordinary(rank: u8, suit: Suit) -> Option<Self> {
        if rank >= 1 && rank <= 9 {
            Some(Card::Ordinary { rank, suit })
        } else {
            None
        }
    }

    pub const fn is_special(self) -> bool {
        matches!(self, Card::Special(_))
    }

    pub const fn special(self) -> Option<SpecialCard> {
        match self {
            Card::Special(card) => Some(card),
            Card::Ordinary { .. } => None,
        }
    }

    /// Second character of the token.
    pub const fn letter(self) -> char {
        match self {
            Card::Ordinary { suit, .. } => suit.letter(),
            Card::Special(card) => card.letter(),
        }
    }
}

impl FromStr for Card {
    type Err = MalformedCard;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let malformed = || MalformedCard {
            token: token.to_string(),
        };

        if let Some(card) = SpecialCard::from_code(token) {
            return Ok(Card::Special(card));
        }

        let mut chars = token.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(malformed());
        };
        let rank = rank
            .to_digit(10)
            .and_then(|digit| u8::try_from(digit).ok())
            .ok_or_else(malformed)?;
        let suit = Suit::from_char(suit).ok_or_else(malformed)?;
        Card::ordinary(rank, suit).ok_or_else(malformed)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Ordinary { rank, suit } => write!(f, "{rank}{suit}"),
            Card::Special(card) => write!(f, "{card}"),
        }
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, MalformedCard};
    use crate::model::special::SpecialCard;

    #[test]
    fn parses_ordinary_cards() {
        let card: Card = "7M".parse().unwrap();
        assert!(matches!(card, Card::Ordinary { rank: 7, .. }));
        assert_eq!(card.letter(), 'M');
        assert_eq!(card.to_string(), "7M");
    }

    #[test]
    fn parses_special_codes() {
        assert_eq!("KK".parse::<Card>(), Ok(Card::Special(SpecialCard::Kraken)));
        assert_eq!("BB".parse::<Card>().unwrap().letter(), 'B');
        assert!("SR".parse::<Card>().unwrap().is_special());
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in ["", "0M", "M1", "1m", "12M", "XX", "1", "sr"] {
            assert_eq!(
                token.parse::<Card>(),
                Err(MalformedCard {
                    token: token.to_string()
                }),
                "token {token:?} should be rejected"
            );
        }
    }
}
