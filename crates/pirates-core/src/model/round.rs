use crate::model::card::Card;
use core::fmt;
use core::str::FromStr;
use serde::Serialize;
use thiserror::Error;

/// One card per player; the position in the round is the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Round {
    cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("a round needs at least one card")]
    Empty,
    #[error("player {} played malformed token '{token}'", .index + 1)]
    MalformedToken { index: usize, token: String },
    #[error("no player could be ranked in this round")]
    NoContender,
}

impl Round {
    pub fn new(cards: Vec<Card>) -> Result<Self, RoundError> {
        if cards.is_empty() {
            return Err(RoundError::Empty);
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed round.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromStr for Round {
    type Err = RoundError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let cards = raw
            .split_ascii_whitespace()
            .enumerate()
            .map(|(index, token)| {
                token.parse::<Card>().map_err(|err| RoundError::MalformedToken {
                    index,
                    token: err.token,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Round::new(cards)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Round, RoundError};

    #[test]
    fn parses_whitespace_separated_tokens() {
        let round: Round = "SR BB  KK\t8V".parse().unwrap();
        assert_eq!(round.len(), 4);
        assert_eq!(round.to_string(), "SR BB KK 8V");
    }

    #[test]
    fn empty_round_is_rejected() {
        assert_eq!("".parse::<Round>(), Err(RoundError::Empty));
        assert_eq!("   ".parse::<Round>(), Err(RoundError::Empty));
        assert_eq!(Round::new(Vec::new()), Err(RoundError::Empty));
    }

    #[test]
    fn malformed_token_reports_player() {
        let err = "1M ZZ 4M".parse::<Round>().unwrap_err();
        assert_eq!(
            err,
            RoundError::MalformedToken {
                index: 1,
                token: "ZZ".to_string()
            }
        );
        assert_eq!(err.to_string(), "player 2 played malformed token 'ZZ'");
    }
}
