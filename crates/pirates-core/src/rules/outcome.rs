use crate::model::value::Value;
use core::fmt;
use serde::Serialize;

/// Result of evaluating one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Winning seat, 0-based.
    pub winner: usize,
    /// Winning player number as announced, 1-based.
    pub player: usize,
    pub lead_suit: char,
    pub best_value: i8,
    /// Every slot after conversion, in seat order.
    pub values: Vec<Value>,
    /// Set when the White Whale claimed a tie.
    pub whale_override: bool,
}

impl Outcome {
    pub fn announcement(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gana jugador {}", self.player)
    }
}
