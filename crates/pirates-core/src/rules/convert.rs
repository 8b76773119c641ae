use crate::model::card::Card;
use crate::model::special::SpecialCard;
use crate::model::value::{Token, Value};

/// Round conditions the converter reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Conditions {
    pub kraken_active: bool,
    pub whale_active: bool,
    pub all_special: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
enum Column {
    Kraken = 0,
    Whale = 1,
    Nominal = 2,
}

impl Conditions {
    const fn column(self) -> Column {
        if self.kraken_active {
            Column::Kraken
        } else if self.whale_active {
            Column::Whale
        } else {
            Column::Nominal
        }
    }
}

const SIREN_ROW: [Value; 3] = [Value::Nullified, Value::Reduced(7), Value::SIREN];
const PIRATE_ROW: [Value; 3] = [Value::Nullified, Value::Reduced(8), Value::PIRATE];
const SKULL_KING_ROW: [Value; 3] = [Value::Nullified, Value::Reduced(0), Value::SKULL_KING];

const fn ranked_row(card: SpecialCard) -> Option<&'static [Value; 3]> {
    match card {
        SpecialCard::Siren => Some(&SIREN_ROW),
        SpecialCard::Pirate => Some(&PIRATE_ROW),
        SpecialCard::SkullKing => Some(&SKULL_KING_ROW),
        SpecialCard::Kraken | SpecialCard::WhiteWhale => None,
    }
}

/// Effective value of a special card. The Kraken only cares whether every
/// card in the round is special; the White Whale is always worth nothing.
pub fn convert_special(card: SpecialCard, conditions: Conditions) -> Value {
    if let Some(row) = ranked_row(card) {
        return row[conditions.column() as usize];
    }
    match card {
        SpecialCard::Kraken if conditions.all_special => Value::KRAKEN,
        _ => Value::Nullified,
    }
}

/// Resolve a slot. Ordinary cards and already-converted values pass through.
pub fn convert(token: Token, conditions: Conditions) -> Value {
    match token {
        Token::Card(Card::Ordinary { rank, suit }) => Value::Face { rank, suit },
        Token::Card(Card::Special(card)) => convert_special(card, conditions),
        Token::Value(value) => value,
    }
}
