use crate::model::card::Card;
use crate::model::special::SpecialCard;

/// First player holding `wanted`.
pub fn holder_of(cards: &[Card], wanted: SpecialCard) -> Option<usize> {
    cards
        .iter()
        .position(|card| *card == Card::Special(wanted))
}
