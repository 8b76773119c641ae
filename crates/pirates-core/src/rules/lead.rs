use crate::model::card::Card;
use crate::model::suit::Suit;
use crate::rules::classify::is_special;

/// Suit ordinary cards must match to compete on rank.
///
/// Any card lettered `N` wins outright. Otherwise the first ordinary card sets
/// it, and a round of nothing but special cards falls back to the first
/// card's letter, which no ordinary suit can match.
pub fn lead_suit(cards: &[Card]) -> Option<char> {
    let fallback = cards.first()?.letter();

    if cards
        .iter()
        .any(|card| Suit::from_char(card.letter()).is_some_and(Suit::is_dominant))
    {
        return Some(Suit::DOMINANT.letter());
    }

    Some(
        cards
            .iter()
            .find(|card| !is_special(**card))
            .map_or(fallback, |card| card.letter()),
    )
}
