use crate::model::round::{Round, RoundError};
use crate::model::special::SpecialCard;
use crate::model::value::{Token, Value};
use crate::rules::classify::is_special;
use crate::rules::convert::{Conditions, convert};
use crate::rules::lead::lead_suit;
use crate::rules::locate::holder_of;
use crate::rules::outcome::Outcome;
use crate::rules::tie::is_a_tie;
use tracing::{Level, event};

const TARGET: &str = "pirates_core::round";

/// When the Kraken / White Whale precedence rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrecedenceSchedule {
    /// Before every play, as the rules are written.
    #[default]
    EveryPlay,
    /// Once, before the first play.
    Upfront,
}

/// Decide the winner of a single round.
pub fn evaluate(round: &Round) -> Result<Outcome, RoundError> {
    evaluate_with(round, PrecedenceSchedule::EveryPlay)
}

pub(crate) fn evaluate_with(
    round: &Round,
    schedule: PrecedenceSchedule,
) -> Result<Outcome, RoundError> {
    let mut scan = Scan::new(round, schedule)?;
    if schedule == PrecedenceSchedule::Upfront {
        scan.apply_precedence();
    }
    for index in 0..scan.slots.len() {
        scan.play(index);
    }
    scan.finish()
}

/// Everything derived from the round while it is being scanned.
#[derive(Debug, Clone)]
struct Scan {
    slots: Vec<Token>,
    schedule: PrecedenceSchedule,
    lead_suit: char,
    all_special: bool,
    whale_holder: Option<usize>,
    kraken_holder: Option<usize>,
    whale_active: bool,
    kraken_active: bool,
    best_value: i8,
    best_player: Option<usize>,
}

impl Scan {
    fn new(round: &Round, schedule: PrecedenceSchedule) -> Result<Self, RoundError> {
        let cards = round.cards();
        let lead_suit = lead_suit(cards).ok_or(RoundError::Empty)?;
        let whale_holder = holder_of(cards, SpecialCard::WhiteWhale);
        let kraken_holder = holder_of(cards, SpecialCard::Kraken);

        Ok(Self {
            slots: cards.iter().copied().map(Token::Card).collect(),
            schedule,
            lead_suit,
            all_special: cards.iter().all(|card| is_special(*card)),
            whale_holder,
            kraken_holder,
            whale_active: whale_holder.is_some(),
            kraken_active: kraken_holder.is_some(),
            best_value: -1,
            best_player: None,
        })
    }

    fn conditions(&self) -> Conditions {
        Conditions {
            kraken_active: self.kraken_active,
            whale_active: self.whale_active,
            all_special: self.all_special,
        }
    }

    /// Whichever of the Kraken and the White Whale sits in the earlier seat
    /// cancels the other. Idempotent.
    fn apply_precedence(&mut self) {
        let (Some(whale), Some(kraken)) = (self.whale_holder, self.kraken_holder) else {
            return;
        };
        if whale < kraken {
            self.whale_active = false;
            self.whale_holder = None;
        } else if kraken < whale {
            self.slots[kraken] = Token::Value(Value::Void);
            self.kraken_active = false;
        }
    }

    fn play(&mut self, index: usize) {
        let letter = self.slots[index].letter();

        if self.slots[index].is(SpecialCard::SkullKing)
            && self
                .slots
                .get(index + 1)
                .is_some_and(|next| next.is(SpecialCard::Siren))
        {
            self.slots[index + 1] = Token::Value(Value::COMBO_SIREN);
        }

        if self.schedule == PrecedenceSchedule::EveryPlay {
            self.apply_precedence();
        }

        let value = convert(self.slots[index], self.conditions());
        self.slots[index] = Token::Value(value);

        if let Some(rank) = value.special_rank() {
            if rank >= self.best_value {
                self.best_value = rank;
                self.best_player = Some(index);
            }
        }

        if letter == Some(self.lead_suit) || self.whale_active {
            let digit = value.lead_digit();
            if digit > self.best_value {
                self.best_value = digit;
                self.best_player = Some(index);
            }
        }

        event!(
            target: TARGET,
            Level::TRACE,
            player = (index + 1) as u32,
            value = %value,
            best_value = i64::from(self.best_value),
            best_player = self.best_player.map(|p| (p + 1) as u32),
            kraken_active = self.kraken_active,
            whale_active = self.whale_active,
        );
    }

    fn finish(self) -> Result<Outcome, RoundError> {
        let conditions = self.conditions();
        let values: Vec<Value> = self
            .slots
            .iter()
            .map(|slot| convert(*slot, conditions))
            .collect();

        let whale_override = match self.whale_holder {
            Some(holder)
                if self.whale_active
                    && self.best_value != 0
                    && is_a_tie(&values, self.best_value) =>
            {
                Some(holder)
            }
            _ => None,
        };

        let winner = whale_override
            .or(self.best_player)
            .ok_or(RoundError::NoContender)?;

        event!(
            target: TARGET,
            Level::DEBUG,
            player = (winner + 1) as u32,
            lead_suit = %self.lead_suit,
            best_value = i64::from(self.best_value),
            whale_override = whale_override.is_some(),
        );

        Ok(Outcome {
            winner,
            player: winner + 1,
            lead_suit: self.lead_suit,
            best_value: self.best_value,
            values,
            whale_override: whale_override.is_some(),
        })
    }
}
