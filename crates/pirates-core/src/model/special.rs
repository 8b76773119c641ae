use core::fmt;

/// The five cards that bend the ordinary ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialCard {
    Siren,
    Pirate,
    SkullKing,
    Kraken,
    WhiteWhale,
}

impl SpecialCard {
    pub const ALL: [SpecialCard; 5] = [
        SpecialCard::Siren,
        SpecialCard::Pirate,
        SpecialCard::SkullKing,
        SpecialCard::Kraken,
        SpecialCard::WhiteWhale,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|card| card.code() == code)
    }

    pub const fn code(self) -> &'static str {
        match self {
            SpecialCard::Siren => "SR",
            SpecialCard::Pirate => "PR",
            SpecialCard::SkullKing => "SK",
            SpecialCard::Kraken => "KK",
            SpecialCard::WhiteWhale => "BB",
        }
    }

    /// Second character of the code; this is what lead-suit matching sees.
    pub const fn letter(self) -> char {
        match self {
            SpecialCard::Siren | SpecialCard::Pirate => 'R',
            SpecialCard::SkullKing | SpecialCard::Kraken => 'K',
            SpecialCard::WhiteWhale => 'B',
        }
    }
}

impl fmt::Display for SpecialCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
