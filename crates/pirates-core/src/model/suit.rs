use core::fmt;
use serde::{Serialize, Serializer};

/// Suit letter of an ordinary card. Any ASCII uppercase letter is accepted;
/// `N` is the dominant suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Suit(char);

impl Suit {
    pub const DOMINANT: Suit = Suit('N');

    pub const fn from_char(letter: char) -> Option<Self> {
        if letter.is_ascii_uppercase() {
            Some(Suit(letter))
        } else {
            None
        }
    }

    pub const fn letter(self) -> char {
        self.0
    }

    pub const fn is_dominant(self) -> bool {
        self.0 == Self::DOMINANT.0
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Suit;

    #[test]
    fn accepts_only_uppercase_letters() {
        assert_eq!(Suit::from_char('M').map(Suit::letter), Some('M'));
        assert_eq!(Suit::from_char('m'), None);
        assert_eq!(Suit::from_char('4'), None);
    }

    #[test]
    fn n_is_dominant() {
        assert!(Suit::from_char('N').unwrap().is_dominant());
        assert!(!Suit::from_char('V').unwrap().is_dominant());
    }
}
