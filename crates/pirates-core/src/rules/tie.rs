use crate::model::value::Value;
use crate::rules::classify::is_special;

/// Whether two or more non-special values share `best`.
pub fn is_a_tie(values: &[Value], best: i8) -> bool {
    values
        .iter()
        .filter(|value| !is_special(**value))
        .filter(|value| value.lead_digit() == best)
        .nth(1)
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::is_a_tie;
    use crate::model::suit::Suit;
    use crate::model::value::Value;

    fn face(rank: u8, suit: char) -> Value {
        Value::Face {
            rank,
            suit: Suit::from_char(suit).unwrap(),
        }
    }

    #[test]
    fn two_equal_faces_tie() {
        let values = [face(2, 'A'), face(1, 'V'), Value::Nullified, face(2, 'N')];
        assert!(is_a_tie(&values, 2));
        assert!(!is_a_tie(&values, 1));
    }

    #[test]
    fn reduced_values_take_part() {
        let values = [face(7, 'M'), Value::Reduced(7)];
        assert!(is_a_tie(&values, 7));
    }

    #[test]
    fn special_ranks_are_skipped() {
        let values = [Value::SIREN, Value::KRAKEN, face(1, 'M')];
        assert!(!is_a_tie(&values, 1));
    }
}
