use crate::model::value::Token;

/// A raw special card, or a value that still ranks as one (`11`..`15`).
pub fn is_special(token: impl Into<Token>) -> bool {
    match token.into() {
        Token::Card(card) => card.is_special(),
        Token::Value(value) => value.is_special_rank(),
    }
}

#[cfg(test)]
mod tests {
    use super::is_special;
    use crate::model::card::Card;
    use crate::model::value::Value;

    #[test]
    fn raw_codes_are_special() {
        for code in ["SR", "PR", "SK", "KK", "BB"] {
            assert!(is_special(code.parse::<Card>().unwrap()), "{code}");
        }
        assert!(!is_special("9N".parse::<Card>().unwrap()));
    }

    #[test]
    fn converted_ranks_stay_special() {
        for rank in 11..=15 {
            assert!(is_special(Value::Rank(rank)));
        }
        for value in [Value::Void, Value::Nullified, Value::Reduced(0), Value::Reduced(7), Value::Reduced(8)] {
            assert!(!is_special(value), "{value}");
        }
    }
}
