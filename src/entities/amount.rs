use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{invalid_amount_error, Error};

/// A value expected to be numeric, as it arrived from the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
    /// Any other JSON value, never a valid amount.
    Other(Value),
}

impl Amount {
    /// Interprets the amount as a finite number.
    pub fn value(&self) -> Result<f64, Error> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| invalid_amount_error(format!("not a number: {:?}", text)))?,
            Self::Other(other) => {
                return Err(invalid_amount_error(format!("not a number: {}", other)))
            }
        };

        if !value.is_finite() {
            return Err(invalid_amount_error(format!("not a finite number: {}", value)));
        }

        Ok(value)
    }

    /// Like `value`, but also rejects negative amounts.
    pub fn non_negative(&self, name: &str) -> Result<f64, Error> {
        let value = self.value()?;

        if value < 0.0 {
            return Err(invalid_amount_error(format!(
                "{} must not be negative, got {}",
                name, value
            )));
        }

        Ok(value)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn numbers_and_numeric_text() {
        assert_eq!(Amount::from(2.5).value().unwrap(), 2.5);
        assert_eq!(Amount::from(3).value().unwrap(), 3.0);
        assert_eq!(Amount::from(" 0.2 ").value().unwrap(), 0.2);
        assert_eq!(Amount::from("-4").value().unwrap(), -4.0);
    }

    #[test]
    fn rejects_non_numbers() {
        for amount in [Amount::from("test"), Amount::from(""), Amount::from("NaN")] {
            let err = amount.value().unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidAmount);
        }

        let err = Amount::from(f64::INFINITY).value().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidAmount);
    }

    #[test]
    fn rejects_negative_when_asked() {
        let err = Amount::from(-1).non_negative("distance").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidAmount);
        assert!(err.message.contains("distance"));

        assert_eq!(Amount::from(0).non_negative("distance").unwrap(), 0.0);
    }

    #[test]
    fn deserializes_from_json_numbers_and_strings() {
        let amounts: Vec<Amount> = serde_json::from_str(r#"[10, 0.5, "1.2"]"#).unwrap();

        assert_eq!(
            amounts,
            vec![
                Amount::Number(10.0),
                Amount::Number(0.5),
                Amount::Text("1.2".into())
            ]
        );
    }

    #[test]
    fn other_json_values_are_invalid_amounts() {
        let amounts: Vec<Amount> = serde_json::from_str(r#"[true, null, [1], {"miles": 10}]"#).unwrap();

        assert_eq!(amounts[0], Amount::Other(Value::Bool(true)));
        assert_eq!(amounts[1], Amount::Other(Value::Null));

        for amount in amounts {
            let err = amount.value().unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidAmount);
        }
    }
}
