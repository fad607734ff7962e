// ============================================================================
// Money JSON
// Decoding of {"currency":"EUR","unit":"euro","value":"12.34"} documents
// ============================================================================

use super::config::{DecodePolicy, MoneyConfig};
use super::currency::{Currency, Unit};
use super::errors::{MoneyError, MoneyResult};
use super::tagged::Money;
use crate::numeric::parse_decimal_str;
use serde::Deserialize;
use serde_json::Value;

/// Wire shape before any field is validated.
///
/// Fields stay untyped JSON so a wrongly typed field reaches the decode
/// policy instead of failing the whole document.
#[derive(Debug, Default, Deserialize)]
pub struct RawMoney {
    currency: Option<Value>,
    unit: Option<Value>,
    value: Option<Value>,
}

/// A field that must be a JSON string when present.
fn text_field<'a>(name: &str, field: &'a Option<Value>) -> MoneyResult<Option<&'a str>> {
    match field {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(MoneyError::Decode(format!(
            "{} must be a string, got {}",
            name, other
        ))),
    }
}

impl TryFrom<RawMoney> for Money {
    type Error = MoneyError;

    fn try_from(raw: RawMoney) -> MoneyResult<Self> {
        let currency: Currency = text_field("currency", &raw.currency)?
            .ok_or_else(|| MoneyError::Decode("missing currency".to_string()))?
            .parse()?;
        let unit = match text_field("unit", &raw.unit)? {
            Some(name) => name.parse()?,
            None => currency.default_unit(),
        };
        let value = text_field("value", &raw.value)?
            .ok_or_else(|| MoneyError::Decode("missing value".to_string()))?;
        Money::new(parse_decimal_str(value)?, currency, unit)
    }
}

fn decode_lenient(raw: RawMoney, config: &MoneyConfig) -> Money {
    let currency = match raw.currency.as_ref().and_then(Value::as_str).map(str::parse::<Currency>) {
        Some(Ok(currency)) => currency,
        _ => {
            tracing::warn!(currency = ?raw.currency, "undecodable currency, using zero money");
            return config.zero();
        },
    };

    let amount = match raw.value.as_ref().and_then(Value::as_str).map(parse_decimal_str) {
        Some(Ok(amount)) => amount,
        _ => {
            tracing::warn!(value = ?raw.value, "undecodable value, using zero money");
            return config.zero();
        },
    };

    let unit = match raw.unit.as_ref().map(|unit| unit.as_str().map(str::parse::<Unit>)) {
        None => config.unit_for(currency),
        Some(Some(Ok(unit))) if unit.is_valid_for(currency) => unit,
        Some(_) => {
            tracing::warn!(unit = ?raw.unit, %currency, "undecodable unit, using default unit");
            config.unit_for(currency)
        },
    };

    Money::tagged(amount, currency, unit)
}

impl Money {
    /// Decode a JSON document following `config.decode_policy`.
    ///
    /// A JSON `null` is zero money under the lenient policy.
    ///
    /// # Errors
    /// Always `Decode` for syntactically invalid JSON. With the strict
    /// policy also `Decode` for `null` or a missing or non-string field,
    /// and the label or numeric error for an unparsable one.
    pub fn from_json(json: &str, config: &MoneyConfig) -> MoneyResult<Self> {
        let raw: Option<RawMoney> =
            serde_json::from_str(json).map_err(|e| MoneyError::Decode(e.to_string()))?;

        match (raw, config.decode_policy) {
            (None, DecodePolicy::Lenient) => Ok(config.zero()),
            (None, DecodePolicy::Strict) => Err(MoneyError::Decode("null money".to_string())),
            (Some(raw), DecodePolicy::Strict) => Money::try_from(raw),
            (Some(raw), DecodePolicy::Lenient) => Ok(decode_lenient(raw, config)),
        }
    }

    /// # Errors
    /// Returns `Encode` if serialization fails.
    pub fn to_json(&self) -> MoneyResult<String> {
        serde_json::to_string(self).map_err(|e| MoneyError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{FixedDecimal, NumericError};

    #[test]
    fn test_marshal_json() {
        let m = Money::euro(5_292_354_859, 4);
        assert_eq!(
            m.to_json().unwrap(),
            r#"{"currency":"EUR","unit":"euro","value":"529235.4859"}"#
        );
    }

    #[test]
    fn test_unmarshal_json() {
        let j = r#"{"currency":"EUR","unit":"euro","value":"529235.4859"}"#;
        let m: Money = serde_json::from_str(j).unwrap();
        assert!(m.exact_eq(&Money::euro(5_292_354_859, 4)));

        let lenient = Money::from_json(j, &MoneyConfig::default()).unwrap();
        assert_eq!(lenient, m);
    }

    #[test]
    fn test_null_unmarshal_json() {
        let m = Money::from_json("null", &MoneyConfig::default()).unwrap();
        assert!(m.exact_eq(&Money::zero_euro()));

        let strict = Money::from_json("null", &MoneyConfig::strict(Currency::Eur));
        assert!(matches!(strict, Err(MoneyError::Decode(_))));
    }

    #[test]
    fn test_bad_data_lenient() {
        let config = MoneyConfig::default();

        let bad_value = r#"{"currency":"EUR","unit":"euro","value":"not a number"}"#;
        assert!(Money::from_json(bad_value, &config)
            .unwrap()
            .exact_eq(&config.zero()));

        let bad_currency = r#"{"currency":"i am not ISO4217 compliant","unit":"cent","value":"573.04"}"#;
        assert!(Money::from_json(bad_currency, &config)
            .unwrap()
            .exact_eq(&config.zero()));

        let bad_unit = r#"{"currency":"USD","unit":"not a unit","value":"573.04"}"#;
        let m = Money::from_json(bad_unit, &config).unwrap();
        assert!(m.exact_eq(&Money::us_dollar(57_304, 2)));
    }

    #[test]
    fn test_wrongly_typed_fields_lenient() {
        let config = MoneyConfig::default();

        let numeric_value = r#"{"currency":"EUR","unit":"euro","value":12.5}"#;
        assert!(Money::from_json(numeric_value, &config)
            .unwrap()
            .exact_eq(&config.zero()));

        let numeric_currency = r#"{"currency":978,"unit":"euro","value":"12.5"}"#;
        assert!(Money::from_json(numeric_currency, &config)
            .unwrap()
            .exact_eq(&config.zero()));

        let object_unit = r#"{"currency":"USD","unit":{"name":"dollar"},"value":"12.5"}"#;
        let m = Money::from_json(object_unit, &config).unwrap();
        assert!(m.exact_eq(&Money::us_dollar(125, 1)));
    }

    #[test]
    fn test_wrongly_typed_fields_strict() {
        let config = MoneyConfig::strict(Currency::Eur);

        let numeric_value = r#"{"currency":"EUR","unit":"euro","value":12.5}"#;
        assert_eq!(
            Money::from_json(numeric_value, &config),
            Err(MoneyError::Decode("value must be a string, got 12.5".to_string()))
        );

        let numeric_currency = r#"{"currency":978,"value":"12.5"}"#;
        assert!(matches!(
            Money::from_json(numeric_currency, &config),
            Err(MoneyError::Decode(_))
        ));
        assert!(serde_json::from_str::<Money>(numeric_currency).is_err());
    }

    #[test]
    fn test_bad_data_strict() {
        let config = MoneyConfig::strict(Currency::Eur);

        let bad_value = r#"{"currency":"EUR","unit":"euro","value":"not a number"}"#;
        assert_eq!(
            Money::from_json(bad_value, &config),
            Err(MoneyError::Numeric(NumericError::InvalidInput))
        );

        let bad_unit = r#"{"currency":"USD","unit":"not a unit","value":"573.04"}"#;
        assert_eq!(
            Money::from_json(bad_unit, &config),
            Err(MoneyError::UnknownUnit("not a unit".to_string()))
        );

        let wrong_unit = r#"{"currency":"USD","unit":"euro","value":"1"}"#;
        assert!(serde_json::from_str::<Money>(wrong_unit).is_err());
    }

    #[test]
    fn test_incomplete_unmarshal_json() {
        let no_unit = r#"{"currency":"EUR","value":"68493.01"}"#;
        let expected = Money::euro(6_849_301, 2);

        let strict = Money::from_json(no_unit, &MoneyConfig::strict(Currency::Usd)).unwrap();
        assert!(strict.exact_eq(&expected));

        let lenient = Money::from_json(no_unit, &MoneyConfig::default()).unwrap();
        assert!(lenient.exact_eq(&expected));
    }

    #[test]
    fn test_invalid_json_syntax() {
        let result = Money::from_json("{not json", &MoneyConfig::default());
        assert!(matches!(result, Err(MoneyError::Decode(_))));
    }

    #[test]
    fn test_value_rounded_to_max_precision() {
        let j = r#"{"currency":"EUR","value":"0.123456789015"}"#;
        let m = Money::from_json(j, &MoneyConfig::default()).unwrap();
        assert_eq!(m.amount(), FixedDecimal::new(123_456_789, 9));
    }
}
