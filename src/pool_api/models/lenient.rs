//! Field deserializers for loosely typed pool payloads.
//!
//! The pool sends `null` for unset values and occasionally encodes counts
//! and timestamps as floats (`2.0`). Both decode to the zero value or the
//! truncated integer instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// `null` decodes to `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Integer or float JSON number as `i64`; `null` decodes to 0.
pub fn number_as_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<Number>::deserialize(deserializer)?;
    Ok(number
        .and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)))
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "number_as_i64")]
        count: i64,
        #[serde(deserialize_with = "null_as_default")]
        rate: f64,
        #[serde(deserialize_with = "null_as_default")]
        name: String,
    }

    #[test]
    fn test_nulls_decode_to_zero_values() {
        let sample: Sample =
            serde_json::from_str(r#"{"count":null,"rate":null,"name":null}"#).unwrap();

        assert_eq!(sample.count, 0);
        assert_eq!(sample.rate, 0.0);
        assert_eq!(sample.name, "");
    }

    #[test]
    fn test_float_counts_are_truncated() {
        let sample: Sample = serde_json::from_str(r#"{"count":2.0}"#).unwrap();
        assert_eq!(sample.count, 2);

        let sample: Sample = serde_json::from_str(r#"{"count":1700000000.7}"#).unwrap();
        assert_eq!(sample.count, 1_700_000_000);
    }

    #[test]
    fn test_non_numbers_still_fail() {
        assert!(serde_json::from_str::<Sample>(r#"{"count":"two"}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"rate":"fast"}"#).is_err());
    }
}
