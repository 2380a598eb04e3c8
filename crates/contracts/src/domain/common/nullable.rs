use serde::{Deserialize, Deserializer};

/// Deserialize a field that the API may send as `null`, falling back to `T::default()`.
///
/// Use together with `#[serde(default)]` so that a missing key is tolerated too.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional number that the API may send as a number, a numeric
/// string, `null`, or garbage. Anything that is not a finite number becomes `None`
/// so a single bad field does not reject the whole record.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrFloat {
        Float(f64),
        String(String),
        Other(serde::de::IgnoredAny),
    }

    let value = match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(StringOrFloat::Float(f)) => Some(f),
        Some(StringOrFloat::String(s)) => s.trim().parse::<f64>().ok(),
        Some(StringOrFloat::Other(_)) | None => None,
    };
    Ok(value.filter(|f| f.is_finite()))
}

/// Same as [`lenient_f64`] for required quantities, falling back to `0.0`
pub fn lenient_f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_f64(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Reading {
        #[serde(default, deserialize_with = "lenient_f64")]
        value: Option<f64>,
        #[serde(default, deserialize_with = "lenient_f64_or_zero")]
        total: f64,
    }

    fn read(v: serde_json::Value) -> Reading {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_lenient_f64_accepts_numbers_and_numeric_strings() {
        assert_eq!(read(json!({ "value": 21.5 })).value, Some(21.5));
        assert_eq!(read(json!({ "value": 3 })).value, Some(3.0));
        assert_eq!(read(json!({ "value": " 18.25 " })).value, Some(18.25));
    }

    #[test]
    fn test_lenient_f64_malformed_is_none() {
        assert_eq!(read(json!({ "value": "n/a" })).value, None);
        assert_eq!(read(json!({ "value": "NaN" })).value, None);
        assert_eq!(read(json!({ "value": true })).value, None);
        assert_eq!(read(json!({ "value": { "c": 20 } })).value, None);
        assert_eq!(read(json!({ "value": [1, 2] })).value, None);
        assert_eq!(read(json!({ "value": null })).value, None);
        assert_eq!(read(json!({})).value, None);
    }

    #[test]
    fn test_lenient_f64_or_zero() {
        assert_eq!(read(json!({ "total": "1500" })).total, 1500.0);
        assert_eq!(read(json!({ "total": "lots" })).total, 0.0);
        assert_eq!(read(json!({ "total": null })).total, 0.0);
    }
}
