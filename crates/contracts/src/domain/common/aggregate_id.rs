use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for record identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the id to a string (URL parameters, table keys)
    fn as_string(&self) -> String;

    /// Parse the id from a string
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_roundtrip_through_string() {
        assert_eq!(i64::from_string(" 42 "), Ok(42));
        assert_eq!(42i64.as_string(), "42");
    }

    #[test]
    fn test_i64_rejects_garbage() {
        assert!(i64::from_string("abc").is_err());
        assert!(i64::from_string("").is_err());
    }
}
