use serde::{Deserialize, Serialize};

use super::badge_color::BadgeColor;

/// Tea type code as it arrives in the `teacode` field.
///
/// Older endpoints send small integers, newer ones opaque string codes.
/// Anything else is kept as raw JSON so one odd record cannot break a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeaCode {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

/// Label shown when a package carries no tea type at all
pub const UNKNOWN_TEA_TYPE_LABEL: &str = "Unknown";

/// Integer code table
const NUMERIC_TEA_TYPES: &[(i64, &str, BadgeColor)] = &[
    (1, "Tea A", BadgeColor::Blue),
    (2, "Tea B", BadgeColor::Yellow),
];

/// String code table, keys are lowercase
const STRING_TEA_TYPES: &[(&str, &str, BadgeColor)] = &[
    ("absf009", "Thai tea", BadgeColor::Blue),
    ("absf008", "Chinese tea", BadgeColor::Yellow),
];

/// Label and color of a tea-type badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeaTypeDisplay {
    pub label: String,
    pub color: BadgeColor,
}

/// Which lookup path a tea type goes through
#[derive(Debug, Clone, PartialEq, Eq)]
enum TeaKey<'a> {
    Name(&'a str),
    Numeric(i64),
    Opaque(String),
    Missing,
}

fn classify<'a>(name: Option<&'a str>, code: Option<&TeaCode>) -> TeaKey<'a> {
    if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
        return TeaKey::Name(name);
    }

    match code {
        None => TeaKey::Missing,
        Some(TeaCode::Number(n)) => TeaKey::Numeric(*n),
        Some(TeaCode::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                TeaKey::Missing
            } else if let Ok(n) = s.parse::<i64>() {
                TeaKey::Numeric(n)
            } else {
                TeaKey::Opaque(s.to_lowercase())
            }
        }
        Some(TeaCode::Other(serde_json::Value::Null)) => TeaKey::Missing,
        Some(TeaCode::Other(v)) => match integral_number(v) {
            Some(n) => TeaKey::Numeric(n),
            None => TeaKey::Opaque(v.to_string().to_lowercase()),
        },
    }
}

/// `1.0` and `1` name the same code
fn integral_number(v: &serde_json::Value) -> Option<i64> {
    let f = v.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Display name of a tea type
pub fn tea_type_label(name: Option<&str>, code: Option<&TeaCode>) -> String {
    match classify(name, code) {
        TeaKey::Name(name) => name.to_string(),
        TeaKey::Numeric(n) => NUMERIC_TEA_TYPES
            .iter()
            .find(|(code, _, _)| *code == n)
            .map(|(_, label, _)| label.to_string())
            .unwrap_or_else(|| format!("Other ({})", n)),
        TeaKey::Opaque(code) => STRING_TEA_TYPES
            .iter()
            .find(|(key, _, _)| *key == code)
            .map(|(_, label, _)| label.to_string())
            .unwrap_or_else(|| format!("Other ({})", code)),
        TeaKey::Missing => UNKNOWN_TEA_TYPE_LABEL.to_string(),
    }
}

/// Badge color of a tea type, resolved on its own so that it never depends on
/// whether the label lookup succeeded
pub fn tea_type_color(name: Option<&str>, code: Option<&TeaCode>) -> BadgeColor {
    match classify(name, code) {
        TeaKey::Name(_) => BadgeColor::Gray,
        TeaKey::Numeric(n) => NUMERIC_TEA_TYPES
            .iter()
            .find(|(code, _, _)| *code == n)
            .map(|(_, _, color)| *color)
            .unwrap_or(BadgeColor::Green),
        TeaKey::Opaque(code) => STRING_TEA_TYPES
            .iter()
            .find(|(key, _, _)| *key == code)
            .map(|(_, _, color)| *color)
            .unwrap_or(BadgeColor::Red),
        TeaKey::Missing => BadgeColor::Gray,
    }
}

pub fn resolve_tea_type(name: Option<&str>, code: Option<&TeaCode>) -> TeaTypeDisplay {
    TeaTypeDisplay {
        label: tea_type_label(name, code),
        color: tea_type_color(name, code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> TeaCode {
        TeaCode::Text(s.to_string())
    }

    #[test]
    fn test_numeric_codes() {
        assert_eq!(
            resolve_tea_type(None, Some(&TeaCode::Number(1))),
            TeaTypeDisplay { label: "Tea A".to_string(), color: BadgeColor::Blue }
        );
        assert_eq!(
            resolve_tea_type(None, Some(&TeaCode::Number(2))),
            TeaTypeDisplay { label: "Tea B".to_string(), color: BadgeColor::Yellow }
        );
    }

    #[test]
    fn test_unknown_numeric_code_is_interpolated() {
        for code in [0, 3, 17, -4, 1000] {
            let d = resolve_tea_type(None, Some(&TeaCode::Number(code)));
            assert_eq!(d.label, format!("Other ({})", code));
            assert_eq!(d.color, BadgeColor::Green);
        }
    }

    #[test]
    fn test_numeric_string_uses_numeric_table() {
        assert_eq!(tea_type_label(None, Some(&text("2"))), "Tea B");
        assert_eq!(tea_type_color(None, Some(&text(" 1 "))), BadgeColor::Blue);
    }

    #[test]
    fn test_string_codes() {
        assert_eq!(tea_type_label(None, Some(&text("absf009"))), "Thai tea");
        assert_eq!(tea_type_label(None, Some(&text(" ABSF008 "))), "Chinese tea");
        assert_eq!(tea_type_color(None, Some(&text("absf008"))), BadgeColor::Yellow);

        let d = resolve_tea_type(None, Some(&text("XYZ1")));
        assert_eq!(d.label, "Other (xyz1)");
        assert_eq!(d.color, BadgeColor::Red);
    }

    #[test]
    fn test_resolved_name_wins() {
        let d = resolve_tea_type(Some("Oolong"), Some(&TeaCode::Number(1)));
        assert_eq!(d.label, "Oolong");
        assert_eq!(d.color, BadgeColor::Gray);
    }

    #[test]
    fn test_blank_name_falls_back_to_code() {
        assert_eq!(tea_type_label(Some("  "), Some(&TeaCode::Number(1))), "Tea A");
    }

    #[test]
    fn test_missing() {
        assert_eq!(tea_type_label(None, None), UNKNOWN_TEA_TYPE_LABEL);
        assert_eq!(tea_type_label(None, Some(&text(""))), UNKNOWN_TEA_TYPE_LABEL);
        assert_eq!(
            tea_type_label(None, Some(&TeaCode::Other(serde_json::Value::Null))),
            UNKNOWN_TEA_TYPE_LABEL
        );
        assert_eq!(tea_type_color(None, None), BadgeColor::Gray);
    }

    #[test]
    fn test_integral_float_code_is_numeric() {
        let code: TeaCode = serde_json::from_value(serde_json::json!(1.0)).unwrap();
        assert_eq!(
            resolve_tea_type(None, Some(&code)),
            TeaTypeDisplay { label: "Tea A".to_string(), color: BadgeColor::Blue }
        );

        let code = TeaCode::Other(serde_json::json!(7.0));
        assert_eq!(tea_type_label(None, Some(&code)), "Other (7)");
        assert_eq!(tea_type_color(None, Some(&code)), BadgeColor::Green);
    }

    #[test]
    fn test_other_json_values() {
        let code = TeaCode::Other(serde_json::json!(2.5));
        assert_eq!(tea_type_label(None, Some(&code)), "Other (2.5)");
        assert_eq!(tea_type_color(None, Some(&code)), BadgeColor::Red);
    }
}
