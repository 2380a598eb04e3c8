use serde::{Deserialize, Serialize};

use super::badge_color::BadgeColor;

/// Package lifecycle statuses known to the dashboard.
///
/// The raw strings come from the API verbatim and are matched exactly,
/// including case and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageStatus {
    NotWeighed,
    Weighed,
    Scanned,
    WaitDelivery,
}

/// Label shown when the status is missing
pub const UNKNOWN_STATUS_LABEL: &str = "Unknown";

impl PackageStatus {
    /// Raw value as sent by the API
    pub fn raw(&self) -> &'static str {
        match self {
            PackageStatus::NotWeighed => "Weighn't yet",
            PackageStatus::Weighed => "Weighed",
            PackageStatus::Scanned => "Scanned",
            PackageStatus::WaitDelivery => "Wait Delivery",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PackageStatus::NotWeighed => "Not weighed yet",
            PackageStatus::Weighed => "Weighed",
            PackageStatus::Scanned => "QR scanned",
            PackageStatus::WaitDelivery => "Awaiting delivery",
        }
    }

    pub fn color(&self) -> BadgeColor {
        match self {
            PackageStatus::NotWeighed => BadgeColor::Red,
            PackageStatus::Weighed => BadgeColor::Yellow,
            PackageStatus::Scanned => BadgeColor::Purple,
            PackageStatus::WaitDelivery => BadgeColor::Blue,
        }
    }

    pub fn all() -> Vec<PackageStatus> {
        vec![
            PackageStatus::NotWeighed,
            PackageStatus::Weighed,
            PackageStatus::Scanned,
            PackageStatus::WaitDelivery,
        ]
    }

    /// Exact match against the raw API value
    pub fn from_raw(raw: &str) -> Option<Self> {
        Self::all().into_iter().find(|status| status.raw() == raw)
    }
}

/// Label and color of a status badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: String,
    pub color: BadgeColor,
}

/// Map a raw status to its badge.
///
/// Unknown strings are shown as-is with the neutral color; missing or blank
/// statuses become `UNKNOWN_STATUS_LABEL`.
pub fn normalize_status(raw: Option<&str>) -> StatusDisplay {
    match raw {
        None => unknown_status(),
        Some(s) if s.trim().is_empty() => unknown_status(),
        Some(s) => match PackageStatus::from_raw(s) {
            Some(status) => StatusDisplay {
                label: status.display_name().to_string(),
                color: status.color(),
            },
            None => StatusDisplay {
                label: s.to_string(),
                color: BadgeColor::Gray,
            },
        },
    }
}

fn unknown_status() -> StatusDisplay {
    StatusDisplay {
        label: UNKNOWN_STATUS_LABEL.to_string(),
        color: BadgeColor::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        let cases = [
            ("Weighn't yet", "Not weighed yet", BadgeColor::Red),
            ("Weighed", "Weighed", BadgeColor::Yellow),
            ("Scanned", "QR scanned", BadgeColor::Purple),
            ("Wait Delivery", "Awaiting delivery", BadgeColor::Blue),
        ];
        for (raw, label, color) in cases {
            let d = normalize_status(Some(raw));
            assert_eq!(d.label, label, "label for {raw}");
            assert_eq!(d.color, color, "color for {raw}");
        }
    }

    #[test]
    fn test_raw_values_roundtrip() {
        for status in PackageStatus::all() {
            assert_eq!(PackageStatus::from_raw(status.raw()), Some(status));
        }
    }

    #[test]
    fn test_match_is_case_and_punctuation_exact() {
        assert_eq!(PackageStatus::from_raw("weighed"), None);
        assert_eq!(PackageStatus::from_raw("Weighnt yet"), None);
        assert_eq!(PackageStatus::from_raw("Wait delivery"), None);

        let d = normalize_status(Some("weighed"));
        assert_eq!(d.label, "weighed");
        assert_eq!(d.color, BadgeColor::Gray);
    }

    #[test]
    fn test_missing_status() {
        assert_eq!(normalize_status(None).label, UNKNOWN_STATUS_LABEL);
        assert_eq!(normalize_status(Some("")).label, UNKNOWN_STATUS_LABEL);
        assert_eq!(normalize_status(Some("   ")).color, BadgeColor::Gray);
    }
}
