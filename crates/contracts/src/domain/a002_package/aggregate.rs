use serde::{Deserialize, Serialize};

use crate::domain::a001_warehouse::{format_capacity, WarehouseId};
use crate::domain::common::{lenient_f64, null_as_default, AggregateId};
use crate::enums::package_status::{normalize_status, StatusDisplay};
use crate::enums::tea_type::{resolve_tea_type, TeaCode, TeaTypeDisplay};
use crate::shared::timestamp;

// ============================================================================
// ID Type
// ============================================================================

/// Unique package identifier (`packageId` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub i64);

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Warehouse association
// ============================================================================

/// Link from a package to its warehouse.
///
/// Depending on the endpoint the API sends either the numeric id or the
/// warehouse name; numeric strings and integral floats are treated as ids.
/// Any other JSON shape is kept as-is and resolves to no warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WarehouseRef {
    Id(WarehouseId),
    Name(String),
    Other(serde_json::Value),
}

impl WarehouseRef {
    /// Id carried by the reference itself, without consulting the warehouse list
    pub fn as_id(&self) -> Option<WarehouseId> {
        match self {
            WarehouseRef::Id(id) => Some(*id),
            WarehouseRef::Name(name) => WarehouseId::from_string(name).ok(),
            WarehouseRef::Other(value) => value
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| WarehouseId(f as i64)),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A quantity of a tea product tracked through its lifecycle status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(rename = "packageId")]
    pub id: PackageId,

    /// Owner full name
    #[serde(rename = "fullname", default, deserialize_with = "null_as_default")]
    pub full_name: String,

    /// Tea type name already resolved by the server
    #[serde(rename = "typeteaname", default)]
    pub tea_type_name: Option<String>,

    /// Tea type code: small integer or opaque string code
    #[serde(rename = "teacode", default)]
    pub tea_code: Option<TeaCode>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub capacity: Option<f64>,

    #[serde(default)]
    pub unit: Option<String>,

    /// Raw lifecycle status, see `PackageStatus`
    #[serde(default)]
    pub status: Option<String>,

    #[serde(rename = "createdtime", default)]
    pub created_time: Option<String>,

    #[serde(rename = "weightime", default)]
    pub weigh_time: Option<String>,

    #[serde(default)]
    pub warehouse: Option<WarehouseRef>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub temperature: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub humidity: Option<f64>,
}

impl Package {
    pub fn status_display(&self) -> StatusDisplay {
        normalize_status(self.status.as_deref())
    }

    pub fn tea_type_display(&self) -> TeaTypeDisplay {
        resolve_tea_type(self.tea_type_name.as_deref(), self.tea_code.as_ref())
    }

    pub fn created_at(&self) -> Option<chrono::NaiveDateTime> {
        self.created_time.as_deref().and_then(timestamp::parse_timestamp)
    }

    pub fn weighed_at(&self) -> Option<chrono::NaiveDateTime> {
        self.weigh_time.as_deref().and_then(timestamp::parse_timestamp)
    }

    /// Weigh timestamp is present (blank strings count as absent)
    pub fn has_weigh_event(&self) -> bool {
        self.weigh_time
            .as_deref()
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn full_name_display(&self) -> &str {
        if self.full_name.trim().is_empty() {
            "N/A"
        } else {
            &self.full_name
        }
    }

    /// "12.5 kg", or "N/A" when the capacity is missing
    pub fn quantity_display(&self) -> String {
        match self.capacity {
            Some(capacity) => {
                let unit = self.unit.as_deref().unwrap_or("").trim();
                if unit.is_empty() {
                    format_capacity(capacity)
                } else {
                    format!("{} {}", format_capacity(capacity), unit)
                }
            }
            None => "N/A".to_string(),
        }
    }

    pub fn temperature_display(&self) -> Option<String> {
        self.temperature.map(|t| format!("{}°C", t))
    }

    pub fn humidity_display(&self) -> Option<String> {
        self.humidity.map(|h| format!("{}%", h))
    }

    pub fn created_date_display(&self) -> String {
        timestamp::format_date_opt(self.created_time.as_deref())
    }

    pub fn weighed_datetime_display(&self) -> String {
        timestamp::format_datetime_opt(self.weigh_time.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let p: Package = serde_json::from_value(json!({
            "packageId": 11,
            "fullname": "Nguyen Van A",
            "teacode": 1,
            "capacity": 12.5,
            "unit": "kg",
            "status": "Weighed",
            "createdtime": "2024-01-15T08:30:00Z",
            "weightime": "2024-01-16T09:00:00Z",
            "warehouse": 3,
            "temperature": 24.5,
            "humidity": 61
        }))
        .unwrap();

        assert_eq!(p.id, PackageId(11));
        assert_eq!(p.tea_code, Some(TeaCode::Number(1)));
        assert_eq!(p.warehouse, Some(WarehouseRef::Id(WarehouseId(3))));
        assert_eq!(p.quantity_display(), "12.5 kg");
        assert_eq!(p.temperature_display().as_deref(), Some("24.5°C"));
        assert_eq!(p.humidity_display().as_deref(), Some("61%"));
        assert_eq!(p.created_date_display(), "15/01/2024");
        assert!(p.has_weigh_event());
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let p: Package = serde_json::from_value(json!({
            "packageId": 12,
            "fullname": null,
            "typeteaname": "Oolong",
            "teacode": "absf009",
            "status": null,
            "warehouse": "Kho 1",
            "weightime": null
        }))
        .unwrap();

        assert_eq!(p.full_name_display(), "N/A");
        assert_eq!(p.tea_code, Some(TeaCode::Text("absf009".to_string())));
        assert_eq!(p.warehouse, Some(WarehouseRef::Name("Kho 1".to_string())));
        assert_eq!(p.quantity_display(), "N/A");
        assert_eq!(p.temperature_display(), None);
        assert_eq!(p.created_date_display(), "N/A");
        assert!(!p.has_weigh_event());
    }

    #[test]
    fn test_warehouse_ref_numeric_string_is_id() {
        assert_eq!(
            WarehouseRef::Name("42".to_string()).as_id(),
            Some(WarehouseId(42))
        );
        assert_eq!(WarehouseRef::Name("Kho 1".to_string()).as_id(), None);
    }

    #[test]
    fn test_unusual_teacode_does_not_break_decoding() {
        let p: Package = serde_json::from_value(json!({
            "packageId": 13,
            "teacode": 2.5
        }))
        .unwrap();
        assert!(matches!(p.tea_code, Some(TeaCode::Other(_))));
    }

    #[test]
    fn test_malformed_optional_numbers_are_dropped() {
        let p: Package = serde_json::from_value(json!({
            "packageId": 14,
            "capacity": "heavy",
            "temperature": { "c": 21 },
            "humidity": "55.5",
            "status": "Weighed"
        }))
        .unwrap();

        assert_eq!(p.capacity, None);
        assert_eq!(p.quantity_display(), "N/A");
        assert_eq!(p.temperature, None);
        assert_eq!(p.humidity_display().as_deref(), Some("55.5%"));
        assert_eq!(p.status_display().label, "Weighed");
    }

    #[test]
    fn test_float_warehouse_id_resolves() {
        let p: Package = serde_json::from_value(json!({
            "packageId": 15,
            "warehouse": 3.0
        }))
        .unwrap();
        assert_eq!(p.warehouse.as_ref().and_then(WarehouseRef::as_id), Some(WarehouseId(3)));
    }

    #[test]
    fn test_odd_warehouse_shape_does_not_break_decoding() {
        let p: Package = serde_json::from_value(json!({
            "packageId": 16,
            "warehouse": { "id": 3 }
        }))
        .unwrap();
        assert!(matches!(p.warehouse, Some(WarehouseRef::Other(_))));
        assert_eq!(p.warehouse.as_ref().and_then(WarehouseRef::as_id), None);

        assert_eq!(WarehouseRef::Other(json!(2.5)).as_id(), None);
        assert_eq!(WarehouseRef::Other(json!(true)).as_id(), None);
    }

    #[test]
    fn test_float_teacode_resolves_numeric_label() {
        let p: Package = serde_json::from_value(json!({
            "packageId": 17,
            "teacode": 1.0
        }))
        .unwrap();
        assert_eq!(p.tea_type_display().label, "Tea A");
    }
}
