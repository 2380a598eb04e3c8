use serde::{Deserialize, Serialize};

use crate::domain::a002_package::Package;
use crate::domain::common::{lenient_f64, lenient_f64_or_zero, null_as_default, AggregateId};

// ============================================================================
// ID Type
// ============================================================================

/// Unique warehouse identifier (`warehouseid` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(pub i64);

impl WarehouseId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for WarehouseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(WarehouseId::new)
    }
}

impl std::fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Geo point
// ============================================================================

/// Warehouse location. Only built when both coordinates are present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// "Lat: 10.762622, Lon: 106.660172"
    pub fn display(&self) -> String {
        format!("Lat: {:.6}, Lon: {:.6}", self.lat, self.lon)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Storage location with capacity and an optional geocoordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    #[serde(rename = "warehouseid")]
    pub id: WarehouseId,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub lon: Option<f64>,

    #[serde(rename = "currentcapacity", default, deserialize_with = "lenient_f64_or_zero")]
    pub current_capacity: f64,

    #[serde(rename = "totalcapacity", default, deserialize_with = "lenient_f64_or_zero")]
    pub total_capacity: f64,
}

impl Warehouse {
    /// Coordinate for the map, `None` unless both lat and lon are usable
    pub fn coordinate(&self) -> Option<GeoPoint> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(GeoPoint::new(lat, lon))
            }
            _ => None,
        }
    }

    /// Fill level as a percentage, unrounded. Zero total capacity counts as empty.
    pub fn fill_ratio_percent(&self) -> f64 {
        if self.total_capacity > 0.0 {
            self.current_capacity / self.total_capacity * 100.0
        } else {
            0.0
        }
    }

    /// Fill level rounded to a whole percent, as shown on the warehouse card
    pub fn fill_percent(&self) -> i64 {
        self.fill_ratio_percent().round() as i64
    }

    /// Width of the progress bar, clamped to `0..=100`
    pub fn fill_bar_width(&self) -> f64 {
        self.fill_ratio_percent().clamp(0.0, 100.0)
    }

    pub fn free_capacity(&self) -> f64 {
        self.total_capacity - self.current_capacity
    }

    /// Address or a placeholder when the API sent nothing
    pub fn address_display(&self) -> &str {
        if self.address.trim().is_empty() {
            "Not provided"
        } else {
            &self.address
        }
    }
}

/// Response of `GET /api/warehouses/{id}/packages`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarehousePackagesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub packages: Vec<Package>,
}

/// Format a capacity figure without a trailing `.0` for whole numbers
pub fn format_capacity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn warehouse(current: f64, total: f64) -> Warehouse {
        Warehouse {
            id: WarehouseId(1),
            name: "Central".to_string(),
            address: "1 Tea Road".to_string(),
            lat: None,
            lon: None,
            current_capacity: current,
            total_capacity: total,
        }
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let w: Warehouse = serde_json::from_value(json!({
            "warehouseid": 5,
            "name": "Kho Thai Nguyen",
            "address": "Thai Nguyen",
            "lat": 21.5928,
            "lon": 105.8442,
            "currentcapacity": 120,
            "totalcapacity": 500
        }))
        .unwrap();

        assert_eq!(w.id, WarehouseId(5));
        assert_eq!(w.current_capacity, 120.0);
        assert_eq!(w.total_capacity, 500.0);
        assert_eq!(w.coordinate(), Some(GeoPoint::new(21.5928, 105.8442)));
    }

    #[test]
    fn test_deserialize_nulls() {
        let w: Warehouse = serde_json::from_value(json!({
            "warehouseid": 7,
            "name": null,
            "address": null,
            "lat": null,
            "lon": 105.0,
            "totalcapacity": null
        }))
        .unwrap();

        assert_eq!(w.name, "");
        assert_eq!(w.address_display(), "Not provided");
        assert_eq!(w.coordinate(), None);
        assert_eq!(w.total_capacity, 0.0);
        assert_eq!(w.current_capacity, 0.0);
    }

    #[test]
    fn test_malformed_numbers_do_not_reject_record() {
        let w: Warehouse = serde_json::from_value(json!({
            "warehouseid": 8,
            "name": "Kho Da Lat",
            "lat": "11.9404",
            "lon": "unknown",
            "currentcapacity": "80",
            "totalcapacity": { "value": 200 }
        }))
        .unwrap();

        assert_eq!(w.lat, Some(11.9404));
        assert_eq!(w.lon, None);
        assert_eq!(w.coordinate(), None);
        assert_eq!(w.current_capacity, 80.0);
        assert_eq!(w.total_capacity, 0.0);
        assert_eq!(w.fill_percent(), 0);
    }

    #[test]
    fn test_zero_total_capacity_is_zero_percent() {
        let w = warehouse(0.0, 0.0);
        assert_eq!(w.fill_percent(), 0);
        assert_eq!(w.fill_bar_width(), 0.0);

        let overfull_without_total = warehouse(30.0, 0.0);
        assert_eq!(overfull_without_total.fill_percent(), 0);
    }

    #[test]
    fn test_fill_percent_rounds() {
        assert_eq!(warehouse(1.0, 3.0).fill_percent(), 33);
        assert_eq!(warehouse(2.0, 3.0).fill_percent(), 67);
        assert_eq!(warehouse(150.0, 100.0).fill_percent(), 150);
        assert_eq!(warehouse(150.0, 100.0).fill_bar_width(), 100.0);
        assert_eq!(warehouse(150.0, 100.0).free_capacity(), -50.0);
    }

    #[test]
    fn test_geo_point_display() {
        let p = GeoPoint::new(10.762622, 106.660172);
        assert_eq!(p.display(), "Lat: 10.762622, Lon: 106.660172");
    }

    #[test]
    fn test_packages_response_tolerates_missing_key() {
        let r: WarehousePackagesResponse = serde_json::from_value(json!({})).unwrap();
        assert!(r.packages.is_empty());
        let r: WarehousePackagesResponse =
            serde_json::from_value(json!({ "packages": null })).unwrap();
        assert!(r.packages.is_empty());
    }

    #[test]
    fn test_format_capacity() {
        assert_eq!(format_capacity(500.0), "500");
        assert_eq!(format_capacity(12.5), "12.5");
    }
}
