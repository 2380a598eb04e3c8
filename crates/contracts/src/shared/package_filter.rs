//! Client-side filtering of the package list.
//!
//! Everything here is a pure function of the fetched lists and the filter
//! criteria; the UI recomputes it on every change.

use chrono::NaiveDate;
use std::cmp::Reverse;
use std::collections::HashSet;

use crate::domain::a001_warehouse::{Warehouse, WarehouseId};
use crate::domain::a002_package::{Package, WarehouseRef};
use crate::shared::timestamp::{end_of_day, start_of_day};

/// Label used when a package's warehouse cannot be resolved
pub const UNKNOWN_WAREHOUSE_LABEL: &str = "Unknown";

/// Warehouse criterion. The package list page selects by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarehouseKey {
    Id(WarehouseId),
    Name(String),
}

/// Filter criteria of the package list. Empty fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageFilter {
    pub warehouse: Option<WarehouseKey>,
    /// Resolved tea-type label, compared case-insensitively
    pub tea_type: Option<String>,
    /// Raw status, compared exactly
    pub status: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl PackageFilter {
    /// Number of criteria that currently constrain the list
    pub fn active_count(&self) -> usize {
        [
            self.warehouse.is_some(),
            non_blank(&self.tea_type).is_some(),
            non_blank(&self.status).is_some(),
            self.date_from.is_some(),
            self.date_to.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn matches(&self, package: &Package, warehouses: &[Warehouse]) -> bool {
        if let Some(key) = &self.warehouse {
            if !matches_warehouse(package, key, warehouses) {
                return false;
            }
        }

        if let Some(tea_type) = non_blank(&self.tea_type) {
            let label = package.tea_type_display().label;
            if label.to_lowercase() != tea_type.trim().to_lowercase() {
                return false;
            }
        }

        if let Some(status) = non_blank(&self.status) {
            if package.status.as_deref() != Some(status) {
                return false;
            }
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            let Some(created) = package.created_at() else {
                return false;
            };
            if let Some(from) = self.date_from {
                if created < start_of_day(from) {
                    return false;
                }
            }
            if let Some(to) = self.date_to {
                if created > end_of_day(to) {
                    return false;
                }
            }
        }

        true
    }
}

/// Resolve a package's warehouse reference to an id, consulting the list for names
fn resolve_ref(reference: &WarehouseRef, warehouses: &[Warehouse]) -> Option<WarehouseId> {
    reference.as_id().or_else(|| match reference {
        WarehouseRef::Name(name) => warehouses.iter().find(|w| &w.name == name).map(|w| w.id),
        WarehouseRef::Id(_) | WarehouseRef::Other(_) => None,
    })
}

fn resolve_key(key: &WarehouseKey, warehouses: &[Warehouse]) -> Option<WarehouseId> {
    match key {
        WarehouseKey::Id(id) => Some(*id),
        WarehouseKey::Name(name) => warehouses.iter().find(|w| &w.name == name).map(|w| w.id),
    }
}

fn matches_warehouse(package: &Package, key: &WarehouseKey, warehouses: &[Warehouse]) -> bool {
    let Some(reference) = &package.warehouse else {
        return false;
    };

    match (resolve_ref(reference, warehouses), resolve_key(key, warehouses)) {
        (Some(a), Some(b)) => a == b,
        _ => match (reference, key) {
            (WarehouseRef::Name(a), WarehouseKey::Name(b)) => a == b,
            _ => false,
        },
    }
}

/// Packages matching `filter`, in input order
pub fn filter_packages(
    packages: &[Package],
    warehouses: &[Warehouse],
    filter: &PackageFilter,
) -> Vec<Package> {
    packages
        .iter()
        .filter(|p| filter.matches(p, warehouses))
        .cloned()
        .collect()
}

fn distinct_in_order(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}

/// Tea-type labels for the filter dropdown, first-seen order.
/// Pass the unfiltered list so options do not disappear while filtering.
pub fn distinct_tea_types(packages: &[Package]) -> Vec<String> {
    distinct_in_order(packages.iter().map(|p| p.tea_type_display().label))
}

/// Raw statuses for the filter dropdown, first-seen order, blanks skipped
pub fn distinct_statuses(packages: &[Package]) -> Vec<String> {
    distinct_in_order(
        packages
            .iter()
            .filter_map(|p| p.status.clone())
            .filter(|s| !s.trim().is_empty()),
    )
}

/// Weigh events: packages with a weigh timestamp, newest first.
/// Timestamps that cannot be parsed sort last.
pub fn weigh_history(packages: &[Package]) -> Vec<Package> {
    let mut events: Vec<Package> = packages
        .iter()
        .filter(|p| p.has_weigh_event())
        .cloned()
        .collect();
    events.sort_by_key(|p| Reverse(p.weighed_at()));
    events
}

/// Warehouse name for the package table
pub fn warehouse_name_for(package: &Package, warehouses: &[Warehouse]) -> String {
    let Some(reference) = &package.warehouse else {
        return UNKNOWN_WAREHOUSE_LABEL.to_string();
    };

    match resolve_ref(reference, warehouses)
        .and_then(|id| warehouses.iter().find(|w| w.id == id))
    {
        Some(w) => w.name.clone(),
        None => match reference {
            WarehouseRef::Name(name) if reference.as_id().is_none() => name.clone(),
            _ => UNKNOWN_WAREHOUSE_LABEL.to_string(),
        },
    }
}
