use crate::shared::fetch_state::{FetchSlot, FetchState};
use contracts::domain::a001_warehouse::{Warehouse, WarehouseId};
use contracts::domain::a002_package::Package;
use contracts::domain::common::AggregateId;
use contracts::shared::package_filter::{
    filter_packages, warehouse_name_for, PackageFilter, WarehouseKey,
};
use contracts::shared::timestamp::parse_date;
use leptos::prelude::*;

/// Raw values of the filter form, as the inputs hold them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterForm {
    /// Warehouse id, or a name for associations that only carry one
    pub warehouse: String,
    pub tea_type: String,
    pub status: String,
    /// yyyy-mm-dd
    pub date_from: String,
    pub date_to: String,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl FilterForm {
    /// Criteria for `filter_packages`. Values that do not parse impose no constraint.
    pub fn to_filter(&self) -> PackageFilter {
        let warehouse = non_empty(&self.warehouse).map(|raw| {
            match WarehouseId::from_string(&raw) {
                Ok(id) => WarehouseKey::Id(id),
                Err(_) => WarehouseKey::Name(raw),
            }
        });

        PackageFilter {
            warehouse,
            tea_type: non_empty(&self.tea_type),
            status: non_empty(&self.status),
            date_from: parse_date(&self.date_from),
            date_to: parse_date(&self.date_to),
        }
    }
}

/// Form signals of the package list; each one is bound to an input
#[derive(Clone, Copy)]
pub struct PackageListState {
    pub warehouse: RwSignal<String>,
    pub tea_type: RwSignal<String>,
    pub status: RwSignal<String>,
    pub date_from: RwSignal<String>,
    pub date_to: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
}

impl PackageListState {
    /// Current form values (tracked)
    pub fn form(&self) -> FilterForm {
        FilterForm {
            warehouse: self.warehouse.get(),
            tea_type: self.tea_type.get(),
            status: self.status.get(),
            date_from: self.date_from.get(),
            date_to: self.date_to.get(),
        }
    }

    pub fn reset(&self) {
        self.warehouse.set(String::new());
        self.tea_type.set(String::new());
        self.status.set(String::new());
        self.date_from.set(String::new());
        self.date_to.set(String::new());
    }
}

// Create state within component scope so it is disposed with the page
pub fn create_state() -> PackageListState {
    PackageListState {
        warehouse: RwSignal::new(String::new()),
        tea_type: RwSignal::new(String::new()),
        status: RwSignal::new(String::new()),
        date_from: RwSignal::new(String::new()),
        date_to: RwSignal::new(String::new()),
        is_filter_expanded: RwSignal::new(true),
    }
}

/// A table row: the package with its resolved warehouse name
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRow {
    pub package: Package,
    pub warehouse_name: String,
}

/// Filtered rows, `None` until the packages are loaded.
///
/// Tracks the package slot, the warehouse list and the filter, so names
/// update when the warehouses arrive after the packages.
pub fn package_rows(
    packages: FetchSlot<(), Vec<Package>>,
    warehouses: Signal<Vec<Warehouse>>,
    filter: Signal<PackageFilter>,
) -> Memo<Option<Vec<PackageRow>>> {
    Memo::new(move |_| {
        packages.state.with(|state| match state {
            FetchState::Loaded(items) => Some(warehouses.with(|list| {
                filter.with(|f| {
                    filter_packages(items, list, f)
                        .into_iter()
                        .map(|package| PackageRow {
                            warehouse_name: warehouse_name_for(&package, list),
                            package,
                        })
                        .collect()
                })
            })),
            _ => None,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a002_package::{PackageId, WarehouseRef};
    use contracts::shared::package_filter::UNKNOWN_WAREHOUSE_LABEL;
    use leptos::reactive::owner::Owner;

    fn package(id: i64, warehouse: i64) -> Package {
        Package {
            id: PackageId(id),
            full_name: String::new(),
            tea_type_name: None,
            tea_code: None,
            capacity: None,
            unit: None,
            status: None,
            created_time: None,
            weigh_time: None,
            warehouse: Some(WarehouseRef::Id(WarehouseId(warehouse))),
            temperature: None,
            humidity: None,
        }
    }

    fn warehouse(id: i64, name: &str) -> Warehouse {
        Warehouse {
            id: WarehouseId(id),
            name: name.to_string(),
            address: String::new(),
            lat: None,
            lon: None,
            current_capacity: 0.0,
            total_capacity: 0.0,
        }
    }

    fn names(rows: Option<Vec<PackageRow>>) -> Vec<String> {
        rows.unwrap_or_default()
            .into_iter()
            .map(|r| r.warehouse_name)
            .collect()
    }

    #[test]
    fn test_rows_pick_up_warehouses_loaded_later() {
        let owner = Owner::new();
        owner.with(|| {
            let packages: FetchSlot<(), Vec<Package>> = FetchSlot::new();
            let warehouses = RwSignal::new(Vec::<Warehouse>::new());
            let filter = RwSignal::new(PackageFilter::default());
            let rows = package_rows(packages, warehouses.into(), filter.into());

            assert_eq!(rows.get_untracked(), None);

            let ticket = packages.begin(());
            packages.settle(&ticket, Ok(vec![package(1, 7), package(2, 8)]));
            assert_eq!(
                names(rows.get_untracked()),
                vec![UNKNOWN_WAREHOUSE_LABEL, UNKNOWN_WAREHOUSE_LABEL]
            );

            warehouses.set(vec![warehouse(7, "North"), warehouse(8, "South")]);
            assert_eq!(names(rows.get_untracked()), vec!["North", "South"]);

            filter.set(PackageFilter {
                warehouse: Some(WarehouseKey::Id(WarehouseId(8))),
                ..Default::default()
            });
            assert_eq!(names(rows.get_untracked()), vec!["South"]);
        });
    }

    #[test]
    fn test_empty_form_is_empty_filter() {
        let filter = FilterForm::default().to_filter();
        assert_eq!(filter, PackageFilter::default());
        assert!(filter.is_empty());
    }

    #[test]
    fn test_form_to_filter() {
        let form = FilterForm {
            warehouse: "5".to_string(),
            tea_type: "Thai tea".to_string(),
            status: "Weighed".to_string(),
            date_from: "2024-01-01".to_string(),
            date_to: "2024-01-31".to_string(),
        };
        let filter = form.to_filter();

        assert_eq!(filter.warehouse, Some(WarehouseKey::Id(WarehouseId(5))));
        assert_eq!(filter.tea_type.as_deref(), Some("Thai tea"));
        assert_eq!(filter.status.as_deref(), Some("Weighed"));
        assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.date_to, NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(filter.active_count(), 5);
    }

    #[test]
    fn test_non_numeric_warehouse_is_a_name() {
        let form = FilterForm {
            warehouse: "North Hub".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.to_filter().warehouse,
            Some(WarehouseKey::Name("North Hub".to_string()))
        );
    }

    #[test]
    fn test_bad_date_is_ignored() {
        let form = FilterForm {
            date_from: "not a date".to_string(),
            ..Default::default()
        };
        assert_eq!(form.to_filter().date_from, None);
    }
}
