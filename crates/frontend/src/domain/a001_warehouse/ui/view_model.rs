//! ViewModel for the warehouse page

use crate::domain::a001_warehouse::api::{fetch_warehouse_packages, fetch_warehouses};
use crate::shared::fetch_state::FetchSlot;
use contracts::domain::a001_warehouse::{Warehouse, WarehouseId};
use contracts::domain::a002_package::Package;
use leptos::prelude::*;

/// Two independent fetches: the warehouse list, and the packages of the
/// selected warehouse keyed by its id.
#[derive(Clone, Copy)]
pub struct WarehousesVm {
    api_base: StoredValue<String>,
    pub warehouses: FetchSlot<(), Vec<Warehouse>>,
    pub packages: FetchSlot<WarehouseId, Vec<Package>>,
}

impl WarehousesVm {
    pub fn new(api_base: String) -> Self {
        Self {
            api_base: StoredValue::new(api_base),
            warehouses: FetchSlot::new(),
            packages: FetchSlot::new(),
        }
    }

    pub fn load_warehouses(&self) {
        let base = self.api_base.get_value();
        self.warehouses
            .load((), move |_| async move { fetch_warehouses(&base).await });
    }

    pub fn load_packages(&self, id: WarehouseId) {
        let base = self.api_base.get_value();
        self.packages
            .load(id, move |id| async move { fetch_warehouse_packages(&base, id).await });
    }

    /// Fetch packages for `id` unless they were already requested for it.
    /// Tab changes keep the id, so they do not refetch.
    pub fn ensure_packages(&self, id: WarehouseId) {
        if self.packages.key_untracked() != Some(id) {
            self.load_packages(id);
        }
    }

    /// Re-issue the list fetch and, if a warehouse is selected, its packages
    pub fn reload(&self, selected: Option<WarehouseId>) {
        self.load_warehouses();
        match selected {
            Some(id) => self.load_packages(id),
            None => self.packages.clear(),
        }
    }
}
