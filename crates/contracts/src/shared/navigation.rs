//! Warehouse page navigation state.
//!
//! The URL is the single source of truth: `/warehouses` shows the list,
//! `/warehouses?id=5&tab=history` shows warehouse 5 on its history tab.
//! Every transition returns a new view whose `href` is pushed to history.

use serde::{Deserialize, Serialize};

use crate::domain::a001_warehouse::{Warehouse, WarehouseId};
use crate::domain::common::AggregateId;

pub const PACKAGES_PATH: &str = "/packages";
pub const WAREHOUSES_PATH: &str = "/warehouses";
pub const MAP_PATH: &str = "/map";

/// Tabs of the warehouse detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WarehouseTab {
    #[default]
    Info,
    Packages,
    History,
}

impl WarehouseTab {
    /// Value of the `tab` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            WarehouseTab::Info => "info",
            WarehouseTab::Packages => "packages",
            WarehouseTab::History => "history",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "info" => Some(WarehouseTab::Info),
            "packages" => Some(WarehouseTab::Packages),
            "history" => Some(WarehouseTab::History),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WarehouseTab::Info => "Information",
            WarehouseTab::Packages => "Packages",
            WarehouseTab::History => "Weigh history",
        }
    }

    pub fn all() -> Vec<WarehouseTab> {
        vec![WarehouseTab::Info, WarehouseTab::Packages, WarehouseTab::History]
    }
}

/// Query parameters of the warehouse page, kept as strings so that bad input
/// degrades to the list view instead of failing to parse
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct WarehouseQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tab: Option<String>,
}

/// What the warehouse page shows, as encoded in the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarehouseView {
    #[default]
    List,
    Detail { id: WarehouseId, tab: WarehouseTab },
}

/// A view checked against the fetched warehouse list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedView<'a> {
    List,
    Detail { warehouse: &'a Warehouse, tab: WarehouseTab },
}

impl WarehouseView {
    /// Build the view from raw `id` / `tab` parameter values.
    /// A missing or non-integer `id` means the list; a missing or unknown `tab` means `info`.
    pub fn from_params(id: Option<&str>, tab: Option<&str>) -> Self {
        match id.and_then(|raw| WarehouseId::from_string(raw).ok()) {
            Some(id) => WarehouseView::Detail {
                id,
                tab: tab.and_then(WarehouseTab::from_param).unwrap_or_default(),
            },
            None => WarehouseView::List,
        }
    }

    /// Parse a query string, with or without the leading `?`
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        match serde_qs::from_str::<WarehouseQuery>(query) {
            Ok(q) => Self::from_params(q.id.as_deref(), q.tab.as_deref()),
            Err(_) => WarehouseView::List,
        }
    }

    /// Query string without the leading `?`; empty for the list view
    pub fn to_query(&self) -> String {
        let query = match self {
            WarehouseView::List => WarehouseQuery::default(),
            WarehouseView::Detail { id, tab } => WarehouseQuery {
                id: Some(id.as_string()),
                tab: Some(tab.as_param().to_string()),
            },
        };
        serde_qs::to_string(&query).unwrap_or_default()
    }

    /// Location to navigate to
    pub fn href(&self) -> String {
        let query = self.to_query();
        if query.is_empty() {
            WAREHOUSES_PATH.to_string()
        } else {
            format!("{}?{}", WAREHOUSES_PATH, query)
        }
    }

    /// list -> detail(info)
    pub fn select_warehouse(id: WarehouseId) -> Self {
        WarehouseView::Detail { id, tab: WarehouseTab::Info }
    }

    /// detail(a) -> detail(b); the list view has no tabs and stays as is
    pub fn change_tab(self, tab: WarehouseTab) -> Self {
        match self {
            WarehouseView::Detail { id, .. } => WarehouseView::Detail { id, tab },
            WarehouseView::List => WarehouseView::List,
        }
    }

    /// detail(*) -> list
    pub fn back_to_list(self) -> Self {
        WarehouseView::List
    }

    pub fn selected_id(&self) -> Option<WarehouseId> {
        match self {
            WarehouseView::Detail { id, .. } => Some(*id),
            WarehouseView::List => None,
        }
    }

    pub fn tab(&self) -> Option<WarehouseTab> {
        match self {
            WarehouseView::Detail { tab, .. } => Some(*tab),
            WarehouseView::List => None,
        }
    }

    /// Check the view against the fetched list. An id that is not in the list
    /// (deleted, mistyped, not loaded yet) falls back to the list view.
    pub fn resolve<'a>(&self, warehouses: &'a [Warehouse]) -> ResolvedView<'a> {
        match self {
            WarehouseView::List => ResolvedView::List,
            WarehouseView::Detail { id, tab } => match warehouses.iter().find(|w| w.id == *id) {
                Some(warehouse) => ResolvedView::Detail { warehouse, tab: *tab },
                None => ResolvedView::List,
            },
        }
    }
}
