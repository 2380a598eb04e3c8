//! Warehouse detail view: header, tab bar and the active tab.

mod page;
pub mod tabs;

pub use page::WarehouseDetails;
