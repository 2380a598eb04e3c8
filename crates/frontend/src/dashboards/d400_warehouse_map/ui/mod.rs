pub mod dashboard;

pub use dashboard::WarehouseMapPage;
