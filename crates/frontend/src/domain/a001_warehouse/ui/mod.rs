pub mod details;
pub mod list;
pub mod page;
pub mod view_model;

pub use page::WarehousesPage;
