pub mod aggregate;

pub use aggregate::{Package, PackageId, WarehouseRef};
