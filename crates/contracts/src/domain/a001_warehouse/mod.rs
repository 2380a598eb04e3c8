pub mod aggregate;

pub use aggregate::{
    format_capacity, GeoPoint, Warehouse, WarehouseId, WarehousePackagesResponse,
};
