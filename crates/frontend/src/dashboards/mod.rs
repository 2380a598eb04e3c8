pub mod d400_warehouse_map;

pub use d400_warehouse_map::ui::WarehouseMapPage;
