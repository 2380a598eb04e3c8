pub mod date_input;
pub mod filter_panel;
pub mod osm_map;
pub mod page_header;
pub mod state_views;
pub mod ui;
