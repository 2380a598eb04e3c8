pub mod a001_warehouse;
pub mod a002_package;
pub mod common;
