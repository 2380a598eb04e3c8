pub mod navigation;
pub mod package_filter;
pub mod timestamp;
