pub mod badge_color;
pub mod package_status;
pub mod tea_type;

pub use badge_color::BadgeColor;
pub use package_status::{normalize_status, PackageStatus, StatusDisplay};
pub use tea_type::{resolve_tea_type, TeaCode, TeaTypeDisplay};
