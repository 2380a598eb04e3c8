use contracts::domain::a002_package::Package;

use crate::shared::api_utils::{api_url, get_json, ApiError};

/// Fetch all packages
pub async fn fetch_packages(base: &str) -> Result<Vec<Package>, ApiError> {
    get_json(&api_url(base, "/api/packages")).await
}
