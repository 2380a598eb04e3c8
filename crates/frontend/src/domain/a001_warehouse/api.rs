use contracts::domain::a001_warehouse::{Warehouse, WarehouseId, WarehousePackagesResponse};
use contracts::domain::a002_package::Package;

use crate::shared::api_utils::{api_url, get_json, ApiError};

/// Fetch all warehouses
pub async fn fetch_warehouses(base: &str) -> Result<Vec<Warehouse>, ApiError> {
    get_json(&api_url(base, "/api/warehouses")).await
}

/// Fetch the packages stored in one warehouse
pub async fn fetch_warehouse_packages(
    base: &str,
    id: WarehouseId,
) -> Result<Vec<Package>, ApiError> {
    let path = format!("/api/warehouses/{}/packages", id);
    let response: WarehousePackagesResponse = get_json(&api_url(base, &path)).await?;
    Ok(response.packages)
}
