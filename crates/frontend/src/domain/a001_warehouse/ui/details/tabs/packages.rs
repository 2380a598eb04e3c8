use crate::shared::components::state_views::{EmptyState, ErrorBox, LoadingIndicator};
use crate::shared::components::ui::{StatusBadge, TeaTypeBadge};
use crate::shared::fetch_state::{FetchSlot, FetchState};
use contracts::domain::a001_warehouse::WarehouseId;
use contracts::domain::a002_package::Package;
use leptos::prelude::*;
use thaw::*;

/// Packages stored in the warehouse
#[component]
pub fn PackagesTab(
    warehouse_id: WarehouseId,
    packages: FetchSlot<WarehouseId, Vec<Package>>,
) -> impl IntoView {
    move || match packages.state_for(&warehouse_id) {
        FetchState::Idle | FetchState::Loading => {
            view! { <LoadingIndicator label="Loading packages..." /> }.into_any()
        }
        FetchState::Failed(e) => {
            view! { <ErrorBox message=format!("Failed to load packages. {}", e) /> }.into_any()
        }
        FetchState::Loaded(items) if items.is_empty() => {
            view! { <EmptyState message="No packages in this warehouse." /> }.into_any()
        }
        FetchState::Loaded(items) => view! { <PackagesTable items=items /> }.into_any(),
    }
}

#[component]
fn PackagesTable(items: Vec<Package>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%; min-width: 900px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=70.0>"ID"</TableHeaderCell>
                        <TableHeaderCell min_width=180.0>"Owner"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>"Tea type"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Quantity"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Temperature"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Humidity"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Created"</TableHeaderCell>
                    </TableRow>
                </TableHeader>

                <TableBody>
                    {items
                        .into_iter()
                        .map(|item| {
                            let temperature = item.temperature_display().unwrap_or_else(|| "N/A".to_string());
                            let humidity = item.humidity_display().unwrap_or_else(|| "N/A".to_string());
                            let item_id = item.id.to_string();
                            let full_name = item.full_name_display().to_string();
                            let tea_type_name = item.tea_type_name.clone();
                            let tea_code = item.tea_code.clone();
                            let quantity = item.quantity_display();
                            let status = item.status.clone();
                            let created = item.created_date_display();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{item_id}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {full_name}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <TeaTypeBadge name=tea_type_name code=tea_code />
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span style="font-variant-numeric: tabular-nums;">
                                                {quantity}
                                            </span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <StatusBadge status=status />
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{temperature}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{humidity}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{created}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}
