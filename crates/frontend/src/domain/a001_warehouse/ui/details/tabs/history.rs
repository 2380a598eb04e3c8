use crate::shared::components::state_views::{EmptyState, ErrorBox, LoadingIndicator};
use crate::shared::components::ui::{StatusBadge, TeaTypeBadge};
use crate::shared::fetch_state::{FetchSlot, FetchState};
use contracts::domain::a001_warehouse::WarehouseId;
use contracts::domain::a002_package::Package;
use contracts::shared::package_filter::weigh_history;
use leptos::prelude::*;
use thaw::*;

/// Weigh events of the warehouse's packages, newest first
#[component]
pub fn HistoryTab(
    warehouse_id: WarehouseId,
    packages: FetchSlot<WarehouseId, Vec<Package>>,
) -> impl IntoView {
    move || match packages.state_for(&warehouse_id) {
        FetchState::Idle | FetchState::Loading => {
            view! { <LoadingIndicator label="Loading weigh history..." /> }.into_any()
        }
        FetchState::Failed(e) => {
            view! { <ErrorBox message=format!("Failed to load weigh history. {}", e) /> }.into_any()
        }
        FetchState::Loaded(items) => {
            let events = weigh_history(&items);
            if events.is_empty() {
                view! { <EmptyState message="No weigh history for this warehouse." /> }.into_any()
            } else {
                view! { <HistoryTable events=events /> }.into_any()
            }
        }
    }
}

#[component]
fn HistoryTable(events: Vec<Package>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%; min-width: 800px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=150.0>"Weighed at"</TableHeaderCell>
                        <TableHeaderCell min_width=70.0>"Package"</TableHeaderCell>
                        <TableHeaderCell min_width=180.0>"Owner"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>"Tea type"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Quantity"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>

                <TableBody>
                    {events
                        .into_iter()
                        .map(|event| {
                            let weighed_at = event.weighed_datetime_display();
                            let package_label = format!("#{}", event.id);
                            let full_name = event.full_name_display().to_string();
                            let tea_type_name = event.tea_type_name.clone();
                            let tea_code = event.tea_code.clone();
                            let quantity = event.quantity_display();
                            let status = event.status.clone();
                            view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>{weighed_at}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{package_label}</TableCellLayout>
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
                                    <TableCellLayout>{quantity}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <StatusBadge status=status />
                                    </TableCellLayout>
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
