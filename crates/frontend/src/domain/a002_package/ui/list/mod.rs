pub mod state;

use self::state::{create_state, package_rows, PackageListState, PackageRow};
use crate::domain::a001_warehouse::api::fetch_warehouses;
use crate::domain::a002_package::api::fetch_packages;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::state_views::{EmptyState, ErrorBox, LoadingIndicator};
use crate::shared::components::ui::{StatusBadge, TeaTypeBadge};
use crate::shared::config::use_app_config;
use crate::shared::fetch_state::{FetchSlot, FetchState};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_warehouse::Warehouse;
use contracts::domain::a002_package::Package;
use contracts::enums::normalize_status;
use contracts::shared::package_filter::{distinct_statuses, distinct_tea_types};
use leptos::prelude::*;
use thaw::*;

const TABLE_ID: &str = "a002-package-table";

#[component]
pub fn PackageList() -> impl IntoView {
    let api_base = StoredValue::new(use_app_config().api_base());
    let state = create_state();
    let packages: FetchSlot<(), Vec<Package>> = FetchSlot::new();
    let warehouses: FetchSlot<(), Vec<Warehouse>> = FetchSlot::new();

    let load_items = move || {
        let base = api_base.get_value();
        packages.load((), move |_| async move { fetch_packages(&base).await });
        let base = api_base.get_value();
        warehouses.load((), move |_| async move { fetch_warehouses(&base).await });
    };

    load_items();

    let filter = Memo::new(move |_| state.form().to_filter());
    let active_filters_count = Signal::derive(move || filter.with(|f| f.active_count()));

    let warehouse_list = Memo::new(move |_| {
        warehouses
            .state
            .with(|s| s.data().cloned().unwrap_or_default())
    });

    // Dropdown options come from the unfiltered list
    let tea_type_options = Memo::new(move |_| {
        packages
            .state
            .with(|s| s.data().map(|items| distinct_tea_types(items)).unwrap_or_default())
    });
    let status_options = Memo::new(move |_| {
        packages
            .state
            .with(|s| s.data().map(|items| distinct_statuses(items)).unwrap_or_default())
    });

    let rows = package_rows(packages, warehouse_list.into(), filter.into());

    let is_loading = Signal::derive(move || packages.state.with(|s| s.is_loading()));
    let total_count = Signal::derive(move || rows.with(|r| r.as_ref().map(|items| items.len())));

    view! {
        <PageFrame page_id="a002_package--list" category=PAGE_CAT_LIST>
            <PageHeader title="Packages" count=total_count>
                {()}
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    is_expanded=state.is_filter_expanded
                    active_filters_count=active_filters_count
                    header_actions=move || view! {
                        <Flex gap=FlexGap::Small>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| state.reset()
                                disabled=Signal::derive(move || active_filters_count.get() == 0)
                            >
                                "Reset filters"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| load_items()
                                disabled=is_loading
                            >
                                {icon("refresh")}
                                {move || if is_loading.get() { " Loading..." } else { " Refresh" }}
                            </Button>
                        </Flex>
                    }
                    filter_tags=move || view! {
                        <ActiveFilterTags state=state warehouses=warehouse_list />
                    }
                >
                    <FilterFields
                        state=state
                        warehouses=warehouse_list
                        tea_types=tea_type_options
                        statuses=status_options
                    />
                </FilterPanel>

                {move || {
                    warehouses.state.with(|s| s.error().map(|e| {
                        let message = format!("Warehouse names are unavailable. {}", e);
                        view! { <ErrorBox message=message /> }
                    }))
                }}

                {move || match packages.state.get() {
                    FetchState::Idle | FetchState::Loading => {
                        view! { <LoadingIndicator label="Loading packages..." /> }.into_any()
                    }
                    FetchState::Failed(e) => {
                        view! { <ErrorBox message=format!("Failed to load packages. {}", e) /> }.into_any()
                    }
                    FetchState::Loaded(all) if all.is_empty() => {
                        view! { <EmptyState message="No packages found." /> }.into_any()
                    }
                    FetchState::Loaded(_) => {
                        let items = rows.get().unwrap_or_default();
                        if items.is_empty() {
                            view! { <EmptyState message="No packages match the current filters." /> }.into_any()
                        } else {
                            view! { <PackagesTable rows=items /> }.into_any()
                        }
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn FilterFields(
    state: PackageListState,
    warehouses: Memo<Vec<Warehouse>>,
    tea_types: Memo<Vec<String>>,
    statuses: Memo<Vec<String>>,
) -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Medium align=FlexAlign::End class="filter-fields">
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Warehouse:"</Label>
                <Select value=state.warehouse>
                    <option value="">"All warehouses"</option>
                    <For
                        each=move || warehouses.get()
                        key=|w| w.id
                        children=move |w| view! {
                            <option value=w.id.to_string()>{w.name.clone()}</option>
                        }
                    />
                </Select>
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Tea type:"</Label>
                <Select value=state.tea_type>
                    <option value="">"All tea types"</option>
                    <For
                        each=move || tea_types.get()
                        key=|label| label.clone()
                        children=move |label| view! {
                            <option value=label.clone()>{label.clone()}</option>
                        }
                    />
                </Select>
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Status:"</Label>
                <Select value=state.status>
                    <option value="">"All statuses"</option>
                    <For
                        each=move || statuses.get()
                        key=|raw| raw.clone()
                        children=move |raw| {
                            let label = normalize_status(Some(&raw)).label;
                            view! { <option value=raw.clone()>{label}</option> }
                        }
                    />
                </Select>
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Created from:"</Label>
                <DateInput
                    value=state.date_from
                    max=Signal::derive(move || state.date_to.get())
                    on_change=move |v| state.date_from.set(v)
                />
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Created to:"</Label>
                <DateInput
                    value=state.date_to
                    min=Signal::derive(move || state.date_from.get())
                    on_change=move |v| state.date_to.set(v)
                />
            </Flex>
        </Flex>
    }
}

/// One removable chip per active criterion
#[component]
fn ActiveFilterTags(state: PackageListState, warehouses: Memo<Vec<Warehouse>>) -> impl IntoView {
    let tag = move |signal: RwSignal<String>, label: String| {
        view! {
            <FilterTag label=label on_remove=Callback::new(move |_| signal.set(String::new())) />
        }
    };

    view! {
        <Flex gap=FlexGap::Small>
            {move || {
                let raw = state.warehouse.get();
                (!raw.is_empty()).then(|| {
                    let name = warehouses.with(|list| {
                        list.iter()
                            .find(|w| w.id.to_string() == raw)
                            .map(|w| w.name.clone())
                            .unwrap_or_else(|| raw.clone())
                    });
                    tag(state.warehouse, format!("Warehouse: {}", name))
                })
            }}
            {move || {
                let value = state.tea_type.get();
                (!value.is_empty()).then(|| tag(state.tea_type, format!("Tea type: {}", value)))
            }}
            {move || {
                let value = state.status.get();
                (!value.is_empty()).then(|| {
                    let label = normalize_status(Some(&value)).label;
                    tag(state.status, format!("Status: {}", label))
                })
            }}
            {move || {
                let value = state.date_from.get();
                (!value.is_empty()).then(|| tag(state.date_from, format!("From: {}", value)))
            }}
            {move || {
                let value = state.date_to.get();
                (!value.is_empty()).then(|| tag(state.date_to, format!("To: {}", value)))
            }}
        </Flex>
    }
}

#[component]
fn PackagesTable(rows: Vec<PackageRow>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 1000px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=70.0>"ID"</TableHeaderCell>
                        <TableHeaderCell min_width=180.0>"Owner"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>"Tea type"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Quantity"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=150.0>"Warehouse"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Created"</TableHeaderCell>
                        <TableHeaderCell min_width=150.0>"Weighed"</TableHeaderCell>
                    </TableRow>
                </TableHeader>

                <TableBody>
                    {rows
                        .into_iter()
                        .map(|PackageRow { package: item, warehouse_name }| {
                            let weighed = if item.has_weigh_event() {
                                item.weighed_datetime_display()
                            } else {
                                "N/A".to_string()
                            };
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
                                        <TableCellLayout truncate=true>{warehouse_name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{created}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{weighed}</TableCellLayout>
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
