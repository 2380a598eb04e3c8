use crate::shared::components::page_header::PageHeader;
use crate::shared::components::state_views::EmptyState;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_warehouse::{format_capacity, Warehouse};
use contracts::shared::navigation::WarehouseView;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Grid of warehouse cards; a card links to the warehouse detail view
#[component]
pub fn WarehouseList(
    warehouses: Vec<Warehouse>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let count = warehouses.len();

    view! {
        <PageFrame page_id="a001_warehouse--list" category=PAGE_CAT_LIST>
            <PageHeader title="Warehouses" count=count>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_refresh.run(())>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                {if warehouses.is_empty() {
                    view! { <EmptyState message="No warehouses found." /> }.into_any()
                } else {
                    view! {
                        <div class="warehouse-grid">
                            {warehouses
                                .into_iter()
                                .map(|warehouse| view! { <WarehouseCard warehouse=warehouse /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn WarehouseCard(warehouse: Warehouse) -> impl IntoView {
    let href = WarehouseView::select_warehouse(warehouse.id).href();
    let bar_style = format!("width: {:.1}%;", warehouse.fill_bar_width());
    let capacity = format!(
        "{} / {}",
        format_capacity(warehouse.current_capacity),
        format_capacity(warehouse.total_capacity)
    );

    view! {
        <A href=href>
            <div class="warehouse-card">
                <div class="warehouse-card__header">
                    {icon("warehouse")}
                    <span class="warehouse-card__name">{warehouse.name.clone()}</span>
                </div>
                <div class="warehouse-card__address">
                    {icon("map-pin")}
                    <span>{warehouse.address_display().to_string()}</span>
                </div>
                <div class="warehouse-card__capacity">
                    <span class="form__label">"Capacity"</span>
                    <span>{capacity}</span>
                </div>
                <div class="progress">
                    <div class="progress__bar" style=bar_style></div>
                </div>
                <div class="warehouse-card__fill">{format!("{}% full", warehouse.fill_percent())}</div>
            </div>
        </A>
    }
}
