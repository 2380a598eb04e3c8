use super::tabs::{HistoryTab, InfoTab, PackagesTab};
use crate::shared::fetch_state::FetchSlot;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_warehouse::{Warehouse, WarehouseId};
use contracts::domain::a002_package::Package;
use contracts::shared::navigation::{WarehouseTab, WarehouseView};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn WarehouseDetails(
    warehouse: Warehouse,
    tab: WarehouseTab,
    /// Packages of the selected warehouse, fetched by the page
    packages: FetchSlot<WarehouseId, Vec<Package>>,
    /// Zoom of the location map
    marker_zoom: u8,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let warehouse_id = warehouse.id;
    let current = WarehouseView::Detail { id: warehouse_id, tab };
    let back_href = current.back_to_list().href();

    view! {
        <PageFrame page_id="a001_warehouse--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <A href=back_href>
                        <span class="page__back">
                            {icon("arrow-left")}
                            "Back to warehouses"
                        </span>
                    </A>
                    <h1 class="page__title">{warehouse.name.clone()}</h1>
                    <p class="page__subtitle">{warehouse.address_display().to_string()}</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_refresh.run(())>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="tabs__content">
                    <TabBar current=current />
                    {match tab {
                        WarehouseTab::Info => view! {
                            <InfoTab warehouse=warehouse marker_zoom=marker_zoom />
                        }
                        .into_any(),
                        WarehouseTab::Packages => view! { <PackagesTab warehouse_id=warehouse_id packages=packages /> }.into_any(),
                        WarehouseTab::History => view! { <HistoryTab warehouse_id=warehouse_id packages=packages /> }.into_any(),
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

/// One link per tab; following a link pushes the new URL to history
#[component]
fn TabBar(current: WarehouseView) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {WarehouseTab::all()
                .into_iter()
                .map(|tab| {
                    let is_active = current.tab() == Some(tab);
                    let icon_name = match tab {
                        WarehouseTab::Info => "info",
                        WarehouseTab::Packages => "package",
                        WarehouseTab::History => "history",
                    };
                    view! {
                        <A href=current.change_tab(tab).href()>
                            <span class="tab-bar__tab" class:tab-bar__tab--active=is_active>
                                <span class="tab-icon">{icon(icon_name)}</span>
                                {tab.title()}
                            </span>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
