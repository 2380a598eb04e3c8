//! Warehouse page: list or detail, chosen by the `id` / `tab` query parameters.

use super::details::WarehouseDetails;
use super::list::WarehouseList;
use super::view_model::WarehousesVm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::state_views::{ErrorBox, LoadingIndicator};
use crate::shared::config::use_app_config;
use crate::shared::fetch_state::FetchState;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::shared::navigation::{ResolvedView, WarehouseView};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use thaw::*;

#[component]
pub fn WarehousesPage() -> impl IntoView {
    let config = use_app_config();
    let marker_zoom = config.map.marker_zoom;
    let vm = WarehousesVm::new(config.api_base());

    let query = use_query_map();
    let current_view = Memo::new(move |_| {
        query.with(|q| {
            let id = q.get("id");
            let tab = q.get("tab");
            WarehouseView::from_params(id.as_deref(), tab.as_deref())
        })
    });

    vm.load_warehouses();

    Effect::new(move |_| {
        log::debug!("warehouse view: {:?}", current_view.get());
    });

    // Packages are fetched once the selected id is known to exist.
    Effect::new(move |_| {
        let view = current_view.get();
        vm.warehouses.state.with(|state| {
            if let FetchState::Loaded(list) = state {
                match view.resolve(list) {
                    ResolvedView::Detail { warehouse, .. } => vm.ensure_packages(warehouse.id),
                    ResolvedView::List => {
                        if view.selected_id().is_some() {
                            log::debug!("warehouse {:?} not found, showing list", view.selected_id());
                        }
                    }
                }
            }
        });
    });

    let on_refresh = Callback::new(move |_: ()| {
        vm.reload(current_view.get_untracked().selected_id());
    });

    view! {
        {move || {
            let view = current_view.get();
            vm.warehouses.state.with(|state| match state {
                FetchState::Loaded(list) => match view.resolve(list) {
                    ResolvedView::List => view! {
                        <WarehouseList warehouses=list.clone() on_refresh=on_refresh />
                    }
                    .into_any(),
                    ResolvedView::Detail { warehouse, tab } => view! {
                        <WarehouseDetails
                            warehouse=warehouse.clone()
                            tab=tab
                            packages=vm.packages
                            marker_zoom=marker_zoom
                            on_refresh=on_refresh
                        />
                    }
                    .into_any(),
                },
                FetchState::Failed(message) => {
                    let message = format!("Failed to load warehouses. {}", message);
                    view! {
                        <PageFrame page_id="a001_warehouse--list" category=PAGE_CAT_LIST>
                            <PageHeader title="Warehouses">
                                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_refresh.run(())>
                                    {icon("refresh")}
                                    " Refresh"
                                </Button>
                            </PageHeader>
                            <div class="page__content">
                                <ErrorBox message=message />
                            </div>
                        </PageFrame>
                    }
                    .into_any()
                }
                FetchState::Idle | FetchState::Loading => view! {
                    <PageFrame page_id="a001_warehouse--list" category=PAGE_CAT_LIST>
                        <PageHeader title="Warehouses">
                            {()}
                        </PageHeader>
                        <div class="page__content">
                            <LoadingIndicator label="Loading warehouses..." />
                        </div>
                    </PageFrame>
                }
                .into_any(),
            })
        }}
    }
}
