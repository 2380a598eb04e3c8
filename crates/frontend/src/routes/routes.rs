use crate::dashboards::d400_warehouse_map::ui::WarehouseMapPage;
use crate::domain::a001_warehouse::ui::WarehousesPage;
use crate::domain::a002_package::ui::list::PackageList;
use crate::layout::Shell;
use crate::shared::components::state_views::EmptyState;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <EmptyState message="Page not found." />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=PackageList />
                    <Route path=path!("/packages") view=PackageList />
                    <Route path=path!("/warehouses") view=WarehousesPage />
                    <Route path=path!("/map") view=WarehouseMapPage />
                </Routes>
            </Shell>
        </Router>
    }
}
