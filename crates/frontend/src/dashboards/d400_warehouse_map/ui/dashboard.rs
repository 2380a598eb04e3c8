use crate::domain::a001_warehouse::api::fetch_warehouses;
use crate::shared::components::osm_map::{fit_bounds, OsmMap};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::state_views::{EmptyState, ErrorBox, LoadingIndicator};
use crate::shared::config::{use_app_config, MapConfig};
use crate::shared::fetch_state::{FetchSlot, FetchState};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::domain::a001_warehouse::{format_capacity, GeoPoint, Warehouse};
use contracts::shared::navigation::WarehouseView;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// What the map frame shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapFocus {
    pub center: GeoPoint,
    pub zoom: u8,
    pub with_marker: bool,
}

/// Warehouses that can be placed on the map
pub fn located_warehouses(warehouses: &[Warehouse]) -> Vec<Warehouse> {
    warehouses
        .iter()
        .filter(|w| w.coordinate().is_some())
        .cloned()
        .collect()
}

/// Focus on the selected warehouse when it has a location. Otherwise frame
/// every located warehouse, falling back to the configured view when none
/// has a location.
pub fn map_focus(warehouses: &[Warehouse], selected: &str, map: &MapConfig) -> MapFocus {
    let focused = warehouses
        .iter()
        .filter(|w| w.id.to_string() == selected)
        .find_map(|w| w.coordinate());
    if let Some(center) = focused {
        return MapFocus {
            center,
            zoom: map.marker_zoom,
            with_marker: true,
        };
    }

    let points: Vec<GeoPoint> = warehouses.iter().filter_map(|w| w.coordinate()).collect();
    match fit_bounds(&points, map.marker_zoom) {
        Some((center, zoom)) => MapFocus {
            center,
            zoom,
            // The embed carries a single marker
            with_marker: points.len() == 1,
        },
        None => MapFocus {
            center: GeoPoint::new(map.default_lat, map.default_lon),
            zoom: map.default_zoom,
            with_marker: false,
        },
    }
}

/// Warehouse map dashboard component
#[component]
pub fn WarehouseMapPage() -> impl IntoView {
    let config = use_app_config();
    let map_config = StoredValue::new(config.map.clone());
    let api_base = StoredValue::new(config.api_base());

    let warehouses: FetchSlot<(), Vec<Warehouse>> = FetchSlot::new();
    let selected = RwSignal::new(String::new());

    let load = move || {
        let base = api_base.get_value();
        warehouses.load((), move |_| async move { fetch_warehouses(&base).await });
    };
    load();

    view! {
        <PageFrame page_id="d400_warehouse_map--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Warehouse map"
                subtitle="Pick a warehouse to centre the map on it.".to_string()
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| load()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || match warehouses.state.get() {
                    FetchState::Idle | FetchState::Loading => {
                        view! { <LoadingIndicator label="Loading warehouses..." /> }.into_any()
                    }
                    FetchState::Failed(e) => {
                        view! { <ErrorBox message=format!("Failed to load warehouses. {}", e) /> }.into_any()
                    }
                    FetchState::Loaded(all) => {
                        let located = located_warehouses(&all);
                        let unlocated = all.len() - located.len();
                        view! {
                            <div class="map-dashboard">
                                <div class="map-dashboard__map">
                                    {move || {
                                        let focus = map_config.with_value(|map| {
                                            selected.with(|s| map_focus(&all, s, map))
                                        });
                                        view! {
                                            <OsmMap
                                                center=focus.center
                                                zoom=focus.zoom
                                                with_marker=focus.with_marker
                                                title="Warehouse map"
                                            />
                                        }
                                    }}
                                </div>
                                <LocatedList located=located unlocated=unlocated selected=selected />
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn LocatedList(
    located: Vec<Warehouse>,
    unlocated: usize,
    selected: RwSignal<String>,
) -> impl IntoView {
    if located.is_empty() {
        return view! { <EmptyState message="No warehouses with location data." /> }.into_any();
    }

    let options: Vec<(String, String)> = located
        .iter()
        .map(|w| (w.id.to_string(), w.name.clone()))
        .collect();

    view! {
        <div class="map-dashboard__list">
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Focus on:"</Label>
                <Select value=selected>
                    <option value="">"All warehouses"</option>
                    {options
                        .into_iter()
                        .map(|(id, name)| view! { <option value=id>{name}</option> })
                        .collect_view()}
                </Select>
            </Flex>

            <ul class="map-dashboard__items">
                {located
                    .into_iter()
                    .map(|w| {
                        let id = w.id.to_string();
                        let id_for_click = id.clone();
                        let is_selected = move || selected.with(|s| *s == id);
                        let detail_href = WarehouseView::select_warehouse(w.id).href();
                        let location = w.coordinate().map(|p| p.display()).unwrap_or_default();
                        view! {
                            <li
                                class="map-dashboard__item"
                                class:map-dashboard__item--selected=is_selected
                                on:click=move |_| selected.set(id_for_click.clone())
                            >
                                <div class="map-dashboard__item-name">
                                    {icon("map-pin")}
                                    <span>{w.name.clone()}</span>
                                </div>
                                <div class="map-dashboard__item-meta">{location}</div>
                                <div class="map-dashboard__item-meta">
                                    {format!(
                                        "{} / {} ({}%)",
                                        format_capacity(w.current_capacity),
                                        format_capacity(w.total_capacity),
                                        w.fill_percent()
                                    )}
                                </div>
                                <A href=detail_href>"Details"</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            {(unlocated > 0).then(|| view! {
                <p class="map-dashboard__note">
                    {format!("{} warehouse(s) without location data are not shown.", unlocated)}
                </p>
            })}
        </div>
    }
    .into_any()
}
