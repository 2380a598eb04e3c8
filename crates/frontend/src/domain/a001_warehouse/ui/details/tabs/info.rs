use crate::shared::components::osm_map::OsmMap;
use crate::shared::icons::icon;
use contracts::domain::a001_warehouse::{format_capacity, Warehouse};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn InfoTab(warehouse: Warehouse, marker_zoom: u8) -> impl IntoView {
    let coordinate = warehouse.coordinate();
    let location_text = coordinate
        .map(|point| point.display())
        .unwrap_or_else(|| "No location data".to_string());
    let fill = format!("{}%", warehouse.fill_percent());
    let map_title = format!("Location of {}", warehouse.name);

    view! {
        <div class="detail-grid">
            <Card>
                <div class="field-grid">
                    <span class="form__label">"ID:"</span>
                    <code>{warehouse.id.to_string()}</code>

                    <span class="form__label">"Name:"</span>
                    <strong>{warehouse.name.clone()}</strong>

                    <span class="form__label">"Address:"</span>
                    <span>{warehouse.address_display().to_string()}</span>

                    <span class="form__label">"Total capacity:"</span>
                    <span>{format_capacity(warehouse.total_capacity)}</span>

                    <span class="form__label">"Used capacity:"</span>
                    <span>{format_capacity(warehouse.current_capacity)}</span>

                    <span class="form__label">"Free capacity:"</span>
                    <span>{format_capacity(warehouse.free_capacity())}</span>

                    <span class="form__label">"Fill level:"</span>
                    <span>{fill}</span>

                    <span class="form__label">"Location:"</span>
                    <span>{location_text}</span>
                </div>
            </Card>

            <Card>
                {match coordinate {
                    Some(center) => view! {
                        <OsmMap
                            center=center
                            zoom=marker_zoom
                            with_marker=true
                            title=map_title
                        />
                    }
                    .into_any(),
                    None => view! {
                        <div class="map-placeholder">
                            {icon("map-pin")}
                            <p>"No location data for this warehouse."</p>
                        </div>
                    }
                    .into_any(),
                }}
            </Card>
        </div>
    }
}
