//! Embedded OpenStreetMap frame.
//!
//! Only constructed for a real coordinate; callers render a placeholder when
//! a warehouse has no location.

use contracts::domain::a001_warehouse::GeoPoint;
use leptos::prelude::*;

const OSM_EMBED_BASE: &str = "https://www.openstreetmap.org/export/embed.html";

/// Embed URL centred on `center`, with an optional marker on it.
///
/// The bounding box width follows the slippy-map tile width at `zoom`.
pub fn osm_embed_url(center: GeoPoint, zoom: u8, with_marker: bool) -> String {
    let zoom = zoom.min(19) as i32;
    let half_lon = 360.0 / 2f64.powi(zoom) / 2.0;
    let half_lat = half_lon / 2.0;

    let mut url = format!(
        "{}?bbox={:.6},{:.6},{:.6},{:.6}&layer=mapnik",
        OSM_EMBED_BASE,
        center.lon - half_lon,
        center.lat - half_lat,
        center.lon + half_lon,
        center.lat + half_lat,
    );
    if with_marker {
        url.push_str(&format!("&marker={:.6},{:.6}", center.lat, center.lon));
    }
    url
}

/// Centre and the closest zoom, capped at `max_zoom`, whose frame holds every
/// point with some margin. `None` when there are no points.
pub fn fit_bounds(points: &[GeoPoint], max_zoom: u8) -> Option<(GeoPoint, u8)> {
    let first = points.first()?;
    let (mut min_lat, mut max_lat) = (first.lat, first.lat);
    let (mut min_lon, mut max_lon) = (first.lon, first.lon);
    for p in &points[1..] {
        min_lat = min_lat.min(p.lat);
        max_lat = max_lat.max(p.lat);
        min_lon = min_lon.min(p.lon);
        max_lon = max_lon.max(p.lon);
    }

    let center = GeoPoint::new((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0);
    let lat_span = (max_lat - min_lat) * FIT_MARGIN;
    let lon_span = (max_lon - min_lon) * FIT_MARGIN;

    // Frame size at zoom z, as in `osm_embed_url`: 360/2^z wide, half as tall
    let zoom = (0..=max_zoom.min(19))
        .rev()
        .find(|z| {
            let width = 360.0 / 2f64.powi(*z as i32);
            width >= lon_span && width / 2.0 >= lat_span
        })
        .unwrap_or(0);
    Some((center, zoom))
}

const FIT_MARGIN: f64 = 1.2;

/// Link to the full map for the same point
pub fn osm_link(center: GeoPoint, zoom: u8) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={:.6}&mlon={:.6}#map={}/{:.6}/{:.6}",
        center.lat, center.lon, zoom, center.lat, center.lon
    )
}

#[component]
pub fn OsmMap(
    center: GeoPoint,
    zoom: u8,
    #[prop(optional)]
    with_marker: bool,
    #[prop(optional, into)]
    title: String,
) -> impl IntoView {
    let src = osm_embed_url(center, zoom, with_marker);
    let link = osm_link(center, zoom);

    view! {
        <div class="osm-map">
            {view! {
                <iframe
                    class="osm-map__frame"
                    src=src
                    title=title
                    referrerpolicy="no-referrer"
                ></iframe>
            }
                .attr("loading", "lazy")}
            <a class="osm-map__link" href=link target="_blank" rel="noopener">
                "Open larger map"
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_url_with_marker() {
        let url = osm_embed_url(GeoPoint::new(10.0, 106.0), 1, true);
        assert_eq!(
            url,
            "https://www.openstreetmap.org/export/embed.html?bbox=16.000000,-35.000000,196.000000,55.000000&layer=mapnik&marker=10.000000,106.000000"
        );
    }

    #[test]
    fn test_embed_url_without_marker() {
        let url = osm_embed_url(GeoPoint::new(21.0, 105.8), 15, false);
        assert!(url.contains("layer=mapnik"));
        assert!(!url.contains("marker="));
    }

    #[test]
    fn test_fit_bounds_holds_all_points() {
        let points = [GeoPoint::new(10.0, 106.0), GeoPoint::new(21.0, 105.8)];
        let (center, zoom) = fit_bounds(&points, 15).unwrap();
        assert!((center.lat - 15.5).abs() < 1e-9);
        assert!((center.lon - 105.9).abs() < 1e-9);
        assert_eq!(zoom, 3);

        let half_lat = 360.0 / 2f64.powi(zoom as i32) / 4.0;
        for p in points {
            assert!((p.lat - center.lat).abs() <= half_lat);
        }
    }

    #[test]
    fn test_fit_bounds_single_point_uses_max_zoom() {
        let point = GeoPoint::new(10.762622, 106.660172);
        assert_eq!(fit_bounds(&[point], 15), Some((point, 15)));
        assert_eq!(fit_bounds(&[], 15), None);
    }

    #[test]
    fn test_fit_bounds_world_wide_spread() {
        let points = [GeoPoint::new(-60.0, -170.0), GeoPoint::new(70.0, 170.0)];
        let (_, zoom) = fit_bounds(&points, 15).unwrap();
        assert_eq!(zoom, 0);
    }

    #[test]
    fn test_higher_zoom_gives_smaller_box() {
        let wide = osm_embed_url(GeoPoint::new(0.0, 0.0), 10, false);
        let narrow = osm_embed_url(GeoPoint::new(0.0, 0.0), 15, false);
        assert!(wide.contains("bbox=-0.175781,"));
        assert!(narrow.contains("bbox=-0.005493,"));
    }
}
