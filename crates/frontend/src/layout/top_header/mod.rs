//! TopHeader component - application top navigation bar.
//!
//! Brand on the left, one link per section. The link of the current
//! section is highlighted from the router location.

use crate::shared::icons::icon;
use contracts::shared::navigation::{MAP_PATH, PACKAGES_PATH, WAREHOUSES_PATH};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// (path, label, icon)
const NAV_ITEMS: &[(&str, &str, &str)] = &[
    (PACKAGES_PATH, "Packages", "package"),
    (WAREHOUSES_PATH, "Warehouses", "warehouse"),
    (MAP_PATH, "Map", "map"),
];

/// Section a pathname belongs to; `/` is the package list
pub fn is_section_active(pathname: &str, section: &str) -> bool {
    if pathname == "/" {
        return section == PACKAGES_PATH;
    }
    pathname == section || pathname.starts_with(&format!("{}/", section))
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <A href="/">
                    <span class="top-header__title">"Tea Management"</span>
                </A>
            </div>

            <nav class="top-header__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(path, label, icon_name)| {
                        let path = *path;
                        let is_active = move || is_section_active(&location.pathname.get(), path);
                        view! {
                            <A href=path>
                                <span
                                    class="top-header__link"
                                    class:top-header__link--active=is_active
                                >
                                    {icon(icon_name)}
                                    {*label}
                                </span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_matching() {
        assert!(is_section_active("/", PACKAGES_PATH));
        assert!(!is_section_active("/", WAREHOUSES_PATH));
        assert!(is_section_active("/warehouses", WAREHOUSES_PATH));
        assert!(!is_section_active("/warehouses-old", WAREHOUSES_PATH));
        assert!(is_section_active("/map", MAP_PATH));
    }
}
