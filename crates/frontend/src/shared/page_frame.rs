//! Root element of every routed page.
//!
//! The element carries `id="{entity}--{category}"` (e.g. `a002_package--list`)
//! and `data-page-category`, so pages can be located in the DOM and styled
//! per category.

use super::page_standard::*;
use leptos::prelude::*;

/// CSS class of the page root for a category
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");
    debug_assert!(is_known_category(category), "unknown page category: {category}");

    view! {
        <div id=page_id class=page_class(category) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class(PAGE_CAT_DETAIL), "page page--detail");
        assert_eq!(page_class(PAGE_CAT_DASHBOARD), "page page--dashboard");
    }
}
