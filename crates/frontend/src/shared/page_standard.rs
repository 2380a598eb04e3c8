//! Page category constants for page standardization.
//!
//! Every routed page must declare:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_warehouse--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a001_warehouse/` directory.

/// List of records: table or cards with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview page (map, charts).
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_DASHBOARD];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}
