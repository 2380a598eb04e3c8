use contracts::enums::{normalize_status, resolve_tea_type, BadgeColor, TeaCode};
use leptos::prelude::*;

/// Colored pill used for statuses and tea types
#[component]
pub fn Badge(
    /// Color category, gray by default
    #[prop(optional)]
    color: BadgeColor,
    /// Tooltip text
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!("badge {}", color.css_class()) title=move || title.get()>
            {children()}
        </span>
    }
}

/// Status badge: translated label, raw API value in the tooltip
#[component]
pub fn StatusBadge(
    /// Raw status as sent by the API
    status: Option<String>,
) -> impl IntoView {
    let display = normalize_status(status.as_deref());
    let raw = status.unwrap_or_default();

    view! {
        <Badge color=display.color title=raw>
            {display.label}
        </Badge>
    }
}

/// Tea type badge resolved from the pre-resolved name or the code
#[component]
pub fn TeaTypeBadge(
    name: Option<String>,
    code: Option<TeaCode>,
) -> impl IntoView {
    let display = resolve_tea_type(name.as_deref(), code.as_ref());

    view! {
        <Badge color=display.color>
            {display.label}
        </Badge>
    }
}
