//! Loading, error and empty placeholders.
//!
//! Each has its own look so an empty table is never mistaken for one that is
//! still loading.

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LoadingIndicator(
    #[prop(optional, into)]
    label: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="state state--loading">
            <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                <Spinner />
                {move || label.get().unwrap_or_else(|| "Loading...".to_string())}
            </Flex>
        </div>
    }
}

#[component]
pub fn ErrorBox(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="alert alert--error" role="alert">
            {icon("alert")}
            <span>{message}</span>
        </div>
    }
}

#[component]
pub fn EmptyState(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="state state--empty">
            {icon("inbox")}
            <p>{message}</p>
        </div>
    }
}
