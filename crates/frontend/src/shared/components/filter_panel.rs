//! Collapsible filter panel and the chips listing active criteria.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,

    /// Shown as a counter next to the title when non-zero
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Buttons on the right of the header
    #[prop(into)]
    header_actions: ViewFn,

    /// Chips under the form fields
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,

    /// Form fields
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <section class="filter-panel">
            <header class="filter-panel-header">
                <button
                    type="button"
                    class="filter-panel__toggle"
                    aria-expanded=move || is_expanded.get().to_string()
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--counter">{move || active_filters_count.get()}</span>
                    </Show>
                </button>
                <div class="filter-panel-header__right">{header_actions.run()}</div>
            </header>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">
                    {children()}
                    {filter_tags.as_ref().map(|tags| view! {
                        <div class="filter-panel__tags">{tags.run()}</div>
                    })}
                </div>
            </Show>
        </section>
    }
}

#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <span class="filter-tag">
            {label}
            <button
                type="button"
                class="filter-tag__remove"
                title="Remove filter"
                on:click=move |_| on_remove.run(())
            >
                {icon("x")}
            </button>
        </span>
    }
}
