use leptos::prelude::*;

/// Header of a page: title, optional subtitle and record count, action slot
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Number shown next to the title
    #[prop(optional, into)]
    count: MaybeProp<usize>,

    /// Actions on the right (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || count.get().map(|c| view! {
                    <span class="badge badge--counter">{c}</span>
                })}
                {move || subtitle.get().map(|s| view! {
                    <p class="page__subtitle">{s}</p>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
