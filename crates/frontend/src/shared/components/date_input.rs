use leptos::prelude::*;

/// DateInput component with native date picker
/// The browser displays the date in the user's locale; the value stays yyyy-mm-dd.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format, empty for no date
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format, or "" when cleared)
    on_change: impl Fn(String) + 'static,
    /// Latest selectable date
    #[prop(optional)]
    max: Option<Signal<String>>,
    /// Earliest selectable date
    #[prop(optional)]
    min: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            prop:value=value
            min=move || min.map(|s| s.get())
            max=move || max.map(|s| s.get())
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
