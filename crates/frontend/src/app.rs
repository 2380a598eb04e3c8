use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, AppConfig};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Embedded config is invalid, using built-in values: {}", e);
        AppConfig::fallback()
    });
    log::info!("API base: {}", config.api_base());

    // Provide the configuration to every page via context.
    provide_context(config);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
