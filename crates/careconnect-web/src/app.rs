//! Main App Component

use leptos::prelude::*;

use careconnect_core::SiteConfig;

use crate::api;
use crate::pages::LandingPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::from_build_env();
    let sink = api::sink_for(&config).into_sink();

    view! {
        <div class="min-h-screen bg-gradient-to-b from-pink-50 to-white">
            <LandingPage config sink />
        </div>
    }
}
