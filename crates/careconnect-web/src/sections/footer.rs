use leptos::prelude::*;

use careconnect_core::{content::FOOTER_BLURB, SiteConfig};

use crate::components::Brand;

#[component]
pub fn Footer(config: SiteConfig) -> impl IntoView {
    let copyright = config.copyright();

    view! {
        <footer class="bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="flex items-center justify-center mb-4">
                    <Brand name=config.brand />
                </div>
                <p class="text-center text-gray-500 text-sm">{FOOTER_BLURB}</p>
                <p class="text-center text-gray-400 text-sm mt-4">{copyright}</p>
            </div>
        </footer>
    }
}
