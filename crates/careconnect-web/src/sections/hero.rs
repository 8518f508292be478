use leptos::prelude::*;

use careconnect_core::content::{HERO_HEADLINE, HERO_TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-900 sm:text-5xl md:text-6xl">
                    {HERO_HEADLINE}
                </h1>
                <p class="mt-3 max-w-md mx-auto text-base text-gray-500 sm:text-lg md:mt-5 md:text-xl md:max-w-3xl">
                    {HERO_TAGLINE}
                </p>
            </div>
        </section>
    }
}
