use leptos::prelude::*;

use careconnect_core::{content::BENEFITS_HEADING, BENEFITS};

use crate::components::Glyph;

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section class="bg-pink-50 py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center text-gray-900 mb-12">{BENEFITS_HEADING}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {BENEFITS
                        .iter()
                        .map(|benefit| {
                            view! {
                                <div class="text-center transform transition-all duration-300 hover:scale-105">
                                    <div class="w-12 h-12 rounded-full bg-pink-500 text-white flex items-center justify-center mx-auto mb-4">
                                        <Glyph icon=benefit.icon class="text-2xl" />
                                    </div>
                                    <h3 class="text-lg font-semibold text-gray-900 mb-2">{benefit.title}</h3>
                                    <p class="text-gray-500">{benefit.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
