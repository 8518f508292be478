use leptos::prelude::*;

use careconnect_core::{content::FEATURES_HEADING, FeatureShowcase, FEATURES};

use crate::components::{Glyph, CARD_BASE};

const EMPHASIZED: &str = "scale-105 shadow-xl";
const RESTING: &str = "hover:shadow-lg";

fn card_class(active: bool) -> String {
    let state = if active { EMPHASIZED } else { RESTING };
    format!("{CARD_BASE} cursor-pointer transform transition-all duration-300 {state}")
}

#[component]
pub fn Features() -> impl IntoView {
    let showcase = RwSignal::new(FeatureShowcase::new());

    view! {
        <section id="features" class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <h2 class="text-3xl font-bold text-center text-gray-900 mb-12">{FEATURES_HEADING}</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(index, feature)| {
                        view! {
                            <article
                                class=move || card_class(showcase.with(|s| s.is_active(index)))
                                on:mouseenter=move |_| showcase.update(|s| s.set_active(Some(index)))
                                on:mouseleave=move |_| showcase.update(|s| s.set_active(None))
                            >
                                <div class="p-6">
                                    <div class="flex items-center justify-center w-12 h-12 rounded-md bg-pink-100 mb-4">
                                        <Glyph icon=feature.icon class="text-2xl text-pink-500" />
                                    </div>
                                    <h3 class="text-lg font-semibold text-gray-900 mb-2">{feature.title}</h3>
                                    <p class="text-gray-500">{feature.description}</p>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_class_emphasis() {
        assert!(card_class(true).ends_with(EMPHASIZED));
        assert!(card_class(false).ends_with(RESTING));
        assert!(!card_class(false).contains("scale-105"));
    }
}
