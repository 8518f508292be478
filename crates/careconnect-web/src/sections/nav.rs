use leptos::prelude::*;

use crate::components::Brand;

#[component]
pub fn Nav(brand: String) -> impl IntoView {
    view! {
        <nav class="bg-white shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16 items-center">
                    <div class="flex items-center">
                        <Brand name=brand large=true />
                    </div>
                </div>
            </div>
        </nav>
    }
}
