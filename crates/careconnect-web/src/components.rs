//! UI Components

use leptos::prelude::*;

use careconnect_core::Icon;

pub const CARD_BASE: &str = "rounded-lg border border-gray-200 bg-white shadow-sm";

/// White rounded panel
#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!("{CARD_BASE} {class}")>
            {children()}
        </div>
    }
}

/// Inline error box
#[component]
pub fn Alert(message: &'static str) -> impl IntoView {
    view! {
        <div role="alert" class="rounded-md border border-red-300 bg-red-50 px-4 py-3 text-sm text-red-700">
            {message}
        </div>
    }
}

#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <span class=class data-icon=icon.name() aria-hidden="true">
            {icon.glyph()}
        </span>
    }
}

/// Heart mark followed by the product name
#[component]
pub fn Brand(name: String, #[prop(optional)] large: bool) -> impl IntoView {
    let (glyph_class, name_class) = if large {
        ("text-3xl text-pink-500", "ml-2 text-xl font-bold text-gray-900")
    } else {
        ("text-2xl text-pink-500", "ml-2 text-lg font-bold")
    };

    view! {
        <Glyph icon=Icon::Heart class=glyph_class />
        <span class=name_class>{name}</span>
    }
}
