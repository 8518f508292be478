//! Email signup card
//!
//! Shows the form until an email is accepted, then the thank-you panel for
//! the rest of the page's life.

use std::sync::Arc;

use leptos::{ev::SubmitEvent, prelude::*};

use careconnect_core::{
    content::{
        CONFIRMATION_BODY, CONFIRMATION_TITLE, EMAIL_LABEL, EMAIL_PLACEHOLDER, PRIVACY_NOTE,
        SIGNUP_BUTTON,
    },
    Icon, SignupForm, SignupPanel, SignupSink,
};

use crate::components::{Alert, Card, Glyph};

#[component]
pub fn SignupCard(sink: Arc<dyn SignupSink>) -> impl IntoView {
    let form = RwSignal::new(SignupForm::new());
    let sink = StoredValue::new(sink);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        sink.with_value(|sink| {
            form.update(|form| {
                if let Err(err) = form.submit(&**sink) {
                    web_sys::console::debug_1(&format!("Signup rejected: {err}").into());
                }
            });
        });
    };

    view! {
        <div class="max-w-md mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <Show
                when=move || form.with(SignupForm::panel) == SignupPanel::Form
                fallback=|| view! { <Confirmation /> }
            >
                <Card class="hover:shadow-lg transition-shadow">
                    <form on:submit=on_submit class="p-6 space-y-4">
                        {move || form.with(SignupForm::error_message).map(|message| view! { <Alert message /> })}
                        <div class="flex flex-col space-y-2">
                            <label for="signup-email" class="text-sm font-medium text-gray-700">
                                {EMAIL_LABEL}
                            </label>
                            <div class="flex">
                                <input
                                    id="signup-email"
                                    type="email"
                                    class="flex-1 rounded-l-md border border-gray-300 px-3 py-2"
                                    placeholder=EMAIL_PLACEHOLDER
                                    prop:value=move || form.with(|f| f.email().to_owned())
                                    on:input=move |ev| form.update(|f| f.update_email(event_target_value(&ev)))
                                />
                                <button
                                    type="submit"
                                    class="bg-pink-500 text-white px-4 py-2 rounded-r-md hover:bg-pink-600 transition-colors flex items-center"
                                >
                                    {SIGNUP_BUTTON}
                                    <Glyph icon=Icon::ArrowRight class="ml-2" />
                                </button>
                            </div>
                        </div>
                        <p class="text-xs text-gray-500 text-center">{PRIVACY_NOTE}</p>
                    </form>
                </Card>
            </Show>
        </div>
    }
}

#[component]
fn Confirmation() -> impl IntoView {
    view! {
        <Card class="hover:shadow-lg transition-shadow">
            <div class="p-6 text-center">
                <Glyph icon=Icon::CheckCircle class="block text-5xl text-green-500 mx-auto mb-4" />
                <h3 class="text-xl font-bold text-gray-900 mb-2">{CONFIRMATION_TITLE}</h3>
                <p class="text-gray-500">{CONFIRMATION_BODY}</p>
            </div>
        </Card>
    }
}
