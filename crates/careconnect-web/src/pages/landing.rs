//! Landing Page

use std::sync::Arc;

use leptos::prelude::*;

use careconnect_core::{SignupSink, SiteConfig};

use crate::sections::{Benefits, Features, Footer, Hero, Nav, SignupCard};

#[component]
pub fn LandingPage(config: SiteConfig, sink: Arc<dyn SignupSink>) -> impl IntoView {
    view! {
        <Nav brand=config.brand.clone() />
        <main>
            <Hero />
            <SignupCard sink />
            <Features />
            <Benefits />
        </main>
        <Footer config />
    }
}
