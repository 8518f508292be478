//! # careconnect-core
//!
//! State and content behind the CareConnect "coming soon" page, free of any
//! UI framework so it can be exercised natively.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Landing page                           │
//! │  ┌─────────────┐  ┌──────────────────┐  ┌─────────────────┐  │
//! │  │ SignupForm  │──│   SignupSink     │  │ FeatureShowcase │  │
//! │  │ (validate)  │  │   (Strategy)     │  │ (active index)  │  │
//! │  └─────────────┘  └──────────────────┘  └─────────────────┘  │
//! │          content: FEATURES · BENEFITS · shell copy            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `SignupSink` trait decides where a validated email goes: the
//! console, a tracing event, an HTTP endpoint, or an in-memory list in tests.

pub mod config;
pub mod content;
pub mod error;
pub mod showcase;
pub mod signup;
pub mod sink;

pub use config::SiteConfig;
pub use content::{BenefitDescriptor, FeatureDescriptor, Icon, BENEFITS, FEATURES};
pub use error::{ConfigError, Result, SignupError};
pub use showcase::FeatureShowcase;
pub use signup::{validate_email, SignupForm, SignupPanel};
pub use sink::{MemorySink, SignupRequest, SignupSink, TracingSink};
