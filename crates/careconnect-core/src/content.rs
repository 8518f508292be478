//! Page Content
//!
//! Static descriptors and copy rendered by the landing page.

use serde::Serialize;

/// Glyphs used across the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Heart,
    Users,
    ChefHat,
    ShoppingBag,
    Stethoscope,
    CheckCircle,
    ArrowRight,
    Bell,
    Eye,
    Gift,
}

impl Icon {
    /// Text glyph drawn in place of the icon
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Heart => "\u{2764}",
            Self::Users => "\u{1F465}",
            Self::ChefHat => "\u{1F9D1}\u{200D}\u{1F373}",
            Self::ShoppingBag => "\u{1F6CD}",
            Self::Stethoscope => "\u{1FA7A}",
            Self::CheckCircle => "\u{2705}",
            Self::ArrowRight => "\u{2192}",
            Self::Bell => "\u{1F514}",
            Self::Eye => "\u{1F441}",
            Self::Gift => "\u{1F381}",
        }
    }

    /// Stable name, used for `data-icon` attributes
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Users => "users",
            Self::ChefHat => "chef_hat",
            Self::ShoppingBag => "shopping_bag",
            Self::Stethoscope => "stethoscope",
            Self::CheckCircle => "check_circle",
            Self::ArrowRight => "arrow_right",
            Self::Bell => "bell",
            Self::Eye => "eye",
            Self::Gift => "gift",
        }
    }
}

/// One card in the feature grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureDescriptor {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

/// One item in the "Why Sign Up?" list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BenefitDescriptor {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[FeatureDescriptor] = &[
    FeatureDescriptor {
        title: "Trusted Nanny Services",
        icon: Icon::Users,
        description: "Find and book verified nannies on demand with our intuitive scheduling system.",
    },
    FeatureDescriptor {
        title: "AI-Powered Meal Planning",
        icon: Icon::ChefHat,
        description: "Get personalized meal plans and recipes tailored to your kitchen and child's needs.",
    },
    FeatureDescriptor {
        title: "Childcare Essentials",
        icon: Icon::ShoppingBag,
        description: "Shop curated products and enjoy exclusive deals on essential items.",
    },
    FeatureDescriptor {
        title: "Expert Support",
        icon: Icon::Stethoscope,
        description: "Connect with pediatricians, psychologists, and other childcare experts.",
    },
];

pub const BENEFITS: &[BenefitDescriptor] = &[
    BenefitDescriptor {
        icon: Icon::Bell,
        title: "Be in the Know",
        description: "Get the latest updates on our progress",
    },
    BenefitDescriptor {
        icon: Icon::Eye,
        title: "Sneak Peeks",
        description: "Access early previews of our features",
    },
    BenefitDescriptor {
        icon: Icon::Gift,
        title: "Exclusive Offers",
        description: "Be the first to try the app when it launches",
    },
];

// Shell copy
pub const HERO_HEADLINE: &str = "Be the First to Know!";
pub const HERO_TAGLINE: &str = "Parenting made simpler, smarter, and stress-free \u{2014} that's the vision behind CareConnect. Sign up now for early access!";
pub const FEATURES_HEADING: &str = "What is CareConnect?";
pub const BENEFITS_HEADING: &str = "Why Sign Up?";
pub const FOOTER_BLURB: &str =
    "Together, we're reimagining what it means to care for our children and ourselves.";

// Signup card copy
pub const EMAIL_LABEL: &str = "Email Address";
pub const EMAIL_PLACEHOLDER: &str = "Enter your email";
pub const SIGNUP_BUTTON: &str = "Sign Up";
pub const PRIVACY_NOTE: &str =
    "We value your privacy and promise to only send relevant updates (no spam, ever!)";
pub const CONFIRMATION_TITLE: &str = "Thank You for Signing Up!";
pub const CONFIRMATION_BODY: &str =
    "We'll keep you updated on all the exciting developments at CareConnect.";
