//! Landing page sections

mod benefits;
mod features;
mod footer;
mod hero;
mod nav;
mod signup;

pub use benefits::Benefits;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use signup::SignupCard;
