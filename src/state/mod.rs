//! Session state containers.
//!
//! Each store is a plain value with its mutators; the UI owns one of each inside a
//! `Signal` and hands it down as props, so a fresh session is just fresh values.

pub mod conversations;
pub mod glow;
pub mod location;
pub mod models;
pub mod sidebar;

pub use conversations::ConversationStore;
pub use glow::{ColorMode, GlowPreference};
pub use location::{IpApiLookup, LocationError, LocationInfo, LocationLookup};
pub use models::ModelRegistry;
pub use sidebar::SidebarState;
