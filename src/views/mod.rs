pub mod chat;
pub mod settings;
pub mod shared;
pub mod sidebar;

pub use chat::ChatView;
pub use settings::SettingsDialog;
pub use sidebar::Sidebar;
