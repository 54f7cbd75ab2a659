pub mod config;
pub mod greeting;
pub mod scroll;
pub mod state;
pub mod streaming;
pub mod theme;
pub mod timing;
pub mod types;
pub mod ui;
pub mod views;
