//! Console front-end and relay server wiring for the HANS binary.
mod app;
mod config;
mod effects;
mod input;
mod layout;
mod relay_server;
mod render;

pub use app::run_panel;
pub use config::load_relay_config;
pub use relay_server::run_relay;
