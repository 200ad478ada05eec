pub mod config;
pub mod content;
pub mod logging;
pub mod presentation;
pub mod sections;
pub mod theme;
pub mod view_state;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
