pub mod config;
pub mod content;
pub mod controllers;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
