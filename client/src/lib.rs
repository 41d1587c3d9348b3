//! # client
//!
//! Leptos + WASM frontend for the meme-image editor. Replaces the original
//! React canvas UI with a Rust-native layer.
//!
//! This crate contains the application shell, UI components, and the glue
//! that routes form controls and pointer events into the `canvas` crate's
//! engine via the `CanvasHost` bridge component.

pub mod app;
pub mod components;
pub mod state;
pub mod util;
