//! Input mapping, engine bridging, and export helpers shared across
//! components.

pub mod canvas_input;
pub mod engine_bridge;
pub mod export;
