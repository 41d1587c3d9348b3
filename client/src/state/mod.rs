//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The engine owns the document; `EditorState` is a read-only mirror kept in
//! a signal so components can render reactively without borrowing the engine.

pub mod editor;
