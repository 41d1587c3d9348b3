//! UI components for the editor shell.

pub mod canvas_host;
pub mod settings_panel;
