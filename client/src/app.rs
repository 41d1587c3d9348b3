//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::canvas_host::CanvasHost;
use crate::components::settings_panel::SettingsPanel;
use crate::state::editor::{EditorState, EngineHandle};

/// Root application component.
///
/// Provides the shared engine handle and the editor-state mirror to all
/// child components, then lays out the canvas next to the settings panel.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let engine = EngineHandle::default();
    let editor = RwSignal::new(EditorState::default());
    provide_context(engine);
    provide_context(editor);

    view! {
        <Title text="Memeboard"/>
        <main class="editor-layout">
            <header class="editor-header">
                <h1>"Memeboard"</h1>
            </header>
            <div class="editor-body">
                <CanvasHost/>
                <SettingsPanel/>
            </div>
        </main>
    }
}
