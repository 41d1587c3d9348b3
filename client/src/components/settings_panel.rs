//! Settings panel: per-overlay styling controls, add/export actions, and
//! background upload.
//!
//! Reads from the `EditorState` mirror and routes every edit through the
//! engine, so the panel never owns document state of its own. Editable
//! fields apply a sparse overlay update on change; the delete button removes
//! the overlay permanently.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use canvas::consts::{FONT_SIZE_MAX, FONT_SIZE_MIN, ROTATION_MAX_DEG};
use canvas::doc::{OverlayId, PartialTextOverlay};
use canvas::engine::Engine;
use canvas::image::load_background_image;

use crate::state::editor::{EditorState, EngineHandle};
use crate::util::canvas_input::{parse_font_size, parse_rotation};
use crate::util::engine_bridge::mutate_engine;
use crate::util::export::download_png;

/// Settings panel for the whole session: upload, per-overlay cards, and the
/// add/save actions.
#[component]
pub fn SettingsPanel() -> impl IntoView {
    let engine = expect_context::<EngineHandle>();
    let editor = expect_context::<RwSignal<EditorState>>();

    let on_upload = {
        let engine = engine.clone();
        move |ev: leptos::ev::Event| {
            let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let engine = engine.clone();
            spawn_local(async move {
                match load_background_image(&file).await {
                    Ok(image) => mutate_engine(&engine, editor, |e| e.set_background(image)),
                    // The load routine already logged the details; the prior
                    // background stays in place.
                    Err(err) => log::warn!("background unchanged: {err}"),
                }
            });
        }
    };

    let on_add = {
        let engine = engine.clone();
        move |_| mutate_engine(&engine, editor, Engine::add_overlay)
    };

    let on_save = {
        let engine = engine.clone();
        move |_| download_png(&engine)
    };

    let overlay_ids = move || editor.with(|state| state.overlays.iter().map(|o| o.id).collect::<Vec<_>>());

    view! {
        <div class="settings-panel">
            <div class="settings-panel__upload">
                <label for="image-upload">"Upload Image"</label>
                <input id="image-upload" type="file" accept="image/*" on:change=on_upload/>
            </div>

            <h2 class="settings-panel__title">"Text Settings"</h2>
            <For each=overlay_ids key=|id| *id children=move |id| view! { <OverlayCard id=id/> }/>

            <div class="settings-panel__actions">
                <button class="btn btn--add" on:click=on_add>
                    "Add Text"
                </button>
                <button class="btn btn--save" on:click=on_save>
                    "Save Image"
                </button>
            </div>
        </div>
    }
}

/// Edit card for a single overlay.
#[component]
fn OverlayCard(id: OverlayId) -> impl IntoView {
    let engine = expect_context::<EngineHandle>();
    let editor = expect_context::<RwSignal<EditorState>>();

    let text = move || editor.with(|s| s.overlay(id).map(|o| o.text.clone()).unwrap_or_default());
    let size = move || editor.with(|s| s.overlay(id).map_or(0, |o| o.size));
    let rotation = move || editor.with(|s| s.overlay(id).map_or(0, |o| o.rotation));
    let color = move || editor.with(|s| s.overlay(id).map(|o| o.color.clone()).unwrap_or_default());

    let update = {
        let engine = engine.clone();
        move |fields: PartialTextOverlay| mutate_engine(&engine, editor, |e| e.update_overlay(id, fields))
    };

    let on_text = {
        let update = update.clone();
        move |ev: leptos::ev::Event| {
            update(PartialTextOverlay { text: Some(event_target_value(&ev)), ..PartialTextOverlay::default() });
        }
    };

    let on_size = {
        let update = update.clone();
        move |ev: leptos::ev::Event| {
            if let Some(size) = parse_font_size(&event_target_value(&ev)) {
                update(PartialTextOverlay { size: Some(size), ..PartialTextOverlay::default() });
            }
        }
    };

    let on_color = {
        let update = update.clone();
        move |ev: leptos::ev::Event| {
            update(PartialTextOverlay { color: Some(event_target_value(&ev)), ..PartialTextOverlay::default() });
        }
    };

    let on_rotation = {
        let update = update.clone();
        move |ev: leptos::ev::Event| {
            if let Some(rotation) = parse_rotation(&event_target_value(&ev)) {
                update(PartialTextOverlay { rotation: Some(rotation), ..PartialTextOverlay::default() });
            }
        }
    };

    let on_delete = {
        let engine = engine.clone();
        move |_| mutate_engine(&engine, editor, |e| e.remove_overlay(id))
    };

    view! {
        <div class="overlay-card">
            <span class="overlay-card__id">{id}</span>
            <div class="overlay-card__fields">
                <label class="overlay-card__field">
                    "text input"
                    <input type="text" placeholder="Enter text" prop:value=text on:input=on_text/>
                </label>
                <label class="overlay-card__field">
                    "font size"
                    <input type="range" min=FONT_SIZE_MIN max=FONT_SIZE_MAX prop:value=size on:input=on_size/>
                    <span>{move || format!("{}px", size())}</span>
                </label>
                <label class="overlay-card__field">
                    "text color"
                    <input type="color" prop:value=color on:input=on_color/>
                </label>
                <label class="overlay-card__field">
                    "rotation"
                    <input type="range" min=0 max=ROTATION_MAX_DEG prop:value=rotation on:input=on_rotation/>
                    <span>{move || format!("{}\u{00B0}", rotation())}</span>
                </label>
            </div>
            <button class="btn btn--danger" on:click=on_delete>
                "X"
            </button>
        </div>
    }
}
