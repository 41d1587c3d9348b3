//! Bridge component between the Leptos UI and the imperative `canvas::Engine`.
//!
//! Mounts the editing `<canvas>` element, installs the engine once the
//! element exists, and maps pointer events into engine gestures. Each event
//! handler applies the gesture and renders synchronously through
//! [`mutate_engine`]; the component itself holds no document state.

use leptos::prelude::*;

use canvas::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use canvas::engine::Engine;

use crate::state::editor::{EditorState, EngineHandle};
use crate::util::canvas_input::pointer_point;
use crate::util::engine_bridge::{mutate_engine, render_now, sync_editor_state};

/// Canvas host — owns the engine lifecycle for the editing surface.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let engine = expect_context::<EngineHandle>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    {
        let engine = engine.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.is_installed() {
                return;
            }
            engine.install(Engine::new(canvas));
            render_now(&engine);
            sync_editor_state(&engine, editor);
        });
    }

    let on_pointer_down = {
        let engine = engine.clone();
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            if let Some(canvas) = canvas_ref.get() {
                if canvas.set_pointer_capture(ev.pointer_id()).is_err() {
                    log::debug!("pointer capture unavailable; drag ends on leave instead");
                }
            }
            let point = pointer_point(&ev);
            mutate_engine(&engine, editor, |e| e.on_pointer_down(point));
        }
    };

    let on_pointer_move = {
        let engine = engine.clone();
        move |ev: leptos::ev::PointerEvent| {
            let point = pointer_point(&ev);
            mutate_engine(&engine, editor, |e| e.on_pointer_move(point));
        }
    };

    let on_pointer_up = {
        let engine = engine.clone();
        move |ev: leptos::ev::PointerEvent| {
            if let Some(canvas) = canvas_ref.get() {
                if canvas.release_pointer_capture(ev.pointer_id()).is_err() {
                    log::debug!("pointer capture already released");
                }
            }
            mutate_engine(&engine, editor, |e| e.on_pointer_up());
        }
    };

    // Leaving the surface terminates the drag exactly like a release.
    let on_pointer_leave = {
        let engine = engine.clone();
        move |_ev: leptos::ev::PointerEvent| {
            mutate_engine(&engine, editor, |e| e.on_pointer_up());
        }
    };

    view! {
        <canvas
            class="canvas-host"
            width=SURFACE_WIDTH
            height=SURFACE_HEIGHT
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
