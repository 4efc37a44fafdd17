use std::cell::RefCell;
use std::rc::Rc;

use console_core::{GestureCursor, Point, WindowConfig, WindowController, WindowGeometry};
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, warn};
use dioxus_web::WebEventExt;
use wasm_bindgen::JsCast;

use crate::interop::DocumentGestureScope;

const HANDLE_SIZE_PX: u32 = 16;

type GestureSlot = Rc<RefCell<Option<DocumentGestureScope>>>;

fn client_point(e: &PointerEvent) -> Point {
    if let Some(point) = e.data().try_as_web_event().and_then(|event| {
        event
            .dyn_ref::<web_sys::PointerEvent>()
            .map(|pointer| Point::new(f64::from(pointer.client_x()), f64::from(pointer.client_y())))
    }) {
        return point;
    }

    let point = e.data().client_coordinates();
    Point::new(point.x, point.y)
}

/// Inline style for the window frame. A minimized window drops its height
/// so only the header renders.
pub fn window_style(geometry: &WindowGeometry) -> String {
    let height = geometry
        .rendered_height()
        .map(|h| format!("height: {h}px;"))
        .unwrap_or_default();
    let radius = if geometry.minimized {
        "var(--radius-lg, 8px) var(--radius-lg, 8px) 0 0"
    } else {
        "var(--radius-lg, 8px)"
    };
    format!(
        "position: absolute; left: {}px; top: {}px; width: {}px; {height} z-index: 30; \
         display: flex; flex-direction: column; background: rgba(0, 0, 0, 0.3); \
         backdrop-filter: blur(12px); border: 1px solid var(--border-color, #3a3d3e); \
         border-radius: {radius}; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5);",
        geometry.x, geometry.y, geometry.width
    )
}

/// Install document listeners for the gesture the controller just started,
/// following only the pointer that pressed. Without them the gesture could
/// never end, so a failure abandons it.
fn acquire_document_scope(
    mut controller: Signal<WindowController>,
    slot: &GestureSlot,
    cursor: GestureCursor,
    pointer_id: i32,
) {
    let release = slot.clone();
    let mut moving = controller;
    let mut ending = controller;
    let scope = DocumentGestureScope::acquire(
        cursor,
        pointer_id,
        move |point| {
            moving.write().pointer_move(point);
        },
        move |_| {
            if let Some(gesture) = ending.write().end_gesture() {
                debug!("gesture ended: {:?}", gesture.cursor());
            }
            // The listener running now belongs to the scope; drop it afterwards.
            let release = release.clone();
            wasm_bindgen_futures::spawn_local(async move {
                release.borrow_mut().take();
            });
        },
    );

    match scope {
        Ok(scope) => {
            *slot.borrow_mut() = Some(scope);
        }
        Err(e) => {
            warn!("Failed to observe document pointer events: {:?}", e);
            controller.write().end_gesture();
        }
    }
}

/// Floating panel that can be dragged by its header, resized from the
/// bottom-right handle and minimized to its header.
///
/// `config` seeds the controller at mount. Later changes only move the
/// window to the new default position, and only until the user has dragged
/// or resized it.
#[component]
pub fn ResizableWindow(title: String, config: WindowConfig, children: Element) -> Element {
    let mut controller = use_signal(|| WindowController::new(config));
    let gesture_scope: GestureSlot = use_hook(|| Rc::new(RefCell::new(None)));

    {
        let gesture_scope = gesture_scope.clone();
        use_drop(move || {
            gesture_scope.borrow_mut().take();
        });
    }

    use_effect(use_reactive(&config, move |config| {
        let moved = controller
            .write()
            .apply_default_position(config.default_x, config.default_y);
        if moved {
            debug!("window placed at default ({}, {})", config.default_x, config.default_y);
        }
    }));

    let geometry = controller.read().geometry();
    let frame_style = window_style(&geometry);
    let scope_for_header = gesture_scope.clone();
    let scope_for_handle = gesture_scope;

    rsx! {
        div {
            class: "resizable-window",
            role: "dialog",
            "aria-label": title.clone(),
            style: "{frame_style}",

            div {
                class: "window-header",
                style: "display: flex; align-items: center; justify-content: space-between; padding: 0.5rem 1rem; background: rgba(0, 0, 0, 0.3); border-bottom: 1px solid var(--border-color, #3a3d3e); cursor: move; user-select: none; touch-action: none;",
                onpointerdown: move |e| {
                    let started = controller.write().begin_drag(client_point(&e));
                    match started {
                        Ok(cursor) => {
                            e.prevent_default();
                            acquire_document_scope(controller, &scope_for_header, cursor, e.data().pointer_id());
                        }
                        Err(reason) => debug!("drag not started: {:?}", reason),
                    }
                },
                span { style: "font-size: 0.875rem; font-weight: 600; color: #fff;", "{title}" }
                MinimizeToggle {
                    minimized: geometry.minimized,
                    on_toggle: move |_| {
                        let minimized = controller.write().toggle_minimized();
                        debug!("window minimized: {}", minimized);
                    },
                }
            }

            if !geometry.minimized {
                div {
                    class: "window-content",
                    style: "flex: 1; min-height: 0; overflow: hidden; border-radius: 0 0 var(--radius-lg, 8px) var(--radius-lg, 8px);",
                    {children}
                }

                div {
                    class: "resize-handle",
                    style: "position: absolute; right: 0; bottom: 0; width: {HANDLE_SIZE_PX}px; height: {HANDLE_SIZE_PX}px; cursor: nwse-resize; user-select: none; touch-action: none; background: linear-gradient(135deg, transparent 50%, rgba(255, 255, 255, 0.3) 50%);",
                    onpointerdown: move |e| {
                        // Never let the header see this press.
                        e.stop_propagation();
                        let started = controller.write().begin_resize(client_point(&e));
                        match started {
                            Ok(cursor) => {
                                e.prevent_default();
                                acquire_document_scope(controller, &scope_for_handle, cursor, e.data().pointer_id());
                            }
                            Err(reason) => debug!("resize not started: {:?}", reason),
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn MinimizeToggle(minimized: bool, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "window-controls",
            style: "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; color: #9ca3af; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;",
            onpointerdown: move |e| e.stop_propagation(),
            "aria-label": if minimized { "Restore" } else { "Minimize" },
            onclick: move |e| {
                e.stop_propagation();
                on_toggle.call(());
            },
            if minimized { "□" } else { "−" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(minimized: bool) -> WindowGeometry {
        WindowGeometry {
            x: 1500.0,
            y: 80.0,
            width: 750.0,
            height: 421.875,
            minimized,
        }
    }

    #[test]
    fn style_places_window_at_geometry() {
        let style = window_style(&geometry(false));
        assert!(style.contains("left: 1500px;"));
        assert!(style.contains("top: 80px;"));
        assert!(style.contains("width: 750px;"));
        assert!(style.contains("height: 421.875px;"));
    }

    #[test]
    fn minimized_style_collapses_height_but_keeps_width() {
        let style = window_style(&geometry(true));
        assert!(!style.contains("height:"));
        assert!(style.contains("width: 750px;"));
        assert!(style.contains("0 0;"));
    }
}
