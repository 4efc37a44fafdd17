use console_core::{GestureCursor, PlaybackError, Point};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CssStyleDeclaration, Document, HtmlElement, HtmlMediaElement, PointerEvent};

/// Browser viewport width in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    if width > 0.0 {
        return Some(width);
    }

    let root = window.document()?.document_element()?;
    Some(f64::from(root.client_width().max(0)))
}

type PointerListener = Closure<dyn FnMut(PointerEvent)>;

/// Document-wide pointer listeners and body cursor/selection overrides held
/// for the lifetime of one gesture. Only events from the pointer that
/// started the gesture reach the handlers. Dropping the scope removes the
/// listeners and restores the body styles that were in place when it was
/// acquired.
pub struct DocumentGestureScope {
    document: Document,
    body: Option<HtmlElement>,
    saved_cursor: String,
    saved_user_select: String,
    on_move: PointerListener,
    on_end: PointerListener,
}

impl DocumentGestureScope {
    /// `on_end` fires on `pointerup` and `pointercancel`. It must not drop
    /// the scope synchronously; the listener is still running at that point.
    pub fn acquire<M, E>(
        cursor: GestureCursor,
        pointer_id: i32,
        on_move: M,
        on_end: E,
    ) -> Result<Self, JsValue>
    where
        M: FnMut(Point) + 'static,
        E: FnMut(Point) + 'static,
    {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document on window"))?;
        let body = document.body();
        let (saved_cursor, saved_user_select) = match &body {
            Some(body) => {
                let style = body.style();
                (
                    style.get_property_value("cursor")?,
                    style.get_property_value("user-select")?,
                )
            }
            None => (String::new(), String::new()),
        };

        // Built before anything is registered so an early return still cleans up.
        let scope = Self {
            document,
            body,
            saved_cursor,
            saved_user_select,
            on_move: pointer_listener(pointer_id, on_move),
            on_end: pointer_listener(pointer_id, on_end),
        };

        let target = &scope.document;
        target.add_event_listener_with_callback(
            "pointermove",
            scope.on_move.as_ref().unchecked_ref(),
        )?;
        for event in ["pointerup", "pointercancel"] {
            target.add_event_listener_with_callback(event, scope.on_end.as_ref().unchecked_ref())?;
        }

        if let Some(body) = &scope.body {
            let style = body.style();
            style.set_property("cursor", cursor.css_value())?;
            style.set_property("user-select", "none")?;
        }
        log::debug!("gesture scope acquired: cursor={}", cursor.css_value());

        Ok(scope)
    }
}

impl Drop for DocumentGestureScope {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            "pointermove",
            self.on_move.as_ref().unchecked_ref(),
        );
        for event in ["pointerup", "pointercancel"] {
            let _ = self
                .document
                .remove_event_listener_with_callback(event, self.on_end.as_ref().unchecked_ref());
        }

        if let Some(body) = &self.body {
            let style = body.style();
            let _ = restore_property(&style, "cursor", &self.saved_cursor);
            let _ = restore_property(&style, "user-select", &self.saved_user_select);
        }
        log::debug!("gesture scope released");
    }
}

fn pointer_listener<F>(pointer_id: i32, mut handler: F) -> PointerListener
where
    F: FnMut(Point) + 'static,
{
    Closure::wrap(Box::new(move |e: PointerEvent| {
        if e.pointer_id() != pointer_id {
            return;
        }
        handler(Point::new(f64::from(e.client_x()), f64::from(e.client_y())));
    }) as Box<dyn FnMut(PointerEvent)>)
}

fn restore_property(style: &CssStyleDeclaration, name: &str, saved: &str) -> Result<(), JsValue> {
    if saved.is_empty() {
        style.remove_property(name).map(|_| ())
    } else {
        style.set_property(name, saved)
    }
}

/// Start playback of the media element with the given id.
pub async fn play_media(element_id: &str) -> Result<(), PlaybackError> {
    let media = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
        .and_then(|element| element.dyn_into::<HtmlMediaElement>().ok())
        .ok_or(PlaybackError::Unavailable)?;

    let promise = media
        .play()
        .map_err(|e| PlaybackError::Rejected(describe_js_error(e)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| PlaybackError::Rejected(describe_js_error(e)))
}

/// `name: message` of a DOMException, or the debug form of anything else.
fn describe_js_error(error: JsValue) -> String {
    let field = |key: &str| {
        js_sys::Reflect::get(&error, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    };
    let name = field("name");
    let message = field("message");
    match (name.is_empty(), message.is_empty()) {
        (true, true) => format!("{error:?}"),
        (true, false) => message,
        (false, true) => name,
        (false, false) => format!("{name}: {message}"),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // Synthetic pointer events carry pointer id 0.
    const PRIMARY_POINTER: i32 = 0;

    fn document() -> Document {
        web_sys::window()
            .and_then(|window| window.document())
            .expect("document")
    }

    fn body_style() -> CssStyleDeclaration {
        document().body().expect("body").style()
    }

    fn property(name: &str) -> String {
        body_style().get_property_value(name).expect("property")
    }

    fn dispatch(kind: &str) {
        let event = PointerEvent::new(kind).expect("pointer event");
        document().dispatch_event(&event).expect("dispatch");
    }

    fn counting_scope(cursor: GestureCursor, pointer_id: i32) -> (DocumentGestureScope, Rc<Cell<u32>>) {
        let moves = Rc::new(Cell::new(0));
        let counter = moves.clone();
        let scope = DocumentGestureScope::acquire(
            cursor,
            pointer_id,
            move |_| counter.set(counter.get() + 1),
            |_| {},
        )
        .expect("acquire");
        (scope, moves)
    }

    #[wasm_bindgen_test]
    fn acquire_overrides_cursor_and_selection() {
        let (scope, _) = counting_scope(GestureCursor::Grabbing, PRIMARY_POINTER);
        assert_eq!(property("cursor"), "grabbing");
        assert_eq!(property("user-select"), "none");
        drop(scope);
    }

    #[wasm_bindgen_test]
    fn drop_restores_previous_body_styles() {
        let style = body_style();
        style.set_property("cursor", "crosshair").expect("set cursor");
        style.remove_property("user-select").expect("clear user-select");

        let (scope, _) = counting_scope(GestureCursor::NwseResize, PRIMARY_POINTER);
        assert_eq!(property("cursor"), "nwse-resize");
        drop(scope);

        assert_eq!(property("cursor"), "crosshair");
        assert_eq!(property("user-select"), "");
        style.remove_property("cursor").expect("clear cursor");
    }

    #[wasm_bindgen_test]
    fn listeners_stop_after_drop() {
        let (scope, moves) = counting_scope(GestureCursor::Grabbing, PRIMARY_POINTER);
        dispatch("pointermove");
        assert_eq!(moves.get(), 1);

        drop(scope);
        dispatch("pointermove");
        assert_eq!(moves.get(), 1);
    }

    #[wasm_bindgen_test]
    fn other_pointers_are_ignored() {
        let (scope, moves) = counting_scope(GestureCursor::Grabbing, PRIMARY_POINTER + 7);
        dispatch("pointermove");
        assert_eq!(moves.get(), 0);
        drop(scope);
    }
}
