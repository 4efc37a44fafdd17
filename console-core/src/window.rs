//! Floating window geometry and pointer gestures.
//!
//! The controller is renderer-agnostic: callers feed it pointer positions in
//! client coordinates and read back a [`WindowGeometry`]. At most one gesture
//! is active at a time, modelled as a single `Option<Gesture>` so drag and
//! resize can never both be in flight.

use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_WIDTH: f64 = 400.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 500.0;
pub const DEFAULT_MIN_WIDTH: f64 = 300.0;
pub const DEFAULT_MIN_HEIGHT: f64 = 200.0;
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Mount-time configuration for a floating window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub default_x: f64,
    pub default_y: f64,
    pub default_width: f64,
    pub default_height: f64,
    pub min_width: f64,
    pub min_height: f64,
    pub maintain_aspect_ratio: bool,
    /// width / height
    pub aspect_ratio: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            default_x: 0.0,
            default_y: 0.0,
            default_width: DEFAULT_WINDOW_WIDTH,
            default_height: DEFAULT_WINDOW_HEIGHT,
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            maintain_aspect_ratio: false,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        }
    }
}

impl WindowConfig {
    /// Smallest width a ratio-locked resize may produce.
    ///
    /// Raised above `min_width` when `min_height * aspect_ratio` is larger, so
    /// the derived height never has to be clamped away from the ratio.
    pub fn locked_min_width(&self) -> f64 {
        self.min_width.max(self.min_height * self.aspect_ratio)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub minimized: bool,
}

impl WindowGeometry {
    /// Height to render; `None` while minimized (header only).
    pub fn rendered_height(&self) -> Option<f64> {
        (!self.minimized).then_some(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub anchor_offset_x: f64,
    pub anchor_offset_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub start_pointer_x: f64,
    pub start_pointer_y: f64,
    pub start_width: f64,
    pub start_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Dragging(DragSession),
    Resizing(ResizeSession),
}

impl Gesture {
    pub fn cursor(&self) -> GestureCursor {
        match self {
            Self::Dragging(_) => GestureCursor::Grabbing,
            Self::Resizing(_) => GestureCursor::NwseResize,
        }
    }
}

/// Document cursor held for the duration of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureCursor {
    Grabbing,
    NwseResize,
}

impl GestureCursor {
    pub const fn css_value(self) -> &'static str {
        match self {
            Self::Grabbing => "grabbing",
            Self::NwseResize => "nwse-resize",
        }
    }
}

/// Why a gesture start was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureRejection {
    GestureInProgress,
    Minimized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowController {
    config: WindowConfig,
    geometry: WindowGeometry,
    gesture: Option<Gesture>,
    user_positioned: bool,
}

impl WindowController {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            geometry: WindowGeometry {
                x: config.default_x,
                y: config.default_y,
                width: config.default_width,
                height: config.default_height,
                minimized: false,
            },
            config,
            gesture: None,
            user_positioned: false,
        }
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Some(Gesture::Dragging(_)))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, Some(Gesture::Resizing(_)))
    }

    /// True once the user has dragged or resized the window.
    pub fn user_positioned(&self) -> bool {
        self.user_positioned
    }

    /// Pointer-down on the header.
    pub fn begin_drag(&mut self, pointer: Point) -> Result<GestureCursor, GestureRejection> {
        if self.gesture.is_some() {
            return Err(GestureRejection::GestureInProgress);
        }
        let gesture = Gesture::Dragging(DragSession {
            anchor_offset_x: pointer.x - self.geometry.x,
            anchor_offset_y: pointer.y - self.geometry.y,
        });
        tracing::debug!(x = pointer.x, y = pointer.y, "drag started");
        self.gesture = Some(gesture);
        Ok(gesture.cursor())
    }

    /// Pointer-down on the resize handle. The handle is not rendered while
    /// minimized, so a minimized window refuses the gesture.
    pub fn begin_resize(&mut self, pointer: Point) -> Result<GestureCursor, GestureRejection> {
        if self.gesture.is_some() {
            return Err(GestureRejection::GestureInProgress);
        }
        if self.geometry.minimized {
            return Err(GestureRejection::Minimized);
        }
        let gesture = Gesture::Resizing(ResizeSession {
            start_pointer_x: pointer.x,
            start_pointer_y: pointer.y,
            start_width: self.geometry.width,
            start_height: self.geometry.height,
        });
        tracing::debug!(x = pointer.x, y = pointer.y, "resize started");
        self.gesture = Some(gesture);
        Ok(gesture.cursor())
    }

    /// Document-level pointer move. Returns whether the geometry changed.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(gesture) = self.gesture else {
            return false;
        };

        let next = match gesture {
            Gesture::Dragging(session) => WindowGeometry {
                x: pointer.x - session.anchor_offset_x,
                y: pointer.y - session.anchor_offset_y,
                ..self.geometry
            },
            Gesture::Resizing(session) => {
                let (width, height) = resized_dimensions(&self.config, &session, pointer);
                WindowGeometry {
                    width,
                    height,
                    ..self.geometry
                }
            }
        };

        if next == self.geometry {
            return false;
        }
        self.geometry = next;
        self.user_positioned = true;
        true
    }

    /// Document-level pointer up. Returns the gesture that ended, if any.
    pub fn end_gesture(&mut self) -> Option<Gesture> {
        let ended = self.gesture.take();
        if ended.is_some() {
            tracing::debug!(
                x = self.geometry.x,
                y = self.geometry.y,
                width = self.geometry.width,
                height = self.geometry.height,
                "gesture ended"
            );
        }
        ended
    }

    pub fn set_minimized(&mut self, minimized: bool) {
        self.geometry.minimized = minimized;
    }

    pub fn toggle_minimized(&mut self) -> bool {
        self.geometry.minimized = !self.geometry.minimized;
        self.geometry.minimized
    }

    /// Move to a viewport-derived default, but only before the user has
    /// positioned the window themselves.
    pub fn apply_default_position(&mut self, x: f64, y: f64) -> bool {
        if self.user_positioned || self.gesture.is_some() {
            return false;
        }
        if self.geometry.x == x && self.geometry.y == y {
            return false;
        }
        self.geometry.x = x;
        self.geometry.y = y;
        true
    }
}

fn resized_dimensions(config: &WindowConfig, session: &ResizeSession, pointer: Point) -> (f64, f64) {
    let delta_x = pointer.x - session.start_pointer_x;
    let delta_y = pointer.y - session.start_pointer_y;

    if config.maintain_aspect_ratio {
        let dominant = if delta_x.abs() > delta_y.abs() {
            delta_x
        } else {
            delta_y
        };
        let width = (session.start_width + dominant).max(config.locked_min_width());
        let height = (width / config.aspect_ratio).max(config.min_height);
        (width, height)
    } else {
        (
            (session.start_width + delta_x).max(config.min_width),
            (session.start_height + delta_y).max(config.min_height),
        )
    }
}

/// Left edge that keeps a panel flush against the right side of the viewport.
pub fn right_aligned_x(viewport_width: f64, panel_width: f64, margin: f64) -> f64 {
    (viewport_width - panel_width - margin).max(0.0)
}
