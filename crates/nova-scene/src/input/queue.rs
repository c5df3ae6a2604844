/// Input event types the scene understands.
/// Positions are normalized device coordinates in [-1, 1], +Y up.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// The cursor entered a planet's hover zone. `description` and `color`
    /// are the zone element's data attributes, passed through as-is.
    HoverEnter { zone: usize, description: String, color: String },
    /// The cursor left the hovered zone.
    HoverLeave,
    /// A click landed on a zone, or outside every zone when `None`.
    Click { zone: Option<usize> },
    /// Explicit per-planet zoom hook.
    ZoomTo { index: usize },
    /// Explicit "back to start" zoom hook.
    ZoomOrigin,
    /// The viewport changed size, in CSS pixels.
    Resize { width: f32, height: f32 },
    /// A custom event from the UI layer.
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust drains them once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
