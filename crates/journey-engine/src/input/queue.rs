/// Input event types the experience understands.
/// Touch input is folded into the pointer trio by the bridge, which
/// forwards only the first active touch point.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A press began at world coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A press ended at world coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// The pointer moved to world coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A continuous control in the page changed, value in [0, 100].
    SliderChange { value: f32 },
    /// The page submitted a line of text (the passphrase field).
    TextSubmit { text: String },
    /// A discrete UI control fired (continue / restart buttons).
    /// `kind` identifies the control; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events. The page writes events in; the experience
/// reads them each frame and the runner drains them afterwards.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events, clearing the queue.
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
