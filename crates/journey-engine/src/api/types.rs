use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity on the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Identifies a drawable glyph in the page's glyph atlas.
/// The numeric value maps to an app-defined drawable in the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph(pub u32);

/// A UI event communicated from Rust to the page via SharedArrayBuffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct StageEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl StageEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

/// A vibration request: up to three on/off segments in milliseconds.
/// Zero-length segments are trailing padding, not pauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HapticPulse {
    pub millis: [u32; 3],
}

impl HapticPulse {
    /// A single short pulse, for a "ticking" tactile feel.
    pub fn tick(ms: u32) -> Self {
        Self { millis: [ms, 0, 0] }
    }

    /// An on-off-on pattern.
    pub fn pattern(on_a: u32, off: u32, on_b: u32) -> Self {
        Self {
            millis: [on_a, off, on_b],
        }
    }

    /// Number of meaningful segments (trailing zeros stripped).
    pub fn segments(&self) -> &[u32] {
        let end = self
            .millis
            .iter()
            .rposition(|&m| m != 0)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.millis[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<StageEvent>(), 16);
        assert_eq!(StageEvent::FLOATS, 4);
    }

    #[test]
    fn haptic_tick_has_one_segment() {
        let p = HapticPulse::tick(10);
        assert_eq!(p.segments(), &[10]);
    }

    #[test]
    fn haptic_pattern_keeps_all_segments() {
        let p = HapticPulse::pattern(15, 10, 15);
        assert_eq!(p.segments(), &[15, 10, 15]);
    }
}
