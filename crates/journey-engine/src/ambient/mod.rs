//! Process-wide pointer tracking and press ripples.
//!
//! This layer never reads or writes phase state. It is created once at
//! startup, ticked every fixed step for the life of the process, and is
//! untouched by scene mounts and unmounts.

use glam::Vec2;

/// Monotonic ripple identifier. Distinguishes concurrent ripples; never
/// reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RippleId(pub u64);

/// A transient press-feedback record. Ages independently of any further
/// input and self-destructs after [`Ripple::LIFETIME`].
#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    pub id: RippleId,
    pub pos: Vec2,
    pub age: f32,
}

impl Ripple {
    /// Seconds a ripple stays in the active set.
    pub const LIFETIME: f32 = 1.0;

    /// Normalized progress of this ripple's animation, in [0, 1).
    pub fn progress(&self) -> f32 {
        (self.age / Self::LIFETIME).clamp(0.0, 1.0)
    }
}

/// Pointer position plus the set of live ripples, published to the page
/// as a flat float buffer.
pub struct AmbientState {
    pointer: Vec2,
    ripples: Vec<Ripple>,
    next_seq: u64,
    buffer: Vec<f32>,
}

impl AmbientState {
    /// Floats per ripple in the published buffer: x, y, progress.
    pub const RIPPLE_FLOATS: usize = 3;

    pub fn new() -> Self {
        Self {
            pointer: Vec2::ZERO,
            ripples: Vec::new(),
            next_seq: 0,
            buffer: Vec::with_capacity(32 * Self::RIPPLE_FLOATS),
        }
    }

    /// Last observed pointer position, last-writer-wins.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Register a primary press: updates the pointer and spawns one
    /// ripple with its own expiry, independent of any other press.
    pub fn pointer_pressed(&mut self, x: f32, y: f32) -> RippleId {
        self.pointer = Vec2::new(x, y);
        let id = RippleId(self.next_seq);
        self.next_seq += 1;
        self.ripples.push(Ripple {
            id,
            pos: Vec2::new(x, y),
            age: 0.0,
        });
        id
    }

    /// Age all ripples, dropping the expired ones.
    pub fn tick(&mut self, dt: f32) {
        for ripple in &mut self.ripples {
            ripple.age += dt;
        }
        self.ripples.retain(|r| r.age < Ripple::LIFETIME);
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    /// Parallax offset for a layer with the given strength. The page
    /// applies its own cosmetic smoothing on top.
    pub fn parallax_offset(&self, strength: f32) -> Vec2 {
        self.pointer * strength
    }

    /// Rebuild the flat [x, y, progress] buffer for the page.
    pub fn rebuild_buffer(&mut self) {
        self.buffer.clear();
        for ripple in &self.ripples {
            self.buffer.push(ripple.pos.x);
            self.buffer.push(ripple.pos.y);
            self.buffer.push(ripple.progress());
        }
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn ripple_count(&self) -> usize {
        self.ripples.len()
    }
}

impl Default for AmbientState {
    fn default() -> Self {
        Self::new()
    }
}
