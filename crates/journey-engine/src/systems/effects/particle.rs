//! Glyph particles: short-lived drifting drawables (hearts, sparkles,
//! bubbles) rendered by the page from a flat buffer.

use glam::Vec2;

use crate::api::types::Glyph;
use crate::easing::Easing;

/// A single particle with kinematics and rendering state.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub glyph: Glyph,
    pub spin: f32,
    pub rotation: f32,
    pub drag: f32,
    pub age: f32,
    pub lifetime: f32,
    /// Curve shaping the fade-out over the particle's life.
    pub fade: Easing,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, glyph: Glyph, lifetime: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            glyph,
            spin: 0.0,
            rotation: 0.0,
            drag: 0.0,
            age: 0.0,
            lifetime,
            fade: Easing::Linear,
        }
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_drag(mut self, drag: f32) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_fade(mut self, fade: Easing) -> Self {
        self.fade = fade;
        self
    }

    /// Advance kinematics. Returns false once expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.age += dt;
        if self.age >= self.lifetime {
            return false;
        }
        let damping = (1.0 - self.drag * dt).max(0.0);
        self.vel *= damping;
        self.pos += self.vel * dt;
        self.rotation += self.spin * dt;
        true
    }

    /// Current opacity: 1 at birth, 0 at expiry, shaped by `fade`.
    pub fn alpha(&self) -> f32 {
        let t = (self.age / self.lifetime).clamp(0.0, 1.0);
        self.fade.apply(1.0 - t)
    }
}
