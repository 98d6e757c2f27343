//! Visual effects: glyph particle bursts and drifts.
//!
//! `EffectsState` lives in the long-lived context, not in any scene, so
//! a celebration burst keeps playing across a phase transition.

mod particle;
mod rng;

pub use particle::Particle;
pub use rng::Rng;

use glam::Vec2;

use crate::api::types::Glyph;
use crate::easing::Easing;

/// Container for all live particles, published as a flat float buffer.
pub struct EffectsState {
    particles: Vec<Particle>,
    pub rng: Rng,
    max_particles: usize,
    buffer: Vec<f32>,
}

impl EffectsState {
    /// Floats per particle in the published buffer:
    /// x, y, size, rotation, alpha, glyph.
    pub const PARTICLE_FLOATS: usize = 6;

    pub fn new(seed: u64) -> Self {
        Self::with_capacity(seed, 256)
    }

    pub fn with_capacity(seed: u64, max_particles: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles),
            rng: Rng::new(seed.wrapping_add(7919)),
            max_particles,
            buffer: Vec::with_capacity(max_particles * Self::PARTICLE_FLOATS),
        }
    }

    /// Add a particle, evicting the oldest when at capacity.
    pub fn push(&mut self, particle: Particle) {
        if self.particles.len() >= self.max_particles {
            self.particles.remove(0);
        }
        self.particles.push(particle);
    }

    /// Radial celebration burst: `count` particles flung outward from
    /// `center`, glyphs cycled from `glyphs`, spinning and fading fast.
    pub fn spawn_burst(
        &mut self,
        center: Vec2,
        count: usize,
        speed_range: (f32, f32),
        size_range: (f32, f32),
        lifetime: f32,
        glyphs: &[Glyph],
    ) {
        if glyphs.is_empty() {
            return;
        }
        for i in 0..count {
            let angle = self.rng.next_f32() * std::f32::consts::TAU;
            let speed = self.rng.next_range(speed_range.0, speed_range.1);
            let vel = Vec2::new(angle.cos(), angle.sin()) * speed;
            let size = self.rng.next_range(size_range.0, size_range.1);
            let spin = self.rng.next_range(-6.0, 6.0);
            let particle = Particle::new(center, vel, size, glyphs[i % glyphs.len()], lifetime)
                .with_spin(spin)
                .with_drag(1.5)
                .with_fade(Easing::QuadOut);
            self.push(particle);
        }
    }

    /// One slowly falling drift particle spawned above the viewport,
    /// for rain-style ambience.
    pub fn spawn_drift(
        &mut self,
        x_range: (f32, f32),
        start_y: f32,
        speed_range: (f32, f32),
        size_range: (f32, f32),
        lifetime: f32,
        glyph: Glyph,
    ) {
        let x = self.rng.next_range(x_range.0, x_range.1);
        let speed = self.rng.next_range(speed_range.0, speed_range.1);
        let size = self.rng.next_range(size_range.0, size_range.1);
        let particle = Particle::new(
            Vec2::new(x, start_y),
            Vec2::new(0.0, speed),
            size,
            glyph,
            lifetime,
        )
        .with_fade(Easing::SineInOut);
        self.push(particle);
    }

    /// One rising particle, for bubbles inside the fill meter.
    pub fn spawn_rise(
        &mut self,
        x_range: (f32, f32),
        start_y: f32,
        speed_range: (f32, f32),
        size_range: (f32, f32),
        lifetime: f32,
        glyph: Glyph,
    ) {
        let x = self.rng.next_range(x_range.0, x_range.1);
        let speed = self.rng.next_range(speed_range.0, speed_range.1);
        let size = self.rng.next_range(size_range.0, size_range.1);
        let particle = Particle::new(
            Vec2::new(x, start_y),
            Vec2::new(0.0, -speed),
            size,
            glyph,
            lifetime,
        )
        .with_fade(Easing::QuadOut);
        self.push(particle);
    }

    /// Advance all particles, dropping the expired ones.
    pub fn tick(&mut self, dt: f32) {
        self.particles.retain_mut(|p| p.tick(dt));
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.buffer.clear();
    }

    /// Rebuild the flat per-particle buffer for the page.
    pub fn rebuild_buffer(&mut self) {
        self.buffer.clear();
        for p in &self.particles {
            self.buffer.push(p.pos.x);
            self.buffer.push(p.pos.y);
            self.buffer.push(p.size);
            self.buffer.push(p.rotation);
            self.buffer.push(p.alpha());
            self.buffer.push(p.glyph.0 as f32);
        }
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_particle_count(&self) -> usize {
        self.buffer.len() / Self::PARTICLE_FLOATS
    }
}
