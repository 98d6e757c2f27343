use glam::Vec2;

use crate::ambient::AmbientState;
use crate::api::types::{EntityId, HapticPulse, StageEvent};
use crate::core::stage::Stage;
use crate::input::queue::InputQueue;
use crate::systems::effects::EffectsState;

/// Configuration for the runtime, provided by the experience.
#[derive(Debug, Clone)]
pub struct ExperienceConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in layout units.
    pub world_width: f32,
    /// World height in layout units.
    pub world_height: f32,
    /// Maximum number of sprite instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of live particles (default: 256).
    pub max_particles: usize,
    /// Seed for the effects RNG.
    pub effects_seed: u64,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_instances: 256,
            max_particles: 256,
            effects_seed: 42,
        }
    }
}

/// Current drawing surface size in world units. Read at update time for
/// spawn ranges and panel placement; updated by the bridge on resize.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn set(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// The core contract the runner drives.
pub trait Experience {
    /// Return runtime configuration. Called once before init.
    fn config(&self) -> ExperienceConfig {
        ExperienceConfig::default()
    }

    /// Set up initial state and mount the first scene.
    fn init(&mut self, ctx: &mut StageContext);

    /// One fixed logic step.
    fn update(&mut self, ctx: &mut StageContext, input: &InputQueue);

    /// Rank of the currently active step, for the host UI.
    fn phase_index(&self) -> u32 {
        0
    }
}

/// Mutable runtime state passed to the experience every step.
///
/// This is the one process-scoped context object: created by the runner
/// at startup, torn down with it. The ambient layer and effects live
/// here so they survive scene mounts and unmounts; the stage is cleared
/// by the experience whenever a scene swaps.
pub struct StageContext {
    pub stage: Stage,
    pub effects: EffectsState,
    pub ambient: AmbientState,
    pub viewport: Viewport,
    pub events: Vec<StageEvent>,
    pub haptics: Vec<HapticPulse>,
    next_id: u32,
}

impl StageContext {
    pub fn new(config: &ExperienceConfig) -> Self {
        Self {
            stage: Stage::new(),
            effects: EffectsState::with_capacity(config.effects_seed, config.max_particles),
            ambient: AmbientState::new(),
            viewport: Viewport::new(config.world_width, config.world_height),
            events: Vec::new(),
            haptics: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity id.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Queue a UI event for the page.
    pub fn emit_event(&mut self, event: StageEvent) {
        self.events.push(event);
    }

    /// Request a vibration pulse. Dropped silently where unsupported.
    pub fn request_haptic(&mut self, pulse: HapticPulse) {
        self.haptics.push(pulse);
    }

    /// Clear per-frame transient data (events, haptic requests).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.haptics.clear();
    }
}

impl Default for StageContext {
    fn default() -> Self {
        Self::new(&ExperienceConfig::default())
    }
}
