//! Top-level experience: wires the journey controller to the scenes.

use journey_engine::{
    Experience, ExperienceConfig, InputQueue, JourneyController, JourneyStore, Scene, SceneSignal,
    StageContext, StageEvent, StorageBackend,
};

use crate::content::{self, event};
use crate::scenes;

const FIXED_DT: f32 = 1.0 / 60.0;

/// The six-phase keepsake experience.
///
/// Exactly one scene is mounted at any time. A completion signal
/// advances the journey, persists the transition, and swaps in a fresh
/// instance of the next scene; the terminal scene's signal resets
/// everything back to the gateway.
pub struct Keepsake {
    controller: JourneyController,
    scene: Box<dyn Scene>,
}

impl Keepsake {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        let store = JourneyStore::with_key(storage, content::STORAGE_KEY);
        Self {
            controller: JourneyController::new(store),
            scene: scenes::build(journey_engine::Phase::Gateway),
        }
    }

    /// Swap in a fresh scene for the controller's current phase. The
    /// stage is cleared so nothing of the old scene lingers; ambient
    /// state and in-flight particles deliberately survive the swap.
    fn mount_current(&mut self, ctx: &mut StageContext) {
        let phase = self.controller.phase();
        ctx.stage.clear();
        self.scene = scenes::build(phase);
        self.scene.enter(ctx);
        ctx.emit_event(StageEvent::new(
            event::PHASE_CHANGED,
            phase.index() as f32,
            0.0,
            0.0,
        ));
        log::info!("mounted phase {}", phase.index());
    }
}

impl Experience for Keepsake {
    fn config(&self) -> ExperienceConfig {
        ExperienceConfig {
            fixed_dt: FIXED_DT,
            ..ExperienceConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut StageContext) {
        self.controller.initialize();
        self.mount_current(ctx);
    }

    fn update(&mut self, ctx: &mut StageContext, input: &InputQueue) {
        match self.scene.update(ctx, input, FIXED_DT) {
            SceneSignal::Continue => {}
            SceneSignal::Advance(next) => {
                self.controller.advance(next);
                self.mount_current(ctx);
            }
            SceneSignal::Reset => {
                self.controller.reset();
                self.mount_current(ctx);
            }
        }
    }

    fn phase_index(&self) -> u32 {
        self.controller.phase().index()
    }
}
