//! Catch the falling kisses. Fifteen distinct catches complete the
//! scene; the fifteenth fires the advance exactly once.

use glam::Vec2;
use journey_engine::{
    Entity, EntityId, HapticPulse, InputEvent, InputQueue, Phase, Progress, Pulse, Rng, Scene,
    SceneSignal, StageContext, StageEvent, Visual,
};

use crate::content::{self, event, glyph};

/// Catches required to complete the scene.
pub const TARGET: u32 = 15;
const SPAWN_PERIOD: f32 = 0.7;
const SPAWN_MARGIN: f32 = 40.0;
const SPAWN_Y: f32 = -60.0;
/// Units below the viewport bottom where a missed kiss despawns.
const DESPAWN_BELOW: f32 = 100.0;
const FALL_SPEED: (f32, f32) = (180.0, 420.0);
const CATCH_RADIUS: f32 = 48.0;
const KISS_SIZE: f32 = 48.0;

struct Kiss {
    id: EntityId,
    pos: Vec2,
    speed: f32,
    rotation: f32,
}

pub struct CatchGameScene {
    kisses: Vec<Kiss>,
    spawner: Pulse,
    rng: Rng,
    score: u32,
    progress: Progress,
}

impl CatchGameScene {
    pub fn new() -> Self {
        Self {
            kisses: Vec::new(),
            spawner: Pulse::new(SPAWN_PERIOD),
            rng: Rng::new(97),
            score: 0,
            progress: Progress::default(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    fn spawn_kiss(&mut self, ctx: &mut StageContext) {
        let margin_right = (ctx.viewport.width - SPAWN_MARGIN).max(SPAWN_MARGIN + 1.0);
        let kiss = Kiss {
            id: ctx.next_id(),
            pos: Vec2::new(self.rng.next_range(SPAWN_MARGIN, margin_right), SPAWN_Y),
            speed: self.rng.next_range(FALL_SPEED.0, FALL_SPEED.1),
            rotation: self.rng.next_range(-0.35, 0.35),
        };
        self.kisses.push(kiss);
    }

    fn try_catch(&mut self, ctx: &mut StageContext, tap: Vec2) {
        if self.progress.is_completed() {
            return;
        }
        let caught = self
            .kisses
            .iter()
            .position(|k| k.pos.distance(tap) <= CATCH_RADIUS);
        let kiss = match caught {
            Some(idx) => self.kisses.remove(idx),
            None => return,
        };
        self.score += 1;
        let caption = self.rng.next_int(content::CATCH_CAPTIONS.len() as u32);
        ctx.effects.spawn_burst(
            kiss.pos,
            6,
            (60.0, 160.0),
            (10.0, 22.0),
            1.2,
            &[glyph::SPARKLE],
        );
        ctx.request_haptic(HapticPulse::pattern(15, 10, 15));
        ctx.emit_event(StageEvent::new(
            event::CATCH,
            kiss.pos.x,
            kiss.pos.y,
            caption as f32,
        ));
        ctx.emit_event(StageEvent::new(
            event::SCORE,
            self.score as f32,
            TARGET as f32,
            0.0,
        ));
    }

    /// Mirror the falling kisses into stage entities. Rebuilt every
    /// step; cheap at these entity counts.
    fn sync_stage(&self, ctx: &mut StageContext) {
        ctx.stage.clear();
        for kiss in &self.kisses {
            ctx.stage.spawn(
                Entity::new(kiss.id)
                    .with_tag("kiss")
                    .with_pos(kiss.pos)
                    .with_rotation(kiss.rotation)
                    .with_scale(Vec2::splat(KISS_SIZE))
                    .with_visual(Visual::new(glyph::KISS)),
            );
        }
    }
}

impl Default for CatchGameScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for CatchGameScene {
    fn update(&mut self, ctx: &mut StageContext, input: &InputQueue, dt: f32) -> SceneSignal {
        for _ in 0..self.spawner.tick(dt) {
            self.spawn_kiss(ctx);
        }

        let floor = ctx.viewport.height + DESPAWN_BELOW;
        for kiss in &mut self.kisses {
            kiss.pos.y += kiss.speed * dt;
        }
        self.kisses.retain(|k| k.pos.y < floor);

        for ev in input.iter() {
            if let InputEvent::PointerDown { x, y } = ev {
                self.try_catch(ctx, Vec2::new(*x, *y));
            }
        }

        self.sync_stage(ctx);

        if self.score >= TARGET && self.progress.complete() {
            return SceneSignal::Advance(Phase::ScratchReveal);
        }
        SceneSignal::Continue
    }
}
