//! The fill meter: a slider pours the heart full. Advances on its own
//! once the level reaches the threshold near the top.

use journey_engine::{
    HapticPulse, InputEvent, InputQueue, Phase, Progress, Pulse, Scene, SceneSignal, StageContext,
    StageEvent,
};

use crate::content::{self, event, glyph};

/// Fill level (out of 100) that completes the scene.
const FULL_THRESHOLD: f32 = 98.0;
/// Bubbles rise only once there is something to bubble through.
const BUBBLE_MIN_FILL: f32 = 10.0;
const BUBBLE_PERIOD: f32 = 0.4;

pub struct HeartFillScene {
    fill: f32,
    tier: u32,
    bubbles: Pulse,
    progress: Progress,
}

impl HeartFillScene {
    pub fn new() -> Self {
        Self {
            fill: 0.0,
            tier: 0,
            bubbles: Pulse::new(BUBBLE_PERIOD),
            progress: Progress::default(),
        }
    }

    pub fn fill(&self) -> f32 {
        self.fill
    }
}

impl Default for HeartFillScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for HeartFillScene {
    fn update(&mut self, ctx: &mut StageContext, input: &InputQueue, dt: f32) -> SceneSignal {
        for ev in input.iter() {
            let value = match ev {
                InputEvent::SliderChange { value } => value.clamp(0.0, 100.0),
                _ => continue,
            };
            if value == self.fill {
                continue;
            }
            self.fill = value;
            // Short pulse for a "ticking" tactile feel on each detent.
            ctx.request_haptic(HapticPulse::tick(10));
            let tier = content::fill_tier(value);
            if tier != self.tier {
                self.tier = tier;
                ctx.emit_event(StageEvent::new(event::FILL, value, tier as f32, 0.0));
            }
        }

        if self.fill > BUBBLE_MIN_FILL {
            let center = ctx.viewport.center();
            for _ in 0..self.bubbles.tick(dt) {
                ctx.effects.spawn_rise(
                    (center.x - 60.0, center.x + 60.0),
                    center.y + 100.0,
                    (40.0, 90.0),
                    (4.0, 10.0),
                    2.0,
                    glyph::BUBBLE,
                );
            }
        }

        if self.fill >= FULL_THRESHOLD && self.progress.complete() {
            return SceneSignal::Advance(Phase::Gallery);
        }
        SceneSignal::Continue
    }
}
