//! The passphrase gate. Three words of devotion open it.

use journey_engine::{
    Countdown, InputEvent, InputQueue, Phase, Progress, Scene, SceneSignal, StageContext,
    StageEvent,
};

use crate::content::{self, event, glyph};

/// Seconds the celebration burst plays before the journey advances.
const CELEBRATION_SECS: f32 = 1.2;
/// Seconds the wrong-phrase hint stays visible.
const HINT_SECS: f32 = 2.0;
const BURST_COUNT: usize = 50;

pub struct GatewayScene {
    hint: Countdown,
    celebration: Countdown,
    progress: Progress,
}

impl GatewayScene {
    pub fn new() -> Self {
        Self {
            hint: Countdown::idle(),
            celebration: Countdown::idle(),
            progress: Progress::default(),
        }
    }

    /// Trimmed, case-insensitive match against the passphrase.
    fn phrase_matches(text: &str) -> bool {
        text.trim().eq_ignore_ascii_case(content::PASSPHRASE)
    }
}

impl Default for GatewayScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for GatewayScene {
    fn update(&mut self, ctx: &mut StageContext, input: &InputQueue, dt: f32) -> SceneSignal {
        for ev in input.iter() {
            let text = match ev {
                InputEvent::TextSubmit { text } => text,
                _ => continue,
            };
            // Submissions during the celebration are ignored.
            if self.celebration.running() || self.progress.is_completed() {
                continue;
            }
            if Self::phrase_matches(text) {
                self.hint.cancel();
                self.celebration.start(CELEBRATION_SECS);
                ctx.effects.spawn_burst(
                    ctx.viewport.center(),
                    BURST_COUNT,
                    (120.0, 420.0),
                    (18.0, 44.0),
                    1.5,
                    &[glyph::HEART, glyph::SPARKLE],
                );
                ctx.emit_event(StageEvent::new(event::GATE_OPEN, 0.0, 0.0, 0.0));
            } else {
                self.hint.start(HINT_SECS);
                ctx.emit_event(StageEvent::new(event::HINT, 1.0, 0.0, 0.0));
            }
        }

        if self.hint.tick(dt) {
            ctx.emit_event(StageEvent::new(event::HINT, 0.0, 0.0, 0.0));
        }

        if self.celebration.tick(dt) && self.progress.complete() {
            return SceneSignal::Advance(Phase::HeartFill);
        }
        SceneSignal::Continue
    }
}
