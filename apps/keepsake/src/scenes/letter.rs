//! The closing letter: a character-by-character reveal over parsed
//! emphasis segments, heart rain drifting behind it, and the way back
//! to the beginning once every word is on screen.

use journey_engine::{
    InputEvent, InputQueue, Progress, Pulse, Scene, SceneSignal, StageContext, StageEvent,
};
use serde::{Deserialize, Serialize};

use crate::content::{self, control, event, glyph};

/// Reveal cadence in visible characters per second.
const CHARS_PER_SEC: f32 = 320.0;
const RAIN_PERIOD: f32 = 0.4;
const RAIN_LIFETIME: f32 = 8.0;

/// A run of letter text, plain or emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub emphasis: bool,
}

/// Split `**...**` markup into segments. An unpaired trailing marker is
/// kept as literal text.
pub fn parse_segments(text: &str) -> Vec<Segment> {
    let parts: Vec<&str> = text.split("**").collect();
    let mut segments = Vec::new();
    for (i, part) in parts.iter().enumerate() {
        let inside = i % 2 == 1;
        if inside && i == parts.len() - 1 {
            // Opened but never closed: restore the marker literally.
            segments.push(Segment {
                text: format!("**{part}"),
                emphasis: false,
            });
        } else if !part.is_empty() {
            segments.push(Segment {
                text: (*part).to_string(),
                emphasis: inside,
            });
        }
    }
    segments
}

/// The letter's segments as JSON for the page renderer.
pub fn segments_json() -> String {
    serde_json::to_string(&parse_segments(content::LETTER_TEXT)).unwrap_or_else(|_| "[]".into())
}

pub struct LetterScene {
    total_chars: usize,
    revealed: usize,
    type_acc: f32,
    rain: Pulse,
    done: bool,
    progress: Progress,
}

impl LetterScene {
    pub fn new() -> Self {
        let total_chars = parse_segments(content::LETTER_TEXT)
            .iter()
            .map(|s| s.text.chars().count())
            .sum();
        Self {
            total_chars,
            revealed: 0,
            type_acc: 0.0,
            rain: Pulse::new(RAIN_PERIOD),
            done: false,
            progress: Progress::default(),
        }
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Default for LetterScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for LetterScene {
    fn update(&mut self, ctx: &mut StageContext, input: &InputQueue, dt: f32) -> SceneSignal {
        if self.revealed < self.total_chars {
            self.type_acc += dt * CHARS_PER_SEC;
            let step = self.type_acc as usize;
            if step > 0 {
                self.type_acc -= step as f32;
                self.revealed = (self.revealed + step).min(self.total_chars);
                ctx.emit_event(StageEvent::new(
                    event::TYPED,
                    self.revealed as f32,
                    self.total_chars as f32,
                    0.0,
                ));
            }
        } else if !self.done {
            self.done = true;
            ctx.emit_event(StageEvent::new(event::LETTER_DONE, 0.0, 0.0, 0.0));
        }

        for _ in 0..self.rain.tick(dt) {
            ctx.effects.spawn_drift(
                (0.0, ctx.viewport.width),
                -20.0,
                (60.0, 140.0),
                (8.0, 28.0),
                RAIN_LIFETIME,
                glyph::HEART,
            );
        }

        for ev in input.iter() {
            let restart = matches!(
                ev,
                InputEvent::Custom { kind, .. } if *kind == control::RESTART
            );
            // The restart control only exists once the letter is fully
            // on screen; ignore stray events before that.
            if restart && self.done && self.progress.complete() {
                return SceneSignal::Reset;
            }
        }
        SceneSignal::Continue
    }
}
