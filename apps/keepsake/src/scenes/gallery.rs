//! The memory gallery. The page renders the scrollable cards from the
//! exported content; this side holds the records and waits for the
//! explicit continue control. Scrolling is never a completion
//! requirement.

use journey_engine::{InputEvent, InputQueue, Phase, Progress, Scene, SceneSignal, StageContext};

use crate::content::{self, control, Memory};

pub struct GalleryScene {
    memories: Vec<Memory>,
    progress: Progress,
}

impl GalleryScene {
    pub fn new() -> Self {
        Self {
            memories: content::memories(&content::asset_catalog()),
            progress: Progress::default(),
        }
    }

    pub fn memories(&self) -> &[Memory] {
        &self.memories
    }
}

impl Default for GalleryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for GalleryScene {
    fn update(&mut self, _ctx: &mut StageContext, input: &InputQueue, _dt: f32) -> SceneSignal {
        for ev in input.iter() {
            let continued = matches!(
                ev,
                InputEvent::Custom { kind, .. } if *kind == control::CONTINUE
            );
            if continued && self.progress.complete() {
                return SceneSignal::Advance(Phase::CatchGame);
            }
        }
        SceneSignal::Continue
    }
}
