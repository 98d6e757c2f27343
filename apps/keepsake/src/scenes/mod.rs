//! The six phase views. Each is built fresh on mount and discarded on
//! unmount; nothing here survives a phase change.

pub mod catch_game;
pub mod gallery;
pub mod gateway;
pub mod heart_fill;
pub mod letter;
pub mod scratch_reveal;

pub use catch_game::CatchGameScene;
pub use gallery::GalleryScene;
pub use gateway::GatewayScene;
pub use heart_fill::HeartFillScene;
pub use letter::LetterScene;
pub use scratch_reveal::ScratchRevealScene;

use journey_engine::{Phase, Scene};

/// A fresh scene for `phase`. Always a new instance: scene state is
/// never restored, even when the same phase mounts again after a reset.
pub fn build(phase: Phase) -> Box<dyn Scene> {
    match phase {
        Phase::Gateway => Box::new(GatewayScene::new()),
        Phase::HeartFill => Box::new(HeartFillScene::new()),
        Phase::Gallery => Box::new(GalleryScene::new()),
        Phase::CatchGame => Box::new(CatchGameScene::new()),
        Phase::ScratchReveal => Box::new(ScratchRevealScene::new()),
        Phase::Letter => Box::new(LetterScene::new()),
    }
}
