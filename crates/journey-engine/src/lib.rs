pub mod ambient;
pub mod api;
pub mod assets;
pub mod core;
pub mod easing;
pub mod input;
pub mod scene;
pub mod systems;

// Re-export key types at crate root for convenience
pub use ambient::{AmbientState, Ripple, RippleId};
pub use api::experience::{Experience, ExperienceConfig, StageContext, Viewport};
pub use api::types::{EntityId, Glyph, HapticPulse, StageEvent};
pub use assets::{AssetCatalog, AssetEntry};
pub use core::journey::JourneyController;
pub use core::phase::Phase;
pub use core::stage::{Entity, Stage, Visual};
pub use core::store::{JourneyStore, MemoryStorage, StorageBackend, StorageError};
pub use core::time::{Countdown, FixedTimestep, Pulse};
pub use easing::{ease, lerp, Easing};
pub use input::queue::{InputEvent, InputQueue};
pub use scene::{Progress, Scene, SceneSignal};
pub use systems::effects::{EffectsState, Particle, Rng};
pub use systems::render::{build_render_buffer, RenderBuffer, RenderInstance};
