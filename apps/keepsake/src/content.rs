//! Copy, captions, asset mappings, and wire constants.
//! Content only — the scenes hold the logic that consumes it.

use journey_engine::{AssetCatalog, AssetEntry, Glyph};
use serde::Serialize;

/// Key holding the persisted journey phase.
pub const STORAGE_KEY: &str = "keepsake.phase";

/// The three words that open the gateway (compared trimmed,
/// case-insensitively).
pub const PASSPHRASE: &str = "i love you";

/// Glyph ids the page maps to drawables.
pub mod glyph {
    use super::Glyph;

    pub const HEART: Glyph = Glyph(1);
    pub const SPARKLE: Glyph = Glyph(2);
    pub const KISS: Glyph = Glyph(3);
    pub const BUBBLE: Glyph = Glyph(4);
}

/// StageEvent kinds (Rust → page).
pub mod event {
    pub const PHASE_CHANGED: f32 = 1.0;
    /// a: 1 shown, 0 dismissed.
    pub const HINT: f32 = 2.0;
    pub const GATE_OPEN: f32 = 3.0;
    /// a: fill value, b: caption tier.
    pub const FILL: f32 = 4.0;
    /// a: score, b: target.
    pub const SCORE: f32 = 5.0;
    /// a/b: world position, c: caption index.
    pub const CATCH: f32 = 6.0;
    pub const REVEAL: f32 = 7.0;
    /// a: revealed characters, b: total characters.
    pub const TYPED: f32 = 8.0;
    pub const LETTER_DONE: f32 = 9.0;
}

/// Custom input kinds (page → Rust).
pub mod control {
    pub const CONTINUE: u32 = 1;
    pub const RESTART: u32 = 2;
}

/// Caption tier for a fill level in [0, 100]. Seven tiers, matching
/// [`FILL_CAPTIONS`].
pub fn fill_tier(fill: f32) -> u32 {
    if fill <= 0.0 {
        0
    } else if fill < 20.0 {
        1
    } else if fill < 40.0 {
        2
    } else if fill < 60.0 {
        3
    } else if fill < 80.0 {
        4
    } else if fill < 95.0 {
        5
    } else {
        6
    }
}

pub const FILL_CAPTIONS: [&str; 7] = [
    "Empty without you...",
    "Feeling your touch...",
    "Our fingers intertwining...",
    "A soft forehead kiss...",
    "Your breath against mine...",
    "Overflowing with love...",
    "Complete. Forever.",
];

pub fn fill_caption(fill: f32) -> &'static str {
    FILL_CAPTIONS[fill_tier(fill) as usize]
}

/// One caption floats up per successful catch.
pub const CATCH_CAPTIONS: [&str; 8] = [
    "My heartbeat!",
    "Inhale your love...",
    "Soft lips...",
    "Always yours.",
    "Caught you.",
    "Sweet nectar.",
    "Soul bond.",
    "Pure bliss.",
];

/// Image assets the gallery and reveal scenes reference by id.
pub fn asset_catalog() -> AssetCatalog {
    AssetCatalog::new(vec![
        AssetEntry {
            id: "glance".into(),
            filename: "glance.png".into(),
            label: "School Memory".into(),
        },
        AssetEntry {
            id: "hand".into(),
            filename: "hand.png".into(),
            label: "Hand Holding".into(),
        },
        AssetEntry {
            id: "kiss".into(),
            filename: "kisss.png".into(),
            label: "Quiet Moment".into(),
        },
        AssetEntry {
            id: "ride".into(),
            filename: "ola.png".into(),
            label: "Evening Ride".into(),
        },
        AssetEntry {
            id: "sanctuary".into(),
            filename: "intimate.png".into(),
            label: "Sanctuary Reveal".into(),
        },
    ])
}

/// One gallery entry: an image plus the words that go with it.
#[derive(Debug, Clone, Serialize)]
pub struct Memory {
    pub id: String,
    pub title: String,
    pub passage: String,
    pub image: String,
}

pub fn memories(catalog: &AssetCatalog) -> Vec<Memory> {
    let entry = |id: &str, title: &str, passage: &str| Memory {
        id: id.into(),
        title: title.into(),
        passage: passage.into(),
        image: catalog.path_for(id),
    };
    vec![
        entry(
            "glance",
            "The Sanctuary of Glances.",
            "The classroom was never about the blackboards or the lectures. \
             It was about the gravity of your presence, and the dust motes \
             dancing in the sunlight between us.",
        ),
        entry(
            "hand",
            "Intertwined Fingers.",
            "A specific kind of magic happens when our hands find each \
             other. It is not skin touching skin; it is a silent \
             conversation. Coming home, in your grasp.",
        ),
        entry(
            "kiss",
            "Breath, Lips, and Forever.",
            "The world stops in that closeness. Whether it is a tender \
             forehead kiss that whispers 'I've got you', or the soft \
             pressure of lips meeting, every second feels eternal.",
        ),
        entry(
            "ride",
            "Chasing Horizons.",
            "With the wind roaring past us and your arms wrapped tight \
             around my waist, the city lights become a blur of gold. You \
             are my only focus.",
        ),
    ]
}

/// Gallery content serialized for the page renderer.
pub fn memories_json() -> String {
    serde_json::to_string(&memories(&asset_catalog())).unwrap_or_else(|_| "[]".into())
}

/// The closing letter. `**...**` spans render emphasized.
pub const LETTER_TEXT: &str = "My dearest,\n\n\
As I sit here, the silence of the night feels heavy with everything I \
want to say to you. I used to think love was something from books, a \
dramatic gesture, a sudden spark. With you it is something far more \
profound.\n\n\
It is the quiet gravity of your hand finding mine under a desk. It is \
the way the city blurs when you hold on tight as we ride, and the way \
you look at me as if I were the only person in the room.\n\n\
I remember every **kiss**, the ones that left me breathless and the \
ones that simply whispered 'I'm here.' You have become the architecture \
of my every thought. Every stolen afternoon was a lesson in joy; every \
secret smile in the hallway, a masterpiece.\n\n\
You are my **soulmate**, my **forever**, and my **home**.\n\n\
I promise to protect what we have built. I promise to be the one who \
waits at the end of every long day, the one who knows the exact shape \
of your silence, and the one who loves you more than words could ever \
hope to capture.\n\n\
I love you, now and always.\n\n\
Forever yours.";
