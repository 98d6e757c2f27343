//! Flat entity storage for whatever the active scene puts on screen.
//! Designed for dozens of entities, not thousands.

use glam::Vec2;

use crate::api::types::{EntityId, Glyph};

/// What an entity looks like. Entities without a visual are logic-only
/// and skipped by the render pass.
#[derive(Debug, Clone, Copy)]
pub struct Visual {
    pub glyph: Glyph,
    pub alpha: f32,
}

impl Visual {
    pub fn new(glyph: Glyph) -> Self {
        Self { glyph, alpha: 1.0 }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Fat entity: one struct with optional parts, favoring simplicity over
/// ECS purity.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub tag: String,
    pub active: bool,
    pub pos: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    pub visual: Option<Visual>,
}

impl Entity {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            visual: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_visual(mut self, visual: Visual) -> Self {
        self.visual = Some(visual);
        self
    }
}

/// The set of entities currently on screen.
pub struct Stage {
    entities: Vec<Entity>,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by id. Returns it if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        self.entities
            .iter()
            .position(|e| e.id == id)
            .map(|idx| self.entities.swap_remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Entity> {
        self.entities.iter().filter(|e| e.tag == tag).collect()
    }

    /// Keep only the entities for which `keep` answers true.
    pub fn retain(&mut self, keep: impl FnMut(&Entity) -> bool) {
        self.entities.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Remove everything. Called when a scene unmounts.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}
