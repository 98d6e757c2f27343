//! Per-frame sprite instance buffer, read by the page renderer through
//! a raw pointer over shared WASM memory.

use bytemuck::{Pod, Zeroable};

use crate::core::stage::Entity;

/// Per-instance render data. Must match the page-side protocol:
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// World-space rendered width.
    pub scale_x: f32,
    /// World-space rendered height.
    pub scale_y: f32,
    /// Glyph id after lookup in the page's atlas.
    pub glyph: f32,
    /// Opacity (0.0 invisible, 1.0 opaque).
    pub alpha: f32,
    /// Reserved for the page-side protocol.
    pub reserved: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// All sprite instances for the current frame.
pub struct RenderBuffer {
    instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}

/// Build the instance buffer from the stage. Inactive entities and
/// entities without a visual are skipped.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let visual = match &entity.visual {
            Some(v) => v,
            None => continue,
        };
        buffer.push(RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            rotation: entity.rotation,
            scale_x: entity.scale.x,
            scale_y: entity.scale.y,
            glyph: visual.glyph.0 as f32,
            alpha: visual.alpha,
            reserved: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{EntityId, Glyph};
    use crate::core::stage::{Stage, Visual};
    use glam::Vec2;

    #[test]
    fn instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), 32);
        assert_eq!(RenderInstance::FLOATS, 8);
    }

    #[test]
    fn skips_invisible_and_inactive() {
        let mut stage = Stage::new();
        stage.spawn(
            Entity::new(EntityId(1))
                .with_pos(Vec2::new(1.0, 2.0))
                .with_visual(Visual::new(Glyph(3))),
        );
        stage.spawn(Entity::new(EntityId(2))); // no visual
        let mut dormant = Entity::new(EntityId(3)).with_visual(Visual::new(Glyph(3)));
        dormant.active = false;
        stage.spawn(dormant);

        let mut buffer = RenderBuffer::default();
        build_render_buffer(stage.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }

    #[test]
    fn instance_carries_entity_state() {
        let mut stage = Stage::new();
        stage.spawn(
            Entity::new(EntityId(1))
                .with_pos(Vec2::new(10.0, 20.0))
                .with_scale(Vec2::new(48.0, 48.0))
                .with_rotation(0.5)
                .with_visual(Visual::new(Glyph(7)).with_alpha(0.8)),
        );
        let mut buffer = RenderBuffer::default();
        build_render_buffer(stage.iter(), &mut buffer);
        let floats =
            unsafe { std::slice::from_raw_parts(buffer.instances_ptr(), RenderInstance::FLOATS) };
        assert_eq!(floats, &[10.0, 20.0, 0.5, 48.0, 48.0, 7.0, 0.8, 0.0]);
    }
}
