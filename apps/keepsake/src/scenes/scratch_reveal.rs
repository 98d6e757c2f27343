//! Scratch away the veil. A celled mask stands in for the canvas
//! alpha-sampling of a scratch card: the brush clears every cell whose
//! center it covers, and the reveal triggers once strictly more than
//! half of all cells are clear.

use glam::Vec2;
use journey_engine::{
    InputEvent, InputQueue, Phase, Progress, Scene, SceneSignal, StageContext, StageEvent,
};

use crate::content::event;

const BRUSH_RADIUS: f32 = 60.0;
/// Cleared fraction that must be strictly exceeded to reveal.
const REVEAL_FRACTION: f32 = 0.5;
const CELL_SIZE: f32 = 16.0;
const PANEL_W: f32 = 340.0;
const PANEL_H: f32 = 470.0;

/// Grid of equally weighted cells over the veiled panel. Coverage is
/// the cleared-cell fraction, the discrete analog of counting
/// transparent pixels.
pub struct ScratchMask {
    cols: usize,
    rows: usize,
    cell: f32,
    cleared: Vec<bool>,
    cleared_count: usize,
}

impl ScratchMask {
    pub fn new(width: f32, height: f32, cell: f32) -> Self {
        let cols = (width / cell).ceil().max(1.0) as usize;
        let rows = (height / cell).ceil().max(1.0) as usize;
        Self {
            cols,
            rows,
            cell,
            cleared: vec![false; cols * rows],
            cleared_count: 0,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cleared.len()
    }

    pub fn cleared_count(&self) -> usize {
        self.cleared_count
    }

    /// Fraction of cells cleared so far, in [0, 1].
    pub fn coverage(&self) -> f32 {
        self.cleared_count as f32 / self.cleared.len() as f32
    }

    /// Clear every cell whose center lies within `radius` of `center`
    /// (both in mask-local coordinates).
    pub fn scrub(&mut self, center: Vec2, radius: f32) {
        let min_col = (((center.x - radius) / self.cell).floor().max(0.0)) as usize;
        let max_col = ((center.x + radius) / self.cell).ceil().min(self.cols as f32) as usize;
        let min_row = (((center.y - radius) / self.cell).floor().max(0.0)) as usize;
        let max_row = ((center.y + radius) / self.cell).ceil().min(self.rows as f32) as usize;
        let radius_sq = radius * radius;

        for row in min_row..max_row {
            for col in min_col..max_col {
                let idx = row * self.cols + col;
                if self.cleared[idx] {
                    continue;
                }
                let cell_center = Vec2::new(
                    (col as f32 + 0.5) * self.cell,
                    (row as f32 + 0.5) * self.cell,
                );
                if cell_center.distance_squared(center) <= radius_sq {
                    self.cleared[idx] = true;
                    self.cleared_count += 1;
                }
            }
        }
    }
}

pub struct ScratchRevealScene {
    mask: ScratchMask,
    panel_origin: Vec2,
    scrubbing: bool,
    progress: Progress,
}

impl ScratchRevealScene {
    pub fn new() -> Self {
        Self {
            mask: ScratchMask::new(PANEL_W, PANEL_H, CELL_SIZE),
            panel_origin: Vec2::ZERO,
            scrubbing: false,
            progress: Progress::default(),
        }
    }

    pub fn coverage(&self) -> f32 {
        self.mask.coverage()
    }

    fn scrub_at(&mut self, world: Vec2) {
        self.mask.scrub(world - self.panel_origin, BRUSH_RADIUS);
    }
}

impl Default for ScratchRevealScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for ScratchRevealScene {
    fn enter(&mut self, ctx: &mut StageContext) {
        // Panel centered in the current viewport.
        self.panel_origin = ctx.viewport.center() - Vec2::new(PANEL_W, PANEL_H) * 0.5;
    }

    fn update(&mut self, ctx: &mut StageContext, input: &InputQueue, _dt: f32) -> SceneSignal {
        for ev in input.iter() {
            match ev {
                InputEvent::PointerDown { x, y } => {
                    self.scrubbing = true;
                    self.scrub_at(Vec2::new(*x, *y));
                }
                InputEvent::PointerMove { x, y } if self.scrubbing => {
                    self.scrub_at(Vec2::new(*x, *y));
                }
                InputEvent::PointerUp { .. } => {
                    self.scrubbing = false;
                }
                _ => {}
            }
        }

        if self.mask.coverage() > REVEAL_FRACTION && self.progress.complete() {
            ctx.emit_event(StageEvent::new(event::REVEAL, 0.0, 0.0, 0.0));
            return SceneSignal::Advance(Phase::Letter);
        }
        SceneSignal::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    /// Clear exactly `n` cells of a 10x100 mask by scrubbing each cell
    /// center with a sub-cell brush.
    fn mask_with_cleared(n: usize) -> ScratchMask {
        let mut mask = ScratchMask::new(160.0, 1600.0, 16.0);
        assert_eq!(mask.cell_count(), 1000);
        let mut cleared = 0;
        'outer: for row in 0..100 {
            for col in 0..10 {
                if cleared == n {
                    break 'outer;
                }
                mask.scrub(
                    Vec2::new((col as f32 + 0.5) * 16.0, (row as f32 + 0.5) * 16.0),
                    1.0,
                );
                cleared += 1;
            }
        }
        assert_eq!(mask.cleared_count(), n);
        mask
    }

    #[test]
    fn coverage_just_over_half_reveals() {
        // 501 of 1000 cells: 50.1 % — strictly over the line.
        assert!(mask_with_cleared(501).coverage() > REVEAL_FRACTION);
    }

    #[test]
    fn coverage_just_under_half_does_not_reveal() {
        // 499 of 1000 cells: 49.9 %.
        assert!(mask_with_cleared(499).coverage() <= REVEAL_FRACTION);
    }

    #[test]
    fn scrubbing_the_same_spot_counts_once() {
        let mut mask = ScratchMask::new(160.0, 160.0, 16.0);
        mask.scrub(Vec2::new(80.0, 80.0), 40.0);
        let first = mask.cleared_count();
        mask.scrub(Vec2::new(80.0, 80.0), 40.0);
        assert_eq!(mask.cleared_count(), first);
    }

    #[test]
    fn drag_must_start_with_a_press() {
        let mut scene = ScratchRevealScene::new();
        let mut ctx = StageContext::default();
        scene.enter(&mut ctx);
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x: 400.0, y: 300.0 });
        scene.update(&mut ctx, &input, DT);
        assert_eq!(scene.coverage(), 0.0);
    }

    #[test]
    fn full_sweep_reveals_and_advances_once() {
        let mut scene = ScratchRevealScene::new();
        let mut ctx = StageContext::default();
        scene.enter(&mut ctx);

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 230.0, y: 65.0 });
        let mut y = 65.0;
        while y < 540.0 {
            let mut x = 230.0;
            while x < 575.0 {
                input.push(InputEvent::PointerMove { x, y });
                x += 40.0;
            }
            y += 40.0;
        }
        let signal = scene.update(&mut ctx, &input, DT);
        assert_eq!(signal, SceneSignal::Advance(Phase::Letter));
        assert!(ctx.events.iter().any(|e| e.kind == event::REVEAL));

        // The latch holds even if scrubbing continues.
        let mut more = InputQueue::new();
        more.push(InputEvent::PointerMove { x: 400.0, y: 300.0 });
        assert_eq!(scene.update(&mut ctx, &more, DT), SceneSignal::Continue);
    }

    #[test]
    fn release_stops_the_scrub() {
        let mut scene = ScratchRevealScene::new();
        let mut ctx = StageContext::default();
        scene.enter(&mut ctx);
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 400.0, y: 300.0 });
        input.push(InputEvent::PointerUp { x: 400.0, y: 300.0 });
        input.push(InputEvent::PointerMove { x: 300.0, y: 200.0 });
        scene.update(&mut ctx, &input, DT);
        let after_press = scene.coverage();
        assert!(after_press > 0.0);

        let mut drag = InputQueue::new();
        drag.push(InputEvent::PointerMove { x: 260.0, y: 150.0 });
        scene.update(&mut ctx, &drag, DT);
        assert_eq!(scene.coverage(), after_press);
    }
}
