use journey_engine::{
    build_render_buffer, AmbientState, EffectsState, Experience, ExperienceConfig, FixedTimestep,
    InputEvent, InputQueue, RenderBuffer, RenderInstance, StageContext, StageEvent,
};

use crate::haptics;

/// Generic runner that wires up the experience loop.
///
/// Each concrete experience creates a `thread_local!` ExperienceRunner
/// and exports free functions via `#[wasm_bindgen]` (see
/// `export_experience!`), because wasm-bindgen cannot export generic
/// structs directly.
///
/// Pointer events are routed twice on purpose: into the process-wide
/// ambient layer (pointer tracking, ripples) and into the input queue
/// the active scene reads. The ambient layer keeps running no matter
/// which scene is mounted.
pub struct ExperienceRunner<E: Experience> {
    experience: E,
    ctx: StageContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: ExperienceConfig,
    initialized: bool,
}

impl<E: Experience> ExperienceRunner<E> {
    pub fn new(experience: E) -> Self {
        let config = experience.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let ctx = StageContext::new(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);

        Self {
            experience,
            ctx,
            input: InputQueue::new(),
            render_buffer,
            timestep,
            config,
            initialized: false,
        }
    }

    /// Initialize the experience. Call once after construction.
    pub fn init(&mut self) {
        self.experience.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push a raw input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Pointer moved: feed the ambient layer, then queue for the scene.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.ctx.ambient.pointer_moved(x, y);
        self.input.push(InputEvent::PointerMove { x, y });
    }

    /// Primary press: one ripple in the ambient layer, then queue.
    pub fn pointer_pressed(&mut self, x: f32, y: f32) {
        self.ctx.ambient.pointer_pressed(x, y);
        self.input.push(InputEvent::PointerDown { x, y });
    }

    pub fn pointer_released(&mut self, x: f32, y: f32) {
        self.input.push(InputEvent::PointerUp { x, y });
    }

    /// The drawing surface was resized.
    pub fn resized(&mut self, width: f32, height: f32) {
        self.ctx.viewport.set(width, height);
    }

    /// Run one frame: fixed-step updates, then buffer rebuilds.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.experience.update(&mut self.ctx, &self.input);
            self.ctx.effects.tick(self.timestep.dt());
            self.ctx.ambient.tick(self.timestep.dt());
        }
        // Only consume input that a step had the chance to observe.
        if steps > 0 {
            self.input.drain();
        }

        build_render_buffer(self.ctx.stage.iter(), &mut self.render_buffer);
        self.ctx.effects.rebuild_buffer();
        self.ctx.ambient.rebuild_buffer();

        for pulse in self.ctx.haptics.drain(..) {
            haptics::vibrate(&pulse);
        }
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn particles_ptr(&self) -> *const f32 {
        self.ctx.effects.buffer_ptr()
    }

    pub fn particle_count(&self) -> u32 {
        self.ctx.effects.buffer_particle_count() as u32
    }

    pub fn ripples_ptr(&self) -> *const f32 {
        self.ctx.ambient.buffer_ptr()
    }

    pub fn ripple_count(&self) -> u32 {
        self.ctx.ambient.ripple_count() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn pointer_x(&self) -> f32 {
        self.ctx.ambient.pointer().x
    }

    pub fn pointer_y(&self) -> f32 {
        self.ctx.ambient.pointer().y
    }

    pub fn phase_index(&self) -> u32 {
        self.experience.phase_index()
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity and layout accessors (read by the page once) ----

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }

    pub fn max_particles(&self) -> u32 {
        self.config.max_particles as u32
    }

    pub fn instance_floats(&self) -> u32 {
        RenderInstance::FLOATS as u32
    }

    pub fn particle_floats(&self) -> u32 {
        EffectsState::PARTICLE_FLOATS as u32
    }

    pub fn ripple_floats(&self) -> u32 {
        AmbientState::RIPPLE_FLOATS as u32
    }

    pub fn event_floats(&self) -> u32 {
        StageEvent::FLOATS as u32
    }
}
