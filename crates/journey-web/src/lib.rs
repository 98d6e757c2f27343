pub mod haptics;
pub mod runner;
pub mod storage;

pub use runner::ExperienceRunner;
pub use storage::BrowserStorage;

/// Generate all `#[wasm_bindgen]` exports for an experience.
///
/// Expands to:
/// - `thread_local!` storage for the ExperienceRunner
/// - a `with_runner()` helper function
/// - the full wasm-bindgen surface (init, tick, input routing, data
///   accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use journey_web::ExperienceRunner;
///
/// mod app;
/// use app::MyExperience;
///
/// journey_web::export_experience!(MyExperience, "my-experience");
/// ```
///
/// # Arguments
///
/// - `$experience_type`: a struct implementing
///   `journey_engine::Experience` with a
///   `new(Box<dyn StorageBackend>)` constructor — it receives the
///   browser's local storage as its persistence backend.
/// - `$experience_name`: a string literal used in the init log message.
///
/// Touch handling note: the page is expected to forward only the first
/// active touch point into the pointer exports.
#[macro_export]
macro_rules! export_experience {
    ($experience_type:ty, $experience_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::ExperienceRunner<$experience_type>>> =
                RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::ExperienceRunner<$experience_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Experience not initialized. Call journey_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn journey_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let experience = <$experience_type>::new($crate::BrowserStorage::boxed());
            let runner = $crate::ExperienceRunner::new(experience);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $experience_name);
        }

        #[wasm_bindgen]
        pub fn journey_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        // ---- Input routing ----

        #[wasm_bindgen]
        pub fn journey_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.pointer_pressed(x, y));
        }

        #[wasm_bindgen]
        pub fn journey_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.pointer_released(x, y));
        }

        #[wasm_bindgen]
        pub fn journey_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.pointer_moved(x, y));
        }

        #[wasm_bindgen]
        pub fn journey_slider(value: f32) {
            with_runner(|r| {
                r.push_input(journey_engine::InputEvent::SliderChange { value })
            });
        }

        #[wasm_bindgen]
        pub fn journey_text(text: &str) {
            with_runner(|r| {
                r.push_input(journey_engine::InputEvent::TextSubmit {
                    text: text.to_string(),
                })
            });
        }

        #[wasm_bindgen]
        pub fn journey_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| {
                r.push_input(journey_engine::InputEvent::Custom { kind, a, b, c })
            });
        }

        #[wasm_bindgen]
        pub fn journey_resize(width: f32, height: f32) {
            with_runner(|r| r.resized(width, height));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_phase_index() -> u32 {
            with_runner(|r| r.phase_index())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_particles_ptr() -> *const f32 {
            with_runner(|r| r.particles_ptr())
        }

        #[wasm_bindgen]
        pub fn get_particle_count() -> u32 {
            with_runner(|r| r.particle_count())
        }

        #[wasm_bindgen]
        pub fn get_ripples_ptr() -> *const f32 {
            with_runner(|r| r.ripples_ptr())
        }

        #[wasm_bindgen]
        pub fn get_ripple_count() -> u32 {
            with_runner(|r| r.ripple_count())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_event_count() -> u32 {
            with_runner(|r| r.event_count())
        }

        #[wasm_bindgen]
        pub fn get_pointer_x() -> f32 {
            with_runner(|r| r.pointer_x())
        }

        #[wasm_bindgen]
        pub fn get_pointer_y() -> f32 {
            with_runner(|r| r.pointer_y())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        // ---- Capacity and layout accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_particles() -> u32 {
            with_runner(|r| r.max_particles())
        }

        #[wasm_bindgen]
        pub fn get_instance_floats() -> u32 {
            with_runner(|r| r.instance_floats())
        }

        #[wasm_bindgen]
        pub fn get_particle_floats() -> u32 {
            with_runner(|r| r.particle_floats())
        }

        #[wasm_bindgen]
        pub fn get_ripple_floats() -> u32 {
            with_runner(|r| r.ripple_floats())
        }

        #[wasm_bindgen]
        pub fn get_event_floats() -> u32 {
            with_runner(|r| r.event_floats())
        }
    };
}
