//! Drives the complete experience through real input events, the same
//! way the web runner does, and checks the journey's invariants end to
//! end.

use journey_engine::{
    Experience, InputEvent, InputQueue, MemoryStorage, StageContext, StorageBackend, StorageError,
};
use keepsake::content::{self, control};
use keepsake::Keepsake;

const DT: f32 = 1.0 / 60.0;

struct Harness {
    app: Keepsake,
    ctx: StageContext,
    input: InputQueue,
    cells: MemoryStorage,
}

impl Harness {
    fn new() -> Self {
        let cells = MemoryStorage::new();
        let mut app = Keepsake::new(Box::new(cells.clone()));
        let mut ctx = StageContext::new(&app.config());
        app.init(&mut ctx);
        Self {
            app,
            ctx,
            input: InputQueue::new(),
            cells,
        }
    }

    fn phase(&self) -> u32 {
        self.app.phase_index()
    }

    fn saved(&self) -> Option<String> {
        self.cells.peek(content::STORAGE_KEY)
    }

    fn push(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    fn press(&mut self, kind: u32) {
        self.push(InputEvent::Custom {
            kind,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
    }

    /// One frame, mirroring the runner: update, tick the long-lived
    /// layers, drain input.
    fn step(&mut self) {
        self.app.update(&mut self.ctx, &self.input);
        self.ctx.effects.tick(DT);
        self.ctx.ambient.tick(DT);
        self.input.drain();
    }

    fn run(&mut self, secs: f32) {
        for _ in 0..(secs / DT).ceil() as usize {
            self.step();
        }
    }

    /// Play the catch minigame: tap the highest falling kiss each frame
    /// until the scene advances.
    fn play_catch_game(&mut self) {
        for _ in 0..20_000 {
            if self.phase() != 3 {
                return;
            }
            let target = self
                .ctx
                .stage
                .find_all_by_tag("kiss")
                .into_iter()
                .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|k| k.pos);
            if let Some(pos) = target {
                self.push(InputEvent::PointerDown { x: pos.x, y: pos.y });
            }
            self.step();
        }
        panic!("catch game never completed");
    }

    /// Scratch the whole veil panel in one press-and-drag sweep.
    fn scratch_everything(&mut self) {
        self.push(InputEvent::PointerDown { x: 230.0, y: 65.0 });
        let mut y = 65.0;
        while y < 540.0 {
            let mut x = 230.0;
            while x < 575.0 {
                self.push(InputEvent::PointerMove { x, y });
                x += 40.0;
            }
            y += 40.0;
        }
        self.step();
    }
}

#[test]
fn full_forward_run_visits_every_phase_in_order() {
    let mut h = Harness::new();
    let mut visited = vec![h.phase()];
    let mut note = |h: &Harness, visited: &mut Vec<u32>| {
        if visited.last() != Some(&h.phase()) {
            visited.push(h.phase());
        }
    };

    // Gateway: a wrong phrase keeps the gate shut.
    h.push(InputEvent::TextSubmit {
        text: "i love u".into(),
    });
    h.step();
    assert_eq!(h.phase(), 0);

    // The right phrase opens it after the celebration.
    h.push(InputEvent::TextSubmit {
        text: " I LOVE YOU ".into(),
    });
    h.step();
    h.run(1.3);
    assert_eq!(h.phase(), 1);
    assert_eq!(h.saved().as_deref(), Some("1"));
    note(&h, &mut visited);

    // HeartFill: just under the threshold holds, the threshold advances.
    h.push(InputEvent::SliderChange { value: 97.5 });
    h.step();
    assert_eq!(h.phase(), 1);
    h.push(InputEvent::SliderChange { value: 99.0 });
    h.step();
    assert_eq!(h.phase(), 2);
    assert_eq!(h.saved().as_deref(), Some("2"));
    note(&h, &mut visited);

    // Gallery: the explicit continue control.
    h.press(control::CONTINUE);
    h.step();
    assert_eq!(h.phase(), 3);
    assert_eq!(h.saved().as_deref(), Some("3"));
    note(&h, &mut visited);

    // CatchGame: fifteen catches.
    h.play_catch_game();
    assert_eq!(h.phase(), 4);
    assert_eq!(h.saved().as_deref(), Some("4"));
    note(&h, &mut visited);

    // ScratchReveal: clear well past half the veil.
    h.scratch_everything();
    assert_eq!(h.phase(), 5);
    assert_eq!(h.saved().as_deref(), Some("5"));
    note(&h, &mut visited);

    // Letter: wait out the reveal, then restart.
    h.run(8.0);
    h.press(control::RESTART);
    h.step();
    assert_eq!(h.phase(), 0);
    note(&h, &mut visited);

    assert_eq!(visited, vec![0, 1, 2, 3, 4, 5, 0]);
    // The reset cleared the saved progress.
    assert_eq!(h.saved(), None);
}

#[test]
fn restart_control_is_inert_before_the_letter_finishes() {
    let mut h = Harness::new();
    h.push(InputEvent::TextSubmit {
        text: "i love you".into(),
    });
    h.step();
    h.run(1.3);
    assert_eq!(h.phase(), 1);

    // A stray restart in a non-terminal phase does nothing.
    h.press(control::RESTART);
    h.step();
    assert_eq!(h.phase(), 1);
}

#[test]
fn saved_progress_resumes_mid_journey() {
    let cells = MemoryStorage::new();
    cells.clone().write(content::STORAGE_KEY, "4").unwrap();
    let mut app = Keepsake::new(Box::new(cells));
    let mut ctx = StageContext::new(&app.config());
    app.init(&mut ctx);
    assert_eq!(app.phase_index(), 4);
}

#[test]
fn failing_storage_never_blocks_the_journey() {
    struct FailingStorage;

    impl StorageBackend for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    let mut app = Keepsake::new(Box::new(FailingStorage));
    let mut ctx = StageContext::new(&app.config());
    app.init(&mut ctx);
    assert_eq!(app.phase_index(), 0);

    let mut input = InputQueue::new();
    input.push(InputEvent::TextSubmit {
        text: "i love you".into(),
    });
    app.update(&mut ctx, &input);
    input.drain();
    for _ in 0..(1.3 / DT).ceil() as usize {
        app.update(&mut ctx, &input);
    }
    // The in-memory transition happened despite every write failing.
    assert_eq!(app.phase_index(), 1);
}
