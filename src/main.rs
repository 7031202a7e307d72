//! Bounce Rects entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use bounce_rects::platform::AnimationFrames;
    use bounce_rects::renderer::CanvasSurface;
    use bounce_rects::{Scene, Scheduler, Settings};

    /// Everything one running animation needs
    struct App {
        scheduler: Scheduler<i32>,
        surface: CanvasSurface,
        driver: AnimationFrames,
    }

    thread_local! {
        static APP: RefCell<Option<Rc<RefCell<App>>>> = const { RefCell::new(None) };
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bounce Rects starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("cnvs")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Viewport is fixed for the whole run
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(bounce_rects::consts::DEFAULT_VIEWPORT_WIDTH as f64);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(bounce_rects::consts::DEFAULT_VIEWPORT_HEIGHT as f64);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let Some(surface) = CanvasSurface::new(&canvas) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let settings = Settings::load();
        let bounds = glam::Vec2::new(width as f32, height as f32);
        let scheduler = match Scene::classic()
            .into_state(bounds, settings.collision_limit)
            .and_then(|sim| Scheduler::from_settings(sim, &settings))
        {
            Ok(s) => s,
            Err(e) => {
                log::error!("Failed to build scene: {}", e);
                return;
            }
        };

        let now = window.performance().map(|p| p.now()).unwrap_or(0.0);
        let driver = AnimationFrames::new(window);
        let slot = driver.callback_slot();

        let app = Rc::new(RefCell::new(App {
            scheduler,
            surface,
            driver,
        }));

        {
            let app = app.clone();
            *slot.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                let mut guard = app.borrow_mut();
                let App {
                    scheduler,
                    surface,
                    driver,
                } = &mut *guard;
                scheduler.on_frame(time, surface, driver);
            }));
        }

        {
            let mut guard = app.borrow_mut();
            let App {
                scheduler, driver, ..
            } = &mut *guard;
            scheduler.start(now, driver);
        }

        APP.with(|cell| *cell.borrow_mut() = Some(app));
        log::info!("Bounce Rects running!");
    }

    /// Stop the animation; further calls are no-ops
    #[wasm_bindgen]
    pub fn stop() {
        let Some(app) = APP.with(|cell| cell.borrow_mut().take()) else {
            return;
        };
        let mut guard = app.borrow_mut();
        let App {
            scheduler, driver, ..
        } = &mut *guard;
        scheduler.stop(driver);
        // Break the closure <-> app cycle so both can drop
        driver.callback_slot().borrow_mut().take();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Safety cap for headless runs whose rectangles never all retire
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES: u64 = 10_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bounce_rects::consts::*;
    use bounce_rects::platform::SimulatedClock;
    use bounce_rects::renderer::RecordingSurface;
    use bounce_rects::{Scene, Scheduler, Settings};
    use glam::Vec2;

    env_logger::init();
    log::info!("Bounce Rects (native) starting...");

    let scene = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match Scene::from_json(&json) {
                Ok(scene) => scene,
                Err(e) => {
                    log::error!("Invalid scene {}: {}", path, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                log::error!("Cannot read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Scene::classic(),
    };

    let settings = Settings::load();
    let bounds = Vec2::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT);
    let mut scheduler: Scheduler<u32> = match scene
        .into_state(bounds, settings.collision_limit)
        .and_then(|sim| Scheduler::from_settings(sim, &settings))
    {
        Ok(s) => s,
        Err(e) => {
            log::error!("Failed to build scene: {}", e);
            std::process::exit(1);
        }
    };

    let mut clock = SimulatedClock::default();
    let mut surface = RecordingSurface::default();
    scheduler.start(clock.now(), &mut clock);

    while let Some(ts) = clock.next_frame() {
        surface.reset();
        let Some(report) = scheduler.on_frame(ts, &mut surface, &mut clock) else {
            break;
        };
        for id in &report.activity.retired {
            log::info!("t={:.0} ms: rect {} retired", ts, id);
        }
        if scheduler.sim().is_empty() || scheduler.frames() >= MAX_FRAMES {
            scheduler.stop(&mut clock);
        }
    }

    log::info!(
        "Finished after {} frames ({} ticks), {} rects left",
        scheduler.frames(),
        scheduler.sim().time_ticks,
        scheduler.sim().len()
    );
}
