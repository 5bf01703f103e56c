//! The Whale $WIP Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use wip_runner::audio::WebMusic;
    use wip_runner::consts::{WORLD_HEIGHT, WORLD_WIDTH};
    use wip_runner::persistence::LocalStore;
    use wip_runner::platform::web::{NavigatorClipboard, WindowShare};
    use wip_runner::platform::{FrameInput, KeyState};
    use wip_runner::renderer::CanvasRenderer;
    use wip_runner::scene::{SceneKey, Services};
    use wip_runner::sim::ArcadeWorld;
    use wip_runner::{App, HighScore, Tuning};

    /// Game instance holding all state
    struct Game {
        app: App,
        renderer: Option<CanvasRenderer>,
        keys: KeyState,
        last_time: f64,
    }

    impl Game {
        fn render(&self) {
            if let Some(renderer) = &self.renderer {
                let services = self.app.services();
                renderer.render(
                    services.stage.as_ref(),
                    self.app.display(),
                    self.app.scene_key() == SceneKey::Run,
                );
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("WIP Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(WORLD_WIDTH as u32);
        canvas.set_height(WORLD_HEIGHT as u32);

        let tuning = Tuning::load();
        let high_score = HighScore::load(Box::new(LocalStore), &tuning.high_score_key);
        let services = Services {
            stage: Box::new(ArcadeWorld::new(tuning.gravity)),
            music: Box::new(WebMusic::new("assets/arcade-music.wav", tuning.music_volume)),
            clipboard: Box::new(NavigatorClipboard),
            share: Box::new(WindowShare),
            high_score,
            tuning,
        };

        let seed = js_sys::Date::now() as u64;
        let renderer = CanvasRenderer::new(&canvas);
        if renderer.is_none() {
            log::error!("Canvas 2D context unavailable - nothing will be drawn");
        }
        let game = Rc::new(RefCell::new(Game {
            app: App::new(services, seed),
            renderer,
            keys: KeyState::default(),
            last_time: 0.0,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("WIP Runner running!");
    }

    /// Canvas client coordinates to world coordinates
    fn to_world(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let sx = if rect.width() > 0.0 { WORLD_WIDTH as f64 / rect.width() } else { 1.0 };
        let sy = if rect.height() > 0.0 { WORLD_HEIGHT as f64 / rect.height() } else { 1.0 };
        Vec2::new(
            ((client_x as f64 - rect.left()) * sx) as f32,
            ((client_y as f64 - rect.top()) * sy) as f32,
        )
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Pointer press (mouse, touch, pen)
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                let pos = to_world(&canvas_clone, event.client_x(), event.client_y());
                game.borrow_mut().app.pointer_down(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Flap keys are tracked as held state
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " => g.keys.space = true,
                    "ArrowUp" => g.keys.up = true,
                    _ => return,
                }
                event.prevent_default();
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " => g.keys.space = false,
                    "ArrowUp" => g.keys.up = false,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                wip_runner::consts::SIM_DT
            };
            g.last_time = time;

            let input = FrameInput { keys: g.keys };
            g.app.frame(dt, &input);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("WIP Runner (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    println!("\nRunning headless autopilot...");
    autopilot_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one run with a naive hover bot and report the result
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_run() {
    use wip_runner::persistence::MemoryStore;
    use wip_runner::platform::FrameInput;
    use wip_runner::scene::{SceneKey, Services};
    use wip_runner::sim::BodyKind;
    use wip_runner::ui::Action;
    use wip_runner::{App, Tuning};

    const FRAME: f32 = 1.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 120;

    let services = Services::headless(Tuning::load(), Box::new(MemoryStore::new()));
    let mut app = App::new(services, 0x5eed);
    if let Some(start) = app.display().button_pos(Action::StartRun) {
        app.pointer_down(start);
    }
    if app.scene_key() != SceneKey::Run {
        println!("✗ Could not start a run");
        return;
    }

    let mut frames = 0;
    while frames < MAX_FRAMES && !app.display().shows("Game Over") {
        let player_y = app
            .services()
            .stage
            .sprites()
            .iter()
            .find(|s| s.kind == BodyKind::Player)
            .map(|s| s.pos.y)
            .unwrap_or(0.0);
        let input = if player_y > 300.0 {
            FrameInput::holding_flap()
        } else {
            FrameInput::default()
        };
        app.frame(FRAME, &input);
        frames += 1;
    }

    println!(
        "✓ Run ended after {:.1}s, high score {}",
        frames as f32 * FRAME,
        app.services().high_score.best()
    );
}
