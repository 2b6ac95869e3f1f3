//! Dino Runner entry point
//!
//! Browser: one simulation tick per animation frame, DOM HUD, canvas drawing.
//! Native: headless autopilot sessions with a file-backed high score.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use dino_runner::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use dino_runner::persistence::LocalStorageStore;
    use dino_runner::platform::input::is_press_key;
    use dino_runner::render::{CanvasRenderer, Renderer};
    use dino_runner::sim::wants_jump;
    use dino_runner::ui::DomHud;

    /// Game instance holding all state
    struct App {
        game: dino_runner::Game<LocalStorageStore>,
        renderer: CanvasRenderer,
        hud: DomHud,
        /// Autopilot plays for the user
        idle_mode: bool,
    }

    impl App {
        /// Run one frame: autopilot input, tick, render, HUD
        fn frame(&mut self) {
            if self.idle_mode && wants_jump(self.game.state()) {
                self.game.on_jump_requested();
            }
            self.game.tick();
            self.renderer.draw(&self.game.frame());
            self.hud.sync(self.game.hud());
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Dino Runner starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: dino_runner::Game::new(seed, LocalStorageStore::new()),
            renderer: CanvasRenderer::new(ctx),
            hud: DomHud::new(document),
            idle_mode: false,
        }));

        // Paint the start screen before the first frame
        {
            let mut a = app.borrow_mut();
            let hud = a.game.hud();
            a.hud.sync(hud);
        }

        setup_input_handlers(&window, &canvas, app.clone());
        request_animation_frame(app);

        log::info!("Dino Runner running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) {
        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let mut a = app.borrow_mut();
                if is_press_key(&key) {
                    event.prevent_default();
                    a.game.press();
                } else if key.eq_ignore_ascii_case("i") {
                    a.idle_mode = !a.idle_mode;
                    log::info!("Idle mode: {}", a.idle_mode);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().game.press();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().game.press();
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use dino_runner::persistence::{FileStore, file::DEFAULT_PATH};
    use dino_runner::render::{Renderer, TextRenderer};
    use dino_runner::sim::{GamePhase, wants_jump};
    use dino_runner::{Game, Tuning};

    /// Hard stop per session so a perfect autopilot run still ends
    const DEFAULT_MAX_TICKS: u64 = 60 * 60 * 10;

    /// Driver settings read from the environment
    #[derive(Debug, Clone)]
    pub struct Config {
        pub seed: u64,
        pub sessions: u32,
        pub max_ticks: u64,
        pub tuning_path: Option<PathBuf>,
        pub highscore_path: PathBuf,
    }

    impl Config {
        pub fn from_env() -> Self {
            fn var<T: std::str::FromStr>(name: &str) -> Option<T> {
                let raw = std::env::var(name).ok()?;
                match raw.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        log::warn!("Ignoring {}={:?}: not a valid value", name, raw);
                        None
                    }
                }
            }

            let seed = var("DINO_SEED").unwrap_or_else(|| {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_millis() as u64)
                    .unwrap_or(0)
            });

            Self {
                seed,
                sessions: var("DINO_SESSIONS").unwrap_or(3),
                max_ticks: var("DINO_MAX_TICKS").unwrap_or(DEFAULT_MAX_TICKS),
                tuning_path: var("DINO_TUNING"),
                highscore_path: var("DINO_HIGHSCORE_PATH")
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH)),
            }
        }
    }

    pub fn run(config: Config) {
        let tuning = config
            .tuning_path
            .as_ref()
            .map(|path| Tuning::load_or_default(path))
            .unwrap_or_default();

        let store = FileStore::new(&config.highscore_path);
        let mut game = Game::with_tuning(config.seed, tuning, store);
        let mut renderer = TextRenderer::default();

        for session in 1..=config.sessions {
            let mut ticks = 0u64;
            while game.phase() != GamePhase::Over && ticks < config.max_ticks {
                if wants_jump(game.state()) {
                    game.on_jump_requested();
                }
                game.tick();
                ticks += 1;
            }

            renderer.draw(&game.frame());
            log::info!("Final frame of session {}:\n{}", session, renderer.output());

            let hud = game.hud();
            println!(
                "Session {}: score {} after {} ticks (best {}){}",
                session,
                hud.score,
                game.state().frame_count,
                hud.high_score,
                if hud.phase == GamePhase::Over {
                    ""
                } else {
                    " [tick limit]"
                }
            );

            if hud.phase != GamePhase::Over {
                dino_runner::sim::end_game(game.state_mut());
                game.tick();
            }
            game.on_restart_requested();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Dino Runner (native) starting...");
    log::info!("Headless autopilot mode - build for wasm32 and run with `trunk serve` to play");

    native::run(native::Config::from_env());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
