//! Cube Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use cube_dodge::Settings;
    use cube_dodge::audio::AudioManager;
    use cube_dodge::consts::SCORE_INTERVAL_MS;
    use cube_dodge::platform::{InputState, action_for_code};
    use cube_dodge::renderer::RenderState;
    use cube_dodge::sim::{GameEvent, GameState, award_time_point, tick};
    use cube_dodge::ui::{ScoreDisplay, score_text};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        score_display: ScoreDisplay,
        audio: AudioManager,
        render_state: Option<RenderState>,
        /// Handle of the 1 s score timer, cleared on game over
        score_interval: Option<i32>,
    }

    impl Game {
        fn new(seed: u64, settings: &Settings) -> Self {
            Self {
                state: GameState::with_tuning(seed, settings.tuning.clone()),
                input: InputState::new(),
                score_display: ScoreDisplay::new(),
                audio: AudioManager::new(settings),
                render_state: None,
                score_interval: None,
            }
        }

        /// One display frame: simulate, react to events, draw
        fn frame(&mut self) {
            let input = self.input.take_tick_input();
            tick(&mut self.state, &input);
            self.handle_events();
            self.render();
            self.update_hud();
        }

        fn handle_events(&mut self) {
            for event in self.state.drain_events() {
                match event {
                    GameEvent::Jumped => self.audio.play_jump(),
                    GameEvent::GameOver { score } => self.on_game_over(score),
                    _ => {}
                }
            }
        }

        fn on_game_over(&mut self, score: u64) {
            if let Some(handle) = self.score_interval.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(handle);
                }
            }
            self.audio.stop_music();

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("final-score") {
                el.set_text_content(Some(&score_text(score)));
            }
            if let Some(el) = document.get_element_by_id("game-over") {
                let _ = el.set_attribute("class", "");
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Write the score to the DOM when it changed
        fn update_hud(&mut self) {
            let Some(text) = self.score_display.update(self.state.score) else {
                return;
            };
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&text));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cube Dodge starting...");

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

        let (width, height) = fit_canvas(&canvas);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, &settings)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device, rendering disabled: {:?}", e),
        }

        setup_input_handlers(game.clone());
        setup_resize_handler(&canvas, game.clone());
        start_score_timer(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Cube Dodge running!");
    }

    /// Match the canvas backing store to its CSS size
    fn fit_canvas(canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height)
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let Some(action) = action_for_code(&event.code()) else {
                    return;
                };
                // Keep Space and the arrows from scrolling the page
                event.prevent_default();

                let mut g = game.borrow_mut();
                if !g.state.is_active() {
                    return;
                }
                // Browsers only allow audio after a user gesture
                g.audio.start_music();
                g.input.press(action);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(action) = action_for_code(&event.code()) {
                    game.borrow_mut().input.release(action);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-ups are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input.clear();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = fit_canvas(&canvas);
            if let Some(ref mut render_state) = game.borrow_mut().render_state {
                render_state.resize(width, height);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One point per second of survival
    fn start_score_timer(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let timer_game = game.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = timer_game.borrow_mut();
            if award_time_point(&mut g.state) {
                g.state.drain_events();
                g.update_hud();
            }
        });
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            SCORE_INTERVAL_MS,
        ) {
            Ok(handle) => game.borrow_mut().score_interval = Some(handle),
            Err(e) => log::warn!("Failed to start score timer: {:?}", e),
        }
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let active = {
            let mut g = game.borrow_mut();
            g.frame();
            g.state.is_active()
        };

        // The final frame has been drawn; stop driving the loop
        if active {
            request_animation_frame(game);
        } else {
            log::info!("Animation loop stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Simulated display rate of the headless run
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_TICKS_PER_SECOND: u64 = 60;
/// Give up after five simulated minutes
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_MAX_TICKS: u64 = HEADLESS_TICKS_PER_SECOND * 300;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cube_dodge::Settings;
    use cube_dodge::sim::{GameEvent, GameState, TickInput, award_time_point, tick};

    env_logger::init();
    log::info!("Cube Dodge (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let mut state = GameState::with_tuning(seed, settings.tuning);
    let idle = TickInput::default();
    let mut spawned = 0usize;
    let mut bonuses = 0usize;

    while state.is_active() && state.frames < HEADLESS_MAX_TICKS {
        tick(&mut state, &idle);
        if state.frames % HEADLESS_TICKS_PER_SECOND == 0 {
            award_time_point(&mut state);
        }
        for event in state.drain_events() {
            match event {
                GameEvent::Spawned { .. } => spawned += 1,
                GameEvent::BonusCollected { .. } => bonuses += 1,
                _ => {}
            }
        }
    }

    println!(
        "seed {}: {} after {} ticks, score {}, {} spawned, {} bonuses",
        seed,
        if state.is_game_over() { "game over" } else { "survived" },
        state.frames,
        state.score,
        spawned,
        bonuses
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
