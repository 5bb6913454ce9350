//! Canvas Pong entry point
//!
//! On the web: wires the canvas, pointer and keyboard to the game and starts
//! the 50 Hz frame driver. Natively: plays a headless match and logs it.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use canvas_pong::driver::IntervalScheduler;
    use canvas_pong::input::InputEvent;
    use canvas_pong::renderer::CanvasSurface;
    use canvas_pong::sim::{GameState, Playfield};
    use canvas_pong::{Game, Settings};

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let settings =
            Settings::load_or_default(canvas.get_attribute(Settings::ATTRIBUTE).as_deref());
        let field = Playfield {
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        };
        log::info!("Playfield {}x{}", field.width, field.height);

        let surface = CanvasSurface::new(&canvas, &settings.font)?;
        let game = Rc::new(RefCell::new(Game::new(GameState::new(field), settings)));

        setup_input_handlers(&canvas, game.clone())?;
        Game::start(game, surface, &mut IntervalScheduler)?;

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Pointer move - y relative to the canvas top
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let y = event.client_y() as f32 - rect.top() as f32;
                game.borrow_mut()
                    .handle_input(&InputEvent::PointerMove { y });
            });
            canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut()
                    .handle_input(&InputEvent::KeyDown(event.key()));
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Canvas Pong failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    headless::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::cell::RefCell;
    use std::rc::Rc;

    use canvas_pong::consts::TICK_INTERVAL;
    use canvas_pong::input::InputEvent;
    use canvas_pong::renderer::Surface;
    use canvas_pong::sim::{GamePhase, GameState};
    use canvas_pong::{Game, ManualScheduler, Settings};

    /// Give up on a match that never ends
    const MAX_TICKS: u64 = 100_000;
    /// How quickly the simulated pointer chases the ball
    const POINTER_LAG: f32 = 0.15;

    /// Counts primitives instead of drawing them
    #[derive(Clone, Default)]
    struct DrawCounter(Rc<RefCell<u64>>);

    impl Surface for DrawCounter {
        fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: &str) {
            *self.0.borrow_mut() += 1;
        }

        fn fill_circle(&mut self, _x: f32, _y: f32, _r: f32, _color: &str) {
            *self.0.borrow_mut() += 1;
        }

        fn fill_text(&mut self, _text: &str, _x: f32, _y: f32, _color: &str) {
            *self.0.borrow_mut() += 1;
        }
    }

    pub fn run() {
        let game = Rc::new(RefCell::new(Game::new(
            GameState::default(),
            Settings::default(),
        )));
        let draws = DrawCounter::default();
        let mut scheduler = ManualScheduler::new();
        let Ok(()) = Game::start(game.clone(), draws.clone(), &mut scheduler);

        let mut pointer_y = game.borrow().state.user.center_y();
        loop {
            {
                let mut g = game.borrow_mut();
                if g.state.is_over() || g.state.time_ticks >= MAX_TICKS {
                    break;
                }
                pointer_y += (g.state.ball.pos.y - pointer_y) * POINTER_LAG;
                g.handle_input(&InputEvent::PointerMove { y: pointer_y });
            }
            scheduler.advance(TICK_INTERVAL);
        }

        let g = game.borrow();
        match g.state.phase {
            GamePhase::GameOver { winner } => log::info!(
                "{} won {} - {} after {} ticks ({} draw calls)",
                winner.as_str(),
                g.state.user.score,
                g.state.ai.score,
                g.state.time_ticks,
                draws.0.borrow()
            ),
            GamePhase::Playing => log::info!("No winner after {} ticks", g.state.time_ticks),
        }
        match serde_json::to_string(&g.state) {
            Ok(json) => log::debug!("Final state: {}", json),
            Err(e) => log::warn!("Could not serialize final state: {}", e),
        }
    }
}
