//! Frame driver
//!
//! `Game` owns the state and runs "check game over → update → render" once
//! per tick. Ticks come from a `Scheduler`, so tests and the headless build
//! can drive frames by hand instead of waiting on a real timer.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::consts::TICK_INTERVAL;
use crate::input::{InputEvent, InputOutcome, handle_input};
use crate::renderer::{Surface, render, render_game_over};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Something that can call back at a fixed period
pub trait Scheduler {
    type Error;

    fn schedule_periodic(
        &mut self,
        interval: Duration,
        callback: Box<dyn FnMut()>,
    ) -> Result<(), Self::Error>;
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub settings: Settings,
}

impl Game {
    pub fn new(state: GameState, settings: Settings) -> Self {
        Self { state, settings }
    }

    /// Run one tick and draw it
    ///
    /// While the game is over only the terminal message is drawn, on top of
    /// the last frame of play.
    pub fn frame(&mut self, surface: &mut impl Surface) -> Vec<GameEvent> {
        if self.state.is_over() {
            render_game_over(&self.state, &self.settings, surface);
            return Vec::new();
        }

        let events = tick(&mut self.state);
        self.log_events(&events);
        render(&self.state, &self.settings, surface);
        events
    }

    /// Apply an input event that arrived between ticks
    pub fn handle_input(&mut self, event: &InputEvent) -> InputOutcome {
        let outcome = handle_input(&mut self.state, event);
        if outcome == InputOutcome::Restarted {
            log::info!("Game restarted");
        }
        outcome
    }

    fn log_events(&self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::WallBounce => log::trace!("Wall bounce at {}", self.state.ball.pos),
                GameEvent::PaddleHit { side, speed } => {
                    log::debug!("{} paddle hit, speed now {}", side.as_str(), speed)
                }
                GameEvent::Scored { scorer } => log::info!(
                    "{} scores ({} - {}), misses {} / {}",
                    scorer.as_str(),
                    self.state.user.score,
                    self.state.ai.score,
                    self.state.user.misses,
                    self.state.ai.misses
                ),
                GameEvent::GameOver { winner } => {
                    log::info!("Game over: {} wins", winner.as_str())
                }
            }
        }
    }

    /// Hook the game up to a scheduler at the fixed frame rate
    pub fn start<S, T>(
        game: Rc<RefCell<Game>>,
        mut surface: S,
        scheduler: &mut T,
    ) -> Result<(), T::Error>
    where
        S: Surface + 'static,
        T: Scheduler,
    {
        scheduler.schedule_periodic(
            TICK_INTERVAL,
            Box::new(move || {
                game.borrow_mut().frame(&mut surface);
            }),
        )?;
        log::info!("Frame driver running every {:?}", TICK_INTERVAL);
        Ok(())
    }
}

struct ManualTask {
    interval: Duration,
    elapsed: Duration,
    callback: Box<dyn FnMut()>,
}

/// Scheduler driven by hand: time only passes when `advance` is called
#[derive(Default)]
pub struct ManualScheduler {
    tasks: Vec<ManualTask>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `by` pass, firing each task once per whole interval elapsed
    pub fn advance(&mut self, by: Duration) {
        for task in &mut self.tasks {
            task.elapsed += by;
            while task.elapsed >= task.interval {
                task.elapsed -= task.interval;
                (task.callback)();
            }
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Scheduler for ManualScheduler {
    type Error = std::convert::Infallible;

    fn schedule_periodic(
        &mut self,
        interval: Duration,
        callback: Box<dyn FnMut()>,
    ) -> Result<(), Self::Error> {
        self.tasks.push(ManualTask {
            interval,
            elapsed: Duration::ZERO,
            callback,
        });
        Ok(())
    }
}

/// `setInterval` on the browser window
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct IntervalScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for IntervalScheduler {
    type Error = wasm_bindgen::JsValue;

    fn schedule_periodic(
        &mut self,
        interval: Duration,
        callback: Box<dyn FnMut()>,
    ) -> Result<(), Self::Error> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let window =
            web_sys::window().ok_or_else(|| wasm_bindgen::JsValue::from_str("no window"))?;
        let closure = Closure::wrap(callback);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval.as_millis() as i32,
        )?;
        // Intervals run for the lifetime of the page
        closure.forget();
        log::debug!("Interval {} scheduled every {:?}", handle, interval);
        Ok(())
    }
}
