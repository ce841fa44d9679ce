use std::time::{Duration, Instant};

use crate::game::{GameEngine, GameState};
use crate::input::GameInput;
use crate::scheduler::TickScheduler;

/// Poll timeout while no tick is armed (start screen, pause, game over).
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// Shell-level status layered over the game state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HostStatus {
    /// Start screen, before the first tick.
    Ready,
    Running,
    Paused,
}

/// Imperative shell: owns the engine, the current snapshot and the timer.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    state: GameState,
    scheduler: TickScheduler,
    status: HostStatus,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(mut engine: GameEngine) -> Self {
        let state = engine.reset();

        Self {
            engine,
            state,
            scheduler: TickScheduler::new(),
            status: HostStatus::Ready,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> HostStatus {
        self.status
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// How long to wait for input before the next tick is due.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.scheduler.timeout(now, IDLE_POLL)
    }

    /// Applies one external input event.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) {
        match input {
            GameInput::Quit => {
                self.scheduler.cancel();
                self.should_quit = true;
            }
            GameInput::Confirm if self.state.is_over() => {
                self.state = self.engine.reset();
                self.start(now);
            }
            GameInput::Confirm if self.status == HostStatus::Ready => self.start(now),
            GameInput::Confirm => {}
            GameInput::Pause if self.state.is_over() => {}
            GameInput::Pause => match self.status {
                HostStatus::Running => {
                    self.scheduler.cancel();
                    self.status = HostStatus::Paused;
                }
                HostStatus::Paused => self.start(now),
                HostStatus::Ready => {}
            },
            GameInput::Direction(direction) => {
                if self.status == HostStatus::Running {
                    self.state.buffer_direction(direction);
                }
            }
        }
    }

    /// Runs a tick if one is due. Returns true when the state changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if !self.scheduler.take_due(now) {
            return false;
        }

        self.state = self.engine.advance(&self.state);

        if self.state.is_over() {
            self.scheduler.cancel();
        } else {
            self.scheduler.arm(now, self.state.tick_interval());
        }

        true
    }

    fn start(&mut self, now: Instant) {
        self.status = HostStatus::Running;
        self.scheduler.arm(now, self.state.tick_interval());
    }
}
