//! Grid snake: a deterministic game core plus a thin terminal shell.
//!
//! The core (`snake`, `input`, `food`, `game`) is a pure state machine.
//! The shell (`app`, `scheduler`, `renderer`, `ui`, `terminal_runtime`)
//! owns the current `GameState`, the tick timer and the terminal.

pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
