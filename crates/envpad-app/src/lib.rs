//! EnvPad application shell.
//!
//! Window creation, pointer-event translation and the debug inspector
//! overlay around the envpad-core controls.

mod app;
mod graphics;
mod ui;

pub use app::{App, AppConfig};
