//! Pipeline - runtime loop wiring input, state, and rendering.
//!
//! The pipeline owns scheduling: it polls terminal events, routes them into
//! the state instances, feeds timestamps to every animation `tick`, and
//! composes frames. State machines never schedule themselves.

pub mod mount;
pub mod view;

pub use mount::{App, AppConfig, MountHandle, mount, run, tick};
