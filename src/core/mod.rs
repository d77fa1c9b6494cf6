//! The backend-agnostic part of the editor: keys, the command registry, the
//! keypress dispatcher and the editor session with its control loop.

pub mod app;
pub mod command;
pub mod commands;
pub mod dispatcher;
pub mod input;
