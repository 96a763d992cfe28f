//! Text-entry surface for the markdown buffer.
//!
//! Provides a rope-backed text buffer with cursor management. The app
//! mirrors every change into the controller.

mod buffer;

pub use buffer::{Direction, EditorBuffer};
