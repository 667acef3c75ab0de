//! UI effects attached to terminal elements.
//!
//! Both effects are driven by the caller: the typewriter advances when the
//! main loop reports elapsed time, and the focus trap reacts to key events
//! routed to it. Neither owns a thread or timer of its own.

pub mod focus_trap;
pub mod typewriter;

pub use focus_trap::{ElementKind, FocusHost, FocusTrap, Focusable, Key};
pub use typewriter::{Typewriter, TypewriterEvent, TypewriterParams};
