//! A headless auto-scrolling, drag-and-momentum carousel engine.
//!
//! For call-site adapters (frame loop, listener bookkeeping, banner/video strips, overlay
//! player), see the `carousel-adapter` crate.
//!
//! This crate focuses on the motion model behind an endless card strip: a duplicated item
//! loop that wraps seamlessly at half its width, three blended motion sources (auto-scroll,
//! drag with momentum, wheel nudges), and tap/drag classification so that clicking a card
//! still works.
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - the rendered width of the duplicated track
//! - pointer/wheel/click events, with timestamps
//! - a frame callback that calls [`Engine::tick`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod extent;
mod gesture;
mod guard;
mod looping;
mod math;
mod options;
mod position;
mod state;
mod types;
mod velocity;

#[cfg(test)]
mod tests;

pub use engine::Engine;
pub use error::OptionsError;
pub use extent::{SizeOracle, TrackExtent};
pub use gesture::InputArbiter;
pub use guard::ClickGuard;
pub use looping::{LoopedItem, build_loop};
pub use options::CarouselOptions;
pub use position::{PositionModel, normalize};
pub use state::EngineState;
pub use types::{ClickDecision, Dispatch, DragAnchor, GestureVerdict, InputEvent, MotionOwner};
pub use velocity::VelocityTracker;
