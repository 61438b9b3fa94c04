//! Call-site adapters for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the motion model. This crate provides
//! small, framework-neutral pieces every host needs around it:
//!
//! - A cooperative frame loop over an abstract [`FrameScheduler`], plus a [`ManualScheduler`]
//!   fake clock
//! - Listener bookkeeping so every listener is attached and removed exactly once
//! - The banner strip (taps navigate) and the video strip (taps open an overlay player that
//!   suspends the engine)
//! - A reference-counted page [`ScrollLock`] held by open overlays
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod banner;
mod listeners;
mod overlay;
mod scheduler;
mod scroll_lock;
mod strip;
mod transform;
mod video;


pub use banner::{BannerClick, BannerStrip};
pub use listeners::{EventSurface, ListenerKind, ListenerSet};
pub use overlay::{Key, Overlay, OverlayEvent, OverlayResponse};
pub use scheduler::{FrameHandle, FrameLoop, FrameScheduler, ManualScheduler};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use strip::{StripCore, StripHost};
pub use transform::Transform;
pub use video::{VideoClick, VideoDispatch, VideoEvent, VideoStrip};
