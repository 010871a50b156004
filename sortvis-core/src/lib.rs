//! # sortvis-core: step replay protocol for sorting visualizations
//!
//! This crate defines the vocabulary shared by every other sortvis crate:
//! what a sort looks like from the outside while it runs, how a run is
//! stopped, and what goes over the wire to a subscriber.
//!
//! ## The Pieces
//!
//! | Piece | Types | What it does |
//! |-------|-------|-------------|
//! | Snapshot | [`Step`] | One observable point of a sort |
//! | Producer | [`StepProducer`], [`Algorithm`], [`Steps`] | Lazy step sequence + stop signal |
//! | Cancellation | [`CancelFlag`] | Cooperative, atomic stop request |
//! | Boundary | [`coerce_input`], [`Request`] | Untrusted JSON → validated input |
//! | Outbound | [`Notification`], [`NotificationSink`] | What a subscriber receives |
//!
//! ## Design Principle
//!
//! A producer only describes *what happens next*. It never sleeps, never
//! talks to a transport, and never decides when a run is over beyond running
//! out of work. Pacing, delivery, and terminal notifications belong to the
//! coordinator that drives it.

#![deny(missing_docs)]

pub mod algorithm;
pub mod cancel;
pub mod error;
pub mod input;
pub mod notification;
pub mod request;
pub mod sink;
pub mod step;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use algorithm::{Algorithm, AlgorithmInfo, Category, RunOptions, StepIter, StepProducer, Steps};
pub use cancel::CancelFlag;
pub use error::{CoordError, InputError, RunError, TransportError};
pub use input::coerce_input;
pub use notification::{Notification, StepPayload};
pub use request::Request;
pub use sink::NotificationSink;
pub use step::Step;
