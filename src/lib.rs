//! Lazy, consumer-driven sequences of values and of key-value pairs.
//!
//! A sequence is anything that can push its elements into a callback until the
//! callback asks it to stop. Everything in this crate is built on top of the
//! [`Seq`] and [`SeqKV`] traits: constructors, conversions between the two
//! shapes, channel bridges, transformations, aggregations, searches,
//! lexicographic comparison and timer-driven sequences.

pub mod aggregate;
pub mod cancel;
pub mod channel;
pub mod compare;
pub mod conversion;
pub mod creation;
pub mod error;
pub mod kv;
pub mod search;
pub mod seq;
pub mod ticker;
pub mod time_provider;
pub mod transform;

pub use crate::aggregate::*;
pub use crate::cancel::{cancel_pair, CancelHandle, CancelToken};
pub use crate::channel::{from_channel, to_channel, to_channel_with_cancel};
pub use crate::compare::*;
pub use crate::conversion::*;
pub use crate::creation::*;
pub use crate::error::SeqError;
pub use crate::kv::KeyValue;
pub use crate::search::*;
pub use crate::seq::{from_fn, from_fn_kv, FromFn, FromFnKV, Seq, SeqKV};
pub use crate::ticker::*;
pub use crate::time_provider::{SystemTimeProvider, TimeProvider};
pub use crate::transform::*;
