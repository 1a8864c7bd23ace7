//! Standalone predicates and data-manipulation helpers over a small owned
//! dynamic value model.
//!
//! - `error` - the invalid-argument contract shared by every validated helper
//! - `value` - the [`Value`] model, kind classification and type predicates
//! - `string` - validated string predicates plus truncate/slugify
//! - `array` - validated array predicates plus chunk/unique/flatten/set ops
//! - `object` - validated object predicates plus pick/omit/merge
//! - `number` - validated numeric predicates, primality, clamp
//! - `clone` - deep clone with explicit opaque passthrough
//! - `timing` - debounce/throttle wrappers and deferred one-shot calls
//!
//! Every validated helper asserts its argument's shape before computing
//! anything and reports violations through the single
//! [`InvalidArgument`](error::InvalidArgument) kind; the library never logs
//! or retries on the caller's behalf.

pub mod array;
pub mod clone;
pub mod error;
pub mod number;
pub mod object;
pub mod string;
pub mod timing;
pub mod value;

// Re-export common types for ergonomic library use
pub use error::{InvalidArgument, Result};
pub use value::{Kind, Pattern, Value};
