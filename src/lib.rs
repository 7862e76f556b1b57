//! # Lexikey
//!
//! Rank-order-preserving key codec for ordered stores.
//!
//! Lexikey is a bidirectional mapping between structured, immutable
//! [`Passable`] values and strings, such that code-point comparison of the
//! encoded strings matches a total order over the decoded values: numeric
//! order for numbers and big integers, lexicographic order for strings,
//! recursive order for composites. It sits beneath an ordered store whose
//! storage only compares opaque strings but whose callers need to iterate
//! keys in value order.
//!
//! ## Quick Start
//!
//! ```
//! use lexikey::{Decoder, Encoder, Passable};
//!
//! let encoder = Encoder::new();
//! let decoder = Decoder::new();
//!
//! let key = encoder.encode(&Passable::Number(3.5))?;
//! assert_eq!(decoder.decode(&key)?, Passable::Number(3.5));
//!
//! // encoded order is value order
//! let lo = encoder.encode(&Passable::Number(-5.0))?;
//! let hi = encoder.encode(&Passable::Number(5.0))?;
//! assert!(lo < hi);
//! # Ok::<(), lexikey::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! 1. Round trip: `decode(encode(v)) == v` structurally for every
//!    non-extension kind (`-0.0` normalizes to `0.0`, NaN payloads collapse
//!    to one canonical NaN).
//! 2. Order preservation: for comparable values, `a < b` iff
//!    `encode(a) < encode(b)` under code-point comparison.
//! 3. Cross-kind order is fixed by the first character of the encoding, the
//!    kind tag; see [`PassKind::tag_char`].
//! 4. Composite encodings are self-delimiting: nested separators can never
//!    be confused with data.
//!
//! ## Extension kinds
//!
//! Remotable, Promise, and Error values are opaque to this crate; their
//! encode/decode logic is injected as [`EncodeHooks`]/[`DecodeHooks`] by the
//! embedding system. The codec only enforces their tag-prefix contract.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod codec;
mod error;
mod value;

pub use codec::{DecodeHook, DecodeHooks, Decoder, EncodeHook, EncodeHooks, Encoder};
pub use error::{Error, Result};
pub use value::{OpaqueId, PassKind, Passable};

// Re-export the big-integer type so callers can build `Passable::BigInt`
// without adding their own num-bigint dependency.
pub use num_bigint::BigInt;
