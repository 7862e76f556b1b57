//! The passable value model.
//!
//! This module defines [`Passable`], the closed set of immutable values the
//! codec can turn into order-preserving keys, and [`PassKind`], the kind
//! classifier that owns the single-character tag table.
//!
//! ## The Thirteen Kinds
//!
//! Scalars: `Null`, `Undefined`, `Bool`, `Number` (IEEE-754 binary64),
//! `BigInt` (arbitrary precision), `String`, `Symbol`.
//!
//! Extension kinds: `Remotable`, `Promise`, `Error` - opaque identities whose
//! encoding is supplied by caller hooks, not by this crate.
//!
//! Composites: `Array`, `Record`, `Tagged` - recursive.
//!
//! ## Equality Rules
//!
//! - Different kinds are never equal (no coercion): `Number(1.0) != BigInt(1)`
//! - `Number` uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//! - `Record` equality is field-set equality; `BTreeMap` keeps fields in
//!   canonical sorted order, so construction order never matters

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An opaque identity for an extension-kind value.
///
/// The codec never interprets the contents; only the caller's extension
/// hooks give it meaning. Two extension values with the same id and kind
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpaqueId(String);

impl OpaqueId {
    /// Create an opaque identity from any string-like id.
    pub fn new(id: impl Into<String>) -> Self {
        OpaqueId(id.into())
    }

    /// The raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A passable value: the canonical input/output of the key codec.
///
/// Every variant has exactly one [`PassKind`]; classification is total and
/// deterministic via [`Passable::kind`]. Values are plain immutable data -
/// the codec allocates no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Passable {
    /// The single null value
    Null,

    /// The single undefined value
    Undefined,

    /// Boolean true or false
    Bool(bool),

    /// 64-bit IEEE-754 floating point
    /// Supports: NaN, +Inf, -Inf, -0.0, subnormals
    Number(f64),

    /// Arbitrary-precision signed integer, unbounded magnitude
    BigInt(BigInt),

    /// Sequence of Unicode scalar values
    String(String),

    /// Interned symbol, identified by name
    Symbol(String),

    /// Opaque remote reference (extension kind)
    Remotable(OpaqueId),

    /// Pending-result placeholder (extension kind)
    Promise(OpaqueId),

    /// Error object (extension kind)
    Error(OpaqueId),

    /// Ordered sequence of passable values
    Array(Vec<Passable>),

    /// Field-name keyed record; `BTreeMap` iteration order is the canonical
    /// sorted field order, so two records with the same fields and values
    /// always encode identically regardless of construction order
    Record(BTreeMap<String, Passable>),

    /// A named wrapper around a payload, e.g. for extended numeric types
    Tagged {
        /// The wrapper's tag name
        tag: String,
        /// The wrapped value
        payload: Box<Passable>,
    },
}

/// The kind of a passable value.
///
/// Each kind owns a single-character tag that is both the first character of
/// its encoding and the sort key for cross-kind ordering: since the tag is
/// compared before anything else, code-point order of the tags fixes the
/// cross-kind total order of stored keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassKind {
    /// Error object, tag `!`
    Error,
    /// Record, tag `(`
    Record,
    /// Tagged wrapper, tag `:`
    Tagged,
    /// Promise, tag `?`
    Promise,
    /// Array, tag `[`
    Array,
    /// Boolean, tag `b`
    Bool,
    /// Binary64 number, tag `f`
    Number,
    /// Big integer, tags `n` (negative) and `p` (non-negative)
    BigInt,
    /// Remotable, tag `r`
    Remotable,
    /// String, tag `s`
    String,
    /// Null, tag `v`
    Null,
    /// Symbol, tag `y`
    Symbol,
    /// Undefined, tag `z`
    Undefined,
}

impl PassKind {
    /// The tag character leading every encoding of this kind.
    ///
    /// `BigInt` has two tags (`n` for negative, `p` for non-negative) so that
    /// every negative integer sorts before every non-negative one; this
    /// method returns the non-negative tag.
    pub fn tag_char(self) -> char {
        match self {
            PassKind::Error => '!',
            PassKind::Record => '(',
            PassKind::Tagged => ':',
            PassKind::Promise => '?',
            PassKind::Array => '[',
            PassKind::Bool => 'b',
            PassKind::Number => 'f',
            PassKind::BigInt => 'p',
            PassKind::Remotable => 'r',
            PassKind::String => 's',
            PassKind::Null => 'v',
            PassKind::Symbol => 'y',
            PassKind::Undefined => 'z',
        }
    }

    /// Map a tag character back to its kind, or `None` for an unknown tag.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            '!' => Some(PassKind::Error),
            '(' => Some(PassKind::Record),
            ':' => Some(PassKind::Tagged),
            '?' => Some(PassKind::Promise),
            '[' => Some(PassKind::Array),
            'b' => Some(PassKind::Bool),
            'f' => Some(PassKind::Number),
            'n' | 'p' => Some(PassKind::BigInt),
            'r' => Some(PassKind::Remotable),
            's' => Some(PassKind::String),
            'v' => Some(PassKind::Null),
            'y' => Some(PassKind::Symbol),
            'z' => Some(PassKind::Undefined),
            _ => None,
        }
    }

    /// The kind name as a string (for error messages).
    pub fn name(self) -> &'static str {
        match self {
            PassKind::Null => "Null",
            PassKind::Undefined => "Undefined",
            PassKind::Bool => "Bool",
            PassKind::Number => "Number",
            PassKind::BigInt => "BigInt",
            PassKind::String => "String",
            PassKind::Symbol => "Symbol",
            PassKind::Remotable => "Remotable",
            PassKind::Promise => "Promise",
            PassKind::Error => "Error",
            PassKind::Array => "Array",
            PassKind::Record => "Record",
            PassKind::Tagged => "Tagged",
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Passable {
    /// Classify this value's kind.
    ///
    /// Classification is total: every value has exactly one kind.
    pub fn kind(&self) -> PassKind {
        match self {
            Passable::Null => PassKind::Null,
            Passable::Undefined => PassKind::Undefined,
            Passable::Bool(_) => PassKind::Bool,
            Passable::Number(_) => PassKind::Number,
            Passable::BigInt(_) => PassKind::BigInt,
            Passable::String(_) => PassKind::String,
            Passable::Symbol(_) => PassKind::Symbol,
            Passable::Remotable(_) => PassKind::Remotable,
            Passable::Promise(_) => PassKind::Promise,
            Passable::Error(_) => PassKind::Error,
            Passable::Array(_) => PassKind::Array,
            Passable::Record(_) => PassKind::Record,
            Passable::Tagged { .. } => PassKind::Tagged,
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Passable::Null)
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Passable::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Passable::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as a big integer reference
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Passable::BigInt(n) => Some(n),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Passable::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as array slice
    pub fn as_array(&self) -> Option<&[Passable]> {
        match self {
            Passable::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as record reference
    pub fn as_record(&self) -> Option<&BTreeMap<String, Passable>> {
        match self {
            Passable::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Build a tagged wrapper around a payload.
    pub fn tagged(tag: impl Into<String>, payload: Passable) -> Self {
        Passable::Tagged {
            tag: tag.into(),
            payload: Box::new(payload),
        }
    }

    /// Build a record from field-name/value pairs.
    ///
    /// Fields are kept in canonical sorted order; a later duplicate field
    /// name overwrites the earlier one, matching map-literal semantics.
    pub fn record<K: Into<String>>(fields: impl IntoIterator<Item = (K, Passable)>) -> Self {
        Passable::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<bool> for Passable {
    fn from(b: bool) -> Self {
        Passable::Bool(b)
    }
}

impl From<f64> for Passable {
    fn from(n: f64) -> Self {
        Passable::Number(n)
    }
}

impl From<BigInt> for Passable {
    fn from(n: BigInt) -> Self {
        Passable::BigInt(n)
    }
}

impl From<i64> for Passable {
    fn from(n: i64) -> Self {
        Passable::BigInt(BigInt::from(n))
    }
}

impl From<u64> for Passable {
    fn from(n: u64) -> Self {
        Passable::BigInt(BigInt::from(n))
    }
}

impl From<i128> for Passable {
    fn from(n: i128) -> Self {
        Passable::BigInt(BigInt::from(n))
    }
}

impl From<&str> for Passable {
    fn from(s: &str) -> Self {
        Passable::String(s.to_string())
    }
}

impl From<String> for Passable {
    fn from(s: String) -> Self {
        Passable::String(s)
    }
}

impl From<Vec<Passable>> for Passable {
    fn from(a: Vec<Passable>) -> Self {
        Passable::Array(a)
    }
}

impl From<BTreeMap<String, Passable>> for Passable {
    fn from(r: BTreeMap<String, Passable>) -> Self {
        Passable::Record(r)
    }
}
