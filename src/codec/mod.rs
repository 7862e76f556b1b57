//! The encoder/decoder pair and their kind-dispatch tables.
//!
//! [`Encoder`] maps a [`Passable`] to a string whose code-point order matches
//! the value-level total order; [`Decoder`] inverts it. Both are pure and
//! stateless: each call is independent, side-effect-free, and safe for
//! unrestricted concurrent use.
//!
//! Encode is a single downward recursive pass; decode is a single
//! left-to-right scan that reads the first character as a kind tag and
//! dispatches without backtracking.
//!
//! ## Extension kinds
//!
//! Remotable, Promise, and Error values carry opaque identities that only
//! the embedding system can encode. Their handlers are injected at
//! construction as [`EncodeHooks`]/[`DecodeHooks`]; the codec enforces the
//! tag-prefix contract and otherwise delegates. With no hook installed,
//! meeting such a value (or such a tag) fails with
//! [`Error::UnsupportedKind`](crate::Error::UnsupportedKind).

mod container;
mod number;

use crate::error::{Error, Result};
use crate::value::{OpaqueId, PassKind, Passable};

/// A caller-supplied encoder for one extension kind.
///
/// Receives the value's opaque identity and must return an encoding that
/// begins with the kind's reserved tag character.
pub type EncodeHook = Box<dyn Fn(&OpaqueId) -> Result<String> + Send + Sync>;

/// A caller-supplied decoder for one extension kind.
///
/// Receives the full encoded string, tag character included.
pub type DecodeHook = Box<dyn Fn(&str) -> Result<Passable> + Send + Sync>;

/// Extension encoders, one optional hook per extension kind.
#[derive(Default)]
pub struct EncodeHooks {
    /// Encoder for Remotable values; output must start with `r`
    pub remotable: Option<EncodeHook>,
    /// Encoder for Promise values; output must start with `?`
    pub promise: Option<EncodeHook>,
    /// Encoder for Error values; output must start with `!`
    pub error: Option<EncodeHook>,
}

/// Extension decoders, one optional hook per extension kind.
#[derive(Default)]
pub struct DecodeHooks {
    /// Decoder for `r`-tagged encodings
    pub remotable: Option<DecodeHook>,
    /// Decoder for `?`-tagged encodings
    pub promise: Option<DecodeHook>,
    /// Decoder for `!`-tagged encodings
    pub error: Option<DecodeHook>,
}

/// Encodes passable values into rank-order-preserving key strings.
pub struct Encoder {
    hooks: EncodeHooks,
}

impl Encoder {
    /// Create an encoder with no extension hooks.
    ///
    /// Extension-kind values will fail to encode with `UnsupportedKind`.
    pub fn new() -> Self {
        Self::with_hooks(EncodeHooks::default())
    }

    /// Create an encoder with the given extension hooks.
    pub fn with_hooks(hooks: EncodeHooks) -> Self {
        Encoder { hooks }
    }

    /// Encode a value into its key string.
    ///
    /// The first character of the result is the value's kind tag; the
    /// remainder orders values within the kind under code-point comparison.
    pub fn encode(&self, value: &Passable) -> Result<String> {
        match value {
            Passable::Null => Ok("v".to_string()),
            Passable::Undefined => Ok("z".to_string()),
            Passable::Bool(b) => Ok(if *b { "btrue" } else { "bfalse" }.to_string()),
            Passable::Number(n) => Ok(number::encode_number(*n)),
            Passable::BigInt(n) => Ok(number::encode_bigint(n)),
            Passable::String(s) => Ok(format!("s{s}")),
            Passable::Symbol(name) => Ok(format!("y{name}")),
            Passable::Remotable(id) => {
                self.encode_extension(PassKind::Remotable, self.hooks.remotable.as_ref(), id)
            }
            Passable::Promise(id) => {
                self.encode_extension(PassKind::Promise, self.hooks.promise.as_ref(), id)
            }
            Passable::Error(id) => {
                self.encode_extension(PassKind::Error, self.hooks.error.as_ref(), id)
            }
            Passable::Array(elements) => self.encode_array(elements),
            Passable::Record(fields) => self.encode_record(fields),
            Passable::Tagged { tag, payload } => self.encode_tagged(tag, payload),
        }
    }

    fn encode_extension(
        &self,
        kind: PassKind,
        hook: Option<&EncodeHook>,
        id: &OpaqueId,
    ) -> Result<String> {
        let hook = hook.ok_or(Error::UnsupportedKind { kind })?;
        let encoded = hook(id)?;
        let tag = kind.tag_char();
        if !encoded.starts_with(tag) {
            // A hook that breaks the prefix contract is a caller bug, not
            // malformed data.
            return Err(Error::invariant(format!(
                "{kind} encoding must start with {tag:?}: {encoded:?}"
            )));
        }
        Ok(encoded)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes rank-order-preserving key strings back into passable values.
pub struct Decoder {
    hooks: DecodeHooks,
}

impl Decoder {
    /// Create a decoder with no extension hooks.
    ///
    /// Extension-tagged encodings will fail to decode with `UnsupportedKind`.
    pub fn new() -> Self {
        Self::with_hooks(DecodeHooks::default())
    }

    /// Create a decoder with the given extension hooks.
    pub fn with_hooks(hooks: DecodeHooks) -> Self {
        Decoder { hooks }
    }

    /// Decode a key string back into its value.
    pub fn decode(&self, encoded: &str) -> Result<Passable> {
        let tag = encoded
            .chars()
            .next()
            .ok_or_else(|| Error::malformed("empty encoding"))?;
        match tag {
            'v' => Self::expect_bare(encoded, "v", Passable::Null),
            'z' => Self::expect_bare(encoded, "z", Passable::Undefined),
            'b' => match &encoded[1..] {
                "true" => Ok(Passable::Bool(true)),
                "false" => Ok(Passable::Bool(false)),
                other => Err(Error::malformed(format!(
                    "encoded boolean expected, got payload {other:?}"
                ))),
            },
            'f' => Ok(Passable::Number(number::decode_number(encoded)?)),
            'n' | 'p' => Ok(Passable::BigInt(number::decode_bigint(encoded)?)),
            's' => Ok(Passable::String(encoded[1..].to_string())),
            'y' => Ok(Passable::Symbol(encoded[1..].to_string())),
            'r' => self.decode_extension(PassKind::Remotable, self.hooks.remotable.as_ref(), encoded),
            '?' => self.decode_extension(PassKind::Promise, self.hooks.promise.as_ref(), encoded),
            '!' => self.decode_extension(PassKind::Error, self.hooks.error.as_ref(), encoded),
            '[' => Ok(Passable::Array(self.decode_array(encoded)?)),
            '(' => self.decode_record(encoded),
            ':' => self.decode_tagged(encoded),
            other => Err(Error::malformed(format!(
                "invalid key tag character {other:?}"
            ))),
        }
    }

    /// Tag-only kinds carry no payload; any trailing text is corrupt input.
    fn expect_bare(encoded: &str, expected: &str, value: Passable) -> Result<Passable> {
        if encoded == expected {
            Ok(value)
        } else {
            Err(Error::malformed(format!(
                "unexpected payload after {expected:?} tag: {encoded:?}"
            )))
        }
    }

    fn decode_extension(
        &self,
        kind: PassKind,
        hook: Option<&DecodeHook>,
        encoded: &str,
    ) -> Result<Passable> {
        let hook = hook.ok_or(Error::UnsupportedKind { kind })?;
        hook(encoded)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
