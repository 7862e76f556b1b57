//! Composite codecs: arrays, records, and tagged wrappers.
//!
//! Arrays frame each element's recursive encoding with a U+0000 terminator.
//! Any literal U+0000 or U+0001 inside an element is escaped by a preceding
//! U+0001, so nested separators can never be confused with data and the
//! encoding stays self-delimiting at every depth.
//!
//! Records and tagged values reuse the array rule on a fixed two-element
//! shape: `[names, values]` for records (names in canonical sorted order)
//! and `[tag, payload]` for tagged values, under their own lead tags.

use crate::codec::{Decoder, Encoder};
use crate::error::{Error, Result};
use crate::value::Passable;
use std::collections::BTreeMap;

/// Terminator after each array element.
pub(crate) const TERMINATOR: char = '\u{0000}';

/// Backslash-like escape for the terminator and for itself.
pub(crate) const ESCAPE: char = '\u{0001}';

impl Encoder {
    /// Encode a sequence of elements under the array tag `[`.
    pub(crate) fn encode_array(&self, elements: &[Passable]) -> Result<String> {
        let mut out = String::from("[");
        for element in elements {
            for c in self.encode(element)?.chars() {
                if c == TERMINATOR || c == ESCAPE {
                    out.push(ESCAPE);
                }
                out.push(c);
            }
            out.push(TERMINATOR);
        }
        Ok(out)
    }

    /// Encode a record as `(` + the array encoding of `[names, values]`.
    ///
    /// `BTreeMap` iteration gives the canonical sorted field order, so the
    /// encoding is independent of how the record was built.
    pub(crate) fn encode_record(&self, fields: &BTreeMap<String, Passable>) -> Result<String> {
        let names: Vec<Passable> = fields.keys().cloned().map(Passable::String).collect();
        let values: Vec<Passable> = fields.values().cloned().collect();
        let parts = [Passable::Array(names), Passable::Array(values)];
        Ok(format!("({}", self.encode_array(&parts)?))
    }

    /// Encode a tagged value as `:` + the array encoding of `[tag, payload]`.
    pub(crate) fn encode_tagged(&self, tag: &str, payload: &Passable) -> Result<String> {
        let parts = [Passable::String(tag.to_string()), payload.clone()];
        Ok(format!(":{}", self.encode_array(&parts)?))
    }
}

impl Decoder {
    /// Decode an array encoding (tag included) into its elements.
    pub(crate) fn decode_array(&self, encoded: &str) -> Result<Vec<Passable>> {
        let body = encoded
            .strip_prefix('[')
            .ok_or_else(|| Error::malformed(format!("encoded array expected: {encoded:?}")))?;
        let mut elements = Vec::new();
        let mut element = String::new();
        let mut chars = body.chars();
        while let Some(c) = chars.next() {
            match c {
                TERMINATOR => {
                    elements.push(self.decode(&element)?);
                    element.clear();
                }
                ESCAPE => match chars.next() {
                    Some(escaped @ (TERMINATOR | ESCAPE)) => element.push(escaped),
                    Some(other) => {
                        return Err(Error::malformed(format!(
                            "unexpected character after escape: {other:?}"
                        )))
                    }
                    None => {
                        return Err(Error::malformed(format!(
                            "escape at end of encoding: {encoded:?}"
                        )))
                    }
                },
                _ => element.push(c),
            }
        }
        if !element.is_empty() {
            return Err(Error::malformed(format!(
                "array element not terminated: {encoded:?}"
            )));
        }
        Ok(elements)
    }

    /// Decode a record encoding (tag included), rebuilding the field map.
    pub(crate) fn decode_record(&self, encoded: &str) -> Result<Passable> {
        let body = encoded
            .strip_prefix('(')
            .ok_or_else(|| Error::malformed(format!("encoded record expected: {encoded:?}")))?;
        let halves = self.decode_array(body)?;
        let [names, values] = <[Passable; 2]>::try_from(halves).map_err(|_| {
            Error::malformed(format!("expected names,values pair in record: {encoded:?}"))
        })?;
        let (names, values) = match (names, values) {
            (Passable::Array(n), Passable::Array(v)) if n.len() == v.len() => (n, v),
            _ => {
                return Err(Error::malformed(format!(
                    "not a valid record encoding: {encoded:?}"
                )))
            }
        };
        let mut fields = BTreeMap::new();
        for (name, value) in names.into_iter().zip(values) {
            let name = match name {
                Passable::String(s) => s,
                other => {
                    return Err(Error::malformed(format!(
                        "record field name must be a string, got {}",
                        other.kind()
                    )))
                }
            };
            if fields.insert(name.clone(), value).is_some() {
                // Duplicates cannot come from a correct encoder; this is a
                // well-formedness failure, not a parse error.
                return Err(Error::invariant(format!(
                    "duplicate record field name {name:?}"
                )));
            }
        }
        Ok(Passable::Record(fields))
    }

    /// Decode a tagged-value encoding (tag included).
    pub(crate) fn decode_tagged(&self, encoded: &str) -> Result<Passable> {
        let body = encoded
            .strip_prefix(':')
            .ok_or_else(|| Error::malformed(format!("encoded tagged value expected: {encoded:?}")))?;
        let parts = self.decode_array(body)?;
        let [tag, payload] = <[Passable; 2]>::try_from(parts).map_err(|_| {
            Error::malformed(format!("expected tag,payload pair: {encoded:?}"))
        })?;
        let tag = match tag {
            Passable::String(s) => s,
            other => {
                return Err(Error::malformed(format!(
                    "tagged value's tag must be a string, got {}",
                    other.kind()
                )))
            }
        };
        Ok(Passable::Tagged {
            tag,
            payload: Box::new(payload),
        })
    }
}
