//! Codec Integration Tests
//!
//! End-to-end coverage of the key codec: round trips, order preservation,
//! malformed-input rejection, and property-based checks.

mod malformed;
mod ordering;
