//! Malformed-input rejection: no partial values, ever.

use lexikey::{Decoder, Encoder, Passable};

fn decode_err(encoded: &str) -> lexikey::Error {
    Decoder::new()
        .decode(encoded)
        .expect_err("decode should fail")
}

#[test]
fn unknown_tag_characters_are_rejected() {
    for encoded in ["Xabc", "0", " ", "\u{0}", "q1:0", "{}"] {
        assert!(decode_err(encoded).is_malformed(), "input {encoded:?}");
    }
}

#[test]
fn empty_input_is_rejected() {
    assert!(decode_err("").is_malformed());
}

#[test]
fn truncated_bigint_fields_are_rejected() {
    // declared digit count exceeds remaining characters
    assert!(decode_err("p3:12").is_malformed());
    // digit-count field itself cut off
    assert!(decode_err("p~").is_malformed());
    // separator missing entirely
    assert!(decode_err("p~12").is_malformed());
    // negative forms of the same failures
    assert!(decode_err("n7:1").is_malformed());
    assert!(decode_err("n#").is_malformed());
}

#[test]
fn array_missing_final_terminator_is_rejected() {
    let encoder = Encoder::new();
    let good = encoder
        .encode(&Passable::Array(vec![
            Passable::from(1i64),
            Passable::from("tail"),
        ]))
        .unwrap();
    assert!(good.ends_with('\u{0}'));
    let truncated = &good[..good.len() - 1];
    assert!(decode_err(truncated).is_malformed());
}

#[test]
fn malformed_elements_inside_arrays_propagate() {
    // a well-framed array whose element has an unknown tag
    assert!(decode_err("[Qbad\u{0}").is_malformed());
    // a well-framed array with an empty element encoding
    assert!(decode_err("[\u{0}").is_malformed());
    // a truncated number nested one level down
    assert!(decode_err("[f0123\u{0}").is_malformed());
}

#[test]
fn lax_boolean_text_is_rejected() {
    for encoded in ["btru", "btrue ", "bfals", "b1", "b"] {
        assert!(decode_err(encoded).is_malformed(), "input {encoded:?}");
    }
}

#[test]
fn no_partial_results_on_failure() {
    // The decoder returns Result, so failure yields no value at all; check
    // that a mostly-valid composite with one bad element fails as a whole.
    let encoder = Encoder::new();
    let good = encoder
        .encode(&Passable::Array(vec![
            Passable::from("ok"),
            Passable::from(42i64),
        ]))
        .unwrap();
    let poisoned = format!("{good}Xoops\u{0}");
    assert!(decode_err(&poisoned).is_malformed());
}
