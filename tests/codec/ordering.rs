//! Order preservation: encoded code-point order equals value order.

use lexikey::{DecodeHooks, Decoder, EncodeHooks, Encoder, OpaqueId, Passable};

fn encode(value: &Passable) -> String {
    Encoder::new().encode(value).expect("encode")
}

fn assert_strictly_ascending(encoded: &[String]) {
    for pair in encoded.windows(2) {
        assert!(
            pair[0] < pair[1],
            "{:?} should sort strictly before {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn numbers_sort_in_numeric_order() {
    let ladder = [-5.0, -1.0, -0.25, 0.0, 0.25, 1.0, 5.0];
    let encoded: Vec<String> = ladder.iter().map(|&n| encode(&Passable::Number(n))).collect();
    assert_strictly_ascending(&encoded);
}

#[test]
fn infinities_bracket_all_finite_numbers() {
    let lo = encode(&Passable::Number(f64::NEG_INFINITY));
    let hi = encode(&Passable::Number(f64::INFINITY));
    for n in [-f64::MAX, -1.0, 0.0, 1.0, f64::MAX] {
        let mid = encode(&Passable::Number(n));
        assert!(lo < mid && mid < hi, "infinities must bracket {n}");
    }
}

#[test]
fn big_integers_sort_in_numeric_order() {
    let ladder = ["-100", "-9", "0", "9", "100"];
    let encoded: Vec<String> = ladder
        .iter()
        .map(|s| encode(&Passable::BigInt(s.parse().unwrap())))
        .collect();
    assert_strictly_ascending(&encoded);
}

#[test]
fn shorter_magnitudes_sort_correctly_at_scale_boundaries() {
    // Crossing a digit-count boundary, and a count-width boundary (9->10
    // digits of digit count never happens, but 9->10 digits of value does).
    let ladder = [
        "-10000000000",
        "-9999999999",
        "-10",
        "-9",
        "9",
        "10",
        "9999999999",
        "10000000000",
    ];
    let encoded: Vec<String> = ladder
        .iter()
        .map(|s| encode(&Passable::BigInt(s.parse().unwrap())))
        .collect();
    assert_strictly_ascending(&encoded);
}

#[test]
fn strings_sort_lexicographically() {
    let ladder = ["", "apple", "applesauce", "banana", "z"];
    let encoded: Vec<String> = ladder.iter().map(|s| encode(&Passable::from(*s))).collect();
    assert_strictly_ascending(&encoded);
}

#[test]
fn arrays_sort_recursively() {
    let ladder = [
        Passable::Array(vec![]),
        Passable::Array(vec![Passable::from("a")]),
        Passable::Array(vec![Passable::from("a"), Passable::from("b")]),
        Passable::Array(vec![Passable::from("b")]),
    ];
    let encoded: Vec<String> = ladder.iter().map(encode).collect();
    assert_strictly_ascending(&encoded);
}

#[test]
fn cross_kind_order_follows_the_tag_table() {
    let encoder = Encoder::with_hooks(EncodeHooks {
        remotable: Some(Box::new(|id| Ok(format!("r{id}")))),
        promise: Some(Box::new(|id| Ok(format!("?{id}")))),
        error: Some(Box::new(|id| Ok(format!("!{id}")))),
    });
    // One representative per tag character, listed in tag code-point order.
    let ladder = [
        Passable::Error(OpaqueId::new("err")),
        Passable::record([("k", Passable::Null)]),
        Passable::tagged("t", Passable::Null),
        Passable::Promise(OpaqueId::new("p")),
        Passable::Array(vec![Passable::Null]),
        Passable::Bool(true),
        Passable::Number(1.0e300), // payload must not matter across kinds
        Passable::from(-1i64),
        Passable::from(1i64),
        Passable::Remotable(OpaqueId::new("ref")),
        Passable::from("a string"),
        Passable::Null,
        Passable::Symbol("sym".into()),
        Passable::Undefined,
    ];
    let encoded: Vec<String> = ladder
        .iter()
        .map(|v| encoder.encode(v).expect("encode"))
        .collect();
    assert_strictly_ascending(&encoded);
}

#[test]
fn record_canonicalization_is_order_independent() {
    let encoder = Encoder::new();
    let a = Passable::record([
        ("alpha", Passable::from(1i64)),
        ("beta", Passable::from(2i64)),
        ("gamma", Passable::from(3i64)),
    ]);
    let b = Passable::record([
        ("gamma", Passable::from(3i64)),
        ("alpha", Passable::from(1i64)),
        ("beta", Passable::from(2i64)),
    ]);
    assert_eq!(encoder.encode(&a).unwrap(), encoder.encode(&b).unwrap());
}

#[test]
fn extension_payload_order_passes_through() {
    let encoder = Encoder::with_hooks(EncodeHooks {
        remotable: Some(Box::new(|id| Ok(format!("r{id}")))),
        ..Default::default()
    });
    let decoder = Decoder::with_hooks(DecodeHooks {
        remotable: Some(Box::new(|s| Ok(Passable::Remotable(OpaqueId::new(&s[1..]))))),
        ..Default::default()
    });
    let a = encoder.encode(&Passable::Remotable(OpaqueId::new("board01"))).unwrap();
    let b = encoder.encode(&Passable::Remotable(OpaqueId::new("board02"))).unwrap();
    assert!(a < b);
    assert_eq!(
        decoder.decode(&a).unwrap(),
        Passable::Remotable(OpaqueId::new("board01"))
    );
}
