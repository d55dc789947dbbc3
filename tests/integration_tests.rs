//! Integration tests for Ciphrase.
//!
//! The cipher operates on a normalized 26-letter alphabet:
//! - Inputs are stripped to ASCII letters and upper-cased
//! - The key phrase is cycled to the message length
//! - Encoding shifts forward by the key letter's index, decoding shifts back
//!
//! Decode is the exact inverse of encode under the same key phrase.

use ciphrase::{decode, encode, normalize, stretch, KeyError};

/// Test the classic encode vector and its round trip
#[test]
fn test_encode_decode_roundtrip() {
    let encoded = encode("ATTACKATDAWN", "LEMON").unwrap();
    assert_eq!(encoded.translation, "LXFOPVEFRNHR");

    let decoded = decode(&encoded.translation, "LEMON").unwrap();
    assert_eq!(decoded.translation, "ATTACKATDAWN");
}

/// Test that raw punctuated input round-trips to its normalized form
#[test]
fn test_roundtrip_normalizes_raw_input() {
    let message = "Meet me at the park, 9 PM sharp!";
    let key_phrase = "Charles Babbage";

    let encoded = encode(message, key_phrase).unwrap();
    let decoded = decode(&encoded.translation, key_phrase).unwrap();

    assert_eq!(decoded.translation, normalize(message));
    assert_eq!(decoded.translation, "MEETMEATTHEPARKPMSHARP");
}

/// Test that the key phrase itself is normalized before cycling
#[test]
fn test_key_phrase_is_normalized() {
    let plain = encode("ATTACKATDAWN", "LEMON").unwrap();
    let messy = encode("ATTACKATDAWN", "L3m-On!").unwrap();
    assert_eq!(plain.translation, messy.translation);
    assert_eq!(messy.key_phrase, "LEMON");
}

/// Test normalization behavior and idempotence
#[test]
fn test_normalize() {
    assert_eq!(normalize("Hello, World! 123"), "HELLOWORLD");
    assert_eq!(normalize(normalize("Hello, World! 123").as_str()), "HELLOWORLD");
    assert_eq!(normalize("¡café!"), "CAF");
    assert_eq!(normalize("42"), "");
}

/// Test key stretching against the classic vector
#[test]
fn test_stretch_key_phrase() {
    assert_eq!(stretch("ATTACKATDAWN", "LEMON").unwrap(), "LEMONLEMONLE");
}

/// Test the wrap at the end of the alphabet
#[test]
fn test_boundary_wrap() {
    let encoded = encode("Z", "Z").unwrap();
    assert_eq!(encoded.translation, "Y");

    let decoded = decode("Y", "Z").unwrap();
    assert_eq!(decoded.translation, "Z");
}

/// Test that an empty message is a no-op in both directions
#[test]
fn test_empty_message() {
    assert_eq!(encode("", "KEY").unwrap().translation, "");
    assert_eq!(decode("", "KEY").unwrap().translation, "");
}

/// Test that an empty key phrase is rejected by every operation
#[test]
fn test_empty_key_phrase_is_rejected() {
    assert_eq!(stretch("HELLO", ""), Err(KeyError::EmptyKeyPhrase));
    assert!(matches!(encode("HELLO", ""), Err(KeyError::EmptyKeyPhrase)));
    assert!(matches!(decode("HELLO", ""), Err(KeyError::EmptyKeyPhrase)));

    // A non-blank phrase with no letters normalizes to empty and fails the
    // same way
    assert!(matches!(
        encode("HELLO", "2024!"),
        Err(KeyError::EmptyKeyPhrase)
    ));
}

/// Test a key phrase longer than the message
#[test]
fn test_key_phrase_longer_than_message() {
    let encoded = encode("HI", "VERYLONGKEYPHRASE").unwrap();
    assert_eq!(encoded.translation.len(), 2);

    let decoded = decode(&encoded.translation, "VERYLONGKEYPHRASE").unwrap();
    assert_eq!(decoded.translation, "HI");
}

/// Test that results carry the normalized inputs for display
#[test]
fn test_results_expose_normalized_inputs() {
    let encoded = encode("Attack at dawn!", "lemon").unwrap();
    assert_eq!(encoded.message, "ATTACKATDAWN");
    assert_eq!(encoded.key_phrase, "LEMON");

    let decoded = decode("lxfopvefrnhr", "lemon").unwrap();
    assert_eq!(decoded.message, "LXFOPVEFRNHR");
    assert_eq!(decoded.key_phrase, "LEMON");
    assert_eq!(decoded.translation, "ATTACKATDAWN");
}
