//! Behavioral tests for the formatter and composer public API.

use missive_core::{
    format, format_message, Composer, FormatRequest, Outcome, Tone, EMPTY_BODY_PROMPT,
};

#[test]
fn test_result_always_contains_body() {
    for tone in ["Friendly", "FORMAL", "funny", "xyz"] {
        for body in ["Hello", "multi\nline", "  padded  ", "emoji 🎉"] {
            let out = format("Ana", tone, body);
            assert!(!out.is_empty(), "empty output for tone {tone}");
            assert!(out.contains(body), "{out:?} is missing {body:?}");
        }
    }
}

#[test]
fn test_empty_name_formal() {
    assert_eq!(
        format("", "formal", "Hello"),
        "Dear Friend,\n\nHello\n\nSincerely,\nFriend"
    );
}

#[test]
fn test_blank_name_funny() {
    let out = format("  ", "funny", "Hi");
    assert!(out.starts_with("Yo Friend!"));
    assert!(out.contains("😂"));
    assert!(out.ends_with("Cheers,\nYour pal"));
}

#[test]
fn test_tone_matching_is_case_insensitive() {
    assert!(format("Ana", "FORMAL", "Test").starts_with("Dear Ana,"));
    assert!(format("Ana", "Funny", "Test").starts_with("Yo Ana!"));
}

#[test]
fn test_unknown_tone_uses_friendly_template() {
    assert_eq!(
        format("Bo", "unknown-tone", "X"),
        "Hi Bo 👋\n\nX\n\nTake care,\nBo"
    );
    assert!(format("Bo", "", "X").starts_with("Hi Bo 👋"));
}

#[test]
fn test_formatting_is_deterministic() {
    for tone in Tone::ALL {
        let first = format_message("Ana", tone, "Same input");
        let second = format_message("Ana", tone, "Same input");
        assert_eq!(first.as_bytes(), second.as_bytes());
    }
}

#[test]
fn test_string_and_typed_entry_points_agree() {
    for tone in Tone::ALL {
        assert_eq!(
            format("Ana", tone.as_str(), "Body"),
            format_message("Ana", tone, "Body")
        );
        assert_eq!(
            format("Ana", tone.label(), "Body"),
            FormatRequest::new("Ana", tone, "Body").format()
        );
    }
}

#[test]
fn test_blank_body_send_never_formats() {
    let mut composer = Composer::with_defaults("Ana", Tone::Formal);
    composer.body = " \t\n ".to_string();

    assert_eq!(composer.send(), Outcome::Rejected);
    assert_eq!(composer.output(), "Write a message before sending.");
    assert_eq!(composer.output(), EMPTY_BODY_PROMPT);
    assert!(!composer.output().contains("Dear"));
}
