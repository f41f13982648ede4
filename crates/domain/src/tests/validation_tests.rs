// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, RADIO_CODES, lookup_radio_code, require_text, validate_timezone};

#[test]
fn test_require_text_trims_value() {
    assert_eq!(require_text("location", "  Lobby ").unwrap(), "Lobby");
}

#[test]
fn test_require_text_rejects_blank_value() {
    let result = require_text("location", "   ");

    assert_eq!(result, Err(DomainError::EmptyField { field: "location" }));
}

#[test]
fn test_validate_timezone_accepts_iana_name() {
    let tz = validate_timezone("Europe/Berlin").unwrap();

    assert_eq!(tz.name(), "Europe/Berlin");
}

#[test]
fn test_validate_timezone_rejects_unknown_name() {
    let result = validate_timezone("Mars/Olympus");

    assert!(matches!(result, Err(DomainError::InvalidTimezone(_))));
}

#[test]
fn test_lookup_radio_code_by_full_code() {
    let code = lookup_radio_code("10-4").unwrap();

    assert_eq!(code.meaning, "Acknowledged");
}

#[test]
fn test_lookup_radio_code_accepts_bare_number() {
    assert_eq!(lookup_radio_code("20").unwrap().code, "10-20");
}

#[test]
fn test_lookup_radio_code_unknown_returns_none() {
    assert!(lookup_radio_code("10-999").is_none());
    assert!(lookup_radio_code("").is_none());
}

#[test]
fn test_radio_codes_are_unique() {
    for (index, entry) in RADIO_CODES.iter().enumerate() {
        assert!(
            RADIO_CODES[index + 1..]
                .iter()
                .all(|other| other.code != entry.code)
        );
    }
}
