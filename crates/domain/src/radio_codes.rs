// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A radio ten-code and its plain-language meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioCode {
    /// The code as spoken, e.g. `10-4`.
    pub code: &'static str,
    /// What the code means.
    pub meaning: &'static str,
}

/// Ten-codes in common use on security and public-safety channels.
pub const RADIO_CODES: &[RadioCode] = &[
    RadioCode {
        code: "10-1",
        meaning: "Unable to copy, change location",
    },
    RadioCode {
        code: "10-2",
        meaning: "Signal good",
    },
    RadioCode {
        code: "10-3",
        meaning: "Stop transmitting",
    },
    RadioCode {
        code: "10-4",
        meaning: "Acknowledged",
    },
    RadioCode {
        code: "10-6",
        meaning: "Busy, stand by",
    },
    RadioCode {
        code: "10-7",
        meaning: "Out of service",
    },
    RadioCode {
        code: "10-8",
        meaning: "In service",
    },
    RadioCode {
        code: "10-9",
        meaning: "Repeat message",
    },
    RadioCode {
        code: "10-10",
        meaning: "Fight in progress",
    },
    RadioCode {
        code: "10-12",
        meaning: "Visitors or officials present",
    },
    RadioCode {
        code: "10-13",
        meaning: "Advise weather and road conditions",
    },
    RadioCode {
        code: "10-20",
        meaning: "Location",
    },
    RadioCode {
        code: "10-22",
        meaning: "Disregard",
    },
    RadioCode {
        code: "10-23",
        meaning: "Arrived at scene",
    },
    RadioCode {
        code: "10-33",
        meaning: "Emergency, clear the channel",
    },
    RadioCode {
        code: "10-52",
        meaning: "Ambulance needed",
    },
    RadioCode {
        code: "10-70",
        meaning: "Fire alarm",
    },
    RadioCode {
        code: "10-97",
        meaning: "Check signal",
    },
    RadioCode {
        code: "10-98",
        meaning: "Assignment completed",
    },
];

/// Looks up a ten-code. A bare number such as `4` is read as `10-4`.
#[must_use]
pub fn lookup_radio_code(code: &str) -> Option<&'static RadioCode> {
    let trimmed: &str = code.trim();
    let normalized: String = if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
    {
        format!("10-{trimmed}")
    } else {
        trimmed.to_string()
    };

    RADIO_CODES.iter().find(|entry| entry.code == normalized)
}
