//! Duration splitting and display formatting.
//!
//! The timekeeper displays second counts in two forms: a running clock
//! (`4:05`, `-0:45` once a side is into overtime) and a verbose allotment
//! label (`25 min`, `1 min 30 sec`). Both accept signed inputs because
//! remaining-time figures go negative when an allotment is exceeded.

/// A second count split into minute and second components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinutesSeconds {
    /// Whole minutes (magnitude).
    pub minutes: u32,
    /// Leftover seconds, always `0..60`.
    pub seconds: u32,
    /// Whether the original value was negative.
    pub negative: bool,
}

/// Split a signed second count into minute/second components.
#[must_use]
pub fn split_seconds(total: i64) -> MinutesSeconds {
    let magnitude = total.unsigned_abs();
    MinutesSeconds {
        minutes: u32::try_from(magnitude / 60).unwrap_or(u32::MAX),
        seconds: u32::try_from(magnitude % 60).unwrap_or(0),
        negative: total < 0,
    }
}

/// Format a signed second count as a running clock, e.g. `4:05` or `-0:45`.
#[must_use]
pub fn clock_format(total: i64) -> String {
    let split = split_seconds(total);
    let sign = if split.negative { "-" } else { "" };
    format!("{sign}{}:{:02}", split.minutes, split.seconds)
}

/// Format a signed second count as a verbose label.
///
/// Zero-valued components are omitted except for the zero total itself:
/// `25 min`, `1 min 30 sec`, `45 sec`, `0 sec`.
#[must_use]
pub fn verbose_format(total: i64) -> String {
    let split = split_seconds(total);
    let sign = if split.negative { "-" } else { "" };
    match (split.minutes, split.seconds) {
        (0, 0) => "0 sec".to_string(),
        (m, 0) => format!("{sign}{m} min"),
        (0, s) => format!("{sign}{s} sec"),
        (m, s) => format!("{sign}{m} min {s} sec"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
