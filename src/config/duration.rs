// src/config/duration.rs

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

static DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*(ms|s|m|h)$").expect("duration regex is valid"));

/// Parse `"<n><unit>"` where unit is `ms`, `s`, `m` or `h` (e.g. `"30s"`).
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim().to_lowercase();
    let caps = DURATION
        .captures(&s)
        .ok_or_else(|| format!("'{s}' is not <number><ms|s|m|h>"))?;

    let value: u64 = caps[1]
        .parse()
        .map_err(|e| format!("invalid duration number '{}': {}", &caps[1], e))?;

    let secs = |mult: u64| {
        value
            .checked_mul(mult)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("duration '{s}' is too large"))
    };

    match &caps[2] {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        "m" => secs(60),
        _ => secs(60 * 60),
    }
}
