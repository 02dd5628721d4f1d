//! Abbreviation tables for cloud covers, present weather and recent weather.
//!
//! Codes are matched case-sensitively; reports are upper case.

// ---------------------------------------------------------------------------
// Cloud cover
// ---------------------------------------------------------------------------

/// Cloud cover codes → meaning.
pub const CLOUDS: &[(&str, &str)] = &[
    ("NCD", "no clouds"),
    ("SKC", "sky clear"),
    ("CLR", "no clouds under 12,000 ft"),
    ("NSC", "no significant"),
    ("FEW", "few"),
    ("SCT", "scattered"),
    ("BKN", "broken"),
    ("OVC", "overcast"),
    ("VV", "vertical visibility"),
];

// ---------------------------------------------------------------------------
// Present weather
// ---------------------------------------------------------------------------

/// Present-weather codes → meaning, grouped qualifier, descriptor,
/// precipitation, obscuration, other.
pub const WEATHER: &[(&str, &str)] = &[
    // Intensity / proximity
    ("-", "light intensity"),
    ("+", "heavy intensity"),
    ("VC", "in the vicinity"),
    // Descriptor
    ("MI", "shallow"),
    ("PR", "partial"),
    ("BC", "patches"),
    ("DR", "low drifting"),
    ("BL", "blowing"),
    ("SH", "showers"),
    ("TS", "thunderstorm"),
    ("FZ", "freezing"),
    // Precipitation
    ("RA", "rain"),
    ("DZ", "drizzle"),
    ("SN", "snow"),
    ("SG", "snow grains"),
    ("IC", "ice crystals"),
    ("PL", "ice pellets"),
    ("GR", "hail"),
    ("GS", "small hail"),
    ("UP", "unknown precipitation"),
    // Obscuration
    ("FG", "fog"),
    ("VA", "volcanic ash"),
    ("BR", "mist"),
    ("HZ", "haze"),
    ("DU", "widespread dust"),
    ("FU", "smoke"),
    ("SA", "sand"),
    ("PY", "spray"),
    // Other
    ("SQ", "squall"),
    ("PO", "dust or sand whirls"),
    ("DS", "duststorm"),
    ("SS", "sandstorm"),
    ("FC", "funnel cloud"),
    ("NSW", "no significant weather"),
];

// ---------------------------------------------------------------------------
// Recent weather
// ---------------------------------------------------------------------------

/// Recent significant weather groups (whole token) → description.
pub const RECENT_WEATHER: &[(&str, &str)] = &[
    ("REFZDZ", "Moderate/heavy freezing drizzle"),
    ("REFZRA", "Moderate/heavy freezing rain"),
    ("REDZ", "Moderate/heavy drizzle"),
    ("RERA", "Moderate/heavy rain"),
    ("RERADZ", "Moderate/heavy rain and drizzle"),
    ("RESN", "Moderate/heavy snow"),
    ("RERASN", "Moderate/heavy rain and snow"),
    ("RESG", "Moderate/heavy snow grains"),
    ("REPL", "Moderate/heavy ice pellets"),
    ("RESHRA", "Moderate/heavy rain showers"),
    ("RESHSN", "Moderate/heavy snow showers"),
    ("RESHRASN", "Moderate/heavy showers of rain and snow"),
    ("RESHGR", "Moderate/heavy hail showers"),
    ("RESHGS", "Moderate/heavy small hail showers"),
    ("REBLSN", "Moderate/heavy blowing snow"),
    ("RETS", "Thunderstorm"),
    ("RETSRA", "Thunderstorm with moderate/heavy rain"),
    ("RETSSN", "Thunderstorm with moderate/heavy snow"),
    ("RETSGR", "Thunderstorm with hail"),
    ("REFC", "Funnel cloud"),
    ("REVA", "Volcanic ash"),
    ("RESS", "Sandstorm"),
    ("REDS", "Duststorm"),
    ("REUP", "Unidentified precipitation (AUTO obs. only)"),
    ("REFZUP", "Unidentified freezing precipitation (AUTO obs. only)"),
    ("RESHUP", "Unidentified precipitation showers (AUTO obs. only)"),
    ("RETSUP", "Thunderstorm with unidentified precipitation (AUTO obs. only)"),
];

/// Exact-code lookup. Returns the table's own `'static` code and meaning.
pub fn lookup(
    table: &'static [(&'static str, &'static str)],
    code: &str,
) -> Option<(&'static str, &'static str)> {
    table.iter().find(|(c, _)| *c == code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(CLOUDS, "VV"), Some(("VV", "vertical visibility")));
        assert_eq!(lookup(WEATHER, "-"), Some(("-", "light intensity")));
        assert_eq!(lookup(WEATHER, "XX"), None);
        assert_eq!(lookup(CLOUDS, ""), None);
    }

    #[test]
    fn test_codes_are_short() {
        // The prefix matcher only tries lengths 1 to 3
        for (code, _) in CLOUDS.iter().chain(WEATHER) {
            assert!((1..=3).contains(&code.len()), "{code}");
        }
    }

    #[test]
    fn test_codes_unique() {
        for table in [CLOUDS, WEATHER, RECENT_WEATHER] {
            for (i, (a, _)) in table.iter().enumerate() {
                assert!(
                    table[i + 1..].iter().all(|(b, _)| a != b),
                    "duplicate code {a}"
                );
            }
        }
    }

    #[test]
    fn test_recent_weather_codes_prefixed() {
        assert!(RECENT_WEATHER.iter().all(|(c, _)| c.starts_with("RE")));
    }
}
