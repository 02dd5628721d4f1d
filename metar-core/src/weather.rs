//! Present weather and recent weather groups.
//!
//! A present-weather group concatenates an optional intensity/proximity
//! qualifier, an optional descriptor and one or more phenomena:
//! `-SHRA` = light / showers / rain. Groups are split left to right with the
//! longest-prefix matcher.

use crate::abbrev::match_abbreviation;
use crate::cursor::FieldCursor;
use crate::tables::{self, RECENT_WEATHER, WEATHER};
use crate::types::WeatherPhenomenon;

/// Split one present-weather group into its phenomena, in encoded order.
///
/// Returns `None` unless the whole group decomposes into known codes.
pub fn decode_phenomena(group: &str) -> Option<Vec<WeatherPhenomenon>> {
    let mut phenomena = Vec::new();
    let mut rest = group;

    while !rest.is_empty() {
        let m = match_abbreviation(rest, WEATHER)?;
        phenomena.push(WeatherPhenomenon {
            abbreviation: m.abbreviation,
            meaning: m.meaning,
        });
        rest = &rest[m.abbreviation.len()..];
    }

    if phenomena.is_empty() {
        None
    } else {
        Some(phenomena)
    }
}

/// Consume consecutive present-weather groups (`-SHRA VCSH`) and join their
/// phenomena. `None` when the next field is not a weather group.
pub fn decode_weather(cursor: &mut FieldCursor) -> Option<Vec<WeatherPhenomenon>> {
    let mut weather: Option<Vec<WeatherPhenomenon>> = None;

    while let Some(phenomena) = cursor.peek().and_then(decode_phenomena) {
        cursor.advance();
        weather.get_or_insert_with(Vec::new).extend(phenomena);
    }

    weather
}

/// Consume a trailing `RE..` recent weather group.
///
/// Returns the code and its description; the description is `None` for
/// codes missing from the table.
pub fn decode_recent_weather(cursor: &mut FieldCursor) -> Option<(String, Option<&'static str>)> {
    let group = cursor.advance_if(|f| f.len() > 2 && f.starts_with("RE"))?;
    let description = tables::lookup(RECENT_WEATHER, group).map(|(_, meaning)| meaning);
    if description.is_none() {
        log::debug!("unknown recent weather group {group}");
    }
    Some((group.to_string(), description))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(phenomena: &[WeatherPhenomenon]) -> Vec<&str> {
        phenomena.iter().map(|p| p.abbreviation).collect()
    }

    #[test]
    fn test_three_part_group() {
        let w = decode_phenomena("-SHRA").unwrap();
        assert_eq!(
            w,
            vec![
                WeatherPhenomenon {
                    abbreviation: "-",
                    meaning: "light intensity"
                },
                WeatherPhenomenon {
                    abbreviation: "SH",
                    meaning: "showers"
                },
                WeatherPhenomenon {
                    abbreviation: "RA",
                    meaning: "rain"
                },
            ]
        );
    }

    #[test]
    fn test_single_and_pairs() {
        assert_eq!(codes(&decode_phenomena("BR").unwrap()), ["BR"]);
        assert_eq!(codes(&decode_phenomena("MIFG").unwrap()), ["MI", "FG"]);
        assert_eq!(codes(&decode_phenomena("+TSRAGR").unwrap()), ["+", "TS", "RA", "GR"]);
        assert_eq!(codes(&decode_phenomena("NSW").unwrap()), ["NSW"]);
    }

    #[test]
    fn test_partial_group_rejected() {
        assert!(decode_phenomena("").is_none());
        assert!(decode_phenomena("SHRAXX").is_none());
        assert!(decode_phenomena("SCT022").is_none());
        assert!(decode_phenomena("15/12").is_none());
        assert!(decode_phenomena("Q1006").is_none());
        assert!(decode_phenomena("//").is_none());
    }

    #[test]
    fn test_cloud_groups_are_not_weather() {
        for group in ["SKC", "NCD", "NSC", "CLR", "FEW012", "SCT015", "BKN060", "OVC035", "VV060"] {
            assert!(decode_phenomena(group).is_none(), "{group}");
        }
    }

    #[test]
    fn test_consecutive_groups() {
        let mut cursor = FieldCursor::new("-SHRA VCSH SCT006 OVC028CB");
        let w = decode_weather(&mut cursor).unwrap();
        assert_eq!(codes(&w), ["-", "SH", "RA", "VC", "SH"]);
        assert_eq!(cursor.peek(), Some("SCT006"));
    }

    #[test]
    fn test_no_weather_consumes_nothing() {
        let mut cursor = FieldCursor::new("FEW012 10/10");
        assert!(decode_weather(&mut cursor).is_none());
        assert_eq!(cursor.peek(), Some("FEW012"));

        let mut cursor = FieldCursor::new("");
        assert!(decode_weather(&mut cursor).is_none());
    }

    #[test]
    fn test_recent_weather() {
        let mut cursor = FieldCursor::new("RESHRA");
        let (code, description) = decode_recent_weather(&mut cursor).unwrap();
        assert_eq!(code, "RESHRA");
        assert_eq!(description, Some("Moderate/heavy rain showers"));

        let mut cursor = FieldCursor::new("REUP");
        let (_, description) = decode_recent_weather(&mut cursor).unwrap();
        assert_eq!(description, Some("Unidentified precipitation (AUTO obs. only)"));
    }

    #[test]
    fn test_recent_weather_unknown_code() {
        let mut cursor = FieldCursor::new("REXYZ");
        assert_eq!(
            decode_recent_weather(&mut cursor),
            Some(("REXYZ".to_string(), None))
        );
    }

    #[test]
    fn test_recent_weather_absent() {
        let mut cursor = FieldCursor::new("NOSIG");
        assert!(decode_recent_weather(&mut cursor).is_none());
        assert_eq!(cursor.peek(), Some("NOSIG"));

        let mut cursor = FieldCursor::new("RE");
        assert!(decode_recent_weather(&mut cursor).is_none());
    }
}
