//! Runway visual range groups.
//!
//! Layout: `R<rwy>[L|R|C]/[P|M]<min>[V[P|M]<max>][U|D|N][FT]`, e.g.
//! `R34L/M0600V1000FT` or `R30/1300U`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::*;

// Unanchored so the group can be found inside a full report.
static RVR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(R\d{2})([LRC])?(/)([PM])?(\d+)(?:(V)([PM])?(\d+))?([NUD])?(FT)?")
        .expect("RVR pattern is valid")
});

/// Decode the runway visual range in `input`.
///
/// When the input holds several groups the last one wins. `None`, empty or
/// non-matching input gives an all-empty [`RvrInfo`].
pub fn parse_rvr<'a>(input: impl Into<Option<&'a str>>) -> RvrInfo {
    let Some(input) = input.into() else {
        return RvrInfo::default();
    };
    RVR_PATTERN
        .captures_iter(input)
        .last()
        .map(|caps| from_captures(&caps))
        .unwrap_or_default()
}

/// Decode every runway visual range group in `input`, in order.
pub fn parse_rvr_all(input: &str) -> Vec<RvrInfo> {
    RVR_PATTERN
        .captures_iter(input)
        .map(|caps| from_captures(&caps))
        .collect()
}

/// True if `field` starts like an RVR group (`R` + 2 digits, optional side,
/// `/`).
pub fn is_rvr_group(field: &str) -> bool {
    let b = field.as_bytes();
    if b.len() < 4 || b[0] != b'R' || !b[1].is_ascii_digit() || !b[2].is_ascii_digit() {
        return false;
    }
    match b[3] {
        b'/' => true,
        b'L' | b'R' | b'C' => b.get(4) == Some(&b'/'),
        _ => false,
    }
}

fn from_captures(caps: &Captures) -> RvrInfo {
    let text = |i: usize| caps.get(i).map(|m| m.as_str());
    let letter = |i: usize| text(i).and_then(|s| s.chars().next());

    RvrInfo {
        runway: text(1).map(str::to_string),
        direction: letter(2).and_then(|c| match c {
            'L' => Some(RunwaySide::Left),
            'R' => Some(RunwaySide::Right),
            'C' => Some(RunwaySide::Center),
            _ => None,
        }),
        separator: letter(3),
        min_indicator: letter(4).and_then(limit),
        min_value: text(5).map(str::to_string),
        variable: text(6).is_some(),
        max_indicator: letter(7).and_then(limit),
        max_value: text(8).map(str::to_string),
        trend: letter(9).and_then(|c| match c {
            'U' => Some(RvrTrend::Up),
            'D' => Some(RvrTrend::Down),
            'N' => Some(RvrTrend::NoChange),
            _ => None,
        }),
        unit: text(10).map(|_| RvrUnit::Feet),
    }
}

fn limit(c: char) -> Option<RvrLimit> {
    match c {
        'P' => Some(RvrLimit::Above),
        'M' => Some(RvrLimit::Below),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_group() {
        assert_eq!(
            parse_rvr("R34L/M0600V1000FT"),
            RvrInfo {
                runway: Some("R34".into()),
                direction: Some(RunwaySide::Left),
                separator: Some('/'),
                min_indicator: Some(RvrLimit::Below),
                min_value: Some("0600".into()),
                variable: true,
                max_indicator: None,
                max_value: Some("1000".into()),
                trend: None,
                unit: Some(RvrUnit::Feet),
            }
        );
    }

    #[test]
    fn test_null_and_empty() {
        assert_eq!(parse_rvr(None), RvrInfo::default());
        assert_eq!(parse_rvr(""), RvrInfo::default());
        assert_eq!(parse_rvr("EFJY 9999 BKN083"), RvrInfo::default());
    }

    #[test]
    fn test_runway_and_side() {
        assert_eq!(parse_rvr("R34/0300U").runway.as_deref(), Some("R34"));
        assert_eq!(parse_rvr("R34/0300U").direction, None);
        assert_eq!(parse_rvr("R34L/0300U").direction, Some(RunwaySide::Left));
        assert_eq!(parse_rvr("R34R/0300U").direction, Some(RunwaySide::Right));
        assert_eq!(parse_rvr("R34C/0300U").direction, Some(RunwaySide::Center));
    }

    #[test]
    fn test_min_value_and_indicator() {
        let rvr = parse_rvr("R34L/P0300U");
        assert_eq!(rvr.separator, Some('/'));
        assert_eq!(rvr.min_indicator, Some(RvrLimit::Above));
        assert_eq!(rvr.min_value.as_deref(), Some("0300"));
        assert!(!rvr.variable);
        assert_eq!(rvr.max_value, None);
    }

    #[test]
    fn test_max_indicator() {
        let rvr = parse_rvr("R27/0500VP1500N");
        assert!(rvr.variable);
        assert_eq!(rvr.max_indicator, Some(RvrLimit::Above));
        assert_eq!(rvr.max_value.as_deref(), Some("1500"));
        assert_eq!(rvr.trend, Some(RvrTrend::NoChange));
    }

    #[test]
    fn test_trends() {
        assert_eq!(parse_rvr("R34L/0300D").trend, Some(RvrTrend::Down));
        assert_eq!(parse_rvr("R34L/0300N").trend, Some(RvrTrend::NoChange));
        assert_eq!(parse_rvr("R34L/0300U").trend, Some(RvrTrend::Up));
    }

    #[test]
    fn test_last_group_wins() {
        let input = "R04/1200N R22/0800D";
        assert_eq!(parse_rvr(input).runway.as_deref(), Some("R22"));

        let all = parse_rvr_all(input);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].runway.as_deref(), Some("R04"));
        assert_eq!(all[1].trend, Some(RvrTrend::Down));
    }

    #[test]
    fn test_no_state_between_calls() {
        let first = parse_rvr("R30/1300U");
        let second = parse_rvr("R30/1300U");
        assert_eq!(first, second);
        assert_eq!(parse_rvr("R30/1300U").min_value.as_deref(), Some("1300"));
    }

    #[test]
    fn test_is_rvr_group() {
        assert!(is_rvr_group("R30/1300U"));
        assert!(is_rvr_group("R34L/M0600V1000FT"));
        assert!(!is_rvr_group("RESHRA"));
        assert!(!is_rvr_group("R3/0300"));
        assert!(!is_rvr_group("R34X/0300"));
        assert!(!is_rvr_group("RMK"));
    }

    #[test]
    fn test_serialization_uses_letters() {
        let json = serde_json::to_value(parse_rvr("R34L/M0600V1000FT")).unwrap();
        assert_eq!(json["direction"], "L");
        assert_eq!(json["min_indicator"], "M");
        assert_eq!(json["unit"], "FT");
        assert_eq!(json["trend"], serde_json::Value::Null);
    }
}
