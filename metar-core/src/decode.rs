//! Decode a METAR/SPECI report into an [`Observation`].
//!
//! Groups are read strictly left to right:
//! - report type, correction (`COR`/`CCx`), station, `DDHHMMZ` time
//! - `AUTO`, wind (+ variation sector), `CAVOK`
//! - visibility (+ directional visibility), runway visual ranges
//! - present weather, cloud layers
//! - temperature/dewpoint, altimeter, recent weather
//!
//! Optional groups are only consumed when the next field matches, so a
//! missing group never swallows a field belonging to a later one. Anything
//! after the recent weather position (trend, remarks) is ignored.

use std::str::FromStr;

use crate::cloud::decode_clouds;
use crate::cursor::FieldCursor;
use crate::rvr::{is_rvr_group, parse_rvr};
use crate::types::*;
use crate::weather::{decode_recent_weather, decode_weather};
use crate::wind::decode_wind;

/// Parse a non-empty run of ASCII digits.
pub(crate) fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// ---------------------------------------------------------------------------
// Header groups
// ---------------------------------------------------------------------------

fn decode_report_type(cursor: &mut FieldCursor) -> ReportType {
    match cursor.advance_if(|f| f == "METAR" || f == "SPECI") {
        Some("SPECI") => ReportType::Speci,
        _ => ReportType::Metar,
    }
}

/// `COR`, or `CC` + sequence letter.
fn parse_correction(field: &str) -> Option<Correction> {
    if field == "COR" {
        return Some(Correction { sequence: None });
    }
    match field.as_bytes() {
        [b'C', b'C', letter] if letter.is_ascii_uppercase() => Some(Correction {
            sequence: Some(*letter as char),
        }),
        _ => None,
    }
}

fn decode_correction(cursor: &mut FieldCursor) -> Option<Correction> {
    let correction = cursor.peek().and_then(parse_correction)?;
    cursor.advance();
    Some(correction)
}

fn decode_station(cursor: &mut FieldCursor) -> Result<String> {
    let station = cursor.advance().ok_or(MetarError::MissingField("station"))?;
    if station.len() != 4 {
        log::debug!("unusual station identifier {station}");
    }
    Ok(station.to_string())
}

/// Parse a `DDHHMMZ` group.
pub fn parse_time(group: &str) -> Result<ObservationTime> {
    let invalid = || MetarError::InvalidTime(group.to_string());

    let digits = group.strip_suffix('Z').ok_or_else(invalid)?;
    if digits.len() != 6 {
        return Err(invalid());
    }
    let field = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(parse_digits)
            .map(|v| v as u8)
            .ok_or_else(invalid)
    };

    let time = ObservationTime {
        day: field(0..2)?,
        hour: field(2..4)?,
        minute: field(4..6)?,
    };

    if !(1..=31).contains(&time.day) || time.hour > 23 || time.minute > 59 {
        return Err(invalid());
    }
    Ok(time)
}

fn decode_time(cursor: &mut FieldCursor) -> Result<ObservationTime> {
    let group = cursor.advance().ok_or(MetarError::MissingField("time"))?;
    parse_time(group)
}

fn decode_flag(cursor: &mut FieldCursor, keyword: &str) -> bool {
    cursor.advance_if(|f| f == keyword).is_some()
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

enum VisibilityGroup {
    Unreadable,
    Value(u32, VisibilityUnit),
}

/// `dddd` or `////`, either with an optional `NDV` (no directional
/// variation) suffix, or `<n>SM`.
fn parse_visibility(field: &str) -> Option<VisibilityGroup> {
    let meters = field.strip_suffix("NDV").unwrap_or(field);
    if meters == "////" {
        return Some(VisibilityGroup::Unreadable);
    }
    if meters.len() == 4 {
        if let Some(meters) = parse_digits(meters) {
            return Some(VisibilityGroup::Value(meters, VisibilityUnit::Meters));
        }
    }
    let miles = field.strip_suffix("SM")?;
    parse_digits(miles).map(|sm| VisibilityGroup::Value(sm, VisibilityUnit::StatuteMiles))
}

/// Prevailing visibility. Returns `(value, unit)`; a field that is not a
/// visibility group is left for the next decoder.
fn decode_visibility(cursor: &mut FieldCursor) -> (Option<u32>, Option<VisibilityUnit>) {
    match cursor.peek().and_then(parse_visibility) {
        Some(group) => {
            cursor.advance();
            match group {
                VisibilityGroup::Unreadable => (None, None),
                VisibilityGroup::Value(v, unit) => (Some(v), Some(unit)),
            }
        }
        None => {
            log::debug!("no visibility group at {:?}", cursor.peek());
            (None, None)
        }
    }
}

/// Directional minimum visibility, e.g. `1500NW`.
fn parse_directional_visibility(field: &str) -> Option<(u32, CompassPoint)> {
    let value = parse_digits(field.get(..4)?)?;
    let direction = CompassPoint::from_code(field.get(4..)?)?;
    Some((value, direction))
}

// ---------------------------------------------------------------------------
// Temperature and pressure
// ---------------------------------------------------------------------------

/// `M` marks a negative value; an empty or all-`/` value is missing.
fn parse_temperature_value(s: &str) -> Option<Option<i32>> {
    if s.bytes().all(|b| b == b'/') {
        return Some(None);
    }
    let (negative, digits) = match s.strip_prefix('M') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    if !(1..=2).contains(&digits.len()) {
        return None;
    }
    let value = parse_digits(digits)? as i32;
    Some(Some(if negative { -value } else { value }))
}

fn parse_temperatures(field: &str) -> Option<(Option<i32>, Option<i32>)> {
    let (temperature, dewpoint) = field.split_once('/')?;
    if temperature.is_empty() {
        return None;
    }
    Some((
        parse_temperature_value(temperature)?,
        parse_temperature_value(dewpoint)?,
    ))
}

fn decode_temperatures(cursor: &mut FieldCursor) -> (Option<i32>, Option<i32>) {
    match cursor.peek().and_then(parse_temperatures) {
        Some(values) => {
            cursor.advance();
            values
        }
        None => (None, None),
    }
}

#[derive(Debug, PartialEq)]
enum Altimeter {
    Hpa(u32),
    InHg(f64),
    Missing,
}

fn parse_altimeter(field: &str) -> Option<Altimeter> {
    let (unit, value) = field.split_at_checked(1)?;
    if value.len() != 4 || !matches!(unit, "Q" | "A") {
        return None;
    }
    if value == "////" {
        return Some(Altimeter::Missing);
    }
    let value = parse_digits(value)?;
    Some(match unit {
        "Q" => Altimeter::Hpa(value),
        _ => Altimeter::InHg(f64::from(value) / 100.0),
    })
}

// ---------------------------------------------------------------------------
// Main decode function
// ---------------------------------------------------------------------------

/// Decode one report.
///
/// Only the mandatory groups (station, time, wind) can fail; every other
/// group that is missing or unreadable leaves its field empty.
pub fn decode_metar(report: &str) -> Result<Observation> {
    let mut cursor = FieldCursor::new(report);
    if cursor.is_empty() {
        return Err(MetarError::Empty);
    }

    let report_type = decode_report_type(&mut cursor);
    let mut correction = decode_correction(&mut cursor);
    let station = decode_station(&mut cursor)?;
    let time = decode_time(&mut cursor)?;
    correction = correction.or_else(|| decode_correction(&mut cursor));
    let auto = decode_flag(&mut cursor, "AUTO");
    let wind = decode_wind(&mut cursor)?;
    let cavok = decode_flag(&mut cursor, "CAVOK");

    let mut obs = Observation {
        report_type,
        correction,
        station,
        time,
        auto,
        wind,
        cavok,
        visibility: None,
        visibility_unit: None,
        visibility_variation: None,
        visibility_variation_direction: None,
        runway_visual_range: None,
        runway_visual_ranges: Vec::new(),
        weather: None,
        clouds: None,
        temperature: None,
        dewpoint: None,
        altimeter_hpa: None,
        altimeter_in_hg: None,
        recent_weather: None,
        recent_weather_description: None,
    };

    if !cavok {
        (obs.visibility, obs.visibility_unit) = decode_visibility(&mut cursor);

        if let Some((value, direction)) = cursor.peek().and_then(parse_directional_visibility) {
            cursor.advance();
            obs.visibility_variation = Some(value);
            obs.visibility_variation_direction = Some(direction);
        }

        while let Some(group) = cursor.advance_if(is_rvr_group) {
            obs.runway_visual_ranges.push(parse_rvr(group));
        }
        obs.runway_visual_range = obs.runway_visual_ranges.last().cloned();

        obs.weather = decode_weather(&mut cursor);
        obs.clouds = decode_clouds(&mut cursor);
    }

    (obs.temperature, obs.dewpoint) = decode_temperatures(&mut cursor);

    match cursor.peek().and_then(parse_altimeter) {
        Some(altimeter) => {
            cursor.advance();
            match altimeter {
                Altimeter::Hpa(v) => obs.altimeter_hpa = Some(v),
                Altimeter::InHg(v) => obs.altimeter_in_hg = Some(v),
                Altimeter::Missing => {}
            }
        }
        None => log::debug!("no altimeter group at {:?}", cursor.peek()),
    }

    if let Some((code, description)) = decode_recent_weather(&mut cursor) {
        obs.recent_weather = Some(code);
        obs.recent_weather_description = description;
    }

    if !cursor.is_exhausted() {
        log::debug!("{}: ignoring {:?}", obs.station, cursor.remaining());
    }

    Ok(obs)
}

impl FromStr for Observation {
    type Err = MetarError;

    fn from_str(s: &str) -> Result<Self> {
        decode_metar(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
