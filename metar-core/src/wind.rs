//! Decode the surface wind group and its optional variation sector.
//!
//! - `29007KT`     direction 290°, 7 kt
//! - `24028G42KT`  gusting to 42 kt
//! - `VRB02KT`     variable direction
//! - `240V330`     (next field) direction varying between 240° and 330°
//! - `/////KT`     no wind data (automated stations); direction and speed absent

use crate::cursor::FieldCursor;
use crate::decode::parse_digits;
use crate::types::*;

/// Consume the wind group and, if present, the following `dddVddd` sector.
///
/// A missing or unknown unit aborts the whole report. Unreadable digits
/// leave the direction or speed absent.
pub fn decode_wind(cursor: &mut FieldCursor) -> Result<Wind> {
    let group = cursor.advance().ok_or(MetarError::MissingField("wind"))?;
    let mut wind = parse_wind_group(group)?;

    if let Some((min, max)) = cursor.peek().and_then(parse_variation) {
        cursor.advance();
        wind.variation = Some(WindVariation::Range { min, max });
    }

    Ok(wind)
}

/// Parse a single wind group, without the variation sector.
pub fn parse_wind_group(group: &str) -> Result<Wind> {
    let unit = WindUnit::ALL
        .into_iter()
        .find(|u| group.ends_with(u.code()))
        .ok_or_else(|| MetarError::InvalidWindUnit(group.to_string()))?;
    let body = &group[..group.len() - unit.code().len()];

    let direction = body.get(..3).unwrap_or(body);
    let rest = body.get(3..).unwrap_or("");

    let (direction, variation) = if direction == "VRB" {
        (Some(WindDirection::Variable), Some(WindVariation::Unbounded))
    } else {
        let degrees = parse_digits(direction).map(|d| WindDirection::Degrees(d as u16));
        (degrees, None)
    };

    let (speed, gust) = match rest.split_once('G') {
        Some((speed, gust)) => (parse_speed(speed), parse_speed(gust)),
        None => (parse_speed(rest), None),
    };

    if direction.is_none() || speed.is_none() {
        log::debug!("wind group without readable direction or speed: {group}");
    }

    Ok(Wind {
        direction,
        speed,
        gust,
        unit,
        variation,
    })
}

/// Speeds are two digits, three above 99.
fn parse_speed(s: &str) -> Option<u32> {
    if !(2..=3).contains(&s.len()) {
        return None;
    }
    parse_digits(s)
}

/// Parse a `dddVddd` direction sector.
fn parse_variation(field: &str) -> Option<(u16, u16)> {
    if field.len() != 7 {
        return None;
    }
    let (min, max) = field.split_once('V')?;
    if min.len() != 3 {
        return None;
    }
    Some((parse_digits(min)? as u16, parse_digits(max)? as u16))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
