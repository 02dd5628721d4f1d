//! Cloud layer groups: cover code, optional base in hundreds of feet,
//! optional `CB` marker. `SCT022CB` = scattered at 2,200 ft, cumulonimbus.

use crate::abbrev::match_abbreviation;
use crate::cursor::FieldCursor;
use crate::decode::parse_digits;
use crate::tables::CLOUDS;
use crate::types::CloudLayer;

/// Decode one cloud group. `None` if it does not start with a cover code.
pub fn parse_cloud_layer(group: &str) -> Option<CloudLayer> {
    let cover = match_abbreviation(group, CLOUDS)?;
    let height = &group[cover.abbreviation.len()..];
    let digits = height
        .find(|c: char| !c.is_ascii_digit())
        .map_or(height, |end| &height[..end]);

    Some(CloudLayer {
        abbreviation: cover.abbreviation,
        meaning: cover.meaning,
        altitude: parse_digits(digits).map(|h| h * 100),
        cumulonimbus: group.ends_with("CB"),
    })
}

/// Consume consecutive cloud groups.
///
/// Fields made of `/` (cloud not observed by an automatic station),
/// optionally followed by a `CB` or `TCU` type, are consumed without
/// producing a layer. Returns `None`, never an empty
/// vector, when no layer was decoded.
pub fn decode_clouds(cursor: &mut FieldCursor) -> Option<Vec<CloudLayer>> {
    let mut layers: Option<Vec<CloudLayer>> = None;

    while let Some(field) = cursor.peek() {
        if let Some(layer) = parse_cloud_layer(field) {
            layers.get_or_insert_with(Vec::new).push(layer);
        } else if is_not_observed(field) {
            log::debug!("cloud group not observed: {field}");
        } else {
            break;
        }
        cursor.advance();
    }

    layers
}

fn is_not_observed(field: &str) -> bool {
    let cover = ["CB", "TCU"]
        .into_iter()
        .find_map(|kind| field.strip_suffix(kind))
        .unwrap_or(field);
    cover.len() > 1 && cover.bytes().all(|b| b == b'/')
}
