//! LOC rdata (RFC 1876):
//! `d1 [m1 [s1]] N|S d2 [m2 [s2]] E|W alt[m] [size[m] [hp[m] [vp[m]]]]`

use super::tokens::RdataFields;
use zoneparse_domain::record::{Dms, Hemisphere, LocData};
use zoneparse_domain::{Arity, DecodeError};

pub fn loc(fields: &RdataFields) -> Result<LocData, DecodeError> {
    fields.expect(Arity::Between(5, 12))?;
    let tokens = fields.as_slice();

    let mut cursor = 0;
    let latitude = coordinate(tokens, &mut cursor, true)?;
    let longitude = coordinate(tokens, &mut cursor, false)?;

    let rest = &tokens[cursor..];
    if rest.is_empty() {
        return Err(invalid("missing altitude".to_string()));
    }
    if rest.len() > 4 {
        return Err(invalid(format!("unexpected trailing field {}", rest[4])));
    }

    Ok(LocData {
        latitude,
        longitude,
        altitude: metres(&rest[0], "altitude")?,
        size: optional_extent(rest.get(1), "size", LocData::DEFAULT_SIZE)?,
        horiz_precision: optional_extent(
            rest.get(2),
            "horizontal precision",
            LocData::DEFAULT_HORIZ_PRECISION,
        )?,
        vert_precision: optional_extent(
            rest.get(3),
            "vertical precision",
            LocData::DEFAULT_VERT_PRECISION,
        )?,
    })
}

fn coordinate(tokens: &[String], cursor: &mut usize, latitude: bool) -> Result<Dms, DecodeError> {
    let axis = if latitude { "latitude" } else { "longitude" };
    let max_degrees = if latitude { 90 } else { 180 };

    let degrees_token = tokens
        .get(*cursor)
        .ok_or_else(|| invalid(format!("missing {} degrees", axis)))?;
    let degrees: u8 = degrees_token
        .parse()
        .map_err(|_| invalid(format!("{} degrees {}", axis, degrees_token)))?;
    *cursor += 1;

    let mut parts: Vec<&str> = Vec::with_capacity(2);
    let hemisphere = loop {
        let token = tokens
            .get(*cursor)
            .ok_or_else(|| invalid(format!("missing {} hemisphere", axis)))?;
        *cursor += 1;

        if let Some(hemisphere) = parse_hemisphere(token) {
            break hemisphere;
        }
        if parts.len() == 2 {
            return Err(invalid(format!("missing {} hemisphere", axis)));
        }
        parts.push(token);
    };

    if hemisphere.is_latitude() != latitude {
        return Err(invalid(format!("hemisphere {} on {}", hemisphere, axis)));
    }

    let minutes: u8 = match parts.first() {
        Some(token) => token
            .parse()
            .map_err(|_| invalid(format!("{} minutes {}", axis, token)))?,
        None => 0,
    };
    let seconds: f64 = match parts.get(1) {
        Some(token) => token
            .parse()
            .map_err(|_| invalid(format!("{} seconds {}", axis, token)))?,
        None => 0.0,
    };

    if degrees > max_degrees || minutes >= 60 || !(0.0..60.0).contains(&seconds) {
        return Err(invalid(format!(
            "{} {} {} {} out of range",
            axis, degrees, minutes, seconds
        )));
    }

    Ok(Dms {
        degrees,
        minutes,
        seconds,
        hemisphere,
    })
}

fn parse_hemisphere(token: &str) -> Option<Hemisphere> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Hemisphere::from_char(c),
        _ => None,
    }
}

fn metres(token: &str, field: &str) -> Result<f64, DecodeError> {
    let number = token
        .strip_suffix(|c: char| c == 'm' || c == 'M')
        .unwrap_or(token);
    number
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| invalid(format!("{} {}", field, token)))
}

fn optional_extent(token: Option<&String>, field: &str, default: f64) -> Result<f64, DecodeError> {
    let Some(token) = token else {
        return Ok(default);
    };
    let value = metres(token, field)?;
    if value < 0.0 {
        return Err(invalid(format!("negative {} {}", field, token)));
    }
    Ok(value)
}

fn invalid(reason: String) -> DecodeError {
    DecodeError::InvalidLocation { reason }
}
