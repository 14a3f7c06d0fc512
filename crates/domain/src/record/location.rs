use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    N,
    S,
    E,
    W,
}

impl Hemisphere {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Hemisphere::N),
            'S' => Some(Hemisphere::S),
            'E' => Some(Hemisphere::E),
            'W' => Some(Hemisphere::W),
            _ => None,
        }
    }

    pub fn is_latitude(&self) -> bool {
        matches!(self, Hemisphere::N | Hemisphere::S)
    }

    /// Sign applied to the coordinate when converted to decimal degrees.
    pub fn sign(&self) -> f64 {
        match self {
            Hemisphere::N | Hemisphere::E => 1.0,
            Hemisphere::S | Hemisphere::W => -1.0,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Hemisphere::N => 'N',
            Hemisphere::S => 'S',
            Hemisphere::E => 'E',
            Hemisphere::W => 'W',
        };
        write!(f, "{}", c)
    }
}

/// Degrees, minutes, seconds and hemisphere of one LOC coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: u8,
    pub minutes: u8,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

impl Dms {
    pub fn to_decimal_degrees(&self) -> f64 {
        let value =
            f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0;
        value * self.hemisphere.sign()
    }
}

/// LOC payload. Altitude, size and precisions are in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocData {
    pub latitude: Dms,
    pub longitude: Dms,
    pub altitude: f64,
    pub size: f64,
    pub horiz_precision: f64,
    pub vert_precision: f64,
}

impl LocData {
    pub const DEFAULT_SIZE: f64 = 1.0;
    pub const DEFAULT_HORIZ_PRECISION: f64 = 10_000.0;
    pub const DEFAULT_VERT_PRECISION: f64 = 10.0;
}
