use std::fmt;
use std::str::FromStr;

use crate::constants::mask_point;
use crate::model::ApiObject;

/// The part of the face relative to which a mask is placed.
///
/// [Telegram docs](https://core.telegram.org/bots/api#maskposition).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskPoint {
    Forehead,
    Eyes,
    Mouth,
    Chin,
}

impl MaskPoint {
    /// The string the API uses for this point.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forehead => mask_point::FOREHEAD,
            Self::Eyes => mask_point::EYES,
            Self::Mouth => mask_point::MOUTH,
            Self::Chin => mask_point::CHIN,
        }
    }
}

impl fmt::Display for MaskPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a [`MaskPoint`] from a string the API does not define.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownMaskPoint(pub String);

impl fmt::Display for UnknownMaskPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mask point: {}", self.0)
    }
}

impl std::error::Error for UnknownMaskPoint {}

impl FromStr for MaskPoint {
    type Err = UnknownMaskPoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            mask_point::FOREHEAD => Ok(Self::Forehead),
            mask_point::EYES => Ok(Self::Eyes),
            mask_point::MOUTH => Ok(Self::Mouth),
            mask_point::CHIN => Ok(Self::Chin),
            _ => Err(UnknownMaskPoint(s.to_string())),
        }
    }
}

/// The position on faces where a mask should be placed by default.
///
/// Two mask positions are equal if all four of their fields are equal.
///
/// [Telegram docs](https://core.telegram.org/bots/api#maskposition).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct MaskPosition {
    /// The part of the face relative to which the mask should be placed.
    pub point: MaskPoint,
    /// Shift by X-axis measured in widths of the mask scaled to the face size, from left to
    /// right. For example, choosing -1.0 will place mask just to the left of the default mask
    /// position.
    pub x_shift: f64,
    /// Shift by Y-axis measured in heights of the mask scaled to the face size, from top to
    /// bottom. For example, 1.0 will place the mask just below the default mask position.
    pub y_shift: f64,
    /// Mask scaling coefficient. For example, 2.0 means double size.
    pub scale: f64,
}

impl MaskPosition {
    #[must_use]
    pub fn new(point: MaskPoint, x_shift: f64, y_shift: f64, scale: f64) -> Self {
        Self {
            point,
            x_shift,
            y_shift,
            scale,
        }
    }
}

impl ApiObject for MaskPosition {
    const KIND: &'static str = "MaskPosition";
    const FIELDS: &'static [&'static str] = &["point", "x_shift", "y_shift", "scale"];
    const REQUIRED_FIELDS: &'static [&'static str] = Self::FIELDS;
}
