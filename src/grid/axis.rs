use std::fmt;
use std::str::FromStr;

use crate::error::MetError;

/// Dimension names recognized as longitude, matched case-insensitively
const LONGITUDE_NAMES: [&str; 4] = ["longitude", "lon", "long", "longitud"];

/// Dimension names recognized as latitude, matched case-insensitively
const LATITUDE_NAMES: [&str; 4] = ["latitude", "lat", "lati", "latitud"];

/// Whether a dimension name denotes longitude
pub fn is_longitude_name(name: &str) -> bool {
    LONGITUDE_NAMES
        .iter()
        .any(|alias| name.eq_ignore_ascii_case(alias))
}

/// Whether a dimension name denotes latitude
pub fn is_latitude_name(name: &str) -> bool {
    LATITUDE_NAMES
        .iter()
        .any(|alias| name.eq_ignore_ascii_case(alias))
}

/// Logical axis of a gridded field.
///
/// Arrays follow the layout convention `[Y, X]` (rank 2), `[Z|T, Y, X]`
/// (rank 3) and `[T, Z, Y, X]` (rank 4). Rank-3 arrays carry either a
/// vertical or a time axis in front; `Z` and `T` resolve to the same index
/// there and the caller decides which one it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisTag {
    X,
    Y,
    Z,
    T,
}

impl AxisTag {
    /// Map the logical axis to a concrete dimension index for the given rank
    pub fn resolve(self, rank: usize) -> Result<usize, MetError> {
        let index = match rank {
            2 => match self {
                AxisTag::X => Some(1),
                AxisTag::Y => Some(0),
                AxisTag::Z | AxisTag::T => None,
            },
            3 => match self {
                AxisTag::X => Some(2),
                AxisTag::Y => Some(1),
                AxisTag::Z | AxisTag::T => Some(0),
            },
            4 => match self {
                AxisTag::X => Some(3),
                AxisTag::Y => Some(2),
                AxisTag::Z => Some(1),
                AxisTag::T => Some(0),
            },
            _ => {
                return Err(MetError::UnsupportedRank {
                    rank,
                    expected: "2, 3 or 4",
                })
            }
        };
        index.ok_or(MetError::InvalidAxis { axis: self, rank })
    }
}

impl fmt::Display for AxisTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AxisTag::X => "X",
            AxisTag::Y => "Y",
            AxisTag::Z => "Z",
            AxisTag::T => "T",
        };
        f.write_str(name)
    }
}

impl FromStr for AxisTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(AxisTag::X),
            "y" => Ok(AxisTag::Y),
            "z" => Ok(AxisTag::Z),
            "t" => Ok(AxisTag::T),
            other => Err(format!("Unknown axis name: {}", other)),
        }
    }
}
