//! Supported radio hardware families.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::registry::{self, Bundle};

/// The closed set of supported Mimosa product lines.
///
/// Each family has its own identifier registry and enumeration tables,
/// available through [`HardwareFamily::bundle`].
///
/// ```
/// use mimosa_snmp::HardwareFamily;
///
/// let family: HardwareFamily = "a_series".parse().unwrap();
/// assert_eq!(family, HardwareFamily::PointToMultipoint);
/// assert_eq!(family.as_str(), "a_series");
///
/// assert!("c_series".parse::<HardwareFamily>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HardwareFamily {
    /// B and C series point-to-point backhaul radios.
    #[cfg_attr(feature = "serde", serde(rename = "b_c_series"))]
    PointToPoint,
    /// A series point-to-multipoint access points.
    #[cfg_attr(feature = "serde", serde(rename = "a_series"))]
    PointToMultipoint,
}

impl HardwareFamily {
    /// Every supported family, in declaration order.
    pub const ALL: [HardwareFamily; 2] = [Self::PointToPoint, Self::PointToMultipoint];

    /// Configuration name of the family.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PointToPoint => "b_c_series",
            Self::PointToMultipoint => "a_series",
        }
    }

    /// The identifier and enumeration bundle for this family.
    pub fn bundle(&self) -> &'static Bundle {
        match self {
            Self::PointToPoint => &registry::POINT_TO_POINT,
            Self::PointToMultipoint => &registry::POINT_TO_MULTIPOINT,
        }
    }
}

impl fmt::Display for HardwareFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HardwareFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| {
                Error::Config(
                    format!("invalid series {s:?}, expected one of \"a_series\", \"b_c_series\"")
                        .into(),
                )
            })
    }
}
