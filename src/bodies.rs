use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ephem_errors::EphemError;
use crate::planets::{self, PlanetTheory};
use crate::ref_system::RefFrame;

/// The bodies the theory knows about.
///
/// The declaration order is the order of the result maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    MeanLunarNode,
}

/// Every body the engine is able to compute.
pub const COMPUTABLE_BODIES: [Body; 12] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Earth,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::MeanLunarNode,
];

/// Bodies whose theory relies on [`crate::mean_elements::GasGiantTerms`].
pub const GAS_GIANTS: [Body; 4] = [Body::Jupiter, Body::Saturn, Body::Uranus, Body::Neptune];

impl Body {
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Earth => "earth",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Pluto => "pluto",
            Body::MeanLunarNode => "mean-lunar-node",
        }
    }

    /// The calculator of the body.
    ///
    /// The Sun has none: its geocentric position is the reflection of the Earth's.
    pub fn theory(&self) -> Option<&'static dyn PlanetTheory> {
        planets::theory(*self)
    }

    pub fn is_gas_giant(&self) -> bool {
        GAS_GIANTS.contains(self)
    }

    /// Whether a position of the body can be expressed in `frame`.
    ///
    /// The Moon and the lunar node are only known geocentrically and the Sun sits at the origin
    /// of the heliocentric frame. The Earth is the origin of the geocentric one.
    pub fn is_available_in(&self, frame: RefFrame) -> bool {
        match frame {
            RefFrame::GeocentricEcliptic => *self != Body::Earth,
            RefFrame::HeliocentricEcliptic => {
                !matches!(self, Body::Sun | Body::Moon | Body::MeanLunarNode)
            }
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Body {
    type Err = EphemError;

    /// Case insensitive parsing of the body names, `_` and ` ` are accepted in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        COMPUTABLE_BODIES
            .iter()
            .find(|body| body.name() == name)
            .copied()
            .ok_or_else(|| EphemError::UnknownBody(s.to_string()))
    }
}
