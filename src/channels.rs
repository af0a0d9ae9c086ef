//! Closed identifiers for the five physical sensor/actuator channels.
//!
//! [`SensorChannel`] names every channel the board exposes; [`Quadrant`] is
//! the occupancy-only subset.  Call sites that hold a `Quadrant` literal are
//! valid by construction — the light relay simply has no `Quadrant` value.
//! Dynamically-sourced identifiers go through `Quadrant::try_from`, the
//! single runtime validation point.

use core::fmt;

use crate::error::Error;
use crate::pins;

// ---------------------------------------------------------------------------
// All five channels
// ---------------------------------------------------------------------------

/// One of the five physical channels on the main board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorChannel {
    OccupancyQuadrant1,
    OccupancyQuadrant2,
    OccupancyQuadrant3,
    OccupancyQuadrant4,
    LightRelay,
}

impl SensorChannel {
    /// Total number of physical channels.
    pub const COUNT: usize = 5;

    /// The GPIO this channel is wired to.
    pub fn gpio(self) -> i32 {
        match self {
            Self::OccupancyQuadrant1 => pins::PIR_QUADRANT1_GPIO,
            Self::OccupancyQuadrant2 => pins::PIR_QUADRANT2_GPIO,
            Self::OccupancyQuadrant3 => pins::PIR_QUADRANT3_GPIO,
            Self::OccupancyQuadrant4 => pins::PIR_QUADRANT4_GPIO,
            Self::LightRelay => pins::LIGHT_RELAY_GPIO,
        }
    }
}

impl fmt::Display for SensorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OccupancyQuadrant1 => write!(f, "occupancy quadrant 1"),
            Self::OccupancyQuadrant2 => write!(f, "occupancy quadrant 2"),
            Self::OccupancyQuadrant3 => write!(f, "occupancy quadrant 3"),
            Self::OccupancyQuadrant4 => write!(f, "occupancy quadrant 4"),
            Self::LightRelay => write!(f, "light relay"),
        }
    }
}

// ---------------------------------------------------------------------------
// Occupancy subset
// ---------------------------------------------------------------------------

/// One of the four office quadrants carrying a PIR occupancy sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quadrant {
    /// Number of quadrants.
    pub const COUNT: usize = 4;

    /// Every quadrant, in reading order.
    pub const ALL: [Quadrant; Quadrant::COUNT] =
        [Quadrant::Q1, Quadrant::Q2, Quadrant::Q3, Quadrant::Q4];

    /// Zero-based index (stable: Q1 = 0 .. Q4 = 3).
    pub fn index(self) -> usize {
        match self {
            Self::Q1 => 0,
            Self::Q2 => 1,
            Self::Q3 => 2,
            Self::Q4 => 3,
        }
    }

    /// Single-bit mask for occupancy bitmaps (Q1 = bit 0).
    pub fn mask(self) -> u8 {
        1 << self.index()
    }

    /// The GPIO this quadrant's PIR sensor is wired to.
    pub fn gpio(self) -> i32 {
        SensorChannel::from(self).gpio()
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.index() + 1)
    }
}

impl From<Quadrant> for SensorChannel {
    fn from(quadrant: Quadrant) -> Self {
        match quadrant {
            Quadrant::Q1 => Self::OccupancyQuadrant1,
            Quadrant::Q2 => Self::OccupancyQuadrant2,
            Quadrant::Q3 => Self::OccupancyQuadrant3,
            Quadrant::Q4 => Self::OccupancyQuadrant4,
        }
    }
}

impl TryFrom<SensorChannel> for Quadrant {
    type Error = Error;

    /// Runtime validation for dynamically-sourced channel identifiers.
    /// The light relay (or any future non-occupancy channel) is rejected
    /// before any hardware is touched.
    fn try_from(channel: SensorChannel) -> Result<Self, Error> {
        match channel {
            SensorChannel::OccupancyQuadrant1 => Ok(Self::Q1),
            SensorChannel::OccupancyQuadrant2 => Ok(Self::Q2),
            SensorChannel::OccupancyQuadrant3 => Ok(Self::Q3),
            SensorChannel::OccupancyQuadrant4 => Ok(Self::Q4),
            SensorChannel::LightRelay => Err(Error::InvalidChannel(channel)),
        }
    }
}
