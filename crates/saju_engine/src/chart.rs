//! Chart output value objects.

use serde::{Deserialize, Serialize};

use saju_calendar::CivilDateTime;
use saju_tables::Stem;
use saju_time::TimeCorrection;

use crate::error::EngineError;
use crate::pillar::FourPillars;
use crate::profile::ElementProfile;

/// Biological sex as recorded on the birth certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse the `M`/`F` wire code.
    pub fn from_code(code: char) -> Result<Sex, EngineError> {
        match code {
            'M' | 'm' => Ok(Sex::Male),
            'F' | 'f' => Ok(Sex::Female),
            other => Err(EngineError::InvalidSex(other)),
        }
    }

    /// The `M`/`F` wire code.
    pub const fn code(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
        }
    }
}

/// A complete calculated chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub pillars: FourPillars,
    /// The Day pillar's stem, the reference for every relation above.
    pub day_master: Stem,
    pub profile: ElementProfile,
    /// The correction that produced `adjusted`, component by component.
    pub correction: TimeCorrection,
    /// The adjusted local-solar instant the pillars were read from.
    pub adjusted: CivilDateTime,
    pub sex: Sex,
}
