//! Typed prediction requests and their declared domains.
//!
//! The form constrains input with bounded controls;
//! [`PredictionRequest::validate`] backstops the same bounds for callers
//! that construct requests directly (the JSON API, the CLI). Wire names
//! match the training data's column values: `male`, `yes`, `southeast`,
//! and so on.

use premia_model::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Inclusive age bounds accepted by the form.
pub const AGE_RANGE: (u32, u32) = (18, 100);

/// Inclusive BMI bounds accepted by the form.
pub const BMI_RANGE: (f64, f64) = (10.0, 50.0);

/// Inclusive dependent-children bounds accepted by the form.
pub const CHILDREN_RANGE: (u32, u32) = (0, 5);

/// A request field violated its declared domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// A numeric field fell outside its inclusive range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Offending field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A categorical field received a value outside its vocabulary.
    #[error("{field} must be one of {expected}, got {value:?}")]
    UnknownVariant {
        /// Offending field name.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Accepted values, for the error message.
        expected: &'static str,
    },
}

/// Sex as recorded in the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Sex {
    /// Wire/display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(RequestError::UnknownVariant {
                field: "sex",
                value: other.to_string(),
                expected: "male or female",
            }),
        }
    }
}

/// Smoking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokerStatus {
    /// Smoker.
    Yes,
    /// Non-smoker.
    No,
}

impl SmokerStatus {
    /// Wire/display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SmokerStatus::Yes => "yes",
            SmokerStatus::No => "no",
        }
    }
}

impl fmt::Display for SmokerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SmokerStatus {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(SmokerStatus::Yes),
            "no" => Ok(SmokerStatus::No),
            other => Err(RequestError::UnknownVariant {
                field: "smoker",
                value: other.to_string(),
                expected: "yes or no",
            }),
        }
    }
}

/// US census region of residence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
}

impl Region {
    /// Wire/display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Southeast => "southeast",
            Region::Southwest => "southwest",
            Region::Northeast => "northeast",
            Region::Northwest => "northwest",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "southeast" => Ok(Region::Southeast),
            "southwest" => Ok(Region::Southwest),
            "northeast" => Ok(Region::Northeast),
            "northwest" => Ok(Region::Northwest),
            other => Err(RequestError::UnknownVariant {
                field: "region",
                value: other.to_string(),
                expected: "southeast, southwest, northeast or northwest",
            }),
        }
    }
}

/// A single prediction request: the six attributes the model scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Age in years.
    pub age: u32,

    /// Body mass index.
    pub bmi: f64,

    /// Number of dependent children.
    pub children: u32,

    /// Sex.
    pub sex: Sex,

    /// Smoking status.
    pub smoker: SmokerStatus,

    /// Region of residence.
    pub region: Region,
}

impl PredictionRequest {
    /// Check every field against its declared domain.
    pub fn validate(&self) -> Result<(), RequestError> {
        if !(AGE_RANGE.0..=AGE_RANGE.1).contains(&self.age) {
            return Err(RequestError::OutOfRange {
                field: "age",
                value: f64::from(self.age),
                min: f64::from(AGE_RANGE.0),
                max: f64::from(AGE_RANGE.1),
            });
        }
        if !(BMI_RANGE.0..=BMI_RANGE.1).contains(&self.bmi) {
            return Err(RequestError::OutOfRange {
                field: "bmi",
                value: self.bmi,
                min: BMI_RANGE.0,
                max: BMI_RANGE.1,
            });
        }
        if !(CHILDREN_RANGE.0..=CHILDREN_RANGE.1).contains(&self.children) {
            return Err(RequestError::OutOfRange {
                field: "children",
                value: f64::from(self.children),
                min: f64::from(CHILDREN_RANGE.0),
                max: f64::from(CHILDREN_RANGE.1),
            });
        }
        Ok(())
    }

    /// Build the natural record, in the training frame's column order.
    pub fn to_record(&self) -> Record {
        let mut record = Record::with_capacity(6);
        record.insert("age", self.age);
        record.insert("sex", self.sex.as_str());
        record.insert("bmi", self.bmi);
        record.insert("children", self.children);
        record.insert("smoker", self.smoker.as_str());
        record.insert("region", self.region.as_str());
        record
    }
}

impl Default for PredictionRequest {
    /// The form's initial values.
    fn default() -> Self {
        Self {
            age: 30,
            bmi: 25.0,
            children: 0,
            sex: Sex::Male,
            smoker: SmokerStatus::Yes,
            region: Region::Southeast,
        }
    }
}
