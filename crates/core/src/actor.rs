//! Actor entity, ISO 5218 gender codes and actor field validation.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// Gender as an ISO 5218 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "not applicable")]
    NotApplicable,
}

impl Gender {
    /// Every accepted value, in code order.
    pub const ALL: [Gender; 4] = [
        Gender::Unknown,
        Gender::Male,
        Gender::Female,
        Gender::NotApplicable,
    ];

    /// Numeric ISO 5218 code as stored in the `actors.gender` column.
    pub fn code(self) -> i16 {
        match self {
            Gender::Unknown => 0,
            Gender::Male => 1,
            Gender::Female => 2,
            Gender::NotApplicable => 9,
        }
    }

    pub fn from_code(code: i16) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|g| g.code() == code)
            .ok_or(CoreError::InvalidGender)
    }

    /// Human-readable label used on the HTTP surface.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Unknown => "unknown",
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NotApplicable => "not applicable",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|g| g.label() == label)
            .ok_or(CoreError::InvalidGender)
    }
}

// ---------------------------------------------------------------------------
// Entity and input
// ---------------------------------------------------------------------------

/// A persisted actor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
}

/// Unvalidated actor fields, used for both creation and full replacement.
///
/// `gender` is the raw ISO 5218 code so that out-of-range values reach
/// [`validate_actor`] and fail there, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorInput {
    pub name: String,
    pub gender: i16,
    pub birth_date: Option<NaiveDate>,
}

impl ActorInput {
    /// Start an input from an existing actor, for partial updates.
    pub fn from_actor(actor: &Actor) -> Self {
        Self {
            name: actor.name.clone(),
            gender: actor.gender.code(),
            birth_date: Some(actor.birth_date),
        }
    }
}

/// Actor fields that passed validation and are ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActor {
    pub name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate actor fields against `today`.
///
/// Checks run in a fixed order: name, birth date presence, birth date not
/// in the future, gender code. The first failure is returned.
pub fn validate_actor(input: &ActorInput, today: NaiveDate) -> Result<NewActor, CoreError> {
    if input.name.is_empty() {
        return Err(CoreError::EmptyName);
    }
    let birth_date = input.birth_date.ok_or(CoreError::EmptyBirthDate)?;
    if birth_date > today {
        return Err(CoreError::FutureBirthDate);
    }
    let gender = Gender::from_code(input.gender)?;

    Ok(NewActor {
        name: input.name.clone(),
        gender,
        birth_date,
    })
}
