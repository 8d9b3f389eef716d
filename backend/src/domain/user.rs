//! User data model.
//!
//! [`User`] is the wire-visible projection returned by searches;
//! [`UserRecord`] is the stored row the evaluator filters and sorts.
//! [`UserRecords`] is the shared read-only snapshot of all records.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Validation errors returned when parsing user components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    UnknownGender { value: String },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGender { value } => write!(f, "unknown gender tag: {value}"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Closed set of gender tags carried by user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Wire tag for this gender.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(UserValidationError::UnknownGender {
                value: other.to_owned(),
            }),
        }
    }
}

/// User returned by the search endpoint.
///
/// Serialised with PascalCase keys (`Id`, `Name`, `Age`, `About`, `Gender`),
/// matching the endpoint's JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    id: i64,
    name: String,
    age: u32,
    about: String,
    gender: Gender,
}

impl User {
    /// Build a new [`User`] from its components.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age: u32,
        about: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            about: about.into(),
            gender,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Display name: first and last name joined by one space.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn about(&self) -> &str {
        self.about.as_str()
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }
}

/// Stored user row consumed by the search evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    id: i64,
    first_name: String,
    last_name: String,
    age: u32,
    about: String,
    gender: Gender,
}

impl UserRecord {
    /// Build a record from its components.
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        about: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            about: about.into(),
            gender,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// First and last name joined by a single space, with no trimming.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Project the record into the wire-visible [`User`].
    pub fn to_user(&self) -> User {
        User::new(
            self.id,
            self.display_name(),
            self.age,
            self.about.clone(),
            self.gender,
        )
    }
}

/// Immutable snapshot of every stored record, in load order.
///
/// Cloning shares the underlying slice. There is no write path, so
/// concurrent evaluations need no coordination.
///
/// # Examples
/// ```
/// use user_search::domain::{Gender, UserRecord, UserRecords};
///
/// let records = UserRecords::new(vec![UserRecord::new(
///     1, "Hilda", "Mayer", 21, "", Gender::Female,
/// )]);
/// let shared = records.clone();
/// assert_eq!(shared.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UserRecords(Arc<[UserRecord]>);

impl UserRecords {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self(records.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<UserRecord> for UserRecords {
    fn from_iter<I: IntoIterator<Item = UserRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
