use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownSortField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user entity as displayed by the table. Fields beyond these five are
/// dropped when the remote payload is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl Record {
    pub fn text(&self, field: SortField) -> String {
        match field {
            SortField::Id => self.id.to_string(),
            SortField::Name => self.name.clone(),
            SortField::Username => self.username.clone(),
            SortField::Email => self.email.clone(),
            SortField::Phone => self.phone.clone(),
        }
    }
}

/// How values of a field are ordered. Fixed per field, never inferred from data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Numeric,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Id,
    Name,
    Username,
    Email,
    Phone,
}

impl SortField {
    /// Column order of the rendered table.
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::Name,
        SortField::Username,
        SortField::Email,
        SortField::Phone,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }

    pub fn key_kind(self) -> KeyKind {
        match self {
            Self::Id => KeyKind::Numeric,
            Self::Name | Self::Username | Self::Email | Self::Phone => KeyKind::Text,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSortField(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn with_field(self, field: SortField) -> Self {
        Self { field, ..self }
    }

    pub fn toggled(self) -> Self {
        Self {
            direction: self.direction.toggled(),
            ..self
        }
    }
}
