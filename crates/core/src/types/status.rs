//! Status enums for back-office content.
//!
//! Both map to `PostgreSQL` enum types in the `admin` schema.

use serde::{Deserialize, Serialize};

/// Publication state of a tour package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "admin.package_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum PackageStatus {
    #[default]
    Draft,
    Published,
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
        }
    }
}

/// Handling state of a customer inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "admin.inquiry_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    /// Not yet opened by an admin.
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

impl InquiryStatus {
    /// Whether the inquiry still needs attention.
    #[must_use]
    pub const fn is_unread(self) -> bool {
        matches!(self, Self::New)
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Read => write!(f, "read"),
            Self::Replied => write!(f, "replied"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for InquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            "archived" => Ok(Self::Archived),
            _ => Err(format!("invalid inquiry status: {s}")),
        }
    }
}
