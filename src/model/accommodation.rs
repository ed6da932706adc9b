use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Kind of lodging an accommodation offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hotel,
    Alternative,
    Hostel,
    Lodge,
    Resort,
    Guesthouse,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Hotel,
        Category::Alternative,
        Category::Hostel,
        Category::Lodge,
        Category::Resort,
        Category::Guesthouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hotel => "hotel",
            Category::Alternative => "alternative",
            Category::Hostel => "hostel",
            Category::Lodge => "lodge",
            Category::Resort => "resort",
            Category::Guesthouse => "guesthouse",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| UnknownVariant(value.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour band derived from an accommodation's reputation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReputationBadge {
    Red,
    Yellow,
    Green,
}

impl ReputationBadge {
    /// Maps a reputation score to its badge.
    ///
    /// Total over all integers: `r <= 500` is red, `501..=799` is yellow, `r >= 800` is green.
    pub fn for_reputation(reputation: i64) -> Self {
        match reputation {
            r if r <= 500 => ReputationBadge::Red,
            r if r <= 799 => ReputationBadge::Yellow,
            _ => ReputationBadge::Green,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReputationBadge::Red => "red",
            ReputationBadge::Yellow => "yellow",
            ReputationBadge::Green => "green",
        }
    }
}

impl FromStr for ReputationBadge {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "red" => Ok(ReputationBadge::Red),
            "yellow" => Ok(ReputationBadge::Yellow),
            "green" => Ok(ReputationBadge::Green),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for ReputationBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that does not name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

/// Public representation of an accommodation.
///
/// Also documents the request body of create and update, which use the same field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccommodationDto {
    pub name: String,
    pub rating: i32,
    pub category: Category,
    pub image: String,
    pub reputation: i32,
    #[serde(rename = "reputationBadge")]
    pub reputation_badge: ReputationBadge,
    pub price: i64,
    pub availability: i64,
    pub location: LocationDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub city: String,
    pub state: String,
    pub country: String,
    /// Exactly five decimal digits.
    #[schema(example = "62448")]
    pub zip_code: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccommodationResponseDto {
    pub data: AccommodationDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccommodationListDto {
    pub data: Vec<AccommodationDto>,
}
