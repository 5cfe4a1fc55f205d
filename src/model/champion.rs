use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Maximum raw size of an attached image, measured at capture time.
pub const MAX_IMAGE_BYTES: usize = 800_000;

/// Tournament tier of a champion record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum Category {
    Finals,
    #[serde(rename = "Super 1000")]
    Super1000,
    #[serde(rename = "Super 750")]
    Super750,
    #[default]
    #[serde(rename = "Super 500")]
    Super500,
    #[serde(rename = "Super 300")]
    Super300,
    #[serde(rename = "World Championships")]
    WorldChampionships,
}

impl Category {
    /// All tiers, in the order they are offered in the editor.
    pub const ALL: [Category; 6] = [
        Category::Finals,
        Category::Super1000,
        Category::Super750,
        Category::Super500,
        Category::Super300,
        Category::WorldChampionships,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Finals => "Finals",
            Category::Super1000 => "Super 1000",
            Category::Super750 => "Super 750",
            Category::Super500 => "Super 500",
            Category::Super300 => "Super 300",
            Category::WorldChampionships => "World Championships",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s:?}"))
    }
}

/// A champion record as stored in the collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChampionDto {
    /// Store-assigned identifier, immutable after creation.
    pub id: i32,
    pub tournament: String,
    pub date: NaiveDate,
    pub winner: String,
    pub category: Category,
    /// Inline-encoded image payload (data URL), empty when absent.
    pub image: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: i32,
}

/// Mutable fields submitted by the editor for a create or full overwrite.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChampionForm {
    pub tournament: String,
    /// ISO `YYYY-MM-DD`; validated server-side before the write.
    pub date: String,
    pub winner: String,
    pub category: Category,
    pub image: String,
}
