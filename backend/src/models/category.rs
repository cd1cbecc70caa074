use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event category shown on the dashboard.
///
/// Wire names are the dashboard's Portuguese labels. [`Category::Transit`] is
/// never produced by the categorizer; it marks synthesized travel blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "tatuagem")]
    Tattoo,
    #[serde(rename = "filho")]
    Child,
    #[serde(rename = "familia")]
    Family,
    #[serde(rename = "namorada")]
    Partner,
    #[serde(rename = "jogar")]
    Gaming,
    #[serde(rename = "treinar")]
    Fitness,
    #[serde(rename = "trabalho")]
    Work,
    #[serde(rename = "viagem")]
    Trip,
    #[serde(rename = "outros")]
    Other,
    #[serde(rename = "travel")]
    Transit,
}

impl Category {
    /// Categories a real calendar event can be assigned, in display order.
    pub const ASSIGNABLE: [Category; 9] = [
        Category::Tattoo,
        Category::Child,
        Category::Family,
        Category::Partner,
        Category::Gaming,
        Category::Fitness,
        Category::Work,
        Category::Trip,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tattoo => "tatuagem",
            Category::Child => "filho",
            Category::Family => "familia",
            Category::Partner => "namorada",
            Category::Gaming => "jogar",
            Category::Fitness => "treinar",
            Category::Work => "trabalho",
            Category::Trip => "viagem",
            Category::Other => "outros",
            Category::Transit => "travel",
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
        match s.to_lowercase().as_str() {
            "tatuagem" => Ok(Self::Tattoo),
            "filho" => Ok(Self::Child),
            "familia" | "família" => Ok(Self::Family),
            "namorada" => Ok(Self::Partner),
            "jogar" => Ok(Self::Gaming),
            "treinar" => Ok(Self::Fitness),
            "trabalho" => Ok(Self::Work),
            "viagem" => Ok(Self::Trip),
            "outros" => Ok(Self::Other),
            "travel" => Ok(Self::Transit),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}
