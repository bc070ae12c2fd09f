use std::fmt;

use serde::{Deserialize, Serialize};

/// One crowd-funded game project, as bundled in the embedded data.
///
/// Records are immutable after parse. Identity is positional within the
/// catalog; uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub name: String,
    pub description: String,
    /// Path to the card image. Stored as `img` in the bundled data.
    #[serde(rename = "img")]
    pub image: String,
    pub pledged: f64,
    pub goal: f64,
    pub backers: u64,
}

impl GameRecord {
    /// A game is funded once pledges meet or exceed its goal.
    pub fn is_funded(&self) -> bool {
        self.pledged >= self.goal
    }
}

/// The full ordered list of games, fixed for the lifetime of the page view.
///
/// The catalog is the single source of truth: every filtered or sorted view
/// is a derived sequence, and the catalog itself is never reordered in
/// place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    games: Vec<GameRecord>,
}

impl Catalog {
    pub fn new(games: Vec<GameRecord>) -> Self {
        Self { games }
    }

    /// Parse the bundled JSON array. This runs once at startup; a failure
    /// here is fatal to page initialization.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let games: Vec<GameRecord> = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Ok(Self { games })
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Error type for catalog initialization.
#[derive(Debug)]
pub enum CatalogError {
    /// The embedded data was not a valid JSON array of game records.
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "malformed games data: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_GAMES: &str = r#"[
        {"name": "Gloamway", "description": "A lantern-lit trek.",
         "img": "assets/covers/gloamway.svg",
         "pledged": 50, "goal": 100, "backers": 5},
        {"name": "Emberwick", "description": "Keep the hearth alive.",
         "img": "assets/covers/emberwick.svg",
         "pledged": 150, "goal": 100, "backers": 10}
    ]"#;

    #[test]
    fn parses_records_in_order() {
        let catalog = Catalog::from_json(TWO_GAMES).expect("valid data");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.games()[0].name, "Gloamway");
        assert_eq!(catalog.games()[1].name, "Emberwick");
        // The serialized field is `img`.
        assert_eq!(catalog.games()[0].image, "assets/covers/gloamway.svg");
    }

    #[test]
    fn funded_at_exact_goal() {
        let mut catalog = Catalog::from_json(TWO_GAMES).expect("valid data");
        assert!(!catalog.games()[0].is_funded());
        assert!(catalog.games()[1].is_funded());

        catalog.games[0].pledged = catalog.games[0].goal;
        assert!(catalog.games()[0].is_funded());
    }

    #[test]
    fn malformed_data_is_an_error() {
        let err = Catalog::from_json("{not json").expect_err("parse must fail");
        assert!(err.to_string().contains("malformed games data"));

        // A well-formed document with the wrong shape also fails.
        assert!(Catalog::from_json(r#"{"name": "solo object"}"#).is_err());
    }

    #[test]
    fn empty_array_is_a_valid_catalog() {
        let catalog = Catalog::from_json("[]").expect("empty array parses");
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
