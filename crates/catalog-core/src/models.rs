//! Catalog Models
//!
//! Data structures matching the character API payloads.

use serde::Deserialize;

/// Life status of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Status {
    Alive,
    Dead,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Alive, Status::Dead, Status::Unknown];

    /// Lowercase value used in query strings
    pub fn as_query(&self) -> &'static str {
        match self {
            Status::Alive => "alive",
            Status::Dead => "dead",
            Status::Unknown => "unknown",
        }
    }

    /// Parse a query value, ignoring case. `None` for anything unrecognised.
    pub fn from_query(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_query().eq_ignore_ascii_case(value.trim()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Alive => "Alive",
            Status::Dead => "Dead",
            Status::Unknown => "Unknown",
        }
    }
}

/// Gender of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Gender {
    Female,
    Male,
    Genderless,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Gender::Female, Gender::Male, Gender::Genderless, Gender::Unknown];

    /// Lowercase value used in query strings
    pub fn as_query(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Genderless => "genderless",
            Gender::Unknown => "unknown",
        }
    }

    /// Parse a query value, ignoring case. `None` for anything unrecognised.
    pub fn from_query(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_query().eq_ignore_ascii_case(value.trim()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Genderless => "Genderless",
            Gender::Unknown => "Unknown",
        }
    }
}

/// Named link to another resource (origin or last known location)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Character record (matches API)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: Status,
    pub species: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: Gender,
    pub origin: NamedResource,
    pub location: NamedResource,
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: String,
}

impl Character {
    /// Number of episodes the character appears in
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}

/// Paging metadata of a response
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PageInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of characters
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CharactersPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

impl CharactersPage {
    /// Well-formed page with no matches
    pub fn empty() -> Self {
        Self::default()
    }

    /// Single synthetic page holding the given characters (favorites view)
    pub fn single(results: Vec<Character>) -> Self {
        Self {
            info: PageInfo {
                count: results.len() as u32,
                pages: 1,
                next: None,
                prev: None,
            },
            results,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn sample_character(id: u32) -> Character {
    Character {
        id,
        name: format!("Character {}", id),
        status: Status::Alive,
        species: "Human".to_string(),
        kind: String::new(),
        gender: Gender::Male,
        origin: NamedResource { name: "Earth (C-137)".to_string(), url: String::new() },
        location: NamedResource { name: "Citadel of Ricks".to_string(), url: String::new() },
        image: format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
        episode: vec!["https://rickandmortyapi.com/api/episode/1".to_string()],
        url: String::new(),
        created: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_character() {
        let json = r#"{
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
            "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
            "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
            "episode": ["https://rickandmortyapi.com/api/episode/1", "https://rickandmortyapi.com/api/episode/2"],
            "url": "https://rickandmortyapi.com/api/character/1",
            "created": "2017-11-04T18:48:46.250Z"
        }"#;

        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.id, 1);
        assert_eq!(character.status, Status::Alive);
        assert_eq!(character.gender, Gender::Male);
        assert_eq!(character.origin.name, "Earth (C-137)");
        assert_eq!(character.episode_count(), 2);
    }

    #[test]
    fn test_unknown_wire_values() {
        assert_eq!(serde_json::from_str::<Status>(r#""unknown""#).unwrap(), Status::Unknown);
        assert_eq!(serde_json::from_str::<Gender>(r#""unknown""#).unwrap(), Gender::Unknown);
        // Values outside the enum fall back to Unknown
        assert_eq!(serde_json::from_str::<Status>(r#""Zombie""#).unwrap(), Status::Unknown);
    }

    #[test]
    fn test_query_values() {
        assert_eq!(Status::from_query("ALIVE"), Some(Status::Alive));
        assert_eq!(Status::from_query("all"), None);
        assert_eq!(Gender::from_query("genderless"), Some(Gender::Genderless));
        assert_eq!(Gender::Female.as_query(), "female");
    }

    #[test]
    fn test_single_page() {
        let page = CharactersPage::single(vec![sample_character(1), sample_character(2)]);
        assert_eq!(page.info.count, 2);
        assert_eq!(page.info.pages, 1);
        assert!(page.info.next.is_none());
    }
}
