//! Common types and data structures

use serde::Deserialize;

/// Life status of a character, using the API's spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Status {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Status {
    /// Wire spelling, which is also what the status filter compares against
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Alive => "Alive",
            Status::Dead => "Dead",
            Status::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Last known location of a character
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    pub name: String,
}

/// One catalog entry as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub species: String,
    pub status: Status,
    pub location: Location,
    #[serde(default)]
    pub image: String,
}

/// Pagination metadata of a page response
#[derive(Debug, Clone, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u64,
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of the remote character listing
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

/// The full, in-memory character set in fetch order.
///
/// Built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    characters: Vec<Character>,
}

impl Catalog {
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Look up a character by id
    pub fn get(&self, id: u64) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }
}
