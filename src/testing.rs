//! Test fixtures shared by the unit tests

use crate::error::{LoadError, Result};
use crate::source::PageSource;
use crate::types::{Character, Location, PageInfo, PageResponse, Status};
use async_trait::async_trait;
use std::sync::Mutex;

pub(crate) fn character(id: u64, name: &str, species: &str, status: Status) -> Character {
    Character {
        id,
        name: name.to_string(),
        species: species.to_string(),
        status,
        location: Location { name: "Earth (C-137)".to_string() },
        image: format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
    }
}

/// `count` humans, alive, with ids starting at `first_id`
pub(crate) fn humans(first_id: u64, count: u64) -> Vec<Character> {
    (first_id..first_id + count)
        .map(|id| character(id, &format!("Character {}", id), "Human", Status::Alive))
        .collect()
}

pub(crate) fn page(results: Vec<Character>, pages: u32) -> PageResponse {
    PageResponse {
        info: PageInfo { count: results.len() as u64, pages, next: None, prev: None },
        results,
    }
}

/// In-memory source replaying a fixed script of responses.
///
/// Entry `n - 1` answers page `n`: `Ok` is returned as-is, `Err(status)`
/// becomes `LoadError::Status`. Pages past the script answer 404.
pub(crate) struct ScriptedSource {
    script: Vec<std::result::Result<PageResponse, u16>>,
    requested: Mutex<Vec<u32>>,
}

impl ScriptedSource {
    pub(crate) fn new(script: Vec<std::result::Result<PageResponse, u16>>) -> Self {
        Self { script, requested: Mutex::new(Vec::new()) }
    }

    /// Pages requested so far, in request order
    pub(crate) fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for ScriptedSource {
    async fn fetch_page(&self, page: u32) -> Result<PageResponse> {
        self.requested.lock().unwrap().push(page);
        match (page as usize).checked_sub(1).and_then(|i| self.script.get(i)) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(status)) => Err(LoadError::Status { page, status: *status }),
            None => Err(LoadError::Status { page, status: 404 }),
        }
    }
}
