//! Favorites
//!
//! In-memory favorites list keyed by character id, in the order they were added.

use crate::models::Character;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    characters: Vec<Character>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character; no-op if its id is already present
    pub fn add(&mut self, character: Character) -> bool {
        if self.contains(character.id) {
            return false;
        }
        self.characters.push(character);
        true
    }

    /// Remove by id; no-op if absent
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.characters.len();
        self.characters.retain(|c| c.id != id);
        self.characters.len() != before
    }

    pub fn contains(&self, id: u32) -> bool {
        self.characters.iter().any(|c| c.id == id)
    }

    /// Add if absent, remove if present. Returns whether it is now a favorite.
    pub fn toggle(&mut self, character: &Character) -> bool {
        if self.remove(character.id) {
            false
        } else {
            self.characters.push(character.clone());
            true
        }
    }

    pub fn reset(&mut self) {
        self.characters.clear();
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_character;

    #[test]
    fn test_add_is_idempotent() {
        let mut favorites = Favorites::new();
        assert!(favorites.add(sample_character(1)));
        assert!(!favorites.add(sample_character(1)));
        assert_eq!(favorites.len(), 1);
        assert!(favorites.contains(1));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut favorites = Favorites::new();
        favorites.add(sample_character(1));
        let before = favorites.clone();
        assert!(!favorites.remove(42));
        assert_eq!(favorites, before);
    }

    #[test]
    fn test_toggle() {
        let mut favorites = Favorites::new();
        let rick = sample_character(1);
        assert!(favorites.toggle(&rick));
        assert!(favorites.contains(1));
        assert!(!favorites.toggle(&rick));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_insertion_order_and_reset() {
        let mut favorites = Favorites::new();
        for id in [3, 1, 2] {
            favorites.add(sample_character(id));
        }
        let ids: Vec<u32> = favorites.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        favorites.reset();
        assert!(favorites.is_empty());
    }
}
