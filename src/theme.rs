//! Colour Themes
//!
//! CSS class names for status, species and gender badges.

use catalog_core::{Gender, Status};

/// Badge classes for a life status
pub fn status_class(status: Status) -> &'static str {
    match status {
        Status::Alive => "badge status-alive",
        Status::Dead => "badge status-dead",
        Status::Unknown => "badge status-unknown",
    }
}

/// Badge classes for a species; anything not listed gets the default palette
pub fn species_class(species: &str) -> &'static str {
    match species {
        "Human" => "badge species-human",
        "Alien" => "badge species-alien",
        "Robot" => "badge species-robot",
        "Mythological Creature" => "badge species-mythological",
        _ => "badge species-default",
    }
}

pub fn gender_class(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "badge gender-male",
        Gender::Female => "badge gender-female",
        Gender::Genderless => "badge gender-genderless",
        Gender::Unknown => "badge gender-unknown",
    }
}

/// Symbol shown next to a gender option
pub fn gender_symbol(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => "♀",
        Gender::Male => "♂",
        Gender::Genderless => "⊖",
        Gender::Unknown => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_fallback() {
        assert_eq!(species_class("Human"), "badge species-human");
        assert_eq!(species_class("Cronenberg"), "badge species-default");
    }

    #[test]
    fn test_status_classes_are_distinct() {
        let classes: Vec<_> = Status::ALL.iter().map(|s| status_class(*s)).collect();
        assert_eq!(classes.len(), 3);
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
    }
}
