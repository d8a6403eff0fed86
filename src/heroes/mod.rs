//! Hero id to display name resolution.
//!
//! The scoring engine never interprets hero names; they are only used in
//! report text. Callers supply a [`HeroNameResolver`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Name reported for an id the resolver does not know.
pub const UNKNOWN_HERO: &str = "Unknown Hero";

/// Maps a numeric hero id to a display name.
pub trait HeroNameResolver {
    fn hero_name(&self, hero_id: i32) -> String;
}

/// Hero entry as published by the game constants endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub id: i32,

    /// Internal name, e.g. "npc_dota_hero_antimage"
    #[serde(default)]
    pub name: String,

    pub localized_name: String,

    #[serde(default)]
    pub primary_attr: Option<String>,

    #[serde(default)]
    pub roles: Vec<String>,
}

/// In-memory hero table.
#[derive(Debug, Clone, Default)]
pub struct HeroDirectory {
    names: HashMap<i32, String>,
}

impl HeroDirectory {
    pub fn new(heroes: Vec<Hero>) -> Self {
        let names = heroes
            .into_iter()
            .map(|h| (h.id, h.localized_name))
            .collect();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl HeroNameResolver for HeroDirectory {
    fn hero_name(&self, hero_id: i32) -> String {
        self.names
            .get(&hero_id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_HERO.to_string())
    }
}

/// Resolver for when no hero table is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownHeroes;

impl HeroNameResolver for UnknownHeroes {
    fn hero_name(&self, _hero_id: i32) -> String {
        UNKNOWN_HERO.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_lookup() {
        let json = r#"[
            {"id": 1, "name": "npc_dota_hero_antimage", "localized_name": "Anti-Mage", "primary_attr": "agi", "roles": ["Carry"]},
            {"id": 74, "localized_name": "Invoker"}
        ]"#;
        let heroes: Vec<Hero> = serde_json::from_str(json).unwrap();
        let directory = HeroDirectory::new(heroes);

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.hero_name(1), "Anti-Mage");
        assert_eq!(directory.hero_name(74), "Invoker");
        assert_eq!(directory.hero_name(999), UNKNOWN_HERO);
    }

    #[test]
    fn test_unknown_resolver() {
        assert_eq!(UnknownHeroes.hero_name(1), UNKNOWN_HERO);
        assert!(HeroDirectory::default().is_empty());
    }
}
