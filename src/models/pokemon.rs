use serde::{Deserialize, Serialize};

/// Envelope returned by `GET /pokemon?limit=N`
///
/// The API also sends `count`, `next` and `previous` pagination fields; the
/// roster is fetched in a single page so those are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterPage {
    pub results: Vec<PokemonRef>,
}

/// Reference to a detail resource, as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

/// Full detail record for one creature.
///
/// `height` is in decimetres and `weight` in hectograms, the API's native
/// units; display conversion lives in `utils::format`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
}

impl Pokemon {
    /// Type names in slot order
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.type_info.name.as_str()).collect()
    }

    /// Ability names in slot order
    pub fn ability_names(&self) -> Vec<&str> {
        self.abilities.iter().map(|a| a.ability.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_roster_page_ignores_pagination_fields() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=151&limit=151",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;

        let page: RosterPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "bulbasaur");
        assert_eq!(page.results[1].url, "https://pokeapi.co/api/v2/pokemon/2/");
    }

    #[test]
    fn test_deserialize_pokemon_detail() {
        let json = r#"{
            "id": 6,
            "name": "charizard",
            "height": 17,
            "weight": 905,
            "base_experience": 267,
            "sprites": {
                "front_default": "https://example.com/6.png",
                "back_default": "https://example.com/back/6.png"
            },
            "types": [
                {"slot": 1, "type": {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"}},
                {"slot": 2, "type": {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"}}
            ],
            "abilities": [
                {"ability": {"name": "blaze", "url": "https://pokeapi.co/api/v2/ability/66/"}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "solar-power", "url": "https://pokeapi.co/api/v2/ability/94/"}, "is_hidden": true, "slot": 3}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.id, 6);
        assert_eq!(pokemon.name, "charizard");
        assert_eq!(pokemon.height, 17);
        assert_eq!(pokemon.weight, 905);
        assert_eq!(pokemon.sprites.front_default.as_deref(), Some("https://example.com/6.png"));
        assert_eq!(pokemon.type_names(), vec!["fire", "flying"]);
        assert_eq!(pokemon.ability_names(), vec!["blaze", "solar-power"]);
    }

    #[test]
    fn test_deserialize_pokemon_null_sprite() {
        let json = r#"{
            "id": 151,
            "name": "mew",
            "height": 4,
            "weight": 40,
            "sprites": {"front_default": null},
            "types": [{"type": {"name": "psychic"}}],
            "abilities": []
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.sprites.front_default, None);
        assert!(pokemon.ability_names().is_empty());
    }

    #[test]
    fn test_deserialize_pokemon_missing_optional_sections() {
        // sprites/types/abilities default to empty when absent
        let json = r#"{"id": 1, "name": "bulbasaur", "height": 7, "weight": 69}"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.sprites.front_default, None);
        assert!(pokemon.types.is_empty());
        assert!(pokemon.abilities.is_empty());
    }

    #[test]
    fn test_deserialize_pokemon_missing_required_field_fails() {
        let json = r#"{"name": "missingno", "height": 1, "weight": 1}"#;

        let result: Result<Pokemon, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
