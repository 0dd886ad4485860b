//! Shared test utilities for integration tests
#![allow(dead_code)]

use pokeverse::models::{AbilitySlot, NamedResource, Pokemon, Sprites, TypeSlot};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builder for catalog entries used both as in-memory fixtures and as
/// mock API response bodies
#[derive(Clone)]
pub struct PokemonBuilder {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub sprite: Option<String>,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
}

impl PokemonBuilder {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            height: 7,
            weight: 69,
            sprite: Some(format!("https://example.com/sprites/{id}.png")),
            types: vec!["normal".to_string()],
            abilities: vec!["run-away".to_string()],
        }
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn no_sprite(mut self) -> Self {
        self.sprite = None;
        self
    }

    pub fn types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn abilities(mut self, abilities: &[&str]) -> Self {
        self.abilities = abilities.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Build the in-memory model
    pub fn build(&self) -> Pokemon {
        Pokemon {
            id: self.id,
            name: self.name.clone(),
            height: self.height,
            weight: self.weight,
            sprites: Sprites { front_default: self.sprite.clone() },
            types: self
                .types
                .iter()
                .map(|name| TypeSlot { type_info: NamedResource { name: name.clone() } })
                .collect(),
            abilities: self
                .abilities
                .iter()
                .map(|name| AbilitySlot { ability: NamedResource { name: name.clone() } })
                .collect(),
        }
    }

    /// Detail-endpoint JSON body, including pass-through fields the
    /// application ignores
    pub fn detail_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "height": self.height,
            "weight": self.weight,
            "base_experience": 64,
            "sprites": {"front_default": self.sprite},
            "types": self.types.iter().enumerate().map(|(slot, name)| {
                json!({"slot": slot + 1, "type": {"name": name, "url": "https://example.com/type"}})
            }).collect::<Vec<_>>(),
            "abilities": self.abilities.iter().enumerate().map(|(slot, name)| {
                json!({"slot": slot + 1, "is_hidden": false, "ability": {"name": name, "url": "https://example.com/ability"}})
            }).collect::<Vec<_>>(),
        })
    }

    fn detail_path(&self) -> String {
        format!("/pokemon/{}/", self.id)
    }

    fn reference_json(&self, base_uri: &str) -> Value {
        json!({"name": self.name, "url": format!("{}{}", base_uri, self.detail_path())})
    }
}

/// Mount the list endpoint for the given entries, with references pointing
/// back at the mock server
pub async fn mount_roster_list(server: &MockServer, entries: &[PokemonBuilder]) {
    let results: Vec<Value> = entries.iter().map(|e| e.reference_json(&server.uri())).collect();

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": entries.len(),
            "next": null,
            "previous": null,
            "results": results,
        })))
        .mount(server)
        .await;
}

/// Mount a working detail endpoint for one entry
pub async fn mount_detail(server: &MockServer, entry: &PokemonBuilder) {
    Mock::given(method("GET"))
        .and(path(entry.detail_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry.detail_json()))
        .mount(server)
        .await;
}

/// Mount a failing detail endpoint for one entry
pub async fn mount_detail_failure(server: &MockServer, entry: &PokemonBuilder, status: u16) {
    Mock::given(method("GET"))
        .and(path(entry.detail_path()))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mount the full happy path: list plus every detail endpoint
pub async fn mount_full_catalog(server: &MockServer, entries: &[PokemonBuilder]) {
    mount_roster_list(server, entries).await;
    for entry in entries {
        mount_detail(server, entry).await;
    }
}

/// A small realistic catalog
pub fn starter_catalog() -> Vec<PokemonBuilder> {
    vec![
        PokemonBuilder::new(1, "bulbasaur")
            .types(&["grass", "poison"])
            .abilities(&["overgrow"]),
        PokemonBuilder::new(4, "charmander").height(6).weight(85).types(&["fire"]).abilities(&["blaze"]),
        PokemonBuilder::new(5, "charmeleon").types(&["fire"]).abilities(&["blaze"]),
        PokemonBuilder::new(6, "charizard")
            .height(17)
            .weight(905)
            .types(&["fire", "flying"])
            .abilities(&["blaze", "solar-power"]),
        PokemonBuilder::new(7, "squirtle").types(&["water"]).abilities(&["torrent"]),
    ]
}
