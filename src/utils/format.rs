//! Display formatting helpers.
//!
//! The API reports height in decimetres and weight in hectograms; these
//! helpers convert to metres and kilograms for display.

use crate::models::Pokemon;

/// Format a dex number as `#003`
pub fn format_dex_number(id: u32) -> String {
    format!("#{:03}", id)
}

/// Uppercase the first ASCII letter ("charmander" -> "Charmander")
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Decimetres -> metres ("7" -> "0.7 m")
pub fn format_height(decimetres: u32) -> String {
    format!("{:.1} m", decimetres as f64 / 10.0)
}

/// Hectograms -> kilograms ("69" -> "6.9 kg")
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", hectograms as f64 / 10.0)
}

/// Plain-text summary card for one record, used by the `show` command and
/// the clipboard copy action.
pub fn summary_card(pokemon: &Pokemon) -> String {
    let mut lines = vec![
        format!("{} {}", format_dex_number(pokemon.id), capitalize(&pokemon.name)),
        format!("Height: {}", format_height(pokemon.height)),
        format!("Weight: {}", format_weight(pokemon.weight)),
        format!("Types: {}", pokemon.type_names().join(", ")),
        format!("Abilities: {}", pokemon.ability_names().join(", ")),
    ];

    if let Some(sprite) = &pokemon.sprites.front_default {
        lines.push(format!("Sprite: {sprite}"));
    }

    lines.join("\n")
}
