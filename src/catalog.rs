//! Choices offered by the generate and distribution forms.
//!
//! The service does its own validation; these lists only keep the forms from
//! sending values it has never heard of.

use crate::api::models::EncounterQuery;

pub const GAMES: [&str; 2] = ["Scarlet", "Violet"];

pub const DAYPARTS: [&str; 4] = ["Dawn", "Day", "Dusk", "Night"];

/// An empty type means "any type".
pub const POKEMON_TYPES: [&str; 19] = [
    "", "Normal", "Fire", "Water", "Grass", "Electric", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

pub const ENCOUNTER_POWERS: [&str; 4] = ["0", "1", "2", "3"];

pub const DUPES: [&str; 2] = ["false", "true"];

pub const AREAS: [&str; 31] = [
    "Alfornada Cavern",
    "Asado Desert",
    "Cabo Poco",
    "Casseroya Lake",
    "Dalizapa Passage",
    "East Paldean Sea",
    "East Province (Area One)",
    "East Province (Area Two)",
    "East Province (Area Three)",
    "Glaseado Mountain",
    "Great Crater of Paldea",
    "Inlet Grotto",
    "North Paldean Sea",
    "North Province (Area One)",
    "North Province (Area Two)",
    "North Province (Area Three)",
    "Poco Path",
    "Pokemon League",
    "Socarrat Trail",
    "South Paldean Sea",
    "South Province (Area One)",
    "South Province (Area Two)",
    "South Province (Area Three)",
    "South Province (Area Four)",
    "South Province (Area Five)",
    "South Province (Area Six)",
    "Tagtree Thicket",
    "West Paldean Sea",
    "West Province (Area One)",
    "West Province (Area Two)",
    "West Province (Area Three)",
];

impl Default for EncounterQuery {
    fn default() -> Self {
        Self {
            game: GAMES[0].to_string(),
            area: AREAS[0].to_string(),
            time: DAYPARTS[1].to_string(),
            pkmn_type: POKEMON_TYPES[0].to_string(),
            power: ENCOUNTER_POWERS[0].to_string(),
            dupes: DUPES[0].to_string(),
        }
    }
}
