//! Request and response bodies of the encounter service.
//!
//! Responses are taken as-is: nothing is validated or normalized, a new
//! response simply replaces whatever was rendered before.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Pokemon {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Pokemons {
    pub pokemons: Vec<Pokemon>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Locations {
    pub locations: Vec<Location>,
    pub pkmn_name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Generation {
    pub area: String,
    pub time: String,
    pub pkmn_name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Distribution {
    pub pkmn_name: String,
    pub percentage: f64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Distributions {
    #[serde(default)]
    pub location_name: Option<String>,
    pub distributions: Vec<Distribution>,
}

/// Body of `POST /pokemons` and `POST /locate`.
#[derive(Serialize, Debug)]
pub struct NameRequest<'a> {
    pub name: &'a str,
}

/// The generation parameters picked in a form.
///
/// Everything travels as a string, power included.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterQuery {
    pub game: String,
    pub area: String,
    pub time: String,
    pub pkmn_type: String,
    pub power: String,
    pub dupes: String,
}

impl EncounterQuery {
    pub fn with_shared_text(self, shared_text: String) -> EncounterRequest {
        EncounterRequest {
            game: self.game,
            area: self.area,
            time: self.time,
            pkmn_type: self.pkmn_type,
            power: self.power,
            dupes: self.dupes,
            shared_text,
        }
    }
}

/// Body of `POST /generate` and `POST /distribution`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EncounterRequest {
    pub game: String,
    pub area: String,
    pub time: String,
    pub pkmn_type: String,
    pub power: String,
    pub dupes: String,
    pub shared_text: String,
}
