//! Dioxus components. Forms own their input state and report submits through
//! `EventHandler` props; `PokemonList` turns those into requests.

pub mod forms;
pub mod pokemon_list;
pub mod results;

pub use pokemon_list::PokemonList;
