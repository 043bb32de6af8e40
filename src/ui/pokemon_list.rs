use dioxus::prelude::*;
use tracing::{error, info};

use super::forms::{AddPokemonForm, EncounterForm, LocatePokemonForm};
use super::results::{DistributionList, GenerationResult, LocateResults, PokemonBox};
use crate::api::models::{
    Distribution, Distributions, EncounterQuery, Generation, Locations, Pokemon, Pokemons,
};
use crate::api::{ApiClient, ApiError};
use crate::i18n::I18nService;

/// Logs a failed call and drops it.
pub fn settle<T>(result: Result<T, ApiError>, action: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Error {action}: {e}");
            None
        }
    }
}

// The `store_*` helpers only overwrite on success, so a failed call leaves
// whatever was rendered before in place.

pub fn store_pokemons(shown: &mut Vec<Pokemon>, result: Result<Pokemons, ApiError>) {
    if let Some(fetched) = settle(result, "fetching Pokémon") {
        *shown = fetched.pokemons;
    }
}

pub fn store_located(shown: &mut Option<Locations>, result: Result<Locations, ApiError>) {
    if let Some(located) = settle(result, "locating Pokémon") {
        *shown = Some(located);
    }
}

pub fn store_generation(shown: &mut Option<Generation>, result: Result<Generation, ApiError>) {
    if let Some(generated) = settle(result, "generating Pokémon") {
        *shown = Some(generated);
    }
}

pub fn store_distributions(
    shown: &mut Vec<Distribution>,
    result: Result<Distributions, ApiError>,
) {
    if let Some(calculated) = settle(result, "distributing Pokémon") {
        *shown = calculated.distributions;
    }
}

async fn refresh_pokemons(client: ApiClient, mut pokemons: Signal<Vec<Pokemon>>) {
    let result = client.pokemons().await;
    store_pokemons(&mut pokemons.write(), result);
}

/// Wires every form to its endpoint and keeps the last response of each.
///
/// Each submit spawns its own request. Nothing orders them, so an older
/// response that arrives late replaces a newer one.
#[component]
pub fn PokemonList() -> Element {
    let client = use_context::<ApiClient>();
    let i18n = use_context::<Signal<I18nService>>();

    let pokemons = use_signal(Vec::<Pokemon>::new);
    let mut shared_text = use_signal(String::new);
    let mut located = use_signal(|| None::<Locations>);
    let mut generation = use_signal(|| None::<Generation>);
    let mut distributions = use_signal(Vec::<Distribution>::new);

    let startup_client = client.clone();
    use_hook(move || spawn(refresh_pokemons(startup_client, pokemons)));

    let add_client = client.clone();
    let add_pokemon = move |name: String| {
        let client = add_client.clone();
        spawn(async move {
            info!("Adding {name:?} to the box");
            if settle(client.add_pokemon(&name).await, "adding Pokémon").is_some() {
                refresh_pokemons(client, pokemons).await;
            }
        });
    };

    let locate_client = client.clone();
    let locate_pokemon = move |name: String| {
        let client = locate_client.clone();
        spawn(async move {
            info!("Locating {name:?}");
            let result = client.locate(&name).await;
            store_located(&mut located.write(), result);
        });
    };

    let generate_client = client.clone();
    let generate = move |query: EncounterQuery| {
        let client = generate_client.clone();
        let request = query.with_shared_text(shared_text());
        spawn(async move {
            info!("Generating in {} ({})", request.area, request.time);
            let result = client.generate(&request).await;
            store_generation(&mut generation.write(), result);
        });
    };

    let distribution_client = client;
    let distribution = move |query: EncounterQuery| {
        let client = distribution_client.clone();
        let request = query.with_shared_text(shared_text());
        spawn(async move {
            info!("Calculating distribution for {} ({})", request.area, request.time);
            let result = client.distribution(&request).await;
            store_distributions(&mut distributions.write(), result);
        });
    };

    let i18n = i18n.read();

    rsx! {
        div { class: "pokemon-list",
            h2 { "{i18n.translate(\"box-heading\")}" }
            PokemonBox { pokemons: pokemons() }
            AddPokemonForm { on_add: add_pokemon }

            textarea {
                class: "shared-text",
                placeholder: "{i18n.translate(\"shared-text-placeholder\")}",
                value: "{shared_text}",
                oninput: move |evt| shared_text.set(evt.value())
            }

            EncounterForm { button_key: "btn-generate", on_submit: generate }
            if let Some(generation) = generation() {
                GenerationResult { generation }
            }

            EncounterForm { button_key: "btn-distribution", on_submit: distribution }
            DistributionList { distributions: distributions() }

            LocatePokemonForm { on_locate: locate_pokemon }
            if let Some(result) = located() {
                LocateResults { result }
            }
        }
    }
}
