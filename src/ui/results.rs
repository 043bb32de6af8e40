use dioxus::prelude::*;

use crate::api::models::{Distribution, Generation, Locations, Pokemon};
use crate::i18n::I18nService;

/// The heading line followed by one line per location.
pub fn locate_lines(result: &Locations, i18n: &I18nService) -> Vec<String> {
    let key = if result.locations.is_empty() {
        "locate-missing"
    } else {
        "locate-found"
    };

    let mut lines = vec![i18n.translate_with(key, &[("name", result.pkmn_name.as_str())])];
    lines.extend(result.locations.iter().map(|location| location.name.clone()));
    lines
}

pub fn generation_line(generation: &Generation) -> String {
    format!(
        "{} ({}): {}",
        generation.area, generation.time, generation.pkmn_name
    )
}

pub fn distribution_line(distribution: &Distribution) -> String {
    format!("{}: {}%", distribution.pkmn_name, distribution.percentage)
}

#[component]
pub fn PokemonBox(pokemons: Vec<Pokemon>) -> Element {
    let i18n = use_context::<Signal<I18nService>>();

    if pokemons.is_empty() {
        return rsx! { p { class: "muted", "{i18n.read().translate(\"box-empty\")}" } };
    }

    rsx! {
        ul { class: "result-list",
            for (index, pokemon) in pokemons.iter().enumerate() {
                li { key: "{index}", "{pokemon.name}" }
            }
        }
    }
}

#[component]
pub fn LocateResults(result: Locations) -> Element {
    let i18n = use_context::<Signal<I18nService>>();
    let mut lines = locate_lines(&result, &i18n.read()).into_iter();
    let heading = lines.next().unwrap_or_default();

    rsx! {
        div { class: "locate-results",
            p { "{heading}" }
            ul { class: "result-list",
                for (index, name) in lines.enumerate() {
                    li { key: "{index}", "{name}" }
                }
            }
        }
    }
}

#[component]
pub fn GenerationResult(generation: Generation) -> Element {
    rsx! {
        div { class: "generation-result", p { "{generation_line(&generation)}" } }
    }
}

#[component]
pub fn DistributionList(distributions: Vec<Distribution>) -> Element {
    rsx! {
        ul { class: "result-list",
            for (index, distribution) in distributions.iter().enumerate() {
                li { key: "{index}", "{distribution_line(distribution)}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Location;

    fn located(name: &str, places: &[&str]) -> Locations {
        Locations {
            pkmn_name: name.to_string(),
            locations: places
                .iter()
                .map(|p| Location { name: p.to_string() })
                .collect(),
        }
    }

    #[test]
    fn test_no_locations_renders_cannot_be_found() {
        let i18n = I18nService::new("en-US");
        let result = located("Koraidon", &[]);

        assert_eq!(
            locate_lines(&result, &i18n),
            vec!["Koraidon cannot be found in the game.".to_string()]
        );
    }

    #[test]
    fn test_locations_render_can_be_found_in() {
        let i18n = I18nService::new("en-US");
        let result = located("Lechonk", &["Cabo Poco", "Poco Path (Day, Dusk)"]);

        assert_eq!(
            locate_lines(&result, &i18n),
            vec![
                "Lechonk can be found in:".to_string(),
                "Cabo Poco".to_string(),
                "Poco Path (Day, Dusk)".to_string(),
            ]
        );
    }

    #[test]
    fn test_locate_heading_follows_language() {
        let i18n = I18nService::new("de-DE");
        let lines = locate_lines(&located("Pamo", &["Asado Desert"]), &i18n);

        assert_eq!(lines[0], "Pamo kommt hier vor:");
        assert_eq!(lines[1], "Asado Desert");
    }

    #[test]
    fn test_generation_line() {
        let generation = Generation {
            area: "Poco Path".into(),
            time: "Night".into(),
            pkmn_name: "Hoothoot".into(),
        };
        assert_eq!(generation_line(&generation), "Poco Path (Night): Hoothoot");
    }

    #[test]
    fn test_distribution_line_drops_trailing_zero() {
        let whole = Distribution {
            pkmn_name: "Lechonk".into(),
            percentage: 25.0,
        };
        let fraction = Distribution {
            pkmn_name: "Tarountula".into(),
            percentage: 12.5,
        };

        assert_eq!(distribution_line(&whole), "Lechonk: 25%");
        assert_eq!(distribution_line(&fraction), "Tarountula: 12.5%");
    }
}
