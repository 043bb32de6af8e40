use dioxus::prelude::*;

use crate::api::models::EncounterQuery;
use crate::catalog::{AREAS, DAYPARTS, DUPES, ENCOUNTER_POWERS, GAMES, POKEMON_TYPES};
use crate::i18n::I18nService;

/// Hands a non-empty field to `on_submit` exactly as typed.
///
/// Returns whether the handler ran. With `clear` set the field is emptied
/// afterwards, otherwise it keeps its contents.
pub fn submit_name(field: &mut String, clear: bool, mut on_submit: impl FnMut(String)) -> bool {
    if field.is_empty() {
        return false;
    }

    let name = if clear {
        std::mem::take(field)
    } else {
        field.clone()
    };
    on_submit(name);
    true
}

#[component]
pub fn AddPokemonForm(on_add: EventHandler<String>) -> Element {
    rsx! {
        NameForm { button_key: "btn-add", on_submit: on_add }
    }
}

#[component]
pub fn LocatePokemonForm(on_locate: EventHandler<String>) -> Element {
    rsx! {
        NameForm { button_key: "btn-locate", on_submit: on_locate }
    }
}

#[component]
fn NameForm(button_key: &'static str, on_submit: EventHandler<String>) -> Element {
    let i18n = use_context::<Signal<I18nService>>();
    let mut pokemon_name = use_signal(String::new);

    let placeholder = i18n.read().translate("name-placeholder");
    let button_label = i18n.read().translate(button_key);

    rsx! {
        form {
            class: "name-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let mut field = pokemon_name();
                submit_name(&mut field, true, |name| on_submit.call(name));
                pokemon_name.set(field);
            },
            input {
                r#type: "text",
                autocomplete: "off",
                placeholder: "{placeholder}",
                value: "{pokemon_name}",
                oninput: move |evt| pokemon_name.set(evt.value())
            }
            button { r#type: "submit", class: "form-btn", "{button_label}" }
        }
    }
}

/// Shared by the generate and distribution forms; only the button differs.
#[component]
pub fn EncounterForm(button_key: &'static str, on_submit: EventHandler<EncounterQuery>) -> Element {
    let i18n = use_context::<Signal<I18nService>>();
    let mut query = use_signal(EncounterQuery::default);

    let i18n = i18n.read();
    let current = query();

    let plain = |values: &[&str]| -> Vec<(String, String)> {
        values.iter().map(|v| (v.to_string(), v.to_string())).collect()
    };
    let types: Vec<(String, String)> = POKEMON_TYPES
        .iter()
        .map(|t| {
            let label = if t.is_empty() { i18n.translate("type-any") } else { t.to_string() };
            (t.to_string(), label)
        })
        .collect();
    let dupes: Vec<(String, String)> = DUPES
        .iter()
        .map(|d| (d.to_string(), i18n.translate(&format!("dupes-{d}"))))
        .collect();

    rsx! {
        form {
            class: "form-grid",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(query());
            },
            Choice {
                label: i18n.translate("label-game"),
                value: current.game,
                options: plain(&GAMES),
                on_change: move |v: String| query.write().game = v
            }
            Choice {
                label: i18n.translate("label-area"),
                value: current.area,
                options: plain(&AREAS),
                on_change: move |v: String| query.write().area = v
            }
            Choice {
                label: i18n.translate("label-time"),
                value: current.time,
                options: plain(&DAYPARTS),
                on_change: move |v: String| query.write().time = v
            }
            Choice {
                label: i18n.translate("label-type"),
                value: current.pkmn_type,
                options: types,
                on_change: move |v: String| query.write().pkmn_type = v
            }
            Choice {
                label: i18n.translate("label-power"),
                value: current.power,
                options: plain(&ENCOUNTER_POWERS),
                on_change: move |v: String| query.write().power = v
            }
            Choice {
                label: i18n.translate("label-dupes"),
                value: current.dupes,
                options: dupes,
                on_change: move |v: String| query.write().dupes = v
            }
            button { r#type: "submit", class: "form-btn start-at-second-col", "{i18n.translate(button_key)}" }
        }
    }
}

#[component]
fn Choice(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "form-label",
            span { "{label}" }
            select {
                value: "{value}",
                onchange: move |evt: FormEvent| on_change.call(evt.value()),
                for (option_value, option_label) in options {
                    option {
                        selected: option_value == value,
                        value: "{option_value}",
                        "{option_label}"
                    }
                }
            }
        }
    }
}
