use std::collections::HashMap;

use sys_locale::get_locale;

pub const FALLBACK_LANG: &str = "en-US";

#[derive(Clone, PartialEq)]
pub struct I18nService {
    current_lang: String,
    translations: HashMap<String, HashMap<String, String>>,
}

impl I18nService {
    pub fn new(lang: &str) -> Self {
        let mut translations = HashMap::new();

        let de_content = include_str!("../../locales/de-DE/main.ftl");
        let en_content = include_str!("../../locales/en-US/main.ftl");

        translations.insert("de-DE".to_string(), parse_ftl(de_content));
        translations.insert(FALLBACK_LANG.to_string(), parse_ftl(en_content));

        I18nService {
            current_lang: lang.to_string(),
            translations,
        }
    }

    /// Picks German for any `de*` system locale, English otherwise.
    pub fn from_system() -> Self {
        let system_lang = get_locale().unwrap_or_else(|| FALLBACK_LANG.to_string());
        Self::new(lang_for_locale(&system_lang))
    }

    pub fn translate(&self, key: &str) -> String {
        if let Some(val) = self.lookup(&self.current_lang, key) {
            return val.clone();
        }

        if let Some(val) = self.lookup(FALLBACK_LANG, key) {
            return val.clone();
        }

        key.to_string()
    }

    /// Like [`translate`](Self::translate), filling `{ $name }` placeholders.
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.translate(key);
        for (name, value) in args {
            text = text.replace(&format!("{{ ${name} }}"), value);
        }
        text
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&String> {
        self.translations.get(lang)?.get(key)
    }
}

fn lang_for_locale(locale: &str) -> &'static str {
    if locale.starts_with("de") {
        "de-DE"
    } else {
        FALLBACK_LANG
    }
}

fn parse_ftl(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ftl() {
        let map = parse_ftl("# comment\n\nbox-heading = Pokémon Box\n  spaced =  value  \nbroken line\n");

        assert_eq!(map.len(), 2);
        assert_eq!(map["box-heading"], "Pokémon Box");
        assert_eq!(map["spaced"], "value");
    }

    #[test]
    fn test_fallback_chain() {
        let de = I18nService::new("de-DE");
        let unknown = I18nService::new("fr-FR");

        assert_eq!(unknown.translate("box-heading"), "Pokémon Box");
        assert_eq!(de.translate("no-such-key"), "no-such-key");
    }

    #[test]
    fn test_translate_with_placeholder() {
        let en = I18nService::new("en-US");

        assert_eq!(
            en.translate_with("locate-found", &[("name", "Lechonk")]),
            "Lechonk can be found in:"
        );
        assert_eq!(
            en.translate_with("locate-missing", &[("name", "Mew")]),
            "Mew cannot be found in the game."
        );
    }

    #[test]
    fn test_every_english_key_has_german_text() {
        let en = parse_ftl(include_str!("../../locales/en-US/main.ftl"));
        let de = parse_ftl(include_str!("../../locales/de-DE/main.ftl"));

        for key in en.keys() {
            assert!(de.contains_key(key), "de-DE is missing {key}");
        }
    }

    #[test]
    fn test_lang_for_locale() {
        assert_eq!(lang_for_locale("de-AT"), "de-DE");
        assert_eq!(lang_for_locale("en-GB"), "en-US");
        assert_eq!(lang_for_locale("ja-JP"), "en-US");
    }
}
