use dioxus::prelude::*;
use tracing::info;

use crate::api::ApiClient;
use crate::config::Config;
use crate::i18n::I18nService;
use crate::ui::PokemonList;

const STYLE: &str = include_str!("../assets/main.css");

pub fn app() -> Element {
    let i18n_service = use_context_provider(|| Signal::new(I18nService::from_system()));

    use_context_provider(|| {
        let client = ApiClient::new(Config::load().api_url);
        info!("Using encounter service at {}", client.base_url());
        client
    });

    let title = i18n_service.read().translate("app-title");

    rsx! {
        document::Title { "{title}" }
        style { "{STYLE}" }

        div { class: "app",
            header { class: "app-header",
                h1 { "{title}" }
            }
            main {
                PokemonList {}
            }
        }
    }
}
