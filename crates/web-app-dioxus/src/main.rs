#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use std::sync::{Arc, LazyLock, Mutex};

use dioxus::prelude::*;
use log::error;

use fitflex_domain as domain;
use fitflex_storage as storage;
use fitflex_web_app as web_app;

use component::{element::ErrorMessage, navbar::Navbar};
use page::{
    about::About, category::Category, exercise::Exercise, home::Home, not_found::NotFound,
    search::Search,
};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/search")]
    Search {},
    #[route("/category/:category_type/:category")]
    Category { category_type: domain::CategoryType, category: String },
    #[route("/exercise/:id")]
    Exercise { id: domain::ExerciseID },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

type DomainService =
    domain::Service<storage::cached_rest::CachedREST<storage::rest::GlooNetSendRequest>>;

static CONFIG: LazyLock<Result<web_app::Config, web_app::ConfigError>> =
    LazyLock::new(|| web_app::Config::from_env(build_env));
static DOMAIN_SERVICE: GlobalSignal<DomainService> = Signal::global(|| {
    let config = CONFIG.as_ref().ok().cloned().unwrap_or_default();
    domain::Service::new(storage::cached_rest::CachedREST::new(&config))
});

/// Configuration values are fixed at build time.
fn build_env(name: &str) -> Option<String> {
    let value = match name {
        web_app::RAPID_API_KEY => option_env!("FITFLEX_RAPID_API_KEY"),
        web_app::EXERCISE_DB_URL => option_env!("FITFLEX_EXERCISE_DB_URL"),
        web_app::EXERCISE_DB_HOST => option_env!("FITFLEX_EXERCISE_DB_HOST"),
        web_app::TAXONOMY_URL => option_env!("FITFLEX_TAXONOMY_URL"),
        web_app::CACHE_TTL_HOURS => option_env!("FITFLEX_CACHE_TTL_HOURS"),
        web_app::LOG_LEVEL => option_env!("FITFLEX_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}

fn main() {
    init_logging();
    if let Err(err) = &*CONFIG {
        error!("invalid configuration: {err}");
    }
    dioxus::launch(App);
}

fn init_logging() {
    let level = match &*CONFIG {
        Ok(config) => config.log_level,
        Err(_) => web_app::Config::default().log_level,
    };
    let _ = web_app::log::init(
        Arc::new(Mutex::new(storage::local_storage::LocalStorage)),
        level,
    );
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        An unexpected error occurred and the application cannot continue.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span class=\"icon\">
                                                <i class=\"fa fa-arrow-rotate-right\"></i>
                                            </span>
                                            <span>Reload page</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-widescreen py-4",
            match &*CONFIG {
                Ok(_) => rsx! { Router::<Route> {} },
                Err(err) => rsx! { ConfigurationError { message: err.to_string() } },
            }
        }
    }
}

#[component]
fn ConfigurationError(message: String) -> Element {
    rsx! {
        section {
            class: "section",
            ErrorMessage { message: "The application is not configured correctly. {message}" }
        }
    }
}
