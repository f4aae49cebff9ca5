use dioxus::prelude::*;

use fitflex_domain as domain;

use crate::{Route, component::element::Icon};

#[component]
pub fn Navbar() -> Element {
    let mut menu_visible = use_signal(|| false);
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let page_title = page_title(&route);
    let back_target = back_target(&route);

    rsx! {
        nav {
            class: "navbar is-fixed-top is-primary has-shadow has-text-weight-bold",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    match back_target {
                        Some(BackTarget::Route(target)) => rsx! {
                            a {
                                class: "navbar-item is-size-5",
                                Icon {
                                    name: "chevron-left",
                                    onclick: move |_| { navigator.push(target.clone()); },
                                }
                            }
                        },
                        Some(BackTarget::History) => rsx! {
                            a {
                                class: "navbar-item is-size-5",
                                Icon {
                                    name: "chevron-left",
                                    onclick: move |_| navigator.go_back(),
                                }
                            }
                        },
                        None => rsx! {
                            Link {
                                class: "navbar-item is-size-5",
                                to: Route::Home {},
                                "FitFlex"
                            }
                        },
                    }
                    if !page_title.is_empty() {
                        div { class: "navbar-item is-size-5", "{page_title}" }
                    }
                    div { class: "mx-auto" }
                    a {
                        aria_expanded: menu_visible(),
                        aria_label: "menu",
                        class: "navbar-burger ml-0",
                        class: if menu_visible() { "is-active" },
                        role: "button",
                        onclick: move |_| { *menu_visible.write() = !menu_visible() },
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                    }
                }
                div {
                    class: "navbar-menu is-flex-grow-0",
                    class: if menu_visible() { "is-active" },
                    div {
                        class: "navbar-end",
                        for (icon, text, target) in [
                            ("house", "Home", Route::Home {}),
                            ("circle-info", "About", Route::About {}),
                            ("magnifying-glass", "Search", Route::Search {}),
                        ] {
                            a {
                                class: "navbar-item",
                                onclick: move |_| {
                                    *menu_visible.write() = false;
                                    navigator.push(target.clone());
                                },
                                Icon { name: "{icon}", px: 5 }
                                "{text}"
                            }
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}

#[derive(Debug, Clone, PartialEq)]
enum BackTarget {
    Route(Route),
    History,
}

fn page_title(route: &Route) -> String {
    match route {
        Route::Home {} => String::new(),
        Route::About {} => "About".to_string(),
        Route::Search {} => "Search".to_string(),
        Route::Category { category, .. } => domain::capitalize(category),
        Route::Exercise { .. } => "Exercise".to_string(),
        Route::NotFound { .. } => "Not found".to_string(),
    }
}

fn back_target(route: &Route) -> Option<BackTarget> {
    match route {
        Route::Home {} => None,
        Route::About {} | Route::Search {} | Route::NotFound { .. } => {
            Some(BackTarget::Route(Route::Home {}))
        }
        Route::Category { .. } => Some(BackTarget::Route(Route::Search {})),
        Route::Exercise { .. } => Some(BackTarget::History),
    }
}
