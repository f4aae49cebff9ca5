use dioxus::prelude::*;
use strum::Display;

#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "warning")]
    Warning,
    #[strum(to_string = "danger")]
    Danger,
}

#[component]
pub fn Block(children: Element, class: Option<String>) -> Element {
    rsx! {
        div {
            class: "block",
            class: if let Some(class) = &class { "{class}" },
            {children}
        }
    }
}

#[component]
pub fn CenteredBlock(children: Element) -> Element {
    rsx! {
        div { class: "block has-text-centered", {children} }
    }
}

#[component]
pub fn Loading(text: Option<String>) -> Element {
    rsx! {
        div {
            class: "is-size-4 has-text-centered my-4",
            i { class: "fas fa-spinner fa-pulse" }
            if let Some(text) = text {
                p { class: "is-size-6 mt-2", "{text}" }
            }
        }
    }
}

#[component]
pub fn LoadingPage(text: Option<String>) -> Element {
    rsx! {
        div {
            class: "is-size-2 has-text-centered m-6",
            i { class: "fas fa-spinner fa-pulse" }
            if let Some(text) = text {
                p { class: "is-size-5 mt-2", "{text}" }
            }
        }
    }
}

#[component]
pub fn Message(children: Element, color: Color) -> Element {
    rsx! {
        div {
            class: "message my-3 mx-2 is-{color}",
            div {
                class: "message-body has-text-centered",
                {children}
            }
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "message is-danger mx-2",
            div {
                class: "message-body has-text-dark",
                div {
                    class: "title has-text-danger is-size-4",
                    "Error"
                }
                p { "{message}" }
            }
        }
    }
}

#[component]
pub fn Icon(
    name: String,
    is_small: Option<bool>,
    px: Option<u8>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if is_small.unwrap_or_default() { "is-small" },
            class: if let Some(px) = px { "px-{px}" },
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            i { class: "fas fa-{name}" }
        }
    }
}

#[component]
pub fn Title(title: String, subtitle: Option<String>, class: Option<String>) -> Element {
    rsx! {
        CenteredBlock {
            div {
                class: "container px-2",
                h1 {
                    class: "title is-4",
                    class: if let Some(c) = &class { "{c}" },
                    "{title}"
                }
                if let Some(subtitle) = subtitle {
                    p { class: "subtitle is-6", "{subtitle}" }
                }
            }
        }
    }
}

#[component]
pub fn Tags(tags: Vec<String>, color: Option<Color>) -> Element {
    rsx! {
        div {
            class: "tags is-centered m-2",
            for tag in tags {
                span {
                    class: "tag",
                    class: if let Some(color) = color { "is-{color} is-light" },
                    "{tag}"
                }
            }
        }
    }
}

#[component]
pub fn SearchBox(
    search_term: String,
    placeholder: String,
    oninput: EventHandler<FormEvent>,
    onsubmit: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        form {
            class: "field has-addons mx-2",
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            div {
                class: "control has-icons-left is-expanded",
                span {
                    class: "icon is-left",
                    i { class: "fas fa-search" }
                }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder,
                    value: search_term,
                    oninput: move |evt| oninput.call(evt),
                }
            }
            div {
                class: "control",
                button {
                    class: "button is-primary",
                    r#type: "submit",
                    "Search"
                }
            }
        }
    }
}
