use dioxus::prelude::*;

use fitflex_domain::video;

use crate::component::element::{Icon, Title};

/// Embedded tutorial video for the exercise called `name`.
#[component]
pub fn TutorialVideo(name: String) -> Element {
    let record = video::resolve(&name);

    rsx! {
        div {
            class: "box mx-2",
            Title { title: "Video Tutorial", subtitle: "{record.title}" }
            figure {
                class: "image is-16by9",
                iframe {
                    class: "has-ratio",
                    src: "{record.embed_url()}",
                    title: "{record.title}",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                    allowfullscreen: true,
                }
            }
            div {
                class: "has-text-centered mt-3",
                a {
                    class: "button is-small is-danger is-light",
                    href: "{record.watch_url()}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    Icon { name: "play", is_small: true }
                    span { "Watch on YouTube ({record.channel})" }
                }
            }
        }
    }
}
