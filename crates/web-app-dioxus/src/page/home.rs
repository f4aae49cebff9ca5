use dioxus::prelude::*;

use crate::{Route, component::element::Icon};

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero is-medium is-dark is-bold",
            div {
                class: "hero-body has-text-centered",
                h1 {
                    class: "title is-2",
                    "Welcome to FitFlex, Your Personal Fitness Companion!"
                }
                p {
                    class: "subtitle is-4",
                    "Transform Your Fitness Journey Today"
                }
                p {
                    class: "block",
                    "Get personalized workout plans, expert fitness advice, and easy-to-follow exercises designed for all fitness levels."
                }
                Link {
                    class: "button is-primary is-medium",
                    to: Route::Search {},
                    Icon { name: "dumbbell" }
                    span { "Start Now" }
                }
            }
        }
    }
}
