use dioxus::prelude::*;

use crate::component::element::Title;

#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "container px-3 py-5",
            Title { title: "About FitFlex", class: "is-2 has-text-primary" }
            div {
                class: "content is-medium has-text-centered",
                p {
                    "FitFlex is your ultimate fitness companion, designed to help you achieve your health goals with ease. "
                    "Explore a vast collection of exercises categorized by body parts and equipment, get expert workout guidance, "
                    "and track your favorites effortlessly."
                }
                p {
                    "Whether you're a beginner or an athlete, our app ensures a seamless, engaging, and effective fitness journey. "
                    "Stay fit, stay strong!"
                }
            }
        }
    }
}
