use dioxus::prelude::*;

use fitflex_domain::{self as domain, CatalogueService};

use crate::{
    DOMAIN_SERVICE,
    component::{
        element::{Block, Color, ErrorMessage, Icon, LoadingPage, Tags, Title},
        video::TutorialVideo,
    },
    page::{current, not_found::NotFound},
};

#[component]
pub fn Exercise(id: domain::ExerciseID) -> Element {
    let exercise = use_resource(use_reactive!(|id| async move {
        let exercise = DOMAIN_SERVICE.read().get_exercise(&id).await;
        (id, exercise)
    }));

    if id.is_empty() {
        return rsx! { NotFound { route: vec!["exercise".to_string()] } };
    }

    match current(&id, exercise.read().as_ref()) {
        Some(Ok(exercise)) => rsx! {
            ExerciseDetails { exercise: exercise.clone() }
        },
        Some(Err(err)) => rsx! {
            ErrorMessage { message: err.user_message("exercise details") }
            BackButton {}
        },
        None => rsx! { LoadingPage { text: "Loading exercise..." } },
    }
}

#[component]
fn ExerciseDetails(exercise: domain::Exercise) -> Element {
    let secondary_muscles = if exercise.secondary_muscles.is_empty() {
        "None".to_string()
    } else {
        exercise.secondary_muscles.join(", ")
    };

    rsx! {
        Title { title: exercise.display_name() }
        div {
            class: "columns is-desktop mx-0",
            div {
                class: "column",
                if !exercise.gif_url.is_empty() {
                    figure {
                        class: "image mx-auto exercise-gif",
                        img {
                            src: "{exercise.gif_url}",
                            alt: "{exercise.name}",
                        }
                    }
                }
                Tags {
                    tags: vec![
                        exercise.body_part.clone(),
                        exercise.target.clone(),
                        exercise.equipment.clone(),
                    ],
                    color: Color::Primary,
                }
            }
            div {
                class: "column",
                div {
                    class: "box",
                    h2 { class: "title is-5", "Instructions" }
                    if exercise.instructions.is_empty() {
                        p { class: "has-text-grey", "Instructions not available for this exercise." }
                    } else {
                        ol {
                            class: "ml-5",
                            for (i, step) in exercise.instructions.iter().enumerate() {
                                li { key: "{i}", class: "mb-2", "{step}" }
                            }
                        }
                    }
                }
                div {
                    class: "box",
                    h2 { class: "title is-5", "Details" }
                    table {
                        class: "table is-fullwidth",
                        tbody {
                            Detail { label: "Target Muscle", value: exercise.target.clone() }
                            Detail { label: "Equipment", value: exercise.equipment.clone() }
                            Detail { label: "Body Part", value: exercise.body_part.clone() }
                            Detail { label: "Secondary Muscles", value: secondary_muscles }
                        }
                    }
                }
            }
        }
        Block {
            TutorialVideo { name: exercise.name.clone() }
        }
        BackButton {}
    }
}

#[component]
fn Detail(label: String, value: String) -> Element {
    rsx! {
        tr {
            th { "{label}" }
            td { {domain::capitalize(&value)} }
        }
    }
}

#[component]
fn BackButton() -> Element {
    let navigator = use_navigator();

    rsx! {
        div {
            class: "has-text-centered my-4",
            button {
                class: "button",
                onclick: move |_| navigator.go_back(),
                Icon { name: "arrow-left" }
                span { "Back" }
            }
        }
    }
}

