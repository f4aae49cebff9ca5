use dioxus::prelude::*;

use fitflex_domain as domain;

use crate::{
    Route,
    component::element::{Color, ErrorMessage, Message, Tags},
};

/// Render the result of a list request.
#[component]
pub fn ListingView(listing: domain::ExerciseListing, title: String) -> Element {
    match listing {
        domain::ExerciseListing::Exercises(exercises) => rsx! {
            h2 {
                class: "subtitle is-5 has-text-centered",
                "{title} ({exercises.len()})"
            }
            ExerciseGrid { exercises }
        },
        domain::ExerciseListing::Empty(message) => rsx! {
            Message { color: Color::Info, "{message}" }
        },
        domain::ExerciseListing::Error(message) => rsx! {
            ErrorMessage { message }
        },
    }
}

#[component]
pub fn ExerciseGrid(exercises: Vec<domain::Exercise>) -> Element {
    rsx! {
        div {
            class: "fixed-grid has-1-cols-mobile has-3-cols-tablet has-4-cols-desktop mx-2",
            div {
                class: "grid",
                for exercise in exercises {
                    div {
                        key: "{exercise.id}",
                        class: "cell",
                        ExerciseCard { exercise: exercise.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ExerciseCard(exercise: domain::Exercise) -> Element {
    rsx! {
        Link {
            to: Route::Exercise { id: exercise.id.clone() },
            div {
                class: "card is-clickable",
                if !exercise.gif_url.is_empty() {
                    div {
                        class: "card-image",
                        figure {
                            class: "image",
                            img {
                                src: "{exercise.gif_url}",
                                alt: "{exercise.name}",
                                loading: "lazy",
                            }
                        }
                    }
                }
                div {
                    class: "card-content p-4",
                    p { class: "title is-6", "{exercise.display_name()}" }
                    Tags {
                        tags: vec![
                            exercise.body_part.clone(),
                            exercise.target.clone(),
                            exercise.equipment.clone(),
                        ],
                    }
                }
            }
        }
    }
}

#[component]
pub fn CategoryCard(category_type: domain::CategoryType, category: domain::Category) -> Element {
    rsx! {
        Link {
            to: Route::Category {
                category_type,
                category: category.name.to_lowercase(),
            },
            div {
                class: "box has-text-centered is-clickable",
                p {
                    class: "is-size-6 has-text-weight-semibold",
                    {domain::capitalize(&category.name)}
                }
            }
        }
    }
}
