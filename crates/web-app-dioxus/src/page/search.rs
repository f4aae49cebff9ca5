use dioxus::prelude::*;

use fitflex_domain::{self as domain, CatalogueService};

use crate::{
    DOMAIN_SERVICE,
    component::{
        element::{Color, Loading, Message, SearchBox, Tags, Title},
        exercise::{CategoryCard, ListingView},
    },
    page::current,
};

#[component]
pub fn Search() -> Element {
    let mut tab = use_signal(|| domain::CategoryType::BodyPart);

    rsx! {
        Title { title: "Awesome Exercises You Should Know" }
        NameSearch {}
        div {
            class: "tabs is-centered is-boxed mx-2",
            ul {
                for category_type in domain::CategoryType::ALL {
                    li {
                        class: if tab() == category_type { "is-active" },
                        a {
                            onclick: move |_| *tab.write() = category_type,
                            "{category_type.name()}"
                        }
                    }
                }
            }
        }
        CategoryGrid { category_type: tab() }
        Taxonomy { category_type: tab() }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Submission {
    generation: usize,
    input: String,
}

type SearchOutput = (usize, Result<domain::ExerciseListing, domain::SearchError>);

#[derive(Debug, PartialEq)]
enum SearchState<'a> {
    Idle,
    Searching,
    Done(&'a Result<domain::ExerciseListing, domain::SearchError>),
}

/// State of the name search for the latest submission.
fn search_state(submitted: Option<usize>, output: Option<&SearchOutput>) -> SearchState<'_> {
    match submitted {
        None => SearchState::Idle,
        Some(generation) => match current(&generation, output) {
            Some(result) => SearchState::Done(result),
            None => SearchState::Searching,
        },
    }
}

#[component]
fn NameSearch() -> Element {
    let mut search_term = use_signal(String::new);
    let mut submitted = use_signal(|| None::<Submission>);
    let result = use_resource(move || async move {
        let Some(submission) = submitted() else {
            return None;
        };
        let result = DOMAIN_SERVICE.read().search(&submission.input).await;
        Some((submission.generation, result))
    });
    let output = result.read();
    let state = search_state(
        submitted.read().as_ref().map(|s| s.generation),
        output.as_ref().and_then(Option::as_ref),
    );

    rsx! {
        SearchBox {
            search_term: search_term(),
            placeholder: "Search exercises by name",
            oninput: move |evt: FormEvent| search_term.set(evt.value()),
            onsubmit: move |_| {
                let generation = match &*submitted.peek() {
                    Some(submission) => submission.generation + 1,
                    None => 0,
                };
                submitted.set(Some(Submission { generation, input: search_term() }));
            },
        }
        match state {
            SearchState::Idle => rsx! {},
            SearchState::Searching => rsx! { Loading { text: "Searching..." } },
            SearchState::Done(Ok(listing)) => rsx! {
                ListingView { listing: listing.clone(), title: "Search Results" }
            },
            SearchState::Done(Err(err)) => rsx! {
                Message { color: Color::Warning, "{err}" }
            },
        }
    }
}

#[component]
fn CategoryGrid(category_type: domain::CategoryType) -> Element {
    rsx! {
        div {
            class: "fixed-grid has-2-cols-mobile has-4-cols-tablet has-5-cols-desktop mx-2",
            div {
                class: "grid",
                for category in category_type.categories() {
                    div {
                        key: "{category.id}",
                        class: "cell",
                        CategoryCard { category_type, category: category.clone() }
                    }
                }
            }
        }
    }
}

/// Categories known to the remote taxonomy service.
#[component]
fn Taxonomy(category_type: domain::CategoryType) -> Element {
    let categories = use_resource(use_reactive!(|category_type| async move {
        let categories = DOMAIN_SERVICE.read().get_taxonomy(category_type).await;
        (category_type, categories)
    }));
    let subject = match category_type {
        domain::CategoryType::BodyPart => "body parts",
        domain::CategoryType::Equipment => "equipment",
    };

    rsx! {
        div {
            class: "block mt-5",
            h2 {
                class: "subtitle is-6 has-text-centered",
                "All {subject}"
            }
            match current(&category_type, categories.read().as_ref()) {
                Some(Ok(categories)) => rsx! {
                    Tags {
                        tags: categories.iter().map(|c| domain::capitalize(&c.name)).collect::<Vec<_>>(),
                    }
                },
                Some(Err(err)) => rsx! {
                    Message { color: Color::Danger, {err.user_message(subject)} }
                },
                None => rsx! { Loading {} },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_state() {
        let listing = Ok(domain::ExerciseListing::Empty("none".to_string()));
        let output = (0, listing.clone());

        assert_eq!(search_state(None, None), SearchState::Idle);
        assert_eq!(search_state(Some(0), None), SearchState::Searching);
        assert_eq!(search_state(Some(0), Some(&output)), SearchState::Done(&listing));
        assert_eq!(search_state(Some(1), Some(&output)), SearchState::Searching);
    }

    #[test]
    fn test_search_state_with_invalid_input() {
        let output = (2, Err(domain::SearchError::Empty));

        assert_eq!(
            search_state(Some(2), Some(&output)),
            SearchState::Done(&Err(domain::SearchError::Empty))
        );
    }
}
