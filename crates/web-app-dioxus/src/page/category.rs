use dioxus::prelude::*;

use fitflex_domain::{self as domain, CatalogueService};

use crate::{
    DOMAIN_SERVICE,
    component::{
        element::{LoadingPage, Title},
        exercise::ListingView,
    },
    page::current,
};

#[component]
pub fn Category(category_type: domain::CategoryType, category: String) -> Element {
    let title = domain::capitalize(&category);
    let key = (category_type, category.clone());
    let listing = use_resource(use_reactive!(|(category_type, category)| async move {
        let listing = DOMAIN_SERVICE
            .read()
            .list_category(category_type, &category)
            .await;
        ((category_type, category), listing)
    }));

    rsx! {
        Title { title: "{title} Exercises", subtitle: "{category_type.name()}" }
        match current(&key, listing.read().as_ref()) {
            Some(listing) => rsx! {
                ListingView { listing: listing.clone(), title: "Exercises" }
            },
            None => rsx! { LoadingPage { text: "Loading exercises..." } },
        }
    }
}
