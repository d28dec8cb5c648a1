use crate::auth::SessionUser;
use crate::catalog::Catalog;
use crate::domain::{FilterSpec, Listing};
use crate::templates::{
    components::{property_card, search_filters},
    desktop_layout,
};
use maud::{html, Markup};

pub fn listings_page(
    catalog: &Catalog,
    spec: &FilterSpec,
    results: &[&Listing],
    user: Option<&SessionUser>,
) -> Markup {
    desktop_layout(
        "Listings",
        user,
        html! {
            main class="container" {
                h1 { "Find Your Perfect Rental" }
                p class="lead" { "Browse verified properties across Lagos" }

                (search_filters(spec))

                p class="results-count" {
                    "Showing " strong { (results.len()) } " properties"
                }

                @if results.is_empty() {
                    div class="empty-state" {
                        h3 { "No properties found" }
                        p class="muted" { "Try adjusting your search filters to find more properties" }
                    }
                } @else {
                    div class="grid-3" {
                        @for listing in results {
                            (property_card(listing, catalog.agent_for(listing)))
                        }
                    }
                }
            }
        },
    )
}
