// templates/pages/landing.rs

use crate::auth::SessionUser;
use crate::catalog::Catalog;
use crate::domain::Listing;
use crate::templates::{
    components::{button_link, property_card},
    desktop_layout,
};
use maud::{html, Markup};

pub fn landing_page(catalog: &Catalog, featured: &[&Listing], user: Option<&SessionUser>) -> Markup {
    desktop_layout(
        "Rent with Confidence",
        user,
        html! {
            section class="hero" {
                span class="pill" { "#1 Verified Rental Platform" }
                h1 { "Rent with " em { "Confidence" } }
                p class="lead" {
                    "Find verified properties and trusted agents in Lagos. Every listing is verified, "
                    "every payment is protected. Say goodbye to rental scams."
                }
                form class="hero-search" method="get" action="/listings" {
                    input type="search" name="q" placeholder="Search by location, property type...";
                    button type="submit" class="btn" { "Search" }
                }
                div class="hero-actions" {
                    (button_link("Browse Properties", "/listings"))
                    a class="btn btn-outline" href="/auth?mode=signup&type=agent" { "List Your Property" }
                }
            }

            section class="trust" {
                div class="stats-row" {
                    div { strong { (catalog.listings().len()) } " listed properties" }
                    div { strong { (catalog.listings().iter().filter(|l| l.verified).count()) } " verified" }
                    div { strong { (catalog.agents().len()) } " agents" }
                    div { strong { "100%" } " escrow protected" }
                }
            }

            section class="how" {
                h2 { "How RentProof Works" }
                p class="muted" { "We've simplified the rental process to protect you at every step" }
                div class="grid-3" {
                    div class="card" {
                        h3 { "Search Verified Listings" }
                        p { "Browse verified listings with real photos, accurate descriptions, and transparent pricing" }
                    }
                    div class="card" {
                        h3 { "Connect with Trusted Agents" }
                        p { "Every agent is verified. View their reputation scores and connect with confidence" }
                    }
                    div class="card" {
                        h3 { "Pay with Escrow" }
                        p { "Your payment is held in escrow until you confirm move-in. Full protection, zero risk" }
                    }
                }
            }

            section class="featured" {
                div class="section-head" {
                    div {
                        h2 { "Featured Verified Properties" }
                        p class="muted" { "Hand-picked listings verified by our team" }
                    }
                    a href="/listings" { "View All →" }
                }
                div class="grid-3" {
                    @for listing in featured {
                        (property_card(listing, catalog.agent_for(listing)))
                    }
                }
            }

            section class="why" {
                h2 { "Why Lagos Renters Trust RentProof" }
                ul class="checklist" {
                    li { strong { "Verified Properties. " } "Our team physically inspects every property before listing" }
                    li { strong { "Trusted Agents. " } "All agents undergo identity verification and reference checks" }
                    li { strong { "Escrow Payments. " } "Your money is protected until you confirm everything is as promised" }
                    li { strong { "24/7 Support. " } "Dedicated support team to help resolve any issues" }
                }
            }
        },
    )
}
