use crate::domain::{format_price, Agent, Listing};
use crate::templates::components::verification_badge;
use maud::{html, Markup};

pub fn property_card(listing: &Listing, agent: Option<&Agent>) -> Markup {
    html! {
        a class="property-card" href=(format!("/property/{}", listing.id)) {
            div class="property-card-image" {
                @if let Some(cover) = listing.images.first() {
                    img src=(cover) alt=(listing.title) loading="lazy";
                }
                (verification_badge(listing.verified, "Verified"))
            }
            div class="property-card-body" {
                h3 { (listing.title) }
                p class="muted" { "📍 " (listing.location) }
                p class="specs" {
                    (listing.bedrooms) " bed · " (listing.bathrooms) " bath · " (listing.property_type.label())
                }
                p class="price" {
                    strong { (format_price(listing.price)) }
                    span class="muted" { (listing.billing_period.suffix()) }
                }
                @if let Some(agent) = agent {
                    p class="agent-line" {
                        (agent.name)
                        @if agent.verified {
                            " · " span class="text-verified" { "Verified Agent" }
                        }
                    }
                }
            }
        }
    }
}
