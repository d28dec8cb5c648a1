use crate::auth::SessionUser;
use crate::domain::{Agent, Listing};
use crate::templates::{
    components::{property_card, stat_tile},
    desktop_layout,
};
use maud::{html, Markup};

pub fn agent_profile_page(agent: &Agent, listings: &[&Listing], user: Option<&SessionUser>) -> Markup {
    desktop_layout(
        &agent.name,
        user,
        html! {
            main class="container" {
                a href="/agents" class="back-link" { "← Back to agents" }

                div class="detail-grid" {
                    aside class="card profile" {
                        img class="avatar avatar-lg" src=(agent.avatar) alt=(agent.name);
                        h1 { (agent.name) }
                        @if agent.verified {
                            span class="badge-verified" { "✓ Verified Agent" }
                        }
                        p class="rating" {
                            "★ " strong { (agent.rating) } span class="muted" { " (" (agent.reviews) " reviews)" }
                        }
                        div class="stats-row" {
                            (stat_tile("Listings", &agent.properties.to_string()))
                            (stat_tile("Response", &format!("{}%", agent.response_rate)))
                            (stat_tile("Member", &agent.member_since.to_string()))
                        }
                        a class="btn" href=(format!("tel:{}", agent.phone)) { "Call Agent" }
                        a class="btn btn-outline" href=(format!("mailto:{}", agent.email)) { "Send Email" }
                        div class="contact-info" {
                            p { "📞 " (agent.phone) }
                            p { "✉ " (agent.email) }
                        }
                    }

                    div class="detail-main" {
                        section {
                            h2 { "About " (agent.name) }
                            p {
                                (agent.name) " is a "
                                @if agent.verified { "verified " }
                                "real estate agent with " (agent.properties) " active listings in Lagos. "
                                "They have been a member of RentProof since " (agent.member_since)
                                " and maintain a " (agent.response_rate) "% response rate to inquiries."
                            }
                        }

                        section {
                            h2 { "Listings by " (agent.name) " (" (listings.len()) ")" }
                            @if listings.is_empty() {
                                p class="muted" { "No listings available at the moment" }
                            } @else {
                                div class="grid-2" {
                                    @for listing in listings {
                                        (property_card(listing, Some(agent)))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
