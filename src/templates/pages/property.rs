// templates/pages/property.rs

use crate::auth::SessionUser;
use crate::domain::{format_price, Agent, Listing};
use crate::templates::{components::verification_badge, desktop_layout};
use maud::{html, Markup};

pub fn property_page(
    listing: &Listing,
    agent: Option<&Agent>,
    image: usize,
    user: Option<&SessionUser>,
) -> Markup {
    let base = format!("/property/{}", listing.id);
    let count = listing.images.len();

    desktop_layout(
        &listing.title,
        user,
        html! {
            main class="container" {
                a href="/listings" class="back-link" { "← Back to listings" }

                div class="detail-grid" {
                    div class="detail-main" {
                        div class="gallery" {
                            @if let Some(src) = listing.images.get(image) {
                                img src=(src) alt=(listing.title);
                            }
                            @if count > 1 {
                                a class="gallery-prev" href=(format!("{base}?image={}", (image + count - 1) % count)) { "‹" }
                                a class="gallery-next" href=(format!("{base}?image={}", (image + 1) % count)) { "›" }
                            }
                            div class="gallery-badge" {
                                (verification_badge(listing.verified, "Verified Property"))
                            }
                        }

                        @if count > 1 {
                            div class="thumbnails" {
                                @for (i, src) in listing.images.iter().enumerate() {
                                    a href=(format!("{base}?image={i}")) class=[(i == image).then_some("active")] {
                                        img src=(src) alt="";
                                    }
                                }
                            }
                        }

                        div class="detail-head" {
                            div {
                                h1 { (listing.title) }
                                p class="muted" { "📍 " (listing.location) }
                            }
                            div class="detail-price" {
                                strong { (format_price(listing.price)) }
                                span class="muted" { (listing.billing_period.suffix()) }
                            }
                        }

                        div class="quick-stats" {
                            span { (listing.bedrooms) " Bedrooms" }
                            span { (listing.bathrooms) " Bathrooms" }
                            @if let Some(date) = listing.available_from {
                                span { "Available " (date.format("%Y-%m-%d").to_string()) }
                            }
                        }

                        section {
                            h2 { "About this property" }
                            p { (listing.description) }
                        }

                        @if !listing.amenities.is_empty() {
                            section {
                                h2 { "Amenities" }
                                div class="chips" {
                                    @for amenity in &listing.amenities {
                                        span class="chip" { (amenity) }
                                    }
                                }
                            }
                        }
                    }

                    aside class="detail-side" {
                        (booking_card(listing))
                        @if let Some(agent) = agent {
                            (listed_by(agent))
                        }
                    }
                }
            }
        },
    )
}

fn booking_card(listing: &Listing) -> Markup {
    html! {
        div class="card" {
            p class="escrow-note" { "🛡 Escrow Protected Booking" }
            p class="detail-price" {
                strong { (format_price(listing.price)) }
                span class="muted" { (listing.billing_period.suffix()) }
            }

            details {
                summary class="btn" { "🔒 Reserve with Escrow" }
                form method="post" action=(format!("/property/{}/book", listing.id)) class="stack" {
                    h3 { "Book This Property" }
                    input name="name" placeholder="Your full name" required;
                    input type="email" name="email" placeholder="Email address" required;
                    input type="tel" name="phone" placeholder="Phone number" required;
                    label {
                        "Preferred move-in date"
                        input type="date" name="move_in" required;
                    }
                    textarea name="message" placeholder="Any message for the agent?" {}
                    p class="muted" { "Your payment will be held in escrow until you confirm move-in" }
                    button type="submit" class="btn" { "Submit Booking Request" }
                }
            }
            p class="muted center" { "You won't be charged yet" }
        }
    }
}

fn listed_by(agent: &Agent) -> Markup {
    html! {
        div class="card" {
            h3 { "Listed by" }
            a href=(format!("/agent/{}", agent.id)) class="agent-link" {
                img class="avatar" src=(agent.avatar) alt=(agent.name);
                div {
                    p { strong { (agent.name) } }
                    @if agent.verified {
                        p class="text-verified" { "Verified Agent" }
                    }
                }
            }
            p { "★ " strong { (agent.rating) } span class="muted" { " (" (agent.reviews) " reviews)" } }
            a class="contact" href=(format!("tel:{}", agent.phone)) { "📞 " (agent.phone) }
            a class="contact" href=(format!("mailto:{}", agent.email)) { "✉ " (agent.email) }
        }
    }
}
