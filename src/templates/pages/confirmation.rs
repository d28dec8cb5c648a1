use crate::auth::SessionUser;
use crate::domain::submission::{BookingRequest, ListingDraft};
use crate::domain::{format_price, Listing};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn booking_confirmation_page(
    listing: &Listing,
    booking: &BookingRequest,
    reference: &str,
    user: Option<&SessionUser>,
) -> Markup {
    desktop_layout(
        "Booking request submitted",
        user,
        html! {
            main class="container narrow" {
                h1 { "Booking request submitted!" }
                p class="lead" {
                    "The agent will contact you within 24 hours. Your payment will be held in escrow."
                }
                div class="card" {
                    p { "Reference: " strong { (reference) } }
                    p { "Property: " a href=(format!("/property/{}", listing.id)) { (listing.title) } }
                    p { "Move-in: " (booking.move_in.format("%Y-%m-%d").to_string()) }
                    p { "We'll reach you at " (booking.email) " or " (booking.phone) "." }
                }
                a href="/listings" { "← Back to listings" }
            }
        },
    )
}

pub fn draft_confirmation_page(draft: &ListingDraft, reference: &str, user: Option<&SessionUser>) -> Markup {
    desktop_layout(
        "Property submitted",
        user,
        html! {
            main class="container narrow" {
                h1 { "Property submitted for verification!" }
                p class="lead" {
                    "Our team will review and verify your listing within 24-48 hours."
                }
                div class="card" {
                    p { "Reference: " strong { (reference) } }
                    p { strong { (draft.title) } }
                    p class="muted" { (draft.location) " · " (draft.area.label()) }
                    p {
                        (format_price(draft.price)) (draft.billing_period.suffix())
                        " · " (draft.property_type.label()) " · " (draft.bedrooms) " bed"
                    }
                }
                a href="/dashboard" { "← Back to dashboard" }
            }
        },
    )
}
