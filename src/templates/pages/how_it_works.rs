use crate::auth::SessionUser;
use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

const STEPS: [(&str, &str); 4] = [
    (
        "Search Verified Listings",
        "Browse our curated selection of verified properties. Every listing has been physically inspected and the photos are guaranteed to be accurate.",
    ),
    (
        "Connect with Verified Agents",
        "All agents on RentProof undergo thorough background checks. View their ratings, reviews, and response rates before reaching out.",
    ),
    (
        "Book with Escrow Protection",
        "When you are ready, reserve the property through our secure escrow system. Your money is protected until you confirm everything is as promised.",
    ),
    (
        "Move In with Confidence",
        "Inspect the property, confirm it matches the listing, and release the payment. If there are any issues, our support team is here to help.",
    ),
];

const FEATURES: [(&str, &str); 4] = [
    (
        "Physical Verification",
        "Our team visits every property before it goes live. What you see is what you get.",
    ),
    (
        "Agent Background Checks",
        "Every agent is verified with ID, references, and professional credentials.",
    ),
    (
        "Escrow Protection",
        "Your payment is held securely until you confirm the property meets expectations.",
    ),
    (
        "Dispute Resolution",
        "Our dedicated support team helps resolve any issues quickly and fairly.",
    ),
];

pub fn how_it_works_page(user: Option<&SessionUser>) -> Markup {
    desktop_layout(
        "How It Works",
        user,
        html! {
            main class="container" {
                h1 { "How RentProof Works" }
                p class="lead" {
                    "We have reimagined the rental experience in Lagos. Here is how we keep you safe at every step."
                }

                ol class="steps" {
                    @for (i, (title, description)) in STEPS.iter().enumerate() {
                        li class="step" {
                            span class="step-number" { (format!("{:02}", i + 1)) }
                            h2 { (title) }
                            p { (description) }
                        }
                    }
                }

                h2 { "Built-in Protection" }
                div class="grid-2" {
                    @for (title, description) in FEATURES {
                        (card(title, html! { p { (description) } }))
                    }
                }

                div class="cta" {
                    a class="btn" href="/listings" { "Browse Properties" }
                    a class="btn btn-outline" href="/auth?mode=signup&type=agent" { "Become an Agent" }
                }
            }
        },
    )
}
