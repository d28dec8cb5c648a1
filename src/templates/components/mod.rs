use maud::{html, Markup};

pub mod agent_card;
pub mod property_card;
pub mod search_filters;

pub use agent_card::agent_card;
pub use property_card::property_card;
pub use search_filters::search_filters;

pub fn button_link(label: &str, href: &str) -> Markup {
    html! {
        a class="btn" href=(href) { (label) }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Green badge when verified, amber "pending" badge otherwise.
pub fn verification_badge(verified: bool, verified_label: &str) -> Markup {
    html! {
        @if verified {
            span class="badge-verified" { "✓ " (verified_label) }
        } @else {
            span class="badge-pending" { "Pending Verification" }
        }
    }
}

/// Label/value tile used by the dashboard and profile stats.
pub fn stat_tile(label: &str, value: &str) -> Markup {
    html! {
        div class="stat" {
            p class="stat-value" { (value) }
            p class="stat-label" { (label) }
        }
    }
}
