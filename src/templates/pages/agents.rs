use crate::auth::SessionUser;
use crate::domain::Agent;
use crate::templates::{components::agent_card, desktop_layout};
use maud::{html, Markup};

pub fn agents_page(agents: &[&Agent], verified_only: bool, user: Option<&SessionUser>) -> Markup {
    // The toggle links to the opposite state.
    let toggle_href = if verified_only { "/agents" } else { "/agents?verified=true" };

    desktop_layout(
        "Agents",
        user,
        html! {
            main class="container" {
                h1 { "Verified Agents" }
                p class="lead" { "Connect with trusted, verified real estate agents in Lagos" }

                a href=(toggle_href) class=(if verified_only { "btn btn-verified" } else { "btn btn-outline" }) {
                    "✓ Verified Only"
                }

                p class="results-count" {
                    "Showing " strong { (agents.len()) } " agents"
                }

                div class="grid-3" {
                    @for agent in agents {
                        (agent_card(agent))
                    }
                }
            }
        },
    )
}
