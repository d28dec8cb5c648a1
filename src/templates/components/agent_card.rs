use crate::domain::Agent;
use crate::templates::components::stat_tile;
use maud::{html, Markup};

pub fn agent_card(agent: &Agent) -> Markup {
    html! {
        a class="agent-card" href=(format!("/agent/{}", agent.id)) {
            div class="agent-card-head" {
                img class="avatar" src=(agent.avatar) alt=(agent.name);
                div {
                    h3 { (agent.name) }
                    @if agent.verified {
                        span class="badge-verified" { "✓ Verified Agent" }
                    }
                    p { "★ " (agent.rating) " " span class="muted" { "(" (agent.reviews) " reviews)" } }
                }
            }
            div class="stats-row" {
                (stat_tile("Properties", &agent.properties.to_string()))
                (stat_tile("Reviews", &agent.reviews.to_string()))
                (stat_tile("Response", &format!("{}%", agent.response_rate)))
            }
        }
    }
}
