use crate::auth::SessionUser;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, user: Option<&SessionUser>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | RentProof" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                (navbar(user))
                (content)
                (footer())
            }
        }
    }
}

fn navbar(user: Option<&SessionUser>) -> Markup {
    html! {
        header class="navbar" {
            a href="/" class="brand" {
                svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="#524ed2"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                {
                    path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                    path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                    path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                    path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                }
                span { "RentProof" }
            }
            nav {
                ul {
                    li { a href="/listings" { "Browse Properties" } }
                    li { a href="/agents" { "Find Agents" } }
                    li { a href="/how-it-works" { "How It Works" } }
                }
            }
            div class="nav-actions" {
                @match user {
                    Some(user) => {
                        @if user.is_agent() {
                            a href="/dashboard" class="btn btn-outline" { "Dashboard" }
                        }
                        span class="nav-user" { (user.display_name()) }
                        form method="post" action="/auth/logout" class="inline" {
                            button type="submit" class="btn btn-ghost" { "Log Out" }
                        }
                    }
                    None => {
                        a href="/auth" class="btn btn-ghost" { "Log In" }
                        a href="/auth?mode=signup" class="btn" { "Get Started" }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="footer" {
            div class="footer-grid" {
                div {
                    strong { "RentProof" }
                    p { "Verified rentals and trusted agents in Lagos. Every payment protected by escrow." }
                }
                div {
                    h4 { "Quick Links" }
                    ul {
                        li { a href="/listings" { "Browse Properties" } }
                        li { a href="/agents" { "Find Agents" } }
                        li { a href="/auth?mode=signup&type=agent" { "List Your Property" } }
                    }
                }
                div {
                    h4 { "Support" }
                    ul {
                        li { a href="/how-it-works" { "How It Works" } }
                    }
                }
                div {
                    h4 { "Contact Us" }
                    p { "support@rentproof.ng" }
                    p { "Lagos, Nigeria" }
                }
            }
        }
    }
}
