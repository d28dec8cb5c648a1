use crate::auth::SessionUser;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str, user: Option<&SessionUser>) -> Markup {
    let heading = match status {
        404 => "Page not found",
        400 => "That request didn't look right",
        401 => "Please sign in",
        _ => "Something went wrong",
    };

    desktop_layout(
        &format!("Error {status}"),
        user,
        html! {
            main class="container narrow center" {
                p class="error-status" { (status) }
                h1 { (heading) }
                p class="lead" { (message) }
                p { a href="/" { "← Back to home" } " · " a href="/listings" { "Browse listings" } }
            }
        },
    )
}
