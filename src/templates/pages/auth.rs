use crate::auth::{SessionUser, UserKind};
use crate::templates::desktop_layout;
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

pub struct AuthVm<'a> {
    pub mode: AuthMode,
    pub kind: UserKind,
    /// Validation message from a rejected submission.
    pub error: Option<&'a str>,
}

pub fn auth_page(vm: &AuthVm, user: Option<&SessionUser>) -> Markup {
    let signup_href = match vm.kind {
        UserKind::Agent => "/auth?mode=signup&type=agent",
        UserKind::Tenant => "/auth?mode=signup",
    };

    desktop_layout(
        if vm.mode == AuthMode::Signup { "Sign Up" } else { "Log In" },
        user,
        html! {
            main class="container narrow" {
                nav class="tabs" {
                    a href="/auth" class=[(vm.mode == AuthMode::Login).then_some("active")] { "Log In" }
                    a href=(signup_href) class=[(vm.mode == AuthMode::Signup).then_some("active")] { "Sign Up" }
                }

                @if let Some(error) = vm.error {
                    p class="form-error" role="alert" { (error) }
                }

                @match vm.mode {
                    AuthMode::Login => { (login_form()) }
                    AuthMode::Signup => { (signup_form(vm.kind)) }
                }
            }
        },
    )
}

fn login_form() -> Markup {
    html! {
        form method="post" action="/auth/login" class="stack" {
            label for="login-email" { "Email" }
            input type="email" id="login-email" name="email" placeholder="Enter your email" required;

            label for="login-password" { "Password" }
            input type="password" id="login-password" name="password" placeholder="Enter your password" required;

            button type="submit" class="btn" { "Log In" }
        }
    }
}

fn signup_form(kind: UserKind) -> Markup {
    html! {
        form method="post" action="/auth/signup" class="stack" {
            fieldset class="user-type" {
                legend { "I am a" }
                label {
                    input type="radio" name="type" value="tenant" checked[kind == UserKind::Tenant];
                    strong { "Tenant" } span class="muted" { " Looking to rent" }
                }
                label {
                    input type="radio" name="type" value="agent" checked[kind == UserKind::Agent];
                    strong { "Agent" } span class="muted" { " List properties" }
                }
            }

            label for="signup-name" { "Full Name" }
            input type="text" id="signup-name" name="name" placeholder="Enter your full name" required;

            label for="signup-email" { "Email" }
            input type="email" id="signup-email" name="email" placeholder="Enter your email" required;

            label for="signup-phone" { "Phone Number" }
            input type="tel" id="signup-phone" name="phone" placeholder="+234 800 000 0000" required;

            label for="signup-password" { "Password" }
            input type="password" id="signup-password" name="password" placeholder="Create a password" required;

            label for="signup-confirm" { "Confirm Password" }
            input type="password" id="signup-confirm" name="confirm_password" placeholder="Confirm your password" required;

            @if kind == UserKind::Agent {
                p class="muted note" {
                    "Agent accounts require verification. You'll be able to list properties after our team verifies your credentials."
                }
            }

            button type="submit" class="btn" { "Create Account" }

            p class="muted center small" {
                "By signing up, you agree to our Terms of Service and Privacy Policy"
            }
        }
    }
}
