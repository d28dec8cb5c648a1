use crate::auth::SessionUser;
use crate::domain::submission::MAX_DRAFT_PRICE;
use crate::domain::{format::group_thousands, Agent, Area, BillingPeriod, Listing, PropertyType};
use crate::templates::{
    components::{stat_tile, verification_badge},
    desktop_layout,
};
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub agent: &'a Agent,
    pub listings: Vec<&'a Listing>,
    /// Message from a rejected add-property submission.
    pub form_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_listings: usize,
    pub total_views: u64,
    pub inquiries: u64,
    pub pending_verification: usize,
}

impl DashboardVm<'_> {
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            active_listings: self.listings.iter().filter(|l| l.verified).count(),
            total_views: self.listings.iter().map(|l| l.views).sum(),
            inquiries: self.listings.iter().map(|l| l.inquiries).sum(),
            pending_verification: self.listings.iter().filter(|l| !l.verified).count(),
        }
    }
}

pub fn dashboard_page(vm: &DashboardVm, user: Option<&SessionUser>) -> Markup {
    let stats = vm.stats();

    desktop_layout(
        "Dashboard",
        user,
        html! {
            main class="container" {
                div class="section-head" {
                    div {
                        h1 { "Agent Dashboard" }
                        p class="muted" { "Manage your properties and view performance" }
                    }
                }

                div class="stats-row" {
                    (stat_tile("Active Listings", &stats.active_listings.to_string()))
                    (stat_tile("Total Views", &group_thousands(stats.total_views)))
                    (stat_tile("Inquiries", &group_thousands(stats.inquiries)))
                    (stat_tile("Pending Verification", &stats.pending_verification.to_string()))
                }

                (add_property_card(vm.form_error.as_deref()))

                section class="card" {
                    div class="section-head" {
                        h3 { "My Listings" }
                        a href="/listings" { "View All" }
                    }
                    @if vm.listings.is_empty() {
                        p class="muted" { "You have no listings yet." }
                    }
                    @for listing in &vm.listings {
                        div class="listing-row" {
                            div {
                                h4 { (listing.title) " " (verification_badge(listing.verified, "Verified")) }
                                p class="muted" {
                                    (group_thousands(listing.views)) " views · "
                                    (group_thousands(listing.inquiries)) " inquiries"
                                }
                            }
                            a class="btn btn-outline" href=(format!("/property/{}", listing.id)) { "View" }
                        }
                    }
                }

                div class="grid-3" {
                    div class="card" {
                        h3 { "Edit Profile" }
                        p class="muted" { "Update your information" }
                        a href=(format!("/agent/{}", vm.agent.id)) { "View public profile" }
                    }
                    div class="card" {
                        h3 { "Verification Status" }
                        @if vm.agent.verified {
                            p class="text-verified" { "Verified Agent" }
                        } @else {
                            p class="text-pending" { "Verification pending" }
                        }
                    }
                    div class="card" {
                        h3 { "Settings" }
                        p class="muted" { "Manage preferences" }
                    }
                }
            }
        },
    )
}

fn add_property_card(error: Option<&str>) -> Markup {
    html! {
        details class="card" id="add-property" open[error.is_some()] {
            summary class="btn" { "+ Add Property" }

            @if let Some(error) = error {
                p class="form-error" role="alert" { (error) }
            }

            form method="post" action="/dashboard/listings" class="stack" {
                h3 { "Add New Property" }

                label { "Property Title"
                    input name="title" placeholder="e.g., Modern 3-Bedroom Apartment in Lekki" required;
                }
                label { "Property Type"
                    select name="type" {
                        @for t in PropertyType::ALL {
                            option value=(t.tag()) { (t.label()) }
                        }
                    }
                }
                label { "Area"
                    select name="area" required {
                        option value="" disabled selected { "Select area" }
                        @for area in Area::ALL {
                            option value=(area.label()) { (area.label()) }
                        }
                    }
                }
                label { "Full Address"
                    input name="location" placeholder="Full property address" required;
                }
                label { "Price (₦)"
                    input type="number" name="price" min="1" max=(MAX_DRAFT_PRICE) placeholder="0" required;
                }
                label { "Price Type"
                    select name="period" {
                        @for period in BillingPeriod::ALL {
                            option value=(period.tag()) { (period.label()) }
                        }
                    }
                }
                label { "Bedrooms"
                    input type="number" name="bedrooms" min="0" placeholder="0" required;
                }
                label { "Description"
                    textarea name="description" rows="4" placeholder="Describe your property..." required {}
                }
                label { "Amenities (comma separated)"
                    input name="amenities" placeholder="e.g., 24/7 Power, Swimming Pool, Gym";
                }

                p class="muted note" {
                    "Your property will be reviewed and verified within 24-48 hours before appearing in listings."
                }
                button type="submit" class="btn" { "Submit for Verification" }
            }
        }
    }
}
