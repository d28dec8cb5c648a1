pub mod agent_profile;
pub mod agents;
pub mod auth;
pub mod confirmation;
pub mod dashboard;
pub mod error;
pub mod how_it_works;
pub mod landing;
pub mod listings;
pub mod property;

pub use agent_profile::agent_profile_page;
pub use agents::agents_page;
pub use auth::{auth_page, AuthMode, AuthVm};
pub use confirmation::{booking_confirmation_page, draft_confirmation_page};
pub use dashboard::{dashboard_page, DashboardVm};
pub use error::error_page;
pub use how_it_works::how_it_works_page;
pub use landing::landing_page;
pub use listings::listings_page;
pub use property::property_page;
