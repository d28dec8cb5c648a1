pub mod agent;
pub mod filter;
pub mod format;
pub mod listing;
pub mod submission;

pub use agent::Agent;
pub use filter::{evaluate, FilterSpec, PriceBand};
pub use format::format_price;
pub use listing::{Area, BillingPeriod, Listing, PropertyType};
