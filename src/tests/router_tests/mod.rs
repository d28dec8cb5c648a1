mod agent_tests;
mod auth_tests;
mod dashboard_tests;
mod listing_tests;
mod property_tests;
