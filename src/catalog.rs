// src/catalog.rs

use crate::domain::{Agent, Listing};
use crate::errors::ConfigError;
use serde::Deserialize;

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Read-only snapshot of every agent and listing, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    agents: Vec<Agent>,
    listings: Vec<Listing>,
}

impl Catalog {
    /// Parses a catalog document and checks that every listing points at a
    /// known agent and that ids are unique.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let catalog: Catalog = serde_json::from_str(json)
            .map_err(|e| ConfigError::Catalog(format!("parse failed: {e}")))?;

        for (i, listing) in catalog.listings.iter().enumerate() {
            if catalog.listings[..i].iter().any(|l| l.id == listing.id) {
                return Err(ConfigError::Catalog(format!(
                    "duplicate listing id {}",
                    listing.id
                )));
            }
            if catalog.agent(&listing.agent_id).is_none() {
                return Err(ConfigError::Catalog(format!(
                    "listing {} references unknown agent {}",
                    listing.id, listing.agent_id
                )));
            }
        }

        Ok(catalog)
    }

    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn listing(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn agent_for(&self, listing: &Listing) -> Option<&Agent> {
        self.agent(&listing.agent_id)
    }

    pub fn listings_by_agent<'a>(&'a self, agent_id: &'a str) -> impl Iterator<Item = &'a Listing> {
        self.listings.iter().filter(move |l| l.agent_id == agent_id)
    }

    /// First `count` verified listings, in catalog order.
    pub fn featured(&self, count: usize) -> Vec<&Listing> {
        self.listings.iter().filter(|l| l.verified).take(count).collect()
    }

    pub fn filtered_agents(&self, verified_only: bool) -> Vec<&Agent> {
        self.agents
            .iter()
            .filter(|a| !verified_only || a.verified)
            .collect()
    }
}
