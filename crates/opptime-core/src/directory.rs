//! Opportunity directory port.
//!
//! The directory maps a CRM record id to the deal it describes. Loading and
//! validating the reference data is the caller's job; the core only needs
//! [`OpportunityDirectory::lookup`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Placeholder used for company and owner when an id is not in the directory.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub record_id: String,
    pub deal_name: String,
    pub company_name: String,
    pub deal_owner: String,
}

impl Opportunity {
    /// Snapshot used when the id cannot be resolved.
    pub fn unknown(record_id: &str) -> Self {
        Self {
            record_id: record_id.to_string(),
            deal_name: record_id.to_string(),
            company_name: UNKNOWN.to_string(),
            deal_owner: UNKNOWN.to_string(),
        }
    }

    /// Label shown in pickers: `"Deal Name (Record Id)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.deal_name, self.record_id)
    }
}

pub trait OpportunityDirectory {
    fn lookup(&self, record_id: &str) -> Option<Opportunity>;
}

/// Directory held entirely in memory, insertion ordered for listing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    entries: Vec<Opportunity>,
    index: HashMap<String, usize>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by record id. Replacing keeps the original position.
    pub fn insert(&mut self, opportunity: Opportunity) {
        match self.index.get(&opportunity.record_id) {
            Some(&pos) => self.entries[pos] = opportunity,
            None => {
                self.index
                    .insert(opportunity.record_id.clone(), self.entries.len());
                self.entries.push(opportunity);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Opportunity> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Opportunity> for InMemoryDirectory {
    fn from_iter<I: IntoIterator<Item = Opportunity>>(iter: I) -> Self {
        let mut dir = Self::new();
        for opp in iter {
            dir.insert(opp);
        }
        dir
    }
}

impl OpportunityDirectory for InMemoryDirectory {
    fn lookup(&self, record_id: &str) -> Option<Opportunity> {
        self.index
            .get(record_id)
            .and_then(|&pos| self.entries.get(pos))
            .cloned()
    }
}
