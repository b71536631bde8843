use crate::domain::identity::IdentityKey;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One input line. Every field is optional; absent columns and missing-value
/// tokens are both `None` by the time a row reaches the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContactRow {
    pub sub_tier: Option<String>,
    pub title: Option<String>,
    pub primary_contact_full_name: Option<String>,
    pub primary_contact_email: Option<String>,
    pub primary_contact_phone: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub agency: Option<String>,
    pub secondary_contact_full_name: Option<String>,
    pub secondary_contact_email: Option<String>,
    pub secondary_contact_phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub agency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpportunityInfo {
    pub department: Option<String>,
    pub title: Option<String>,
}

/// A primary or secondary contact field-set taken from one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSlot {
    pub name: Option<String>,
    pub info: ContactInfo,
}

impl RawContactRow {
    pub fn opportunity(&self) -> OpportunityInfo {
        OpportunityInfo {
            department: self.sub_tier.clone(),
            title: self.title.clone(),
        }
    }

    pub fn primary_slot(&self) -> ContactSlot {
        ContactSlot {
            name: self.primary_contact_full_name.clone(),
            info: self.slot_info(&self.primary_contact_email, &self.primary_contact_phone),
        }
    }

    /// The secondary slot only exists when the row names a secondary contact.
    pub fn secondary_slot(&self) -> Option<ContactSlot> {
        let name = self.secondary_contact_full_name.as_ref()?;
        Some(ContactSlot {
            name: Some(name.clone()),
            info: self.slot_info(&self.secondary_contact_email, &self.secondary_contact_phone),
        })
    }

    fn slot_info(&self, email: &Option<String>, phone: &Option<String>) -> ContactInfo {
        ContactInfo {
            email: email.clone(),
            phone: phone.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
            agency: self.agency.clone(),
        }
    }
}

/// Set of strings that remembers first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl ValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the value was already present.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_string());
        self.items.push(value.to_string());
        true
    }

    pub fn join(&self, separator: &str) -> String {
        self.items.join(separator)
    }
}

#[cfg(test)]
impl ValueSet {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub key: IdentityKey,
    pub contact: ContactInfo,
    pub opportunity_count: u32,
    pub associated_departments: ValueSet,
    pub contract_types: ValueSet,
}

impl ContactRecord {
    pub fn new(key: IdentityKey, contact: ContactInfo, opportunity: &OpportunityInfo) -> Self {
        let mut record = Self {
            key,
            contact,
            opportunity_count: 1,
            associated_departments: ValueSet::new(),
            contract_types: ValueSet::new(),
        };
        record.add_opportunity(opportunity);
        record
    }

    /// Last writer wins for contact details; opportunities accumulate.
    pub fn absorb(&mut self, contact: ContactInfo, opportunity: &OpportunityInfo) {
        self.contact = contact;
        self.opportunity_count += 1;
        self.add_opportunity(opportunity);
    }

    fn add_opportunity(&mut self, opportunity: &OpportunityInfo) {
        if let Some(department) = opportunity.department.as_deref() {
            self.associated_departments.insert(department);
        }
        if let Some(title) = opportunity.title.as_deref() {
            self.contract_types.insert(title);
        }
    }
}

/// Finalized output line. Field names double as the output column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputContactRow {
    pub name: String,
    pub email: Option<String>,
    #[serde(rename = "phone number")]
    pub phone: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub agency: Option<String>,
    pub opportunity_count: u32,
    pub associated_departments: String,
    pub contract_types: String,
}
