use crate::domain::{
    clean_name, ContactInfo, ContactRecord, IdentityKey, OpportunityInfo, OutputContactRow,
};
use std::collections::HashMap;

const JOIN_SEPARATOR: &str = ", ";

/// Identity-keyed contact map owned by a single run.
///
/// Records keep first-sighting order, which is the order the pass-through
/// sort policy emits.
#[derive(Debug, Default)]
pub struct ContactAggregator {
    records: Vec<ContactRecord>,
    index: HashMap<IdentityKey, usize>,
}

impl ContactAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, key: IdentityKey, contact: ContactInfo, opportunity: OpportunityInfo) {
        if let Some(&position) = self.index.get(&key) {
            self.records[position].absorb(contact, &opportunity);
            return;
        }

        self.index.insert(key.clone(), self.records.len());
        self.records.push(ContactRecord::new(key, contact, &opportunity));
    }

    /// Cleans each identity key into a display name, applies any phone number
    /// recovered from the name field to that same record, and joins the
    /// accumulated sets.
    pub fn finalize(self) -> Vec<OutputContactRow> {
        self.records.into_iter().map(finalize_record).collect()
    }
}

#[cfg(test)]
impl ContactAggregator {
    fn get(&self, key: &IdentityKey) -> Option<&ContactRecord> {
        self.index.get(key).map(|&position| &self.records[position])
    }
}

fn finalize_record(record: ContactRecord) -> OutputContactRow {
    let cleaned = clean_name(record.key.as_str());
    let ContactInfo {
        email,
        phone,
        state,
        city,
        agency,
    } = record.contact;

    OutputContactRow {
        name: cleaned.display_name,
        email,
        phone: cleaned.extracted_phone.or(phone),
        state,
        city,
        agency,
        opportunity_count: record.opportunity_count,
        associated_departments: record.associated_departments.join(JOIN_SEPARATOR),
        contract_types: record.contract_types.join(JOIN_SEPARATOR),
    }
}
