use crate::aggregate::ContactAggregator;
use crate::domain::{identity_key, OutputContactRow, RawContactRow, INVALID_NAME};
use crate::sort::{sort_contacts, SortPolicy};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub input_rows: usize,
    pub contacts: usize,
    /// Rows whose primary contact name was missing.
    pub skipped_slots: usize,
    pub secondary_contacts: usize,
    pub invalid_names: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub rows: Vec<OutputContactRow>,
    pub report: RunReport,
}

/// Folds every contact slot of every row into one aggregator.
pub fn aggregate_rows<I>(rows: I, report: &mut RunReport) -> ContactAggregator
where
    I: IntoIterator<Item = RawContactRow>,
{
    let mut aggregator = ContactAggregator::new();
    for row in rows {
        report.input_rows += 1;
        let opportunity = row.opportunity();

        let primary = row.primary_slot();
        match identity_key(primary.name.as_deref()) {
            Some(key) => aggregator.upsert(key, primary.info, opportunity.clone()),
            None => report.skipped_slots += 1,
        }

        if let Some(secondary) = row.secondary_slot() {
            if let Some(key) = identity_key(secondary.name.as_deref()) {
                report.secondary_contacts += 1;
                aggregator.upsert(key, secondary.info, opportunity);
            }
        }
    }
    aggregator
}

/// Aggregates, finalizes and orders one batch of rows.
pub fn run_pipeline<I>(rows: I, policy: SortPolicy) -> PipelineOutput
where
    I: IntoIterator<Item = RawContactRow>,
{
    let mut report = RunReport::default();
    let aggregator = aggregate_rows(rows, &mut report);

    let mut output = aggregator.finalize();
    sort_contacts(&mut output, policy);

    report.contacts = output.len();
    report.invalid_names = output.iter().filter(|row| row.name == INVALID_NAME).count();

    PipelineOutput {
        rows: output,
        report,
    }
}
