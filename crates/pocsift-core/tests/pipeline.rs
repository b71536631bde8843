use pocsift_core::{run_pipeline, RawContactRow, SortPolicy, INVALID_NAME};

fn row(name: &str, department: &str, title: &str) -> RawContactRow {
    RawContactRow {
        sub_tier: Some(department.to_string()),
        title: Some(title.to_string()),
        primary_contact_full_name: Some(name.to_string()),
        primary_contact_email: Some(format!("{}@example.gov", name.replace(' ', "."))),
        primary_contact_phone: Some("555-0000".to_string()),
        state: Some("VA".to_string()),
        city: Some("Norfolk".to_string()),
        agency: Some("Department of the Navy".to_string()),
        ..RawContactRow::default()
    }
}

fn with_secondary(mut base: RawContactRow, name: &str) -> RawContactRow {
    base.secondary_contact_full_name = Some(name.to_string());
    base.secondary_contact_email = Some("second@example.gov".to_string());
    base.secondary_contact_phone = Some("555-9999".to_string());
    base
}

#[test]
fn same_person_in_different_casing_collapses_to_one_row() {
    let rows = vec![
        row("jane smith", "Logistics", "Widget Supply"),
        row("Jane Smith", "Logistics", "Gadget Supply"),
    ];

    let output = run_pipeline(rows, SortPolicy::Name);
    assert_eq!(output.rows.len(), 1);

    let contact = &output.rows[0];
    assert_eq!(contact.name, "Jane Smith");
    assert_eq!(contact.opportunity_count, 2);
    assert_eq!(contact.associated_departments, "Logistics");
    assert_eq!(contact.contract_types, "Widget Supply, Gadget Supply");
}

#[test]
fn padded_name_is_a_distinct_identity() {
    let rows = vec![
        row("jane smith", "Logistics", "Widget Supply"),
        row(" jane smith ", "Logistics", "Gadget Supply"),
    ];

    let output = run_pipeline(rows, SortPolicy::Unsorted);
    let counts: Vec<(&str, u32)> = output
        .rows
        .iter()
        .map(|row| (row.name.as_str(), row.opportunity_count))
        .collect();
    assert_eq!(counts, vec![("Jane Smith", 1), ("Jane Smith", 1)]);
    assert_eq!(output.rows[1].contract_types, "Gadget Supply");
}

#[test]
fn departments_are_deduplicated() {
    let rows = vec![
        row("ada", "DeptA", "One"),
        row("ada", "DeptA", "Two"),
        row("ada", "DeptB", "Three"),
    ];

    let output = run_pipeline(rows, SortPolicy::Unsorted);
    assert_eq!(output.rows[0].associated_departments, "DeptA, DeptB");
}

#[test]
fn counts_include_primary_and_secondary_slots() {
    let rows = vec![
        row("ada", "DeptA", "One"),
        with_secondary(row("bo", "DeptA", "Two"), "ada"),
        with_secondary(row("ada", "DeptB", "One"), "bo"),
    ];

    let output = run_pipeline(rows, SortPolicy::Name);
    let counts: Vec<(&str, u32)> = output
        .rows
        .iter()
        .map(|row| (row.name.as_str(), row.opportunity_count))
        .collect();
    assert_eq!(counts, vec![("Ada", 3), ("Bo", 2)]);
    assert_eq!(output.report.input_rows, 3);
    assert_eq!(output.report.secondary_contacts, 2);
}

#[test]
fn repeated_titles_still_count_twice() {
    let rows = vec![row("ada", "DeptA", "One"), row("ada", "DeptA", "One")];
    let output = run_pipeline(rows, SortPolicy::Name);
    assert_eq!(output.rows[0].opportunity_count, 2);
    assert_eq!(output.rows[0].contract_types, "One");
}

#[test]
fn rows_without_a_name_contribute_nothing() {
    let mut nameless = row("x", "DeptA", "One");
    nameless.primary_contact_full_name = None;

    let output = run_pipeline(vec![nameless, row("ada", "DeptB", "Two")], SortPolicy::Name);
    assert_eq!(output.rows.len(), 1);
    assert_eq!(output.rows[0].associated_departments, "DeptB");
    assert_eq!(output.report.skipped_slots, 1);
}

#[test]
fn telephone_note_becomes_invalid_with_phone() {
    let rows = vec![
        row("Telephone: 555-1234 call anytime please", "DeptA", "One"),
        row("Please call the front office", "DeptA", "Two"),
        row("zed", "DeptA", "Three"),
    ];

    let output = run_pipeline(rows, SortPolicy::Name);
    assert_eq!(output.rows[0].name, "Zed");
    assert_eq!(output.rows[1].name, INVALID_NAME);
    assert_eq!(output.rows[1].phone.as_deref(), Some("5551234"));
    assert_eq!(output.rows[2].name, INVALID_NAME);
    assert_eq!(output.rows[2].phone.as_deref(), Some("555-0000"));
    assert_eq!(output.report.invalid_names, 2);
}

#[test]
fn noise_only_name_cleans_to_empty_and_sorts_first() {
    let rows = vec![row("ada", "DeptA", "One"), row("A1C", "DeptA", "Two")];

    let output = run_pipeline(rows, SortPolicy::Name);
    assert_eq!(output.rows[0].name, "");
    assert_eq!(output.rows[1].name, "Ada");
    assert_eq!(output.report.invalid_names, 0);
}

#[test]
fn opportunity_policy_orders_by_count_descending() {
    let mut rows = Vec::new();
    for (name, count) in [("ada", 3), ("bo", 1), ("cy", 5)] {
        for n in 0..count {
            rows.push(row(name, "DeptA", &format!("Title {n}")));
        }
    }

    let output = run_pipeline(rows, SortPolicy::Opportunity);
    let counts: Vec<u32> = output.rows.iter().map(|row| row.opportunity_count).collect();
    assert_eq!(counts, vec![5, 3, 1]);
}

#[test]
fn rerun_is_deterministic() {
    let build = || {
        vec![
            row("cy", "DeptB", "One"),
            with_secondary(row("ada", "DeptA", "Two"), "bo"),
            row("bo", "DeptC", "Three"),
        ]
    };

    for policy in [
        SortPolicy::Name,
        SortPolicy::City,
        SortPolicy::Department,
        SortPolicy::Opportunity,
        SortPolicy::Unsorted,
    ] {
        assert_eq!(run_pipeline(build(), policy), run_pipeline(build(), policy));
    }
}
