use super::*;
use chrono::{TimeZone, Utc};

fn record(id: &str, batch: Option<&str>, number: u32, day: u32) -> InjectionRecord {
    let mut r = InjectionRecord::new(id, number, "m1", "c1");
    r.batch_id = batch.map(str::to_string);
    r.injection_date = Some(Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap());
    r.method_name = Some("Lipids RP".to_string());
    r.column_name = Some("C18 #4".to_string());
    r
}

#[test]
fn test_groups_by_batch_id() {
    let records = vec![
        record("r1", Some("B1"), 12, 10),
        record("r2", Some("B1"), 10, 10),
        record("r3", Some("B1"), 11, 10),
        record("r4", Some("B2"), 13, 11),
    ];

    let batches = aggregate_into_batches(&records, SuccessPolicy::LastSeen);
    assert_eq!(batches.len(), 2);

    let b1 = batches.iter().find(|b| b.batch_id == "B1").unwrap();
    assert_eq!(b1.actual_batch_size, 3);
    assert_eq!(b1.injections.len(), 3);
    assert_eq!(b1.min_injection_number, 10);
    assert_eq!(b1.max_injection_number, 12);
    assert_eq!(b1.injection_range(), "#10-12");
    assert_eq!(b1.method_name.as_deref(), Some("Lipids RP"));
}

#[test]
fn test_missing_batch_id_is_singleton() {
    let records = vec![
        record("r9", None, 40, 5),
        record("r10", None, 41, 5),
        record("r11", Some("B7"), 42, 5),
    ];

    let batches = aggregate_into_batches(&records, SuccessPolicy::default());
    assert_eq!(batches.len(), 3);

    let r9 = batches.iter().find(|b| b.batch_id == "r9").unwrap();
    assert_eq!(r9.actual_batch_size, 1);
    assert_eq!(r9.injection_range(), "#40");
}

#[test]
fn test_legacy_record_never_joins_a_batch_named_like_it() {
    // Record id "B1" without a batch id, next to a real batch "B1"
    let records = vec![record("B1", None, 1, 5), record("x", Some("B1"), 2, 5)];

    let batches = aggregate_into_batches(&records, SuccessPolicy::LastSeen);
    assert_eq!(batches.len(), 2);
    assert!(batches.iter().all(|b| b.actual_batch_size == 1));
    assert!(batches.iter().all(|b| b.batch_id == "B1"));
    assert_eq!(batches[0].injections[0].id, "B1");
    assert_eq!(batches[1].injections[0].id, "x");
}

#[test]
fn test_legacy_records_with_same_id_stay_apart() {
    let records = vec![record("dup", None, 3, 5), record("dup", None, 4, 5)];

    let batches = aggregate_into_batches(&records, SuccessPolicy::LastSeen);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].injection_range(), "#3");
    assert_eq!(batches[1].injection_range(), "#4");
}

#[test]
fn test_sorted_newest_first() {
    let mut undated = record("r0", Some("B0"), 1, 1);
    undated.injection_date = None;

    let mut created_only = record("r5", Some("B5"), 5, 1);
    created_only.injection_date = None;
    created_only.created_at = Some(Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap());

    let records = vec![
        undated,
        record("r1", Some("B1"), 2, 3),
        created_only,
        record("r2", Some("B2"), 3, 15),
    ];

    let order: Vec<String> = aggregate_into_batches(&records, SuccessPolicy::LastSeen)
        .into_iter()
        .map(|b| b.batch_id)
        .collect();
    assert_eq!(order, vec!["B5", "B2", "B1", "B0"]);
}

#[test]
fn test_success_policies() {
    let mut failed = record("r1", Some("B1"), 1, 2);
    failed.run_successful = Some(false);
    let mut ok = record("r2", Some("B1"), 2, 2);
    ok.run_successful = Some(true);
    let records = vec![failed, ok];

    let last_seen = aggregate_into_batches(&records, SuccessPolicy::LastSeen);
    assert!(last_seen[0].run_successful);

    let all = aggregate_into_batches(&records, SuccessPolicy::AllSucceeded);
    assert!(!all[0].run_successful);
    assert_eq!(all[0].failed_count(), 1);
}

#[test]
fn test_missing_success_flag_counts_as_success() {
    let records = vec![record("r1", Some("B1"), 1, 2)];
    let batches = aggregate_into_batches(&records, SuccessPolicy::AllSucceeded);
    assert!(batches[0].run_successful);
}

#[test]
fn test_stale_stored_batch_size() {
    // Batch of 3 with one injection deleted
    let mut a = record("r1", Some("B1"), 1, 2);
    a.batch_size = Some(3);
    let mut b = record("r2", Some("B1"), 2, 2);
    b.batch_size = Some(3);
    let mut c = record("r3", Some("B2"), 3, 3);
    c.batch_size = Some(1);

    let batches = aggregate_into_batches(&[a, b, c], SuccessPolicy::LastSeen);
    let stale = stale_batches(&batches);
    assert_eq!(stale.len(), 1);
    assert_eq!(stale[0].batch_id, "B1");
    assert_eq!(stale[0].actual_batch_size, 2);
}

#[test]
fn test_empty_input() {
    assert!(aggregate_into_batches(&[], SuccessPolicy::LastSeen).is_empty());
}

#[test]
fn test_next_injection_number() {
    let mut other_column = record("r3", Some("B2"), 99, 3);
    other_column.column_id = "c2".to_string();
    let records = vec![record("r1", Some("B1"), 7, 2), other_column];

    assert_eq!(next_injection_number(&records, "c1"), 8);
    assert_eq!(next_injection_number(&records, "c2"), 100);
    assert_eq!(next_injection_number(&records, "unused"), 1);
}

#[test]
fn test_plan_batch_numbers() {
    let records = vec![record("r1", Some("B1"), 20, 2)];
    let plan = plan_batch(&records, "c1", "m2", 4).unwrap();

    assert_eq!(plan.first_injection_number, 21);
    assert_eq!(plan.injection_numbers(), 21..=24);
    assert!(uuid::Uuid::parse_str(&plan.batch_id).is_ok());

    let date = Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap();
    let drafts = plan.draft_records(Some("QC-01"), date);
    assert_eq!(drafts.len(), 4);
    assert!(drafts.iter().all(|r| r.batch_id.as_deref() == Some(plan.batch_id.as_str())));
    assert!(drafts.iter().all(|r| r.batch_size == Some(4)));

    let batches = aggregate_into_batches(&drafts, SuccessPolicy::AllSucceeded);
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].injection_range(), "#21-24");
    assert!(stale_batches(&batches).is_empty());
}

#[test]
fn test_plan_batch_errors() {
    assert_eq!(plan_batch(&[], "c1", "m1", 0), Err(InjectionError::EmptyBatch));

    let records = vec![record("r1", None, u32::MAX - 1, 2)];
    assert!(plan_batch(&records, "c1", "m1", 1).is_ok());
    assert_eq!(
        plan_batch(&records, "c1", "m1", 2),
        Err(InjectionError::NumberOverflow {
            first: u32::MAX,
            size: 2
        })
    );
}

#[test]
fn test_record_deserializes_from_row() {
    let row = serde_json::json!({
        "id": "r1",
        "batch_id": null,
        "injection_number": 3,
        "method_id": "m1",
        "column_id": "c1",
        "injection_date": "2024-03-02T09:00:00+00:00",
        "run_successful": false
    });

    let record: InjectionRecord = serde_json::from_value(row).unwrap();
    assert_eq!(record.batch_key(), "r1");
    assert!(!record.succeeded());
    assert!(record.representative_date().is_some());
}
