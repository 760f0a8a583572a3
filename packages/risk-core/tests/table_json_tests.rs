use risk_core::{RiskTable, Subject};
use serde_json::json;

#[test]
fn weighted_risk_serializes_details_as_pairs() {
    let table = RiskTable::builtin();
    let risk = table.weighted_risk(Subject::Lisa);

    let value = serde_json::to_value(&risk).unwrap();
    assert_eq!(value["total"], json!(-9.0));
    assert_eq!(value["details"][0], json!(["Spontaneous Behavior", 16.0]));
    assert_eq!(value["details"][2], json!(["Insurance/Health Coverage", -18.0]));
    assert_eq!(value["details"].as_array().unwrap().len(), 9);
}

#[test]
fn combined_rows_serialize_with_subject_named_keys() {
    let table = RiskTable::builtin();
    let rows = table.combined_rows();

    let value = serde_json::to_value(&rows).unwrap();
    let first = &value[0];
    assert_eq!(first["factor"], json!("Spontaneous Behavior"));
    assert_eq!(first["severity"], json!(8.0));
    assert_eq!(first["Polly"], json!(2.0));
    assert_eq!(first["Lisa"], json!(2.0));
    assert_eq!(first["polly_weighted"], json!(16.0));
    assert_eq!(first["lisa_weighted"], json!(16.0));
}

#[test]
fn subject_serializes_as_its_name() {
    assert_eq!(serde_json::to_value(Subject::Polly).unwrap(), json!("Polly"));
    assert_eq!(serde_json::to_value(Subject::Lisa).unwrap(), json!("Lisa"));
}

#[test]
fn totals_keyed_by_subject_name() {
    let table = RiskTable::builtin();
    let all = table.all_risks().unwrap();

    let totals: std::collections::BTreeMap<Subject, f64> =
        all.into_iter().map(|(s, r)| (s, r.total)).collect();
    let value = serde_json::to_value(&totals).unwrap();
    assert_eq!(value, json!({ "Polly": 129.0, "Lisa": -9.0 }));
}
