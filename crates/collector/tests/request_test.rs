//! Tests for the collector-facing view of a built request.

use collector::{CollectionRequestBuilder, PROPERTY_TYPE, TRANSACTION_TYPE};
use data_loader::District;
use pipeline::{DistrictSelection, RangeConstraint};

fn build(area: RangeConstraint<f64>) -> collector::BuiltRequest {
    let districts: DistrictSelection = [District::Mapo, District::Gangnam].into_iter().collect();
    CollectionRequestBuilder::new()
        .build(
            &districts,
            RangeConstraint::new(0, 2000),
            RangeConstraint::new(0, 130),
            area,
        )
        .unwrap()
}

fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

#[test]
fn test_query_params() {
    let built = build(RangeConstraint::new(20.0, 100.0));
    let params = built.request.query_params();

    assert_eq!(param(&params, "rletTpCd"), Some(PROPERTY_TYPE));
    assert_eq!(param(&params, "tradTpCd"), Some(TRANSACTION_TYPE));
    assert_eq!(param(&params, "wprcMax"), Some("2000"));
    assert_eq!(param(&params, "rprcMax"), Some("130"));
    // 20 pyeong = 66.116 m², 100 pyeong = 330.58 m²
    assert_eq!(param(&params, "spcMin"), Some("66"));
    assert_eq!(param(&params, "spcMax"), Some("331"));
}

#[test]
fn test_open_ended_area_omits_max() {
    let built = build(RangeConstraint::new(20.0, f64::INFINITY));
    let params = built.request.query_params();
    assert_eq!(param(&params, "spcMax"), None);
}

#[test]
fn test_district_queries_in_catalogue_order() {
    let built = build(RangeConstraint::new(20.0, 100.0));
    let queries = built.request.district_queries();

    assert_eq!(queries.len(), 2);
    assert_eq!(queries[0].0, District::Gangnam);
    assert_eq!(param(&queries[0].1, "cortarNo"), Some("1168000000"));
    assert_eq!(queries[1].0, District::Mapo);
    assert_eq!(param(&queries[1].1, "cortarNo"), Some("1144000000"));
}

#[test]
fn test_request_serializes_for_handoff() {
    let built = build(RangeConstraint::new(20.0, 100.0));
    let json = serde_json::to_value(&built).unwrap();

    assert_eq!(json["estimated_count"], 800);
    assert_eq!(json["request"]["districts"], serde_json::json!(["강남구", "마포구"]));
    assert_eq!(json["request"]["deposit"]["max"], 2000);
    assert_eq!(json["request"]["property_type"], "SG:SMS");
    assert_eq!(json["request"]["transaction_type"], "B2");
}
