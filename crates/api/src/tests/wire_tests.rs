// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the JSON shape of requests and responses.

use binloc::RangeSpec;
use binloc_domain::{Accessibility, LocationTemplate, TemplateIssue};
use serde_json::json;

use super::helpers::{create_test_ranges, create_test_template};
use crate::{
    BulkCreateRequest, BulkDefaults, SuggestionRequest, TemplateValidationResponse,
    build_bulk_create_request, validate_template_request,
};

#[test]
fn test_bulk_create_request_serializes_ranges() {
    let request: BulkCreateRequest = build_bulk_create_request(
        uuid::Uuid::nil(),
        &create_test_template(),
        create_test_ranges(),
        None,
        &[],
    )
    .unwrap();

    let value: serde_json::Value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["warehouse_id"], json!("00000000-0000-0000-0000-000000000000"));
    assert_eq!(value["ranges"]["rack"], json!({"kind": "numeric", "start": 1, "end": 3}));
    assert!(value.get("defaults").is_none());
}

#[test]
fn test_bulk_create_request_reads_defaults() {
    let request: BulkCreateRequest = serde_json::from_value(json!({
        "warehouse_id": "00000000-0000-0000-0000-000000000000",
        "ranges": {"aisle": {"kind": "list", "expression": "A,B"}},
        "defaults": {"max_weight": 250.0, "accessibility": "Targonca"}
    }))
    .unwrap();

    assert_eq!(
        request.ranges.get("aisle"),
        Some(&RangeSpec::list("A,B"))
    );
    let defaults: BulkDefaults = request.defaults.unwrap();
    assert_eq!(defaults.max_weight, Some(250.0));
    assert_eq!(defaults.accessibility, Some(Accessibility::Forklift));
}

#[test]
fn test_suggestion_request_flattens_criteria() {
    let request: SuggestionRequest =
        serde_json::from_value(json!({"required_weight": 120.5, "limit": 3})).unwrap();

    assert_eq!(request.criteria.required_weight, Some(120.5));
    assert_eq!(request.criteria.preferred_zone, None);
    assert_eq!(request.limit, Some(3));
}

#[test]
fn test_validation_response_carries_messages() {
    let template: LocationTemplate = create_test_template().with_separator("::::::");

    let response: TemplateValidationResponse = validate_template_request(&template);

    assert!(!response.valid);
    assert_eq!(response.issues, vec![TemplateIssue::SeparatorTooLong { length: 6 }]);
    assert_eq!(
        response.messages,
        vec!["Separator is 6 characters long. Must be at most 5"]
    );
}
