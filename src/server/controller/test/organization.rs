use super::*;

#[tokio::test]
async fn lists_three_organizations() {
    let (status, body) = get_json("/api/ucsborganization/all").await;

    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["orgCode"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["ZBZ", "ZBB", "ZTT"]);
}

/// Tests fetching the singular organization entry by code.
///
/// Expected: 200 with ZBT marked inactive
#[tokio::test]
async fn gets_organization_by_code() {
    let (status, body) = get_json("/api/ucsborganization?orgCode=ZBT").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orgTranslationShort"], "ZETA BETA TAU");
    assert_eq!(body["inactive"], true);
}

#[tokio::test]
async fn missing_organization_returns_not_found() {
    let (status, body) = get_json("/api/ucsborganization?orgCode=munger-hall").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["type"], "EntityNotFoundException");
    assert_eq!(
        body["message"],
        "UCSBOrganization with id munger-hall not found"
    );
}

/// Tests fetching an organization without the orgCode parameter.
///
/// Expected: 400 with a JSON error body
#[tokio::test]
async fn missing_org_code_returns_bad_request() {
    let (status, body) = get_json("/api/ucsborganization").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "BadRequest");
}
