use super::*;

#[tokio::test]
async fn lists_three_menu_items() {
    let (status, body) = get_json("/api/ucsbdiningcommonsmenuitem/all").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[1]["diningCommonsCode"], "Portola");
    assert_eq!(body[1]["name"], "Sushi");
    assert_eq!(body[1]["station"], "Global");
}

#[tokio::test]
async fn gets_menu_item_by_id() {
    let (status, body) = get_json("/api/ucsbdiningcommonsmenuitem?id=4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["diningCommonsCode"], "Carrillo");
    assert_eq!(body["station"], "Woodstone");
}

#[tokio::test]
async fn missing_menu_item_returns_not_found() {
    let (status, body) = get_json("/api/ucsbdiningcommonsmenuitem?id=99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "UCSBDiningCommonsMenuItem with id 99 not found"
    );
}

#[tokio::test]
async fn malformed_menu_item_id_returns_bad_request() {
    let (status, body) = get_json("/api/ucsbdiningcommonsmenuitem?id=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "BadRequest");
}
