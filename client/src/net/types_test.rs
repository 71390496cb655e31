use super::*;

// =============================================================
// Token exchange
// =============================================================

#[test]
fn token_response_with_token_succeeds() {
    let resp: TokenResponse = serde_json::from_str(r#"{"access_token":"tok1"}"#).unwrap();
    assert_eq!(resp.into_result(), Ok("tok1".to_owned()));
}

#[test]
fn token_response_without_token_carries_message() {
    let resp: TokenResponse = serde_json::from_str(r#"{"message":"invalid_grant"}"#).unwrap();
    assert_eq!(resp.into_result(), Err(ApiError::Rejected(Some("invalid_grant".to_owned()))));
}

#[test]
fn token_response_with_empty_token_is_rejected() {
    let resp: TokenResponse = serde_json::from_str(r#"{"access_token":""}"#).unwrap();
    assert_eq!(resp.into_result(), Err(ApiError::Rejected(None)));
}

#[test]
fn token_request_serializes_code() {
    let body = serde_json::to_value(TokenRequest { code: "abc123".to_owned() }).unwrap();
    assert_eq!(body, serde_json::json!({ "code": "abc123" }));
}

// =============================================================
// Board list
// =============================================================

#[test]
fn board_list_parses_optional_counts() {
    let resp: BoardListResponse = serde_json::from_str(
        r#"{"items":[
            {"id":"b1","name":"Shoes","description":"Fall picks","pin_count":4,"follower_count":2},
            {"id":"b2","name":"Bags"}
        ]}"#,
    )
    .unwrap();
    let items = resp.into_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].pin_count, Some(4));
    assert_eq!(items[0].description.as_deref(), Some("Fall picks"));
    assert_eq!(items[1].pin_count, None);
    assert_eq!(items[1].follower_count, None);
}

#[test]
fn board_list_missing_items_is_empty() {
    let resp: BoardListResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.into_items().is_empty());
    let resp: BoardListResponse = serde_json::from_str(r#"{"items":null}"#).unwrap();
    assert!(resp.into_items().is_empty());
}

#[test]
fn remote_board_accepts_numeric_id() {
    let board: RemoteBoard = serde_json::from_str(r#"{"id":987654321,"name":"Numbers"}"#).unwrap();
    assert_eq!(board.id, "987654321");
}

#[test]
fn remote_board_null_name_reads_as_empty() {
    let body: BoardListResponse =
        serde_json::from_str(r#"{"items":[{"id":"b1","name":null,"description":null,"pin_count":null}]}"#).unwrap();
    let items = body.into_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "");
    assert_eq!(items[0].description, None);
    assert_eq!(items[0].pin_count, None);
}

#[test]
fn remote_board_rejects_null_id() {
    let result = serde_json::from_str::<RemoteBoard>(r#"{"id":null,"name":"Broken"}"#);
    assert!(result.is_err());
}

// =============================================================
// Board creation
// =============================================================

#[test]
fn create_board_response_with_id_succeeds() {
    let resp: CreateBoardResponse =
        serde_json::from_str(r#"{"id":"b1","name":"Summer Sale","description":""}"#).unwrap();
    assert_eq!(
        resp.into_result("Summer Sale"),
        Ok(CreatedBoard { id: "b1".to_owned(), name: "Summer Sale".to_owned(), description: String::new() })
    );
}

#[test]
fn create_board_response_falls_back_to_requested_name() {
    let resp: CreateBoardResponse = serde_json::from_str(r#"{"id":"b9"}"#).unwrap();
    let created = resp.into_result("Requested").unwrap();
    assert_eq!(created.name, "Requested");
    assert_eq!(created.description, "");
}

#[test]
fn create_board_response_without_id_is_rejected() {
    let resp: CreateBoardResponse = serde_json::from_str(r#"{"message":"Name taken"}"#).unwrap();
    assert_eq!(resp.into_result("x"), Err(ApiError::Rejected(Some("Name taken".to_owned()))));
}

// =============================================================
// Pin creation
// =============================================================

#[test]
fn create_pin_request_matches_wire_shape() {
    let body = serde_json::to_value(CreatePinRequest {
        board_id: "b1".to_owned(),
        title: "Shoes".to_owned(),
        media_source: "https://img/x.png".to_owned(),
        description: String::new(),
        link: String::new(),
    })
    .unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "board_id": "b1",
            "title": "Shoes",
            "media_source": "https://img/x.png",
            "description": "",
            "link": ""
        })
    );
}

#[test]
fn create_pin_response_with_id_succeeds() {
    let resp: CreatePinResponse = serde_json::from_str(r#"{"id":"p1"}"#).unwrap();
    assert_eq!(resp.into_result(), Ok("p1".to_owned()));
}

#[test]
fn create_pin_response_without_id_is_rejected() {
    let resp: CreatePinResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.into_result(), Err(ApiError::Rejected(None)));
}

// =============================================================
// Product parse
// =============================================================

#[test]
fn parse_response_success_yields_product() {
    let resp: ParseResponse = serde_json::from_str(
        r#"{"success":true,"data":{
            "title":"Runner","description":"Light shoe","image":"https://img/r.png",
            "price":"$59.99","discount":20,"source":"shopify"
        }}"#,
    )
    .unwrap();
    let product = resp.into_result().unwrap();
    assert_eq!(product.title, "Runner");
    assert_eq!(product.display_price(), Some("$59.99"));
    assert_eq!(product.display_discount(), Some(20.0));
    assert_eq!(product.source, "shopify");
}

#[test]
fn parse_response_normalizes_numeric_price_and_string_discount() {
    let resp: ParseResponse =
        serde_json::from_str(r#"{"success":true,"data":{"price":19.5,"discount":"15%"}}"#).unwrap();
    let product = resp.into_result().unwrap();
    assert_eq!(product.price.as_deref(), Some("19.5"));
    assert_eq!(product.discount, Some(15.0));
    assert_eq!(product.title, "");
}

#[test]
fn parse_response_failure_carries_message() {
    let resp: ParseResponse = serde_json::from_str(r#"{"success":false,"message":"Unsupported site"}"#).unwrap();
    assert_eq!(resp.into_result(), Err(ApiError::Rejected(Some("Unsupported site".to_owned()))));
}

#[test]
fn parse_response_success_without_data_is_rejected() {
    let resp: ParseResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert_eq!(resp.into_result(), Err(ApiError::Rejected(None)));
}

#[test]
fn display_helpers_skip_empty_price_and_zero_discount() {
    let product = ParsedProduct { price: Some("  ".to_owned()), discount: Some(0.0), ..ParsedProduct::default() };
    assert_eq!(product.display_price(), None);
    assert_eq!(product.display_discount(), None);
}

#[test]
fn parse_response_null_fields_read_as_empty() {
    let body: ParseResponse = serde_json::from_str(
        r#"{"success":true,"data":{"title":"Shoes","description":null,"image":null,"price":null,"source":null}}"#,
    )
    .unwrap();
    let product = body.into_result().unwrap();
    assert_eq!(product.title, "Shoes");
    assert_eq!(product.description, "");
    assert_eq!(product.image, "");
    assert_eq!(product.price, None);
    assert_eq!(product.source, "");
}

#[test]
fn parse_response_unreadable_discount_is_absent() {
    let body: ParseResponse =
        serde_json::from_str(r#"{"success":true,"data":{"title":"Shoes","discount":"N/A"}}"#).unwrap();
    let product = body.into_result().unwrap();
    assert_eq!(product.title, "Shoes");
    assert_eq!(product.discount, None);
    assert_eq!(product.display_discount(), None);
}

#[test]
fn parse_response_non_scalar_discount_is_absent() {
    let body: ParseResponse = serde_json::from_str(r#"{"success":true,"data":{"discount":{"pct":10}}}"#).unwrap();
    assert_eq!(body.into_result().unwrap().discount, None);
}
