use super::*;

fn test_client(base_url: &str) -> CatalogClient {
    CatalogClient::with_base_url(base_url, 5, "larder-test/0.1")
        .expect("client construction should not fail")
}

#[test]
fn product_url_for_bare_origin() {
    let client = test_client("https://world.openfoodfacts.org");
    let url = client.product_url("5000112637922").unwrap();
    assert_eq!(
        url.as_str(),
        "https://world.openfoodfacts.org/api/v3/product/5000112637922.json"
    );
}

#[test]
fn product_url_strips_trailing_slash() {
    let client = test_client("https://world.openfoodfacts.org/");
    let url = client.product_url("12345678").unwrap();
    assert_eq!(
        url.as_str(),
        "https://world.openfoodfacts.org/api/v3/product/12345678.json"
    );
}

#[test]
fn product_url_keeps_base_path() {
    let client = test_client("http://localhost:8080/mirror");
    let url = client.product_url("12345678").unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:8080/mirror/api/v3/product/12345678.json"
    );
}

#[test]
fn with_base_url_rejects_garbage() {
    let result = CatalogClient::with_base_url("not a url", 5, "larder-test/0.1");
    assert!(
        matches!(result, Err(CatalogError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn validate_barcode_trims_whitespace() {
    assert_eq!(validate_barcode(" 5000112637922\n").unwrap(), "5000112637922");
}

#[test]
fn validate_barcode_rejects_empty() {
    let err = validate_barcode("   ").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidBarcode { reason, .. } if reason.contains("empty")));
}

#[test]
fn validate_barcode_rejects_non_digits() {
    let err = validate_barcode("50001/../x").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidBarcode { reason, .. } if reason.contains("digits")));
}

#[test]
fn parse_product_body_returns_record() {
    let record = parse_product_body(
        "123",
        r#"{"code":"123","status":"success","product":{"product_name":"Beans"}}"#,
    )
    .unwrap();
    assert_eq!(record.product_name.as_deref(), Some("Beans"));
}

#[test]
fn parse_product_body_without_product_is_not_found() {
    let err = parse_product_body("123", r#"{"code":"123","status":"failure"}"#).unwrap_err();
    assert!(matches!(err, CatalogError::ProductNotFound { ref barcode } if barcode == "123"));
    assert!(err.is_not_found());
}

#[test]
fn parse_product_body_null_product_is_not_found() {
    let err = parse_product_body("123", r#"{"product":null}"#).unwrap_err();
    assert!(matches!(err, CatalogError::ProductNotFound { .. }));
}

#[test]
fn parse_product_body_non_object_payload_is_not_found() {
    let err = parse_product_body("123", "[1, 2, 3]").unwrap_err();
    assert!(matches!(err, CatalogError::ProductNotFound { .. }));
}

#[test]
fn parse_product_body_invalid_json_is_malformed() {
    let err = parse_product_body("123", "<html>oops</html>").unwrap_err();
    assert!(matches!(err, CatalogError::MalformedRecord { .. }));
    assert!(err.is_not_found());
}

#[test]
fn parse_product_body_wrong_field_type_is_malformed() {
    let err = parse_product_body("123", r#"{"product":{"labels_tags":{"en":"organic"}}}"#)
        .unwrap_err();
    assert!(matches!(err, CatalogError::MalformedRecord { .. }));
}

#[test]
fn lookup_failed_is_not_found_only_for_404() {
    let not_found = CatalogError::LookupFailed {
        barcode: "1".into(),
        status: 404,
    };
    let server_error = CatalogError::LookupFailed {
        barcode: "1".into(),
        status: 503,
    };
    assert!(not_found.is_not_found());
    assert!(!server_error.is_not_found());
}
