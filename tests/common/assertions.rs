//! Domain-specific assertion macros for quarry harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* response contract was violated.

// ---------------------------------------------------------------------------
// Header assertions
// ---------------------------------------------------------------------------

/// Assert that a response carries the full search header set: JSON content
/// type plus the three CORS headers.
///
/// ```rust
/// assert_search_headers!(response);
/// ```
#[macro_export]
macro_rules! assert_search_headers {
    ($response:expr) => {{
        let response: &$crate::common::TestResponse = &$response;
        for (name, expected) in quarry::api::headers::SEARCH_RESPONSE_HEADERS {
            match response.headers.get(&name) {
                Some(actual) if actual == expected => {}
                Some(actual) => panic!(
                    "assert_search_headers! failed:\n  header:   {}\n  expected: {:?}\n  actual:   {:?}\n  status:   {}",
                    name, expected, actual, response.status
                ),
                None => panic!(
                    "assert_search_headers! failed: header {} missing.\n  status: {}\n  present: {:?}",
                    name,
                    response.status,
                    response.headers.keys().collect::<Vec<_>>()
                ),
            }
        }
    }};
}

/// Assert that a response carries none of the CORS headers (i.e. it was not
/// produced under `/search/`).
#[macro_export]
macro_rules! assert_no_cors_headers {
    ($response:expr) => {{
        let response: &$crate::common::TestResponse = &$response;
        let leaked: Vec<_> = response
            .headers
            .keys()
            .filter(|name| name.as_str().starts_with("access-control-"))
            .collect();
        if !leaked.is_empty() {
            panic!("assert_no_cors_headers! failed: found {:?}", leaked);
        }
    }};
}

// ---------------------------------------------------------------------------
// Body assertions
// ---------------------------------------------------------------------------

/// Assert that a response body is JSON equal to `expected`.
///
/// ```rust
/// assert_json_body!(response, {"hits": []});
/// ```
#[macro_export]
macro_rules! assert_json_body {
    ($response:expr, $($expected:tt)+) => {{
        let response: &$crate::common::TestResponse = &$response;
        let expected = serde_json::json!($($expected)+);
        pretty_assertions::assert_eq!(response.json(), expected, "status {}", response.status);
    }};
}

/// Assert that a response is an error envelope with the given status.
#[macro_export]
macro_rules! assert_error_envelope {
    ($response:expr, $status:expr) => {{
        let response: &$crate::common::TestResponse = &$response;
        let status: axum::http::StatusCode = $status;
        pretty_assertions::assert_eq!(response.status, status, "body: {}", response.text());
        let body = response.json();
        pretty_assertions::assert_eq!(body["code"], serde_json::json!(status.as_u16()));
        assert!(
            body["error"].as_str().map_or(false, |e| !e.is_empty()),
            "assert_error_envelope! failed: missing error message in {body}"
        );
        assert_eq!(
            body.as_object().map(|o| o.len()),
            Some(2),
            "assert_error_envelope! failed: unexpected fields in {body}"
        );
    }};
}
