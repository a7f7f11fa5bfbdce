//! Tests for HTTP request/response value types.

use super::{HttpRequest, HttpResponse};

fn test_url() -> url::Url {
    url::Url::parse("https://raffles.example.com/api/webhook/").unwrap()
}

mod request {
    use super::*;

    #[test]
    fn post_sets_url_and_body() {
        let request = HttpRequest::post(test_url(), b"{\"ref\":\"FA-1\"}".to_vec());

        assert_eq!(request.url.as_str(), "https://raffles.example.com/api/webhook/");
        assert_eq!(request.body, b"{\"ref\":\"FA-1\"}");
        assert!(request.headers.is_empty());
    }

    #[test]
    fn with_header_appends() {
        let request = HttpRequest::post(test_url(), vec![])
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_header(
                http::header::AUTHORIZATION,
                http::HeaderValue::from_static("Bearer key"),
            );

        assert_eq!(request.headers.len(), 2);
        assert_eq!(
            request.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}

mod response {
    use super::*;

    #[test]
    fn is_success_for_2xx() {
        let ok = HttpResponse::new(http::StatusCode::CREATED, http::HeaderMap::new(), vec![]);
        assert!(ok.is_success());

        let conflict =
            HttpResponse::new(http::StatusCode::CONFLICT, http::HeaderMap::new(), vec![]);
        assert!(!conflict.is_success());
    }

    #[test]
    fn body_text_returns_utf8() {
        let response = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            b"{\"tickets_generated\": 2}".to_vec(),
        );

        assert_eq!(response.body_text(), Some("{\"tickets_generated\": 2}"));
    }

    #[test]
    fn body_text_rejects_invalid_utf8() {
        let response = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![0xFF, 0xFE],
        );

        assert_eq!(response.body_text(), None);
    }
}
