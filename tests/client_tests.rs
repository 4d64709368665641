//! Integration tests for the content API client against a mock server.
//!
//! Listing resources must degrade to tagged fallback data instead of
//! failing; the single-article fetch and the enquiry submission must
//! propagate typed errors instead of degrading.

mod common;

use common::{article_json, client_for};
use lectern::content::{ContentError, EnquiryForm};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Nothing listens on port 1; connection attempts fail immediately.
const DEAD_API: &str = "http://127.0.0.1:1";

mod listings {
    use super::*;

    #[tokio::test]
    async fn test_live_listing_filters_inactive_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs/banner"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "blogsBanners": [
                    { "id": 1, "title": "Prelims 2027 batch", "imageUrl": "/uploads/one.jpg", "is_active": 1 },
                    { "id": 2, "imageUrl": "/uploads/two.jpg", "is_active": 0 },
                    { "id": 3, "imageUrl": "/uploads/three.jpg" }
                ]
            })))
            .mount(&server)
            .await;

        let banners = client_for(&server.uri()).banners().await;

        assert!(!banners.is_fallback());
        let banners = banners.into_inner();
        // Record 2 is inactive, record 3 never carried the flag
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].id, 1);
    }

    #[tokio::test]
    async fn test_menu_buttons_come_back_in_display_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs/menu-buttons"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "blogsMenuButtons": [
                    { "id": 1, "label": "Economy", "displayOrder": 3, "is_active": 1 },
                    { "id": 2, "label": "Current Affairs", "displayOrder": 1, "is_active": 1 },
                    { "id": 3, "label": "History", "displayOrder": 2, "is_active": 1 }
                ]
            })))
            .mount(&server)
            .await;

        let buttons = client_for(&server.uri()).menu_buttons().await.into_inner();

        let labels: Vec<&str> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Current Affairs", "History", "Economy"]);
    }

    #[tokio::test]
    async fn test_server_error_degrades_to_seed_categories() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs/category"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let categories = client_for(&server.uri()).categories().await;

        assert!(categories.is_fallback());
        let categories = categories.into_inner();
        assert_eq!(categories.len(), 7);
        assert_eq!(categories[0].name, "History");
    }

    #[tokio::test]
    async fn test_unreachable_api_degrades_instead_of_failing() {
        let centers = client_for(DEAD_API).coaching_centers().await;

        assert!(centers.is_fallback());
        assert!(centers.inner().iter().any(|c| c.city == "Delhi"));
    }

    #[tokio::test]
    async fn test_bearer_token_sent_only_for_categories() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs/category"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "blogsCategories": [] })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/blogs/banner"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "blogsBanners": [] })))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        assert!(!client.categories().await.is_fallback());
        client.banners().await;

        let requests = server.received_requests().await.expect("requests recorded");
        let banner_request = requests
            .iter()
            .find(|r| r.url.path() == "/blogs/banner")
            .expect("banner request recorded");
        assert!(!banner_request.headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_unfiltered_articles_send_empty_filter_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs/article"))
            .and(query_param("categoryId", ""))
            .and(query_param("subCategoryId", ""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "responseResult": [article_json(7, "Monsoon Systems")],
                "totalCount": 42,
                "totalPages": 5,
                "perPage": 10
            })))
            .mount(&server)
            .await;

        let page = client_for(&server.uri()).articles(None, None).await;

        assert!(!page.is_fallback());
        let page = page.into_inner();
        assert_eq!(page.articles.len(), 1);
        // The upstream total passes through even when it exceeds the page
        assert_eq!(page.total_count, 42);
    }
}

mod article_detail {
    use super::*;

    #[tokio::test]
    async fn test_live_article_decodes_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs/article/42"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "blogsArticle": article_json(42, "Mauryan Administration") })),
            )
            .mount(&server)
            .await;

        let article = client_for(&server.uri())
            .article(42)
            .await
            .expect("live article should decode");

        assert_eq!(article.title, "Mauryan Administration");
        assert_eq!(article.tags[0].tag.name, "notes");
    }

    #[tokio::test]
    async fn test_missing_article_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs/article/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server.uri())
            .article(99)
            .await
            .expect_err("missing article must error");

        assert!(matches!(err, ContentError::ArticleNotFound { id: 99 }));
    }

    #[tokio::test]
    async fn test_inactive_article_reported_as_not_found() {
        let server = MockServer::start().await;
        let mut body = article_json(11, "Retracted piece");
        body["is_active"] = json!(0);
        Mock::given(method("GET"))
            .and(path("/blogs/article/11"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "blogsArticle": body })))
            .mount(&server)
            .await;

        let err = client_for(&server.uri())
            .article(11)
            .await
            .expect_err("inactive article must not surface");

        assert!(matches!(err, ContentError::ArticleNotFound { id: 11 }));
    }

    #[tokio::test]
    async fn test_other_upstream_failures_propagate_the_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs/article/42"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server.uri())
            .article(42)
            .await
            .expect_err("upstream failure must propagate");

        assert!(matches!(err, ContentError::UpstreamStatus { status: 503 }));
    }
}

mod enquiry {
    use super::*;

    fn form(mobile: &str) -> EnquiryForm {
        EnquiryForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            mobile_number: mobile.to_string(),
        }
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/blogs/enquiry"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server.uri())
            .submit_enquiry(&form("12345"))
            .await
            .expect_err("five digits must fail validation");

        assert!(matches!(
            err,
            ContentError::InvalidField { field: "mobileNumber", .. }
        ));
        assert!(server.received_requests().await.expect("requests recorded").is_empty());
    }

    #[tokio::test]
    async fn test_valid_form_posts_the_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/blogs/enquiry"))
            .and(body_json(json!({
                "name": "Asha",
                "email": "asha@example.com",
                "mobileNumber": "9876543210"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "We will call you back",
                "success": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = client_for(&server.uri())
            .submit_enquiry(&form("9876543210"))
            .await
            .expect("valid enquiry should succeed");

        assert_eq!(receipt.message, "We will call you back");
    }

    #[tokio::test]
    async fn test_rejected_enquiry_surfaces_the_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/blogs/enquiry"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Duplicate enquiry",
                "success": false
            })))
            .mount(&server)
            .await;

        let err = client_for(&server.uri())
            .submit_enquiry(&form("9876543210"))
            .await
            .expect_err("server rejection must surface");

        assert!(matches!(err, ContentError::EnquiryRejected(_)));
        assert!(err.to_string().contains("Duplicate enquiry"));
    }
}
