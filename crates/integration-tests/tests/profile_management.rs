//! Profile and address management, including the language preference
//! sync to the backend profile.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use velasona_client::{AddressInput, ProfileInput};
use velasona_core::{AddressKind, CustomerType, Language};
use velasona_integration_tests::TestContext;

fn profile_body(language: &str) -> serde_json::Value {
    json!({
        "firstName": "Lucía",
        "lastName": "Marín",
        "customerType": "INDIVIDUAL",
        "preferredLanguage": language
    })
}

#[tokio::test]
async fn language_change_syncs_to_the_backend_profile_when_logged_in() {
    let ctx = TestContext::new().await;
    ctx.client.session().set_token("tok_lang").expect("token");

    Mock::given(method("PUT"))
        .and(path("/api/profile"))
        .and(header("authorization", "Bearer tok_lang"))
        .and(body_json(json!({"preferredLanguage": "en"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": profile_body("en")
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client.set_language(Language::En).await.expect("set language");
    assert_eq!(ctx.client.language(), Language::En);
}

#[tokio::test]
async fn language_change_stays_local_when_logged_out() {
    let ctx = TestContext::new().await;
    // No mock mounted: any request would be a failure of this contract

    ctx.client.set_language(Language::En).await.expect("set language");
    assert_eq!(ctx.client.language(), Language::En);

    let requests = ctx.server.received_requests().await.expect("requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn profile_update_round_trips() {
    let ctx = TestContext::new().await;
    Mock::given(method("PUT"))
        .and(path("/api/profile"))
        .and(body_json(json!({
            "companyName": "Velas del Sur SL",
            "customerType": "BUSINESS",
            "taxId": "B12345678"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "firstName": "Lucía",
                "lastName": "Marín",
                "customerType": "BUSINESS",
                "taxId": "B12345678",
                "companyName": "Velas del Sur SL",
                "preferredLanguage": "es"
            }
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let input = ProfileInput {
        customer_type: Some(CustomerType::Business),
        tax_id: Some("B12345678".to_owned()),
        company_name: Some("Velas del Sur SL".to_owned()),
        ..ProfileInput::default()
    };
    let profile = ctx.client.update_profile(&input).await.expect("update");
    assert_eq!(profile.customer_type, CustomerType::Business);
    assert_eq!(profile.tax_id.as_deref(), Some("B12345678"));
}

#[tokio::test]
async fn addresses_can_be_added_listed_and_deleted() {
    let ctx = TestContext::new().await;
    let stored = json!({
        "id": "addr_1",
        "kind": "SHIPPING",
        "street": "Calle Luna 5",
        "city": "Sevilla",
        "postalCode": "41001",
        "country": "ES",
        "isDefault": true
    });

    Mock::given(method("POST"))
        .and(path("/api/profile/addresses"))
        .and(body_json(json!({
            "kind": "SHIPPING",
            "street": "Calle Luna 5",
            "city": "Sevilla",
            "postalCode": "41001",
            "country": "ES",
            "isDefault": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": stored
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_ok("GET", "/profile/addresses", json!([stored])).await;
    ctx.mock_ok("DELETE", "/profile/addresses/addr_1", json!({})).await;

    let input = AddressInput {
        kind: AddressKind::Shipping,
        street: "Calle Luna 5".to_owned(),
        city: "Sevilla".to_owned(),
        region: None,
        postal_code: "41001".to_owned(),
        country: "ES".to_owned(),
        is_default: true,
    };
    let created = ctx.client.add_address(&input).await.expect("add");
    assert_eq!(created.city, "Sevilla");
    assert!(created.is_default);

    let addresses = ctx.client.addresses().await.expect("list");
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0].id, created.id);

    ctx.client.delete_address(&created.id).await.expect("delete");
}
