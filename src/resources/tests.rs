//! Tests for the typed resource handles

use crate::types::{CallOptions, ClientConfig, Invoice, Refund, TailoredInvoice};
use crate::ProcessOut;
use mockito::{Matcher, Server};
use serde_json::json;

fn create_test_client(url: String) -> ProcessOut {
    ProcessOut::new(ClientConfig::new("proj_test", "key_test").with_host(url)).unwrap()
}

fn empty_options_body() -> serde_json::Value {
    json!({"expand": null, "filter": null})
}

fn empty_paginated_body() -> serde_json::Value {
    json!({
        "expand": null,
        "filter": null,
        "limit": null,
        "page": null,
        "end_before": null,
        "start_after": null
    })
}

#[tokio::test]
async fn test_invoice_authorize_and_capture() {
    let mut server = Server::new_async().await;
    let authorize = server
        .mock("POST", "/invoices/inv_1/authorize")
        .match_body(Matcher::Json(json!({
            "source": "card_1",
            "expand": null,
            "filter": null
        })))
        .with_status(200)
        .with_body(json!({"success": true}).to_string())
        .expect(1)
        .create_async()
        .await;
    let capture = server
        .mock("POST", "/invoices/inv_1/capture")
        .match_body(Matcher::PartialJson(json!({"source": "cust_1"})))
        .with_status(200)
        .with_body(json!({"success": true}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let invoices = client.invoices();
    invoices.authorize("inv_1", "card_1", None).await.unwrap();
    invoices.capture("inv_1", "cust_1", None).await.unwrap();

    authorize.assert_async().await;
    capture.assert_async().await;
}

#[tokio::test]
async fn test_invoice_authorize_declined() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/invoices/inv_1/authorize")
        .with_status(402)
        .with_body(
            json!({
                "success": false,
                "message": "The card was declined.",
                "error_type": "card.declined"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let error = client
        .invoices()
        .authorize("inv_1", "card_1", None)
        .await
        .unwrap_err();

    assert_eq!(error.api_code(), Some("card.declined"));
    assert_eq!(error.status(), Some(402));
}

#[tokio::test]
async fn test_invoice_customer_operations() {
    let mut server = Server::new_async().await;
    let get = server
        .mock("GET", "/invoices/inv_1/customers")
        .match_body(Matcher::Json(empty_options_body()))
        .with_status(200)
        .with_body(json!({"success": true, "customer": {"id": "cust_1"}}).to_string())
        .expect(1)
        .create_async()
        .await;
    let assign = server
        .mock("POST", "/invoices/inv_1/customers")
        .match_body(Matcher::Json(json!({
            "customer_id": "cust_2",
            "expand": null,
            "filter": null
        })))
        .with_status(200)
        .with_body(
            json!({"success": true, "customer": {"id": "cust_2", "email": "a@b.c"}}).to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let customer = client.invoices().customer("inv_1", None).await.unwrap();
    assert_eq!(customer.id, "cust_1");

    let customer = client
        .invoices()
        .assign_customer("inv_1", "cust_2", None)
        .await
        .unwrap();
    assert_eq!(customer.id, "cust_2");
    assert_eq!(customer.email.as_deref(), Some("a@b.c"));

    get.assert_async().await;
    assign.assert_async().await;
}

#[tokio::test]
async fn test_invoice_customer_action() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/invoices/inv_1/gateway-configurations/gway_conf_1/customer-action",
        )
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "customer_action": {"type": "redirect", "value": "https://pay.example/3ds"}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let action = client
        .invoices()
        .customer_action("inv_1", "gway_conf_1", None)
        .await
        .unwrap();

    assert_eq!(action.action_type, "redirect");
    assert_eq!(action.value, "https://pay.example/3ds");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_invoice_transaction_and_void() {
    let mut server = Server::new_async().await;
    let transaction = server
        .mock("GET", "/invoices/inv_1/transactions")
        .with_status(200)
        .with_body(
            json!({"success": true, "transaction": {"id": "tr_1", "status": "voided"}})
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let void = server
        .mock("POST", "/invoices/inv_1/void")
        .match_body(Matcher::Json(empty_options_body()))
        .with_status(200)
        .with_body(json!({"success": true}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(server.url());
    client.invoices().void("inv_1", None).await.unwrap();
    let tr = client.invoices().transaction("inv_1", None).await.unwrap();
    assert_eq!(tr.status, "voided");

    transaction.assert_async().await;
    void.assert_async().await;
}

#[tokio::test]
async fn test_invoice_all_is_paginated() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/invoices")
        .match_body(Matcher::Json(json!({
            "expand": null,
            "filter": null,
            "limit": 2,
            "page": null,
            "end_before": null,
            "start_after": "inv_9"
        })))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "invoices": [
                    {"id": "inv_10", "name": "A", "amount": "1.00", "currency": "USD"},
                    {"id": "inv_11", "name": "B", "amount": "2.00", "currency": "EUR"}
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let options = CallOptions::new().with_limit(2).with_start_after("inv_9");
    let invoices = client.invoices().all(Some(&options)).await.unwrap();

    assert_eq!(invoices.len(), 2);
    assert_eq!(invoices[0].id, "inv_10");
    assert_eq!(invoices[1].currency, "EUR");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_invoice_create_sends_mutable_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/invoices")
        .match_header("Idempotency-Key", "order-42")
        .match_body(Matcher::Json(json!({
            "name": "Order #42",
            "amount": "10.00",
            "currency": "USD",
            "metadata": {"order": "42"},
            "request_email": false,
            "request_shipping": false,
            "return_url": "https://shop.example/ok",
            "cancel_url": null,
            "expand": null,
            "filter": null
        })))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "invoice": {
                    "id": "inv_42",
                    "name": "Order #42",
                    "amount": "10.00",
                    "currency": "USD",
                    "url": "https://checkout.processout.com/inv_42",
                    "sandbox": true
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let invoice = Invoice::new("Order #42", "10.00", "USD")
        .with_metadata("order", "42")
        .with_return_url("https://shop.example/ok");
    let options = CallOptions::new().with_idempotency_key("order-42");

    let created = client
        .invoices()
        .create(&invoice, Some(&options))
        .await
        .unwrap();

    assert_eq!(created.id, "inv_42");
    assert!(created.sandbox);
    assert_eq!(
        created.url.as_deref(),
        Some("https://checkout.processout.com/inv_42")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_tailored_invoice_lifecycle() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/tailored-invoices")
        .match_body(Matcher::PartialJson(json!({
            "name": "Monthly",
            "amount": "4.99",
            "currency": "EUR",
            "custom": "plan-basic"
        })))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "tailored_invoice": {"id": "tinv_1", "name": "Monthly", "amount": "4.99", "currency": "EUR"}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let save = server
        .mock("PUT", "/tailored-invoices/tinv_1")
        .match_body(Matcher::PartialJson(json!({"name": "Monthly (new)"})))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "tailored_invoice": {"id": "tinv_1", "name": "Monthly (new)"}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let invoice = server
        .mock("POST", "/tailored-invoices/tinv_1/invoices")
        .match_body(Matcher::Json(empty_options_body()))
        .with_status(200)
        .with_body(json!({"success": true, "invoice": {"id": "inv_7"}}).to_string())
        .expect(1)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/tailored-invoices/tinv_1")
        .with_status(200)
        .with_body(json!({"success": true}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let tailored = client.tailored_invoices();

    let mut created = tailored
        .create(
            &TailoredInvoice::new("Monthly", "4.99", "EUR").with_custom("plan-basic"),
            None,
        )
        .await
        .unwrap();
    assert_eq!(created.id, "tinv_1");

    created.name = "Monthly (new)".to_string();
    let saved = tailored.save(&created, None).await.unwrap();
    assert_eq!(saved.name, "Monthly (new)");

    let generated = tailored.invoice("tinv_1", None).await.unwrap();
    assert_eq!(generated.id, "inv_7");

    tailored.delete("tinv_1", None).await.unwrap();

    create.assert_async().await;
    save.assert_async().await;
    invoice.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_tailored_invoice_find_and_all() {
    let mut server = Server::new_async().await;
    let _find = server
        .mock("GET", "/tailored-invoices/tinv_1")
        .with_status(200)
        .with_body(
            json!({"success": true, "tailored_invoice": {"id": "tinv_1", "name": "Monthly"}})
                .to_string(),
        )
        .create_async()
        .await;
    let all = server
        .mock("GET", "/tailored-invoices")
        .match_body(Matcher::Json(empty_paginated_body()))
        .with_status(200)
        .with_body(json!({"success": true, "tailored_invoices": []}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let found = client.tailored_invoices().find("tinv_1", None).await.unwrap();
    assert_eq!(found.name, "Monthly");

    let listed = client.tailored_invoices().all(None).await.unwrap();
    assert!(listed.is_empty());
    all.assert_async().await;
}

#[tokio::test]
async fn test_refund_operations() {
    let mut server = Server::new_async().await;
    let apply = server
        .mock("POST", "/transactions/tr_1/refunds")
        .match_body(Matcher::Json(json!({
            "amount": "2.50",
            "metadata": null,
            "reason": "duplicate",
            "information": "charged twice",
            "expand": null,
            "filter": null,
            "limit": null,
            "page": null,
            "end_before": null,
            "start_after": null
        })))
        .with_status(200)
        .with_body(json!({"success": true}).to_string())
        .expect(1)
        .create_async()
        .await;
    let find = server
        .mock("GET", "/transactions/tr_1/refunds/ref_1")
        .match_body(Matcher::Json(empty_paginated_body()))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "refund": {"id": "ref_1", "amount": "2.50", "reason": "duplicate"}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let all = server
        .mock("GET", "/transactions/tr_1/refunds")
        .with_status(200)
        .with_body(
            json!({"success": true, "refunds": [{"id": "ref_1", "amount": "2.50"}]}).to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let refunds = client.refunds();

    let refund = Refund::new("2.50", "duplicate").with_information("charged twice");
    refunds.apply("tr_1", &refund, None).await.unwrap();

    let found = refunds.find("tr_1", "ref_1", None).await.unwrap();
    assert_eq!(found.id, "ref_1");
    assert_eq!(found.reason.as_deref(), Some("duplicate"));

    let listed = refunds.all("tr_1", None).await.unwrap();
    assert_eq!(listed.len(), 1);

    apply.assert_async().await;
    find.assert_async().await;
    all.assert_async().await;
}

#[tokio::test]
async fn test_refund_amount_too_high() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/transactions/tr_1/refunds")
        .with_status(400)
        .with_body(
            json!({
                "success": false,
                "message": "The refund amount is greater than the available amount.",
                "error_type": "refund.amount-too-high"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let error = client
        .refunds()
        .apply("tr_1", &Refund::new("999.00", "fraud"), None)
        .await
        .unwrap_err();

    assert_eq!(error.api_code(), Some("refund.amount-too-high"));
}

#[tokio::test]
async fn test_transaction_operations() {
    let mut server = Server::new_async().await;
    let all = server
        .mock("GET", "/transactions")
        .match_body(Matcher::PartialJson(json!({"page": 3})))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "transactions": [
                    {"id": "tr_1", "status": "completed", "fee": "0.30", "created_at": "2017-01-02T15:04:05Z"},
                    {"id": "tr_2", "status": "failed"}
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let find = server
        .mock("GET", "/transactions/tr_2")
        .with_status(200)
        .with_body(
            json!({"success": true, "transaction": {"id": "tr_2", "status": "failed"}})
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let transactions = client
        .transactions()
        .all(Some(&CallOptions::new().with_page(3)))
        .await
        .unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].fee.as_deref(), Some("0.30"));
    assert!(transactions[0].created_at.is_some());

    let found = client.transactions().find("tr_2", None).await.unwrap();
    assert_eq!(found.status, "failed");

    all.assert_async().await;
    find.assert_async().await;
}

#[tokio::test]
async fn test_transaction_find_tolerates_null_fields() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/transactions/tr_3")
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "transaction": {"id": "tr_3", "status": null, "fee": null, "sandbox": null}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let transaction = client.transactions().find("tr_3", None).await.unwrap();

    assert_eq!(transaction.id, "tr_3");
    assert_eq!(transaction.status, "");
    assert!(transaction.fee.is_none());
    assert!(!transaction.sandbox);
}

#[tokio::test]
async fn test_transaction_all_failure_ignores_list_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/transactions")
        .with_status(401)
        .with_body(
            json!({
                "success": false,
                "message": "The project could not be authenticated.",
                "error_type": "request.authentication.invalid",
                "transactions": null
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let error = client.transactions().all(None).await.unwrap_err();

    assert_eq!(error.api_code(), Some("request.authentication.invalid"));
    assert_eq!(error.status(), Some(401));
    assert_eq!(error.api_kind(), Some(crate::ApiErrorKind::Authentication));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(r"^/transactions/tr_\d+$".to_string()))
        .with_status(200)
        .with_body(json!({"success": true, "transaction": {"id": "tr_x"}}).to_string())
        .expect(5)
        .create_async()
        .await;

    let client = create_test_client(server.url());
    let mut handles = Vec::new();
    for i in 0..5 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .transactions()
                .find(&format!("tr_{}", i), None)
                .await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
    mock.assert_async().await;
}
