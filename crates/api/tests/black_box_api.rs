use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = stockdeck_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn session_of(res: &reqwest::Response) -> String {
    res.headers()
        .get("x-session-id")
        .expect("every response carries a session id")
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn health_is_public() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn dashboard_summary_has_the_metric_cards_and_chart_series() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!("{}/dashboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total_products"], 5);
    assert_eq!(body["total_units"], 59);
    assert_eq!(body["low_stock"], 3);
    assert_eq!(body["reorder_needed"], 3);

    let suppliers: Vec<&str> = body["units_by_supplier"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["supplier"].as_str().unwrap())
        .collect();
    assert_eq!(suppliers, vec!["ABC", "XYZ", "ACC"]);
    assert_eq!(body["stock_levels"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn mobile_filter_returns_both_phones_in_catalog_order() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!(
            "{}/inventory?category=Mobile&price_min=0&price_max=2000",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let rows: Vec<(&str, u64)> = body["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| (r["product"].as_str().unwrap(), r["qty"].as_u64().unwrap()))
        .collect();
    assert_eq!(rows, vec![("iPhone 15", 12), ("Galaxy S24", 30)]);

    assert_eq!(body["categories"][0], "All");
    assert_eq!(body["suppliers"][0], "All");
}

#[tokio::test]
async fn unfiltered_inventory_is_the_full_catalog() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!("{}/inventory", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["rows"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn export_is_a_csv_attachment_named_inventory_csv() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/inventory/export", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "text/csv");
    assert_eq!(
        res.headers()["content-disposition"],
        "attachment; filename=\"inventory.csv\""
    );

    let body = res.text().await.unwrap();
    let mut lines = body.lines();
    assert_eq!(
        lines.next().unwrap(),
        "SKU,Product,Category,Qty,MinStock,Price,Supplier"
    );
    assert_eq!(lines.count(), 5);
}

#[tokio::test]
async fn filtered_export_carries_only_the_filtered_rows() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body = client
        .get(format!(
            "{}/inventory/export?supplier=ACC",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("E505,Logitech Mouse"));
}

#[tokio::test]
async fn chat_answers_the_mouse_lookup() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(format!("{}/chat", server.base_url))
        .json(&json!({ "text": "mouse" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let transcript = body["transcript"].as_array().unwrap();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0]["role"], "user");
    assert_eq!(transcript[1]["role"], "assistant");

    let reply = transcript[1]["text"].as_str().unwrap();
    assert!(reply.contains("SKU: E505"));
    assert!(reply.contains("Qty: 3"));
    assert!(reply.contains("Supplier: ACC"));
    assert!(reply.contains("Price: $29"));
}

#[tokio::test]
async fn chat_miss_is_a_normal_answer_not_an_error() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/chat", server.base_url))
        .json(&json!({ "text": "zzz-nonexistent" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let reply = body["transcript"][1]["text"].as_str().unwrap();
    assert_eq!(
        reply,
        "Sorry, I couldn't find a matching product in the inventory."
    );
}

#[tokio::test]
async fn blank_chat_input_is_rejected_and_appends_nothing() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/chat", server.base_url))
        .json(&json!({ "text": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let session = session_of(&res);

    let body: serde_json::Value = client
        .get(format!("{}/chat", server.base_url))
        .header("x-session-id", &session)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body["transcript"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn navigating_to_orders_shows_placeholder_and_keeps_the_transcript() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/chat", server.base_url))
        .json(&json!({ "text": "mouse" }))
        .send()
        .await
        .unwrap();
    let session = session_of(&res);

    let body: serde_json::Value = client
        .post(format!("{}/navigate", server.base_url))
        .header("x-session-id", &session)
        .json(&json!({ "page": "Orders" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["page"], "Orders");
    assert_eq!(body["view"], "under_construction");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("under construction"));

    let body: serde_json::Value = client
        .get(format!("{}/chat", server.base_url))
        .header("x-session-id", &session)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["transcript"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_page_names_are_rejected_and_leave_state_untouched() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/page", server.base_url))
        .send()
        .await
        .unwrap();
    let session = session_of(&res);

    let res = client
        .post(format!("{}/navigate", server.base_url))
        .header("x-session-id", &session)
        .json(&json!({ "page": "reports" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = client
        .get(format!("{}/page", server.base_url))
        .header("x-session-id", &session)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["page"], "Dashboard");
}

#[tokio::test]
async fn sessions_never_observe_each_other() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Session A navigates to chat and asks a question.
    let res = client
        .post(format!("{}/navigate", server.base_url))
        .json(&json!({ "page": "Chat" }))
        .send()
        .await
        .unwrap();
    let session_a = session_of(&res);

    client
        .post(format!("{}/chat", server.base_url))
        .header("x-session-id", &session_a)
        .json(&json!({ "text": "macbook" }))
        .send()
        .await
        .unwrap();

    // A fresh session starts on the dashboard with an empty transcript.
    let res = client
        .get(format!("{}/page", server.base_url))
        .send()
        .await
        .unwrap();
    let session_b = session_of(&res);
    assert_ne!(session_a, session_b);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["page"], "Dashboard");

    let body: serde_json::Value = client
        .get(format!("{}/chat", server.base_url))
        .header("x-session-id", &session_b)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body["transcript"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn resetting_a_session_starts_it_fresh() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/navigate", server.base_url))
        .json(&json!({ "page": "Settings" }))
        .send()
        .await
        .unwrap();
    let session = session_of(&res);

    let res = client
        .delete(format!("{}/session", server.base_url))
        .header("x-session-id", &session)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let body: serde_json::Value = client
        .get(format!("{}/page", server.base_url))
        .header("x-session-id", &session)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["page"], "Dashboard");
}
