use dto::product::Product;
use dto::upload_report::{ProcessedRow, ReportDetail, ReportStatus, UploadReport};
use std::sync::OnceLock;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub static BACKEND_MOCK_SERVER_URI: OnceLock<String> = OnceLock::new();

const DEMO_PRODUCTS: [(u64, &str); 5] = [
    (1, "1 - Mouse"),
    (2, "2 - Monitor"),
    (3, "3 - Teclado"),
    (15, "15 - Cadeira giratória"),
    (42, "42 - Notebook"),
];
const SESSION_COOKIE: &str = "access_token=demo-token; Path=/; HttpOnly; SameSite=Lax";

/// Start a mock backend answering like the real one would, with `demo`/`demo` as the only valid login.
pub async fn init_demo() {
    let mock_server = MockServer::start().await;
    mock_login(&mock_server).await;
    mock_logout(&mock_server).await;
    mock_products(&mock_server).await;
    mock_upload(&mock_server).await;

    BACKEND_MOCK_SERVER_URI.get_or_init(|| mock_server.uri());
    info!("Demo backend listening on {}", mock_server.uri());
    // The mock server stops once dropped: it has to live as long as the app.
    std::mem::forget(mock_server);
}

async fn mock_login(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string("username=demo&password=demo"))
        .respond_with(ResponseTemplate::new(200).append_header("Set-Cookie", SESSION_COOKIE))
        .with_priority(1)
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_raw(
            r#"{"detail": "Usuário ou senha inválidos"}"#,
            "application/json",
        ))
        .mount(mock_server)
        .await;
}

async fn mock_logout(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(
            ResponseTemplate::new(200)
                .append_header("Set-Cookie", "access_token=; Path=/; Max-Age=0"),
        )
        .mount(mock_server)
        .await;
}

async fn mock_products(mock_server: &MockServer) {
    let products: Vec<Product> = DEMO_PRODUCTS
        .iter()
        .map(|(id, text)| Product::new(*id, (*text).to_owned()))
        .collect();
    Mock::given(method("GET"))
        .and(path("/api/produtos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products))
        .mount(mock_server)
        .await;
}

async fn mock_upload(mock_server: &MockServer) {
    let report = UploadReport::new(
        Some(ReportStatus::Success),
        Some(vec![ReportDetail::new(
            Some(2),
            Some("1".to_owned()),
            Some(ReportStatus::Success),
            Some("Linha importada".to_owned()),
        )]),
        Some(vec![ProcessedRow::new(true)]),
        None,
    );
    Mock::given(method("POST"))
        .and(path("/patrimonio/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(report))
        .mount(mock_server)
        .await;
}
