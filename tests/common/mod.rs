#![allow(dead_code)]

use serde_json::json;
use syntaxguard::config::ServiceConfig;
use syntaxguard::repl::io::{scripted_input, SharedBuffer};
use syntaxguard::{
    AppController, CorrectionService, MemoryClipboard, TerminalRenderer, UserAction,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CORRECT_PATH: &str = "/api/correct";

pub const REFERENCE: &str = "**Names**\n* Use full names on first reference.";

/// Mock correction endpoint answering every POST with `response`
pub async fn correction_server(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CORRECT_PATH))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

pub fn success_body() -> serde_json::Value {
    json!({
        "correctedText": "Jane Doe\nChief Executive Officer",
        "notes": ["Spelled out the title", "Moved the title to its own line"],
        "alternatives": ["Jane Doe, CEO"]
    })
}

pub fn service_for(server: &MockServer) -> CorrectionService {
    let endpoint = format!("{}{}", server.uri(), CORRECT_PATH);
    CorrectionService::new(&ServiceConfig::with_endpoint(endpoint)).unwrap()
}

pub fn unconfigured_service() -> CorrectionService {
    CorrectionService::new(&ServiceConfig::unconfigured()).unwrap()
}

/// Controller wired to in-memory input, output and clipboard
pub struct Harness {
    pub app: AppController<SharedBuffer>,
    pub output: SharedBuffer,
    pub clipboard: MemoryClipboard,
}

impl Harness {
    pub fn new(service: CorrectionService, actions: Vec<UserAction>) -> Self {
        let output = SharedBuffer::new();
        let clipboard = MemoryClipboard::new();
        let app = AppController::new(
            service,
            Box::new(clipboard.clone()),
            TerminalRenderer::new(output.clone(), false),
            scripted_input(actions),
            REFERENCE,
        );
        Self {
            app,
            output,
            clipboard,
        }
    }
}
