use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscat::mcp::{TsCatMcpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TsCatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["includes"], json!(["nls"]));
    assert_eq!(json_result["config"]["ignoreContexts"], json!([]));
    assert_eq!(json_result["config"]["pluralForms"], json!({}));
    assert!(json_result["config"]["suspiciousPatterns"].is_array());
}

#[tokio::test]
async fn test_get_config_from_tscatrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "includes": ["translations"],
            "ignoreContexts": ["QWindowsDirect2DIntegration"],
            "pluralForms": { "eo": 2 }
        }))
        .unwrap();

    let server = TsCatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["includes"], json!(["translations"]));
    assert_eq!(
        json_result["config"]["ignoreContexts"],
        json!(["QWindowsDirect2DIntegration"])
    );
    assert_eq!(json_result["config"]["pluralForms"]["eo"], 2);
}

#[tokio::test]
async fn test_get_config_invalid_file_is_an_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "suspiciousPatterns": ["("] }))
        .unwrap();

    let server = TsCatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let err = server.get_config(params).await.unwrap_err();
    assert!(err.message.contains("Failed to load config"));
}
