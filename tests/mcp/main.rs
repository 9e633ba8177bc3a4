use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;


/// Test fixture for MCP integration tests
///
/// Manages a temporary project with catalogs under `nls/`.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("nls"))?;
        // Keep config discovery inside the fixture.
        fs::create_dir(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with catalogs
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_catalogs(vec![
    ///     ("qt_bg.ts", catalog("bg_BG", BODY)),
    /// ])?;
    /// ```
    pub fn with_catalogs(catalogs: Vec<(&str, String)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (name, content) in catalogs {
            fixture.write_catalog(name, &content)?;
        }
        Ok(fixture)
    }

    /// Write a catalog to nls/<name>
    pub fn write_catalog(&self, name: &str, content: &str) -> Result<()> {
        let path = self.project_root.join("nls").join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
        Ok(())
    }

    /// Write a .tscatrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".tscatrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Wrap `<context>` blocks into a catalog document.
pub fn catalog(language: &str, contexts: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS version=\"2.1\" language=\"{}\">\n{}</TS>\n",
        language, contexts
    )
}

/// One error (placeholder mismatch) and two warnings (unfinished).
pub const DIALOG_CONTEXTS: &str = r#"<context>
    <name>QFileDialog</name>
    <message>
        <source>Open %1</source>
        <translation>Отваряне</translation>
    </message>
    <message>
        <source>Save</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Internal error</source>
        <translation type="unfinished"></translation>
    </message>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n файл</numerusform>
            <numerusform>%n файла</numerusform>
        </translation>
    </message>
    <message>
        <source>Hide %1</source>
        <translation>Скриване на %1</translation>
    </message>
</context>
"#;

/// Bulgarian catalog with `DIALOG_CONTEXTS`
pub fn fixture_bg() -> Result<McpTestFixture> {
    McpTestFixture::with_catalogs(vec![("qt_bg.ts", catalog("bg_BG", DIALOG_CONTEXTS))])
}

/// A catalog with many unfinished entries, for pagination.
pub fn fixture_many_unfinished(count: usize) -> Result<McpTestFixture> {
    let messages: String = (0..count)
        .map(|i| {
            format!(
                "    <message>\n        <source>Entry {}</source>\n        <translation type=\"unfinished\"></translation>\n    </message>\n",
                i
            )
        })
        .collect();
    let contexts = format!("<context>\n    <name>QBulk</name>\n{}</context>\n", messages);
    McpTestFixture::with_catalogs(vec![("qt_bg.ts", catalog("bg_BG", &contexts))])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let text_content = result.content[0]
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
