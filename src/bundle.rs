use serde::Serialize;

/// Build-time description of the client hydration bundle, handed to
/// the external bundler. Never touched while serving requests.
#[derive(Debug, Serialize)]
pub struct BundleConfig {
    pub entry: String,
    pub out_dir: String,
    pub file_name: String,
    pub format: ModuleFormat,
    pub plugins: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    Es,
    Cjs,
    Iife,
}

impl Default for BundleConfig {
    fn default() -> Self {

        BundleConfig {
            entry: "src/client.js".to_string(),
            out_dir: "dist".to_string(),
            file_name: "client.js".to_string(),
            format: ModuleFormat::Es,
            plugins: vec!["ui-transform".to_string()],
        }

    }
}

impl BundleConfig {
    /// Descriptor as JSON for the bundler to consume.
    pub fn to_json(&self) -> serde_json::Result<String> {

        serde_json::to_string_pretty(self)

    }
}
