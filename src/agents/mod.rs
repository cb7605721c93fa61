pub mod manifest_editor;
pub mod project_scanner;

pub use manifest_editor::ManifestEditor;
pub use project_scanner::ProjectScannerAgent;
