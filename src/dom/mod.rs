// ============================================================================
// DOM MODULE - Helpers sobre web_sys
// ============================================================================

pub mod attrs;
pub mod navigation;

pub use attrs::PassthroughAttrs;
pub use navigation::{current_path, is_modified_click, navigate, window};
