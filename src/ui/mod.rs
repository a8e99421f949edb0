// ============================================================================
// MCLang - UI 模块
// ============================================================================

pub mod progress;
pub mod summary;

pub use progress::JarProgress;
