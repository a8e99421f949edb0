// ============================================================================
// MCLang - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型子模块导出
//
// ============================================================================

pub mod config;
pub mod lang;
pub mod report;

pub use lang::{AssetIndex, MergeSummary, TranslationMap};
pub use report::{DisplayState, Finding, FlaggedEntry, ScanReport};
