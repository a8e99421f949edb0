// ============================================================================
// MCLang - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块声明与导出
//
// 两个命令行工具共用本库:
//   - mclang-merge: 合并版本 jar / 资源索引 / mods 中的语言文件
//   - mclang-scan:  扫描 mods 中缺少 display 或关闭聊天播报的进度定义
//
// ============================================================================

pub mod cli;
pub mod core;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;
