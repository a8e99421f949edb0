// ============================================================================
// MCLang - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
//
// ============================================================================

/// 日志前缀
pub const LOG_PREFIX: &str = "[MCLANG]";

/// 默认输出目录名（位于版本目录下）
pub const DEFAULT_OUTPUT_DIR: &str = "mcLang";

/// 版本目录下的 mods 子目录名
pub const MODS_DIR_NAME: &str = "mods";

/// 进度定义路径模式
pub const ADVANCEMENT_PATTERN: &str = "data/*/advancements/**/*.json";

/// 像素风格图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 警告图标
    pub const WARNING: &str = "!";
    /// 包图标
    pub const PACKAGE: &str = "●";
    /// 汇总图标
    pub const SUMMARY: &str = "◈";
    /// 箭头图标
    pub const ARROW: &str = "→";
}

/// 进度条字符
pub mod progress_chars {
    /// 进度条填充字符（已完成、当前、未完成）
    pub const BAR: &str = "█▓░";
}

/// 加载 spinner 字符
pub mod spinner_chars {
    pub const BASE: &str = "⠋⠙⠹⠸⠼⠴⠦⠧";
}
