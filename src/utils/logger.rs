// ============================================================================
// MCLang - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 面向用户的日志输出和 tracing 初始化
// 边界:
//   - ✅ 日志级别前缀与颜色
//   - ✅ 信息输出到 stdout，警告/错误输出到 stderr
//   - ✅ tracing 订阅器初始化
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件日志写入
//
// ============================================================================

use tracing_subscriber::EnvFilter;

use super::colors::Colors;
use super::constants::LOG_PREFIX;

/// 简单的日志工具
pub struct Logger;

impl Logger {
    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::info(LOG_PREFIX), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", Colors::warn("[WARN]"), msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", Colors::error("[ERROR]"), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::success(LOG_PREFIX), msg.as_ref());
    }

    /// 初始化 tracing 诊断输出（写入 stderr）
    ///
    /// 优先使用 RUST_LOG；未设置时 verbose 为 debug，否则为 warn。
    pub fn init_tracing(verbose: bool) {
        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("mclang={}", default_level)));

        // 测试中可能重复初始化，忽略错误
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }
}
