// ============================================================================
// MCLang - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: 两个命令行工具的公共参数与启动流程
// 边界:
//   - ✅ 公共命令行参数定义
//   - ✅ 配置初始化与运行时参数合并
//   - ✅ 日志 / 颜色初始化
//   - ✅ 退出码处理
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含业务逻辑处理
//
// ============================================================================

pub mod merge;
pub mod scan;

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::models::config::{Config, RuntimeArgs};
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;

/// 两个工具共用的参数
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Config file (default: ./mclang.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Disable progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// 初始化全局配置、颜色和日志
pub fn bootstrap(global: &GlobalArgs, locale: Option<String>) -> Result<()> {
    Config::initialize(global.config.as_deref())?;
    Config::merge_runtime_args(build_runtime_args(global, locale))?;

    Colors::configure(Config::get_colored());
    Logger::init_tracing(Config::get_verbose());
    Ok(())
}

/// 将命令结果转换为进程退出码，错误输出到 stderr
pub fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            Logger::error(format!("{:#}", err));
            ExitCode::from(1)
        }
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(global: &GlobalArgs, locale: Option<String>) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if global.verbose { Some(true) } else { None },
        colored: if global.no_color { Some(false) } else { None },
        show_progress: if global.no_progress { Some(false) } else { None },
        language: global.language.clone(),
        locale,
    }
}
