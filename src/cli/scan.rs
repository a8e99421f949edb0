// ============================================================================
// MCLang - CLI 进度定义扫描命令
// ============================================================================
//
// 文件: src/cli/scan.rs
// 职责: mclang-scan 的命令行接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用扫描器执行扫描
//   - ✅ 报告输出（stdout JSON / 文件）
//   - ❌ 不应包含进度定义分类逻辑
//   - ❌ 不应包含压缩包读取逻辑
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::{bootstrap, exit_code, GlobalArgs};
use crate::core::scanner::AdvancementScanner;
use crate::models::config::Config;
use crate::models::report::ScanReport;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::utils::paths::resolve_path;
use crate::{t, tf};

/// Scan mod jars for advancements with announce_to_chat=false or missing display
#[derive(Debug, Parser)]
#[command(name = "mclang-scan")]
#[command(about = "Scan mod jars for advancements with announce_to_chat=false or missing display")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct ScanCli {
    /// Path to mods directory
    #[arg(value_name = "MODS_DIR")]
    pub mods_dir: PathBuf,

    /// Output JSON report file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// mclang-scan 入口
pub fn run() -> ExitCode {
    let cli = ScanCli::parse();
    exit_code(handle_scan(cli))
}

pub fn handle_scan(cli: ScanCli) -> Result<()> {
    bootstrap(&cli.global, None)?;

    let mods_dir = resolve_path(&cli.mods_dir);
    if !mods_dir.is_dir() {
        anyhow::bail!(tf!("error.mods_dir_not_found", mods_dir.display()));
    }

    // stdout 模式下只输出 JSON 报告，进度条绘制在 stderr
    let scanner = AdvancementScanner::new(mods_dir)?.with_progress(Config::get_show_progress());
    let report = scanner.scan()?;

    match cli.output {
        Some(output) => {
            let output = resolve_path(&output);
            write_report(&report, &output)?;
            Logger::success(tf!("scan.report_saved", output.display()));
            summary::print_scan_summary(&report);
        }
        None => {
            let json = serde_json::to_string_pretty(&report).context(t!("error.serialize_output"))?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// 将报告写入文件（自动创建父目录）
pub fn write_report(report: &ScanReport, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).with_context(|| tf!("error.create_dir", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(report).context(t!("error.serialize_output"))?;
    fs::write(output, json).with_context(|| tf!("error.write_output", output.display()))?;
    Ok(())
}
