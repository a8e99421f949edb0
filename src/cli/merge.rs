// ============================================================================
// MCLang - CLI 语言文件合并命令
// ============================================================================
//
// 文件: src/cli/merge.rs
// 职责: mclang-merge 的命令行接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 路径参数规范化与校验
//   - ✅ 默认输出路径推导
//   - ✅ 调用合并器并输出汇总
//   - ❌ 不应包含语言文件读取与合并逻辑
//   - ❌ 不应包含来源选择策略
//
// ============================================================================

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::{bootstrap, exit_code, GlobalArgs};
use crate::core::merger::{AssetSource, LangMerger, MergeOptions};
use crate::models::config::Config;
use crate::ui::summary;
use crate::utils::constants::DEFAULT_OUTPUT_DIR;
use crate::utils::logger::Logger;
use crate::utils::paths::resolve_path;
use crate::{t, tf};

/// Merge a language file from a Minecraft version jar and mods
#[derive(Debug, Parser)]
#[command(name = "mclang-merge")]
#[command(about = "Merge zh_cn.json from a Minecraft version jar and mods")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct MergeCli {
    /// Minecraft version directory (e.g. .../.minecraft/versions/1.21.1-NeoForge)
    #[arg(value_name = "VERSION_DIR")]
    pub version_dir: Option<PathBuf>,

    /// Path to vanilla Minecraft jar (e.g. .../.minecraft/versions/1.21.1/1.21.1.jar)
    #[arg(long, value_name = "JAR")]
    pub base_jar: Option<PathBuf>,

    /// Path to assets index JSON (e.g. .../.minecraft/assets/indexes/1.21.1.json)
    #[arg(long, value_name = "FILE")]
    pub assets_index: Option<PathBuf>,

    /// Path to assets objects directory (e.g. .../.minecraft/assets/objects)
    #[arg(long, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Path to mods directory (default: <VERSION_DIR>/mods)
    #[arg(long, value_name = "DIR")]
    pub mods_dir: Option<PathBuf>,

    /// Output JSON file path (default: <VERSION_DIR>/mcLang/<locale>.json)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip mods directory
    #[arg(long)]
    pub no_mods: bool,

    /// Game language code to merge (default: zh_cn)
    #[arg(long, value_name = "CODE")]
    pub locale: Option<String>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// mclang-merge 入口
pub fn run() -> ExitCode {
    let cli = MergeCli::parse();
    exit_code(handle_merge(cli))
}

pub fn handle_merge(cli: MergeCli) -> Result<()> {
    bootstrap(&cli.global, cli.locale.clone())?;

    let options = build_options(&cli, &Config::get_locale())?;
    Logger::info(t!("cli.merge.start"));

    let merger = LangMerger::new(options).with_progress(Config::get_show_progress());
    let result = merger.run()?;

    summary::print_merge_summary(&result);
    Ok(())
}

/// 校验参数并构建合并选项
pub fn build_options(cli: &MergeCli, locale: &str) -> Result<MergeOptions> {
    validate_locale(locale)?;

    let version_dir = match &cli.version_dir {
        Some(raw) => {
            let dir = resolve_path(raw);
            if !dir.is_dir() {
                anyhow::bail!(tf!("error.version_dir_not_found", dir.display()));
            }
            Some(dir)
        }
        None => None,
    };

    let output = match (&cli.output, &version_dir) {
        (Some(output), _) => resolve_path(output),
        (None, Some(dir)) => default_output_path(dir, locale),
        (None, None) => anyhow::bail!(t!("error.output_required")),
    };

    let assets = match (&cli.assets_index, &cli.assets_dir) {
        (Some(index), Some(objects_dir)) => Some(AssetSource {
            index: resolve_path(index),
            objects_dir: resolve_path(objects_dir),
        }),
        (None, None) => None,
        _ => {
            Logger::warn(t!("merge.assets_pair_incomplete"));
            None
        }
    };

    Ok(MergeOptions {
        version_dir,
        base_jar: cli.base_jar.as_deref().map(resolve_path),
        assets,
        mods_dir: cli.mods_dir.as_deref().map(resolve_path),
        skip_mods: cli.no_mods,
        output,
        locale: locale.to_string(),
    })
}

/// 默认输出路径：`<version_dir>/mcLang/<locale>.json`
pub fn default_output_path(version_dir: &Path, locale: &str) -> PathBuf {
    version_dir
        .join(DEFAULT_OUTPUT_DIR)
        .join(format!("{}.json", locale))
}

/// 语言代码只允许小写字母、数字和下划线（会被拼接进路径）
fn validate_locale(locale: &str) -> Result<()> {
    let valid = !locale.is_empty()
        && locale
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if !valid {
        anyhow::bail!(tf!("error.invalid_locale", locale));
    }
    Ok(())
}
