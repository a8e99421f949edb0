// ============================================================================
// MCLang - 进度定义扫描器
// ============================================================================
//
// 文件: src/core/scanner.rs
// 职责: 扫描 mods 中的进度（advancement）定义并标记异常条目
// 边界:
//   - ✅ mods 目录 jar 遍历（按文件名排序）
//   - ✅ 进度定义路径匹配
//   - ✅ 进度定义分类（invalid_json / no_display / announce_to_chat_false / bad_jar）
//   - ✅ 报告生成
//   - ❌ 不应包含报告输出逻辑
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use serde_json::Value;
use std::path::{Path, PathBuf};

use super::archive;
use crate::models::report::{DisplayState, Finding, FlaggedEntry, ScanReport};
use crate::ui::progress::JarProgress;
use crate::utils::constants::ADVANCEMENT_PATTERN;
use crate::utils::logger::Logger;
use crate::tf;

/// `*` 不跨越目录分隔符
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// 对单个进度定义进行分类；正常定义返回 None
pub fn classify_advancement(definition: &Value) -> Option<Finding> {
    match DisplayState::from_definition(definition) {
        DisplayState::Absent => Some(Finding::no_display()),
        DisplayState::Present {
            announce_to_chat: Some(false),
        } => Some(Finding::AnnounceToChatFalse {
            announce_to_chat: false,
        }),
        DisplayState::Present { .. } => None,
    }
}

/// 进度定义扫描器
pub struct AdvancementScanner {
    /// mods 目录
    mods_dir: PathBuf,
    /// 进度定义路径模式
    pattern: Pattern,
    /// 是否显示进度条
    show_progress: bool,
}

impl AdvancementScanner {
    /// 创建新的扫描器
    pub fn new(mods_dir: PathBuf) -> Result<Self> {
        let pattern = Pattern::new(ADVANCEMENT_PATTERN)
            .with_context(|| tf!("error.invalid_pattern", ADVANCEMENT_PATTERN))?;

        Ok(Self {
            mods_dir,
            pattern,
            show_progress: false,
        })
    }

    /// 启用进度条
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// 压缩包内路径是否为进度定义
    pub fn is_advancement_path(&self, name: &str) -> bool {
        self.pattern.matches_with(name, MATCH_OPTIONS)
    }

    /// 扫描 mods 目录下全部 jar
    pub fn scan(&self) -> Result<ScanReport> {
        let jars = archive::list_jars(&self.mods_dir)
            .with_context(|| tf!("error.list_mods", self.mods_dir.display()))?;

        tracing::debug!("scanning {} jars in {}", jars.len(), self.mods_dir.display());

        let progress = JarProgress::new(jars.len(), self.show_progress);
        let mut flagged = Vec::new();
        for jar in &jars {
            progress.start(&jar_name(jar));
            let entries = self.scan_jar(jar);
            if entries.iter().any(|e| matches!(e.finding, Finding::BadJar { .. })) {
                progress.suspend(|| Logger::warn(tf!("scan.bad_jar", jar.display())));
            }
            flagged.extend(entries);
            progress.advance();
        }
        progress.finish();

        Ok(ScanReport {
            mods_dir: self.mods_dir.display().to_string(),
            total_jars: jars.len(),
            flagged,
        })
    }

    /// 扫描单个 jar；压缩包无效时返回一个 bad_jar 条目
    pub fn scan_jar(&self, jar: &Path) -> Vec<FlaggedEntry> {
        let jar_label = jar_name(jar);

        let mut archive = match archive::open_archive(jar) {
            Ok(archive) => archive,
            Err(err) => {
                return vec![FlaggedEntry {
                    jar: jar_label,
                    path: String::new(),
                    finding: Finding::BadJar {
                        reason: err.reason(),
                    },
                }]
            }
        };

        let mut entries = Vec::new();
        for name in archive::entry_names(&archive) {
            if !self.is_advancement_path(&name) {
                continue;
            }

            // 读取失败与解析失败同样记为 invalid_json
            let finding = match archive::read_entry_json(&mut archive, &name, &jar_label) {
                Ok(definition) => classify_advancement(&definition),
                Err(err) => Some(Finding::InvalidJson {
                    reason: err.reason(),
                }),
            };

            if let Some(finding) = finding {
                tracing::debug!("{}::{} -> {}", jar_label, name, finding.status());
                entries.push(FlaggedEntry {
                    jar: jar_label.clone(),
                    path: name,
                    finding,
                });
            }
        }

        entries
    }
}

/// jar 文件名
fn jar_name(jar: &Path) -> String {
    jar.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| jar.display().to_string())
}
