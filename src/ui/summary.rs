// ============================================================================
// MCLang - 结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 合并结果与扫描结果的汇总显示
// 边界:
//   - ✅ 统计信息格式化输出
//   - ✅ 国际化文本支持
//   - ❌ 不应包含具体业务逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use colored::Colorize;
use std::io::{self, Write};

use crate::models::lang::MergeSummary;
use crate::models::report::ScanReport;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 打印合并汇总
pub fn print_merge_summary(summary: &MergeSummary) {
    Logger::success(format!(
        "{} {}",
        icons::SUCCESS,
        tf!(
            "merge.done",
            summary.total_keys,
            summary.source_files,
            icons::ARROW,
            summary.output_path.display()
        )
    ));
    let _ = io::stdout().flush();
}

/// 打印扫描汇总（按状态计数）
pub fn print_scan_summary(report: &ScanReport) {
    let summary_lines = vec![
        "".to_string(),
        t!("scan.summary_title").bold().to_string(),
        "═══════════════════════════════════════".to_string(),
        format!("{} {}", icons::PACKAGE, tf!("scan.total_jars", report.total_jars)),
        format!("{} {}", icons::SUMMARY, tf!("scan.total_flagged", report.flagged.len())),
    ];

    for line in summary_lines {
        Logger::info(line);
    }

    for (status, count) in report.count_by_status() {
        Logger::info(format!("  {} {}: {}", icons::WARNING, status, count));
    }

    let _ = io::stdout().flush();
}
