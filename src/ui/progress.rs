// ============================================================================
// MCLang - 压缩包进度条组件
// ============================================================================
//
// 文件: src/ui/progress.rs
// 职责: 逐个处理 jar 时的终端进度显示
// 边界:
//   - ✅ 进度条创建、推进和结束
//   - ✅ 非终端或禁用时隐藏
//   - ✅ 进度条显示期间的日志输出协调
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use indicatif::{ProgressBar, ProgressStyle};

use crate::utils::constants::{progress_chars, spinner_chars};

/// jar 处理进度条（绘制到 stderr）
pub struct JarProgress {
    bar: ProgressBar,
}

impl JarProgress {
    /// 创建进度条；未启用或 stderr 不是终端时返回隐藏的进度条
    pub fn new(total: usize, enabled: bool) -> Self {
        if !enabled || total == 0 || !atty::is(atty::Stream::Stderr) {
            return Self::hidden();
        }

        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}",
        )
        .map(|style| {
            style
                .progress_chars(progress_chars::BAR)
                .tick_chars(spinner_chars::BASE)
        })
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);

        Self { bar }
    }

    /// 不显示任何内容的进度条
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// 开始处理某个 jar
    pub fn start(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// 完成一个 jar
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// 暂时隐藏进度条执行输出，避免与日志交错
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// 结束并清除进度条
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for JarProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
