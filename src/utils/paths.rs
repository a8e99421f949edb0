// ============================================================================
// MCLang - 路径工具
// ============================================================================
//
// 文件: src/utils/paths.rs
// 职责: 命令行路径参数规范化
// 边界:
//   - ✅ 展开开头的 `~`
//   - ✅ 转换为绝对路径
//   - ❌ 不应检查路径是否存在
//
// ============================================================================

use std::path::{Path, PathBuf};

/// 展开 `~` 并转换为绝对路径（不解析符号链接、不要求路径存在）
pub fn resolve_path(raw: &Path) -> PathBuf {
    let expanded = expand_home(raw);
    std::path::absolute(&expanded).unwrap_or(expanded)
}

fn expand_home(raw: &Path) -> PathBuf {
    let mut components = raw.components();
    match components.next() {
        Some(std::path::Component::Normal(first)) if first == "~" => match home_dir() {
            Some(home) => home.join(components.as_path()),
            None => raw.to_path_buf(),
        },
        _ => raw.to_path_buf(),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_becomes_absolute() {
        let resolved = resolve_path(Path::new("mods"));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("mods"));
    }

    #[test]
    fn test_tilde_is_expanded() {
        if let Some(home) = home_dir() {
            let resolved = resolve_path(Path::new("~/.minecraft/mods"));
            assert_eq!(resolved, std::path::absolute(home.join(".minecraft/mods")).unwrap());
        }
    }

    #[test]
    fn test_tilde_inside_name_is_literal() {
        let resolved = resolve_path(Path::new("/tmp/~mods"));
        assert_eq!(resolved, PathBuf::from("/tmp/~mods"));
    }
}
