// ============================================================================
// MCLang - 压缩包工具
// ============================================================================
//
// 文件: src/core/archive.rs
// 职责: jar 压缩包定位、打开与条目读取
// 边界:
//   - ✅ mods / 版本目录中的 jar 列举（按文件名排序）
//   - ✅ 版本 jar 定位
//   - ✅ 压缩包打开与 JSON 条目读取
//   - ✅ 数据源错误类型定义
//   - ❌ 不应包含翻译合并逻辑
//   - ❌ 不应包含进度定义分类逻辑
//   - ❌ 不应包含日志输出
//
// ============================================================================

use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;
use zip::ZipArchive;

/// jar 文件扩展名
pub const JAR_EXTENSION: &str = "jar";

/// 读取条目时预分配的上限（条目头声明的大小不可信）
const MAX_PREALLOC: u64 = 1 << 20;

/// 数据源读取错误
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("archive not found: {0}")]
    ArchiveNotFound(PathBuf),

    #[error("bad archive {path}: {source}")]
    BadArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {location}: {source}")]
    InvalidJson {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{key} not found in assets index {index}")]
    AssetNotIndexed { key: String, index: PathBuf },

    #[error("assets object not found: {0}")]
    AssetObjectMissing(PathBuf),
}

impl SourceError {
    /// 仅描述错误本身，不含路径前缀（用于报告中的 reason 字段）
    pub fn reason(&self) -> String {
        match self {
            SourceError::BadArchive { source, .. } => source.to_string(),
            SourceError::Io { source, .. } => source.to_string(),
            SourceError::InvalidJson { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

/// 列出目录下（不递归）的所有 jar 文件，按文件名排序
pub fn list_jars(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let mut jars = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| SourceError::Io {
            location: dir.display().to_string(),
            source: e.into(),
        })?;

        if !entry.file_type().is_file() && !entry.path().is_file() {
            continue;
        }

        let is_jar = entry
            .path()
            .extension()
            .map(|ext| ext == JAR_EXTENSION)
            .unwrap_or(false);
        if is_jar {
            jars.push(entry.into_path());
        }
    }

    Ok(jars)
}

/// 在版本目录中定位主 jar
///
/// 优先 `<目录名>.jar`；否则取排序后的第一个 jar（多于一个时该选择是任意但确定的）。
pub fn find_version_jar(version_dir: &Path) -> Option<PathBuf> {
    if let Some(name) = version_dir.file_name() {
        let mut expected_name = name.to_os_string();
        expected_name.push(".");
        expected_name.push(JAR_EXTENSION);
        let expected = version_dir.join(expected_name);
        if expected.is_file() {
            return Some(expected);
        }
    }

    list_jars(version_dir).ok()?.into_iter().next()
}

/// 打开 jar 压缩包
pub fn open_archive(path: &Path) -> Result<ZipArchive<File>, SourceError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SourceError::ArchiveNotFound(path.to_path_buf())
        } else {
            SourceError::Io {
                location: path.display().to_string(),
                source: e,
            }
        }
    })?;

    ZipArchive::new(file).map_err(|e| SourceError::BadArchive {
        path: path.to_path_buf(),
        source: e,
    })
}

/// 压缩包内全部条目名称（按中央目录顺序）
pub fn entry_names(archive: &ZipArchive<File>) -> Vec<String> {
    archive.file_names().map(str::to_string).collect()
}

/// 读取并解析压缩包内的 JSON 条目
///
/// `label` 只用于错误信息中的位置描述。
pub fn read_entry_json(
    archive: &mut ZipArchive<File>,
    name: &str,
    label: &str,
) -> Result<Value, SourceError> {
    let location = format!("{}::{}", label, name);

    let mut entry = archive.by_name(name).map_err(|e| SourceError::Io {
        location: location.clone(),
        source: e.into(),
    })?;

    let mut bytes = Vec::with_capacity(initial_capacity(entry.size()));
    entry
        .read_to_end(&mut bytes)
        .map_err(|e| SourceError::Io {
            location: location.clone(),
            source: e,
        })?;

    parse_json_bytes(&bytes, &location)
}

fn initial_capacity(declared: u64) -> usize {
    usize::try_from(declared.min(MAX_PREALLOC)).unwrap_or(0)
}

/// 读取并解析磁盘上的 JSON 文件
pub fn read_json_file(path: &Path) -> Result<Value, SourceError> {
    let location = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| SourceError::Io {
        location: location.clone(),
        source: e,
    })?;
    parse_json_bytes(&bytes, &location)
}

/// 解析 UTF-8 JSON，允许开头的 BOM
fn parse_json_bytes(bytes: &[u8], location: &str) -> Result<Value, SourceError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    serde_json::from_slice(bytes).map_err(|e| SourceError::InvalidJson {
        location: location.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_zip(path: &Path, files: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        for (name, content) in files {
            writer.start_file(name.to_string(), options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_list_jars_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        for name in ["b.jar", "a.jar", "notes.txt", "c.JAR.bak"] {
            File::create(dir.path().join(name)).unwrap();
        }
        std::fs::create_dir(dir.path().join("dir.jar")).unwrap();

        let jars = list_jars(dir.path()).unwrap();
        let names: Vec<_> = jars
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.jar", "b.jar"]);
    }

    #[test]
    fn test_find_version_jar_prefers_directory_name() {
        let root = TempDir::new().unwrap();
        let version_dir = root.path().join("1.21.1");
        std::fs::create_dir(&version_dir).unwrap();
        File::create(version_dir.join("aaa.jar")).unwrap();
        File::create(version_dir.join("1.21.1.jar")).unwrap();

        assert_eq!(
            find_version_jar(&version_dir),
            Some(version_dir.join("1.21.1.jar"))
        );
    }

    #[test]
    fn test_find_version_jar_falls_back_to_first_sorted() {
        let root = TempDir::new().unwrap();
        let version_dir = root.path().join("1.21.1-NeoForge");
        std::fs::create_dir(&version_dir).unwrap();
        File::create(version_dir.join("zeta.jar")).unwrap();
        File::create(version_dir.join("alpha.jar")).unwrap();

        assert_eq!(
            find_version_jar(&version_dir),
            Some(version_dir.join("alpha.jar"))
        );

        let empty = root.path().join("empty");
        std::fs::create_dir(&empty).unwrap();
        assert_eq!(find_version_jar(&empty), None);
    }

    #[test]
    fn test_open_archive_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.jar");
        assert!(matches!(
            open_archive(&missing),
            Err(SourceError::ArchiveNotFound(_))
        ));

        let broken = dir.path().join("broken.jar");
        std::fs::write(&broken, b"definitely not a zip").unwrap();
        assert!(matches!(
            open_archive(&broken),
            Err(SourceError::BadArchive { .. })
        ));
    }

    #[test]
    fn test_read_entry_json() {
        let dir = TempDir::new().unwrap();
        let jar = dir.path().join("mod.jar");
        write_zip(
            &jar,
            &[
                ("assets/m/lang/zh_cn.json", "\u{feff}{\"k\": \"值\"}"),
                ("broken.json", "{not json"),
            ],
        );

        let mut archive = open_archive(&jar).unwrap();
        assert_eq!(entry_names(&archive).len(), 2);

        let value = read_entry_json(&mut archive, "assets/m/lang/zh_cn.json", "mod.jar").unwrap();
        assert_eq!(value["k"], "值");

        let err = read_entry_json(&mut archive, "broken.json", "mod.jar").unwrap_err();
        assert!(matches!(err, SourceError::InvalidJson { .. }));
        assert!(err.to_string().contains("mod.jar::broken.json"));
    }

    #[test]
    fn test_initial_capacity_is_capped() {
        assert_eq!(initial_capacity(0), 0);
        assert_eq!(initial_capacity(512), 512);
        assert_eq!(initial_capacity(u64::MAX), MAX_PREALLOC as usize);
    }

    #[test]
    fn test_oversized_declared_entry_does_not_preallocate() {
        let dir = TempDir::new().unwrap();
        let jar = dir.path().join("huge.jar");
        write_zip(&jar, &[("data/m/advancements/a.json", r#"{"a": 1}"#)]);

        // 把中央目录中声明的解压大小改成约 4 GiB
        let mut bytes = std::fs::read(&jar).unwrap();
        let central = bytes
            .windows(4)
            .position(|w| w == b"PK\x01\x02")
            .unwrap();
        bytes[central + 24..central + 28].copy_from_slice(&0xFFFF_FFF0u32.to_le_bytes());
        std::fs::write(&jar, &bytes).unwrap();

        // 只要求不因预分配而中止；大小不一致是否报错由 zip 决定
        let Ok(mut archive) = open_archive(&jar) else {
            return;
        };
        if let Ok(value) = read_entry_json(&mut archive, "data/m/advancements/a.json", "huge.jar") {
            assert_eq!(value["a"], 1);
        }
    }
}
