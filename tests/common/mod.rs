// 集成测试公共工具

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 创建只包含给定条目的 jar（Stored 压缩）
pub fn create_test_jar(dir: &Path, name: &str, files: &[(&str, &str)]) -> PathBuf {
    let jar_path = dir.join(name);
    let file = fs::File::create(&jar_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (entry_name, content) in files {
        writer.start_file(entry_name.to_string(), options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    jar_path
}

/// 写入一个不是 zip 的 ".jar"
pub fn create_broken_jar(dir: &Path, name: &str) -> PathBuf {
    let jar_path = dir.join(name);
    fs::write(&jar_path, b"PK\x03\x04 truncated").unwrap();
    jar_path
}

/// 读取 JSON 文件
pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
