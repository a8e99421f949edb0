// ============================================================================
// MCLang - 语言文件数据模型
// ============================================================================
//
// 文件: src/models/lang.rs
// 职责: 翻译映射、资源索引和合并结果数据结构定义
// 边界:
//   - ✅ 翻译映射的合并与序列化
//   - ✅ 资源索引 JSON 结构定义
//   - ✅ 合并统计信息
//   - ❌ 不应包含压缩包读取逻辑
//   - ❌ 不应包含来源选择策略
//
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::PathBuf;

/// 翻译映射：翻译键 -> 本地化文本
///
/// 保留首次插入顺序；后写入的同名键覆盖值但不改变位置。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TranslationMap {
    entries: Map<String, Value>,
}

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆盖一个翻译项
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), Value::String(value.into()));
    }

    /// 从 JSON 对象合并字符串类型的翻译项，返回被跳过的非字符串项数量
    pub fn merge_json_object(&mut self, object: Map<String, Value>) -> usize {
        let mut skipped = 0;
        for (key, value) in object {
            match value {
                Value::String(text) => {
                    self.entries.insert(key, Value::String(text));
                }
                _ => skipped += 1,
            }
        }
        skipped
    }

    /// 合并另一个映射，同名键以 `other` 为准
    pub fn extend(&mut self, other: TranslationMap) {
        for (key, value) in other.entries {
            self.entries.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// 序列化为两空格缩进的 JSON，非 ASCII 字符原样保留
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 资源索引文件结构（assets/indexes/<version>.json）
///
/// 对象条目保持未解析状态，只在查找时读取目标条目的 `hash`，
/// 其他条目字段类型异常不影响查找。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetIndex {
    #[serde(default)]
    pub objects: HashMap<String, Value>,
}

impl AssetIndex {
    /// 查找逻辑路径对应的对象哈希
    pub fn hash_of(&self, logical_path: &str) -> Option<&str> {
        self.objects
            .get(logical_path)
            .and_then(|obj| obj.get("hash"))
            .and_then(Value::as_str)
            .filter(|hash| !hash.is_empty())
    }
}

/// 合并结果统计
#[derive(Debug, Clone, Serialize)]
pub struct MergeSummary {
    /// 合并后的键数量
    pub total_keys: usize,
    /// 参与合并的语言文件数量
    pub source_files: usize,
    /// 输出文件路径
    pub output_path: PathBuf,
}
