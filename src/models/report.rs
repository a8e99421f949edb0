// ============================================================================
// MCLang - 进度扫描报告数据模型
// ============================================================================
//
// 文件: src/models/report.rs
// 职责: 进度（advancement）定义扫描结果数据结构定义
// 边界:
//   - ✅ 报告条目与报告结构定义
//   - ✅ 进度定义 display 字段的解析边界
//   - ✅ 报告序列化
//   - ❌ 不应包含压缩包遍历逻辑
//   - ❌ 不应包含输出/打印逻辑
//
// ============================================================================

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// 被标记条目的问题类型
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Finding {
    /// JSON 解析失败
    InvalidJson { reason: String },
    /// 缺少 display 块；announce_to_chat 恒为 null
    NoDisplay { announce_to_chat: Option<bool> },
    /// display.announce_to_chat 显式为 false
    AnnounceToChatFalse { announce_to_chat: bool },
    /// 压缩包本身无法打开
    BadJar { reason: String },
}

impl Finding {
    pub fn no_display() -> Self {
        Finding::NoDisplay {
            announce_to_chat: None,
        }
    }

    /// 状态名称（与序列化的 status 字段一致）
    pub fn status(&self) -> &'static str {
        match self {
            Finding::InvalidJson { .. } => "invalid_json",
            Finding::NoDisplay { .. } => "no_display",
            Finding::AnnounceToChatFalse { .. } => "announce_to_chat_false",
            Finding::BadJar { .. } => "bad_jar",
        }
    }
}

/// 报告中的单个被标记条目
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlaggedEntry {
    /// 来源压缩包文件名
    pub jar: String,
    /// 压缩包内路径（bad_jar 时为空）
    pub path: String,
    #[serde(flatten)]
    pub finding: Finding,
}

/// 扫描报告
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// 被扫描的 mods 目录
    pub mods_dir: String,
    /// 压缩包总数
    pub total_jars: usize,
    /// 被标记的条目（按压缩包文件名排序遍历）
    pub flagged: Vec<FlaggedEntry>,
}

impl ScanReport {
    /// 按状态统计条目数量
    pub fn count_by_status(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.flagged {
            *counts.entry(entry.finding.status()).or_insert(0) += 1;
        }
        counts
    }
}

/// 进度定义中 display 块的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// 根不是对象，或 display 缺失 / null / false / 0 / 空字符串 / 空数组 / 空对象
    Absent,
    /// display 存在；announce_to_chat 仅在为布尔值时记录
    Present { announce_to_chat: Option<bool> },
}

impl DisplayState {
    pub fn from_definition(definition: &Value) -> Self {
        let display = match definition.as_object().and_then(|root| root.get("display")) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => return DisplayState::Absent,
            Some(Value::Object(block)) if block.is_empty() => return DisplayState::Absent,
            Some(Value::Array(items)) if items.is_empty() => return DisplayState::Absent,
            Some(Value::String(text)) if text.is_empty() => return DisplayState::Absent,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => return DisplayState::Absent,
            Some(display) => display,
        };

        let announce_to_chat = display
            .as_object()
            .and_then(|block| block.get("announce_to_chat"))
            .and_then(Value::as_bool);

        DisplayState::Present { announce_to_chat }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_serialization_shape() {
        let entry = FlaggedEntry {
            jar: "modA.jar".to_string(),
            path: "data/modA/advancements/root.json".to_string(),
            finding: Finding::AnnounceToChatFalse {
                announce_to_chat: false,
            },
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "jar": "modA.jar",
                "path": "data/modA/advancements/root.json",
                "status": "announce_to_chat_false",
                "announce_to_chat": false
            })
        );

        let bad = FlaggedEntry {
            jar: "broken.jar".to_string(),
            path: String::new(),
            finding: Finding::BadJar {
                reason: "bad zip".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(&bad).unwrap(),
            json!({"jar": "broken.jar", "path": "", "status": "bad_jar", "reason": "bad zip"})
        );

        let missing = FlaggedEntry {
            jar: "a.jar".to_string(),
            path: "p".to_string(),
            finding: Finding::no_display(),
        };
        assert_eq!(
            serde_json::to_string(&missing).unwrap(),
            r#"{"jar":"a.jar","path":"p","status":"no_display","announce_to_chat":null}"#
        );
    }

    #[test]
    fn test_display_state() {
        assert_eq!(DisplayState::from_definition(&json!([])), DisplayState::Absent);
        assert_eq!(
            DisplayState::from_definition(&json!({"criteria": {}})),
            DisplayState::Absent
        );
        assert_eq!(
            DisplayState::from_definition(&json!({"display": {}})),
            DisplayState::Absent
        );
        for empty in [json!([]), json!(""), json!(0), json!(0.0)] {
            assert_eq!(
                DisplayState::from_definition(&json!({ "display": empty })),
                DisplayState::Absent
            );
        }
        assert_eq!(
            DisplayState::from_definition(&json!({"display": "text"})),
            DisplayState::Present {
                announce_to_chat: None
            }
        );
        assert_eq!(
            DisplayState::from_definition(&json!({"display": {"announce_to_chat": "false"}})),
            DisplayState::Present {
                announce_to_chat: None
            }
        );
        assert_eq!(
            DisplayState::from_definition(&json!({"display": {"announce_to_chat": false}})),
            DisplayState::Present {
                announce_to_chat: Some(false)
            }
        );
    }

    #[test]
    fn test_count_by_status() {
        let report = ScanReport {
            mods_dir: "/mods".to_string(),
            total_jars: 1,
            flagged: vec![
                FlaggedEntry {
                    jar: "a.jar".to_string(),
                    path: "p1".to_string(),
                    finding: Finding::no_display(),
                },
                FlaggedEntry {
                    jar: "a.jar".to_string(),
                    path: "p2".to_string(),
                    finding: Finding::no_display(),
                },
            ],
        };
        let counts = report.count_by_status();
        assert_eq!(counts.get("no_display"), Some(&2));
        assert_eq!(counts.len(), 1);
    }
}
