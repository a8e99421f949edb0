// ============================================================================
// MCLang - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 合并相关
    ("cli.merge.start", "开始合并语言文件..."),
    ("merge.loaded_jar", "已从 jar 读取 {} 个语言文件: {}"),
    ("merge.loaded_assets", "已从资源索引读取 {} 个语言文件: {}"),
    ("merge.loaded_mod", "已读取 {} 个语言文件: {}"),
    ("merge.no_lang_in_jar", "未找到 {}: {}"),
    ("merge.no_lang_in_assets", "资源索引中未找到 {}: {}"),
    ("merge.no_version_jar", "版本目录中没有 jar: {}"),
    ("merge.assets_failed", "读取资源索引失败: {}"),
    (
        "merge.assets_pair_incomplete",
        "--assets-index 与 --assets-dir 需同时提供，已忽略资源索引",
    ),
    ("merge.entry_failed", "跳过语言文件: {}"),
    ("merge.jar_not_found", "jar 不存在: {}"),
    ("merge.bad_jar", "无效的 jar: {}"),
    ("merge.mods_dir_missing", "mods 目录不存在: {}"),
    ("merge.no_mods_dir", "未提供 mods 目录，跳过 mods"),
    ("merge.list_mods_failed", "列出 mod jar 失败: {}"),
    ("merge.no_mod_jars", "mods 目录中没有 jar: {}"),
    ("merge.done", "共合并 {} 个键，来自 {} 个语言文件 {} {}"),
    // 扫描相关
    ("scan.bad_jar", "无效的 jar: {}"),
    ("scan.report_saved", "报告已保存到 {}"),
    ("scan.summary_title", "扫描汇总"),
    ("scan.total_jars", "已扫描 jar: {}"),
    ("scan.total_flagged", "被标记条目: {}"),
    // 错误信息
    ("error.version_dir_not_found", "版本目录不存在: {}"),
    ("error.mods_dir_not_found", "mods 目录不存在: {}"),
    ("error.output_required", "未提供版本目录时必须指定输出路径"),
    ("error.invalid_locale", "无效的语言代码: '{}'"),
    ("error.invalid_pattern", "无效的路径模式: {}"),
    ("error.list_mods", "列出 jar 失败: {}"),
    ("error.create_dir", "创建目录失败: {}"),
    ("error.write_output", "写入输出文件失败: {}"),
    ("error.serialize_output", "序列化输出失败"),
];
