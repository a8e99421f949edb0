// ============================================================================
// MCLang - 语言文件合并器
// ============================================================================
//
// 文件: src/core/merger.rs
// 职责: 从版本 jar / 资源索引 / mods 合并语言文件
// 边界:
//   - ✅ 基础语言来源选择（显式 jar → 版本 jar → 资源索引）
//   - ✅ jar 内语言文件提取与合并
//   - ✅ 资源索引对象定位与读取
//   - ✅ mods 目录逐个合并（按文件名排序）
//   - ✅ 合并结果写入磁盘
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含路径参数规范化
//
// 合并规则:
// 1. 基础来源只取一个，先命中者生效，不做多来源叠加
// 2. 后读取的来源覆盖先读取来源中的同名键
// 3. 单个文件或压缩包失败只记警告，继续处理其余来源
//
// ============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::archive::{self, SourceError};
use crate::models::lang::{AssetIndex, MergeSummary, TranslationMap};
use crate::ui::progress::JarProgress;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// jar 内语言文件路径后缀，如 `lang/zh_cn.json`
pub fn lang_suffix(locale: &str) -> String {
    format!("lang/{}.json", locale)
}

/// 资源索引中的语言文件逻辑路径，如 `minecraft/lang/zh_cn.json`
pub fn asset_lang_key(locale: &str) -> String {
    format!("minecraft/lang/{}.json", locale)
}

/// 资源索引 + 对象目录
#[derive(Debug, Clone)]
pub struct AssetSource {
    /// 资源索引文件（assets/indexes/<version>.json）
    pub index: PathBuf,
    /// 对象目录（assets/objects）
    pub objects_dir: PathBuf,
}

/// 合并选项
#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub version_dir: Option<PathBuf>,
    pub base_jar: Option<PathBuf>,
    pub assets: Option<AssetSource>,
    /// 覆盖默认的 `<version_dir>/mods`
    pub mods_dir: Option<PathBuf>,
    pub skip_mods: bool,
    pub output: PathBuf,
    pub locale: String,
}

impl MergeOptions {
    /// 实际使用的 mods 目录
    pub fn effective_mods_dir(&self) -> Option<PathBuf> {
        self.mods_dir.clone().or_else(|| {
            self.version_dir
                .as_ref()
                .map(|dir| dir.join(crate::utils::constants::MODS_DIR_NAME))
        })
    }
}

/// 从单个来源读取到的语言数据
#[derive(Debug, Default)]
pub struct LangBundle {
    /// 合并后的翻译项
    pub translations: TranslationMap,
    /// 贡献了翻译项的语言文件数量
    pub files: usize,
    /// 被跳过的条目错误（压缩包本身可用）
    pub errors: Vec<SourceError>,
}

impl LangBundle {
    pub fn is_empty(&self) -> bool {
        self.files == 0
    }
}

/// 读取 jar 中所有以 `suffix` 结尾的语言文件并按条目顺序合并
///
/// 压缩包无法打开时返回错误；单个条目失败记录在 `errors` 中。
/// 合法 JSON 但不是对象的条目被忽略，不计入 `files`。
pub fn load_lang_from_jar(jar: &Path, suffix: &str) -> Result<LangBundle, SourceError> {
    let mut archive = archive::open_archive(jar)?;
    let label = jar.display().to_string();
    let mut bundle = LangBundle::default();

    for name in archive::entry_names(&archive) {
        if !name.ends_with(suffix) {
            continue;
        }

        let value = match archive::read_entry_json(&mut archive, &name, &label) {
            Ok(value) => value,
            Err(err) => {
                bundle.errors.push(err);
                continue;
            }
        };

        match value {
            serde_json::Value::Object(object) => {
                let skipped = bundle.translations.merge_json_object(object);
                if skipped > 0 {
                    tracing::debug!("{}::{}: skipped {} non-string values", label, name, skipped);
                }
                bundle.files += 1;
            }
            _ => tracing::debug!("{}::{}: not a JSON object, ignored", label, name),
        }
    }

    Ok(bundle)
}

/// 通过资源索引读取语言文件
///
/// 对象内容不是 JSON 对象时返回空结果。
pub fn load_lang_from_assets(
    index_path: &Path,
    objects_dir: &Path,
    key: &str,
) -> Result<LangBundle, SourceError> {
    let index_value = archive::read_json_file(index_path)?;
    let index: AssetIndex =
        serde_json::from_value(index_value).map_err(|e| SourceError::InvalidJson {
            location: index_path.display().to_string(),
            source: e,
        })?;

    let hash = index
        .hash_of(key)
        .ok_or_else(|| SourceError::AssetNotIndexed {
            key: key.to_string(),
            index: index_path.to_path_buf(),
        })?;

    // 对象按哈希前两位分目录存放
    let prefix = hash.get(..2).unwrap_or(hash);
    let object_path = objects_dir.join(prefix).join(hash);
    if !object_path.is_file() {
        return Err(SourceError::AssetObjectMissing(object_path));
    }

    let mut bundle = LangBundle::default();
    match archive::read_json_file(&object_path)? {
        serde_json::Value::Object(object) => {
            bundle.translations.merge_json_object(object);
            bundle.files = 1;
        }
        _ => tracing::debug!("{}: not a JSON object, ignored", object_path.display()),
    }

    Ok(bundle)
}

/// 将翻译映射写入文件（自动创建父目录）
pub fn write_translations(translations: &TranslationMap, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| tf!("error.create_dir", parent.display()))?;
    }

    let content = translations
        .to_pretty_json()
        .context(t!("error.serialize_output"))?;
    fs::write(output, content).with_context(|| tf!("error.write_output", output.display()))?;
    Ok(())
}

/// 语言文件合并器
pub struct LangMerger {
    options: MergeOptions,
    /// 是否显示进度条
    show_progress: bool,
}

impl LangMerger {
    /// 创建新的合并器
    pub fn new(options: MergeOptions) -> Self {
        Self {
            options,
            show_progress: false,
        }
    }

    /// 启用进度条
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// 合并并写入输出文件
    pub fn run(&self) -> Result<MergeSummary> {
        let merged = self.merge();
        write_translations(&merged.translations, &self.options.output)?;

        Ok(MergeSummary {
            total_keys: merged.translations.len(),
            source_files: merged.files,
            output_path: self.options.output.clone(),
        })
    }

    /// 按来源顺序合并全部翻译（不写文件）
    pub fn merge(&self) -> LangBundle {
        let mut merged = LangBundle::default();

        let base = self.load_base();
        absorb(&mut merged, base);

        if !self.options.skip_mods {
            self.merge_mods(&mut merged);
        }

        merged
    }

    /// 选择并读取基础语言来源
    fn load_base(&self) -> LangBundle {
        if let Some(jar) = self.base_jar_candidate() {
            let bundle = self.load_jar_logged(&jar, None);
            if !bundle.is_empty() {
                Logger::info(tf!("merge.loaded_jar", bundle.files, jar.display()));
                return bundle;
            }
            Logger::warn(tf!("merge.no_lang_in_jar", self.suffix(), jar.display()));
        }

        self.load_assets_logged()
    }

    /// 显式基础 jar，或版本目录中的 jar
    fn base_jar_candidate(&self) -> Option<PathBuf> {
        if let Some(base_jar) = &self.options.base_jar {
            return Some(base_jar.clone());
        }

        let version_dir = self.options.version_dir.as_ref()?;
        let jar = archive::find_version_jar(version_dir);
        if jar.is_none() {
            Logger::warn(tf!("merge.no_version_jar", version_dir.display()));
        }
        jar
    }

    /// 读取资源索引；未提供完整的索引 + 对象目录时返回空结果
    fn load_assets_logged(&self) -> LangBundle {
        let Some(assets) = &self.options.assets else {
            return LangBundle::default();
        };

        let key = asset_lang_key(&self.options.locale);
        match load_lang_from_assets(&assets.index, &assets.objects_dir, &key) {
            Ok(bundle) if !bundle.is_empty() => {
                Logger::info(tf!("merge.loaded_assets", bundle.files, assets.index.display()));
                bundle
            }
            Ok(bundle) => {
                Logger::warn(tf!("merge.no_lang_in_assets", self.suffix(), assets.index.display()));
                bundle
            }
            Err(err) => {
                Logger::warn(tf!("merge.assets_failed", err));
                Logger::warn(tf!("merge.no_lang_in_assets", self.suffix(), assets.index.display()));
                LangBundle::default()
            }
        }
    }

    /// 读取 jar，警告输出到日志；压缩包不可用时返回空结果
    fn load_jar_logged(&self, jar: &Path, progress: Option<&JarProgress>) -> LangBundle {
        match load_lang_from_jar(jar, &self.suffix()) {
            Ok(mut bundle) => {
                for err in bundle.errors.drain(..) {
                    warn_with_progress(progress, tf!("merge.entry_failed", err));
                }
                bundle
            }
            Err(SourceError::ArchiveNotFound(path)) => {
                warn_with_progress(progress, tf!("merge.jar_not_found", path.display()));
                LangBundle::default()
            }
            Err(err) => {
                warn_with_progress(progress, tf!("merge.bad_jar", err));
                LangBundle::default()
            }
        }
    }

    /// 逐个合并 mods 目录下的 jar
    fn merge_mods(&self, merged: &mut LangBundle) {
        let mods_dir = match self.options.effective_mods_dir() {
            Some(dir) if dir.is_dir() => dir,
            Some(dir) => {
                Logger::info(tf!("merge.mods_dir_missing", dir.display()));
                return;
            }
            None => {
                Logger::info(t!("merge.no_mods_dir"));
                return;
            }
        };

        let jars = match archive::list_jars(&mods_dir) {
            Ok(jars) => jars,
            Err(err) => {
                Logger::warn(tf!("merge.list_mods_failed", err));
                return;
            }
        };

        if jars.is_empty() {
            Logger::info(tf!("merge.no_mod_jars", mods_dir.display()));
            return;
        }

        let progress = JarProgress::new(jars.len(), self.show_progress);
        for jar in &jars {
            let name = jar_name(jar);
            progress.start(&name);

            let bundle = self.load_jar_logged(jar, Some(&progress));
            if !bundle.is_empty() {
                progress.suspend(|| Logger::info(tf!("merge.loaded_mod", bundle.files, name)));
            }
            absorb(merged, bundle);

            progress.advance();
        }
        progress.finish();
    }

    fn suffix(&self) -> String {
        lang_suffix(&self.options.locale)
    }
}

/// 把一个来源并入累加器
fn absorb(merged: &mut LangBundle, bundle: LangBundle) {
    merged.files += bundle.files;
    merged.translations.extend(bundle.translations);
}

/// 进度条显示期间输出警告
fn warn_with_progress(progress: Option<&JarProgress>, message: String) {
    match progress {
        Some(progress) => progress.suspend(|| Logger::warn(message)),
        None => Logger::warn(message),
    }
}

/// jar 文件名（用于日志）
fn jar_name(jar: &Path) -> String {
    jar.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| jar.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_zip(path: &Path, files: &[(&str, &str)]) {
        let file = fs::File::create(path).unwrap();
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
    fn test_suffix_helpers() {
        assert_eq!(lang_suffix("zh_cn"), "lang/zh_cn.json");
        assert_eq!(asset_lang_key("zh_cn"), "minecraft/lang/zh_cn.json");
    }

    #[test]
    fn test_load_lang_from_jar_merges_in_entry_order() {
        let dir = TempDir::new().unwrap();
        let jar = dir.path().join("mod.jar");
        write_zip(
            &jar,
            &[
                ("assets/a/lang/zh_cn.json", r#"{"k.shared": "一", "k.a": "甲"}"#),
                ("assets/a/lang/en_us.json", r#"{"k.en": "English"}"#),
                ("assets/b/lang/zh_cn.json", r#"{"k.shared": "二"}"#),
                ("assets/c/lang/zh_cn.json", r#"["not", "an", "object"]"#),
                ("assets/d/lang/zh_cn.json", "{broken"),
            ],
        );

        let bundle = load_lang_from_jar(&jar, "lang/zh_cn.json").unwrap();
        assert_eq!(bundle.files, 2);
        assert_eq!(bundle.errors.len(), 1);
        assert_eq!(bundle.translations.get("k.shared"), Some("二"));
        assert_eq!(bundle.translations.get("k.a"), Some("甲"));
        assert!(!bundle.translations.contains_key("k.en"));
    }

    #[test]
    fn test_load_lang_from_assets() {
        let dir = TempDir::new().unwrap();
        let hash = "ab12cd34";
        let objects = dir.path().join("objects");
        fs::create_dir_all(objects.join("ab")).unwrap();
        fs::write(objects.join("ab").join(hash), r#"{"menu.quit": "退出游戏"}"#).unwrap();

        let index = dir.path().join("1.21.1.json");
        fs::write(
            &index,
            format!(r#"{{"objects": {{"minecraft/lang/zh_cn.json": {{"hash": "{}", "size": 1}}}}}}"#, hash),
        )
        .unwrap();

        let bundle = load_lang_from_assets(&index, &objects, "minecraft/lang/zh_cn.json").unwrap();
        assert_eq!(bundle.files, 1);
        assert_eq!(bundle.translations.get("menu.quit"), Some("退出游戏"));

        let err = load_lang_from_assets(&index, &objects, "minecraft/lang/ja_jp.json").unwrap_err();
        assert!(matches!(err, SourceError::AssetNotIndexed { .. }));

        fs::remove_file(objects.join("ab").join(hash)).unwrap();
        let err = load_lang_from_assets(&index, &objects, "minecraft/lang/zh_cn.json").unwrap_err();
        assert!(matches!(err, SourceError::AssetObjectMissing(_)));
    }

    #[test]
    fn test_base_jar_falls_back_to_assets() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("1.21.1.jar");
        write_zip(&base, &[("assets/minecraft/textures/x.png", "png")]);

        let objects = dir.path().join("objects");
        fs::create_dir_all(objects.join("ff")).unwrap();
        fs::write(objects.join("ff").join("ff00"), r#"{"key.a": "A"}"#).unwrap();
        let index = dir.path().join("index.json");
        fs::write(
            &index,
            r#"{"objects": {"minecraft/lang/zh_cn.json": {"hash": "ff00"}}}"#,
        )
        .unwrap();

        let merger = LangMerger::new(MergeOptions {
            version_dir: None,
            base_jar: Some(base),
            assets: Some(AssetSource {
                index,
                objects_dir: objects,
            }),
            mods_dir: None,
            skip_mods: true,
            output: dir.path().join("out.json"),
            locale: "zh_cn".to_string(),
        });

        let merged = merger.merge();
        assert_eq!(merged.files, 1);
        assert_eq!(merged.translations.get("key.a"), Some("A"));
    }

    #[test]
    fn test_write_translations_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("nested").join("mcLang").join("zh_cn.json");
        let mut map = TranslationMap::new();
        map.insert("key.b", "乙");

        write_translations(&map, &output).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "{\n  \"key.b\": \"乙\"\n}"
        );
    }
}
