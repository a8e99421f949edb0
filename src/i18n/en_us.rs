// ============================================================================
// MCLang - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Merger related
    ("cli.merge.start", "Merging language files..."),
    ("merge.loaded_jar", "Loaded {} lang file(s) from {}"),
    ("merge.loaded_assets", "Loaded {} lang file(s) from assets index {}"),
    ("merge.loaded_mod", "Loaded {} lang file(s) from {}"),
    ("merge.no_lang_in_jar", "No {} in {}"),
    ("merge.no_lang_in_assets", "No {} from assets index {}"),
    ("merge.no_version_jar", "No version jar found in {}"),
    ("merge.assets_failed", "Failed to read assets: {}"),
    (
        "merge.assets_pair_incomplete",
        "--assets-index and --assets-dir must be given together, ignoring assets",
    ),
    ("merge.entry_failed", "Skipping lang file: {}"),
    ("merge.jar_not_found", "Jar not found: {}"),
    ("merge.bad_jar", "Bad jar: {}"),
    ("merge.mods_dir_missing", "Mods dir not found: {}"),
    ("merge.no_mods_dir", "No mods dir given, skipping mods"),
    ("merge.list_mods_failed", "Failed to list mod jars: {}"),
    ("merge.no_mod_jars", "No mod jars in {}"),
    ("merge.done", "Merged {} keys from {} lang file(s) {} {}"),
    // Scanner related
    ("scan.bad_jar", "Bad jar: {}"),
    ("scan.report_saved", "Report saved to {}"),
    ("scan.summary_title", "Scan summary"),
    ("scan.total_jars", "Jars scanned: {}"),
    ("scan.total_flagged", "Flagged entries: {}"),
    // Error messages
    ("error.version_dir_not_found", "Version dir not found: {}"),
    ("error.mods_dir_not_found", "Mods dir not found: {}"),
    (
        "error.output_required",
        "Output path required when no version dir is provided",
    ),
    ("error.invalid_locale", "Invalid locale code: '{}'"),
    ("error.invalid_pattern", "Invalid path pattern: {}"),
    ("error.list_mods", "Failed to list jars in {}"),
    ("error.create_dir", "Failed to create directory: {}"),
    ("error.write_output", "Failed to write output file: {}"),
    ("error.serialize_output", "Failed to serialize output"),
];
