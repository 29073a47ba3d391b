// ============================================================================
// TsTable - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Error messages
    ("error.path_not_exist", "Path does not exist: {}"),
    (
        "error.no_tables_found",
        "No translation tables (.ts) found. Pass a file or directory, or set workspace.root",
    ),
    ("error.load_failed", "Failed to load translation table: {}"),
    ("error.write_failed", "Failed to write file: {}"),
    ("error.config_invalid", "Invalid configuration file: {}"),
    // Lookup command
    ("lookup.not_found", "No entry for \"{}\" / \"{}\""),
    ("lookup.context", "Context:     {}"),
    ("lookup.source", "Source:      {}"),
    ("lookup.comment", "Comment:     {}"),
    ("lookup.status", "Status:      {}"),
    ("lookup.translation", "Translation: {}"),
    ("lookup.numerus_form", "Form {}:      {}"),
    // Check command
    ("check.start", "Checking {} translation table(s)..."),
    ("check.file_clean", "No issues in {}"),
    ("check.issue_counts", "{} error(s), {} warning(s)"),
    ("check.context_header", "{} {}"),
    ("check.failed", "Translation tables have problems"),
    ("check.all_good", "All translation tables are consistent"),
    // Issues
    ("issue.empty_finished", "marked finished but translation is empty"),
    (
        "issue.vanished_with_location",
        "vanished entry still has {} location(s)",
    ),
    ("issue.duplicate_message", "duplicate message in context"),
    ("issue.empty_context_name", "context has no name"),
    (
        "issue.placeholder_mismatch",
        "placeholders differ: source [{}], translation [{}]",
    ),
    (
        "issue.numerus_form_count",
        "expected {} plural form(s), found {}",
    ),
    (
        "issue.unfinished_with_translation",
        "has a translation but is still unfinished",
    ),
    // Stats command
    ("stats.total", "Total {} {}%"),
    (
        "stats.counts",
        "{} messages: {} finished, {} unfinished, {} vanished",
    ),
    // Export command
    ("export.written", "Exported {} messages to {}"),
    // Fmt command
    ("fmt.pruned", "Removed {} vanished message(s)"),
    ("fmt.already_formatted", "{} is already formatted"),
    ("fmt.needs_format", "{} is not in canonical format"),
    ("fmt.written", "Wrote {} messages to {}"),
    // Init command
    ("init.config_exists", "Configuration file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite"),
    ("init.config_created", "Configuration file created: {}"),
    ("init.settings", "workspace.root = {}, i18n.language = {}"),
    (
        "init.next_steps",
        "Edit the file to set workspace.root and lookup.default_context",
    ),
    ("init.create_failed", "Failed to create configuration file: {}"),
];
