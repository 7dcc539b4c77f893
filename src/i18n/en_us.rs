// ============================================================================
// CopyDeck - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain business logic
//   - ❌ Should not contain other language translations
//   - ❌ Should not contain site copy tables
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Error messages
    ("error.command_failed", "Command failed: {}"),
    ("error.unknown_key", "Key '{}' not found in {} ({})"),
    ("error.dir_not_exist", "Directory does not exist: {}"),
    ("error.no_tables_found", "No copy tables found in {}"),
    ("error.out_not_dir", "Output path is not a directory: {}"),
    // Show command
    ("show.header", "{} / {}: {} entries"),
    ("show.unused_hint", "{} entries are kept but not shown on the site"),
    // Check command
    ("cli.check.start", "Checking copy tables..."),
    ("cli.check.builtin", "Checking built-in locales: {}"),
    ("cli.check.loading_dir", "Loading copy tables from {}"),
    ("check.details", "Issue details"),
    ("check.table_header", "{} / {} ({} entries)"),
    ("check.table_clean", "{} / {}: no issues"),
    ("check.table_counts", "{} errors, {} warnings, {} info"),
    ("check.untranslated_hidden", "{} untranslated entries (use --detail to list them)"),
    ("check.summary", "Checked {} tables: {} errors, {} warnings, {} info"),
    ("check.kind_count", "{}: {}"),
    ("check.all_good", "All copy tables are consistent"),
    ("check.failed", "Copy check failed"),
    ("check.strict_warnings", "Warnings are treated as failures in strict mode"),
    // Issue kinds
    ("issue.missing_key", "missing key"),
    ("issue.extra_key", "unexpected key"),
    ("issue.duplicate_key", "duplicate key"),
    ("issue.empty_value", "empty value"),
    ("issue.unbalanced_markup", "unbalanced markup"),
    ("issue.round_trip", "round trip changed the table"),
    ("issue.unknown_tag", "unknown markup tag"),
    ("issue.markup_mismatch", "markup differs from reference"),
    ("issue.untranslated", "same as reference"),
    // Export command
    ("export.start", "Exporting {} tables to {}"),
    ("export.written", "Wrote {}"),
    ("export.completed", "Exported {} files as {}"),
    ("export.use_force_hint", "Use --force to overwrite existing files"),
    // Init command
    ("init.start", "Initializing CopyDeck configuration..."),
    ("init.config_exists", "Configuration file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite existing configuration file"),
    ("init.config_created", "Created configuration file: {}"),
    (
        "init.next_steps",
        "Edit the [check] section to adjust allowed tags, then run 'copydeck check'",
    ),
    ("init.create_failed", "Failed to create configuration file: {}"),
];
