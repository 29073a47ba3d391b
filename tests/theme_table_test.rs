use std::path::PathBuf;

use tstable::core::writer;
use tstable::{
    catalog_stats, load, load_catalog, parse_str, CheckOptions, Checker, LookupOptions, Severity,
    TranslationStatus, Translator,
};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/en_US.ts")
}

#[test]
fn loads_the_theme_table() {
    let catalog = load_catalog(fixture()).unwrap();
    assert_eq!(catalog.version, "2.1");
    assert_eq!(catalog.language.as_deref(), Some("en_US"));
    assert_eq!(catalog.contexts.len(), 1);
    assert_eq!(catalog.contexts[0].name, "Theme");
    assert_eq!(catalog.len(), 35);

    let form = catalog.context("Theme").unwrap().find("Form", "").unwrap();
    assert_eq!(form.locations.len(), 4);
    assert_eq!(form.locations[0].filename, "../dark/widget-floating.ui");
    assert_eq!(form.locations[0].line, Some(20));
}

#[test]
fn lookups_translate_or_fall_back() {
    let translator = load(fixture()).unwrap();
    assert_eq!(translator.lookup("Theme", "即将打开"), "Will open");
    assert_eq!(translator.lookup("Theme", "取消"), "Cancel");
    assert_eq!(translator.lookup("Theme", "<0分钟"), "<0 Minutes");
    assert_eq!(translator.lookup("Theme", "%p%"), "%p%");
    assert_eq!(translator.lookup("Theme", "  测试"), "  ..Debug");

    // 未完成
    assert_eq!(translator.lookup("Theme", "--:--"), "--:--");
    assert_eq!(translator.lookup("Theme", "  正在加载"), "  正在加载");
    // 已消失
    assert_eq!(translator.lookup("Theme", "32 日 周二"), "32 日 周二");
    // 不存在
    assert_eq!(translator.lookup("Theme", "设置"), "设置");
    assert_eq!(translator.lookup("Menu", "取消"), "取消");
}

#[test]
fn every_unfinished_entry_falls_back_to_source() {
    let catalog = load_catalog(fixture()).unwrap();
    let translator = Translator::from_catalog(&catalog, LookupOptions::default());
    let unfinished: Vec<_> = catalog
        .entries()
        .filter(|(_, e)| e.status == TranslationStatus::Unfinished)
        .collect();
    assert_eq!(unfinished.len(), 8);
    for (context, entry) in unfinished {
        assert_eq!(translator.lookup(context, &entry.source), entry.source);
    }
}

#[test]
fn status_invariants_hold() {
    let catalog = load_catalog(fixture()).unwrap();
    for (_, entry) in catalog.entries() {
        match entry.status {
            TranslationStatus::Finished => assert!(!entry.translation.is_empty(), "{}", entry.source),
            TranslationStatus::Vanished => assert!(entry.locations.is_empty(), "{}", entry.source),
            TranslationStatus::Unfinished => {}
        }
    }

    let issues = Checker::new(CheckOptions::default()).check(&catalog);
    assert!(issues.iter().all(|i| i.severity != Severity::Error), "{:?}", issues);
}

#[test]
fn serialization_round_trips() {
    let original = std::fs::read_to_string(fixture()).unwrap();
    let catalog = parse_str(&original).unwrap();
    let written = writer::to_string(&catalog);

    assert_eq!(parse_str(&written).unwrap(), catalog);
    assert_eq!(written, original);
}

#[test]
fn save_and_reload_preserves_status() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.ts");
    let catalog = load_catalog(fixture()).unwrap();
    tstable::save(&catalog, &path).unwrap();

    let reloaded = load_catalog(&path).unwrap();
    let statuses = |c: &tstable::Catalog| c.entries().map(|(_, e)| e.status).collect::<Vec<_>>();
    assert_eq!(statuses(&reloaded), statuses(&catalog));
}

#[test]
fn stats_for_the_theme_table() {
    let stats = catalog_stats(&load_catalog(fixture()).unwrap());
    assert_eq!(stats.counts.total, 35);
    assert_eq!(stats.counts.finished, 25);
    assert_eq!(stats.counts.unfinished, 8);
    assert_eq!(stats.counts.vanished, 2);
    assert!((stats.completion - 25.0 * 100.0 / 33.0).abs() < 1e-9);
}

#[test]
fn prune_vanished_then_rewrite() {
    let mut catalog = load_catalog(fixture()).unwrap();
    assert_eq!(catalog.prune_vanished(), 2);
    let reparsed = parse_str(&writer::to_string(&catalog)).unwrap();
    assert_eq!(reparsed.len(), 33);
    assert!(reparsed.entries().all(|(_, e)| !e.is_vanished()));
}

#[test]
fn missing_file_reports_io_error() {
    let err = load_catalog("does/not/exist.ts").unwrap_err();
    assert!(matches!(err, tstable::CatalogError::Io { .. }));
}
