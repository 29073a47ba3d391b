use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/en_US.ts")
}

fn tstable(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tstable"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .args(args)
        .output()
        .expect("failed to run tstable")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn lookup_prints_translation() {
    let dir = tempfile::tempdir().unwrap();
    let file = fixture();
    let output = tstable(dir.path(), &["lookup", file.to_str().unwrap(), "倒计时"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "Countdown");
}

#[test]
fn lookup_falls_back_for_unfinished() {
    let dir = tempfile::tempdir().unwrap();
    let file = fixture();
    let output = tstable(dir.path(), &["lookup", file.to_str().unwrap(), "加载中..."]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "加载中...");
}

#[test]
fn check_passes_on_the_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let file = fixture();
    let output = tstable(dir.path(), &["check", file.to_str().unwrap(), "-f", "json"]);
    assert!(output.status.success());
    let reports: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(reports.as_array().unwrap().len(), 1);
}

#[test]
fn check_fails_on_empty_finished_entry() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.ts");
    std::fs::write(
        &broken,
        r#"<TS version="2.1" language="en_US"><context><name>Theme</name>
<message><source>取消</source><translation></translation></message>
</context></TS>"#,
    )
    .unwrap();

    let output = tstable(dir.path(), &["check", "-f", "json"]);
    assert_eq!(output.status.code(), Some(1));
    let reports: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(reports[0]["issues"][0]["kind"], "empty_finished");
    assert_eq!(reports[0]["issues"][0]["severity"], "error");
}

#[test]
fn fmt_check_accepts_canonical_file_and_prune_rewrites() {
    let dir = tempfile::tempdir().unwrap();
    let copy = dir.path().join("en_US.ts");
    std::fs::copy(fixture(), &copy).unwrap();

    let output = tstable(dir.path(), &["fmt", "en_US.ts", "--check"]);
    assert!(output.status.success());

    let output = tstable(dir.path(), &["fmt", "en_US.ts", "--prune-vanished"]);
    assert!(output.status.success());
    let rewritten = std::fs::read_to_string(&copy).unwrap();
    assert!(!rewritten.contains("type=\"vanished\""));
}

#[test]
fn export_writes_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let file = fixture();
    let out = dir.path().join("en_US.yaml");
    let output = tstable(
        dir.path(),
        &["export", file.to_str().unwrap(), "-f", "yaml", "-o", out.to_str().unwrap()],
    );
    assert!(output.status.success());
    let catalog: tstable::Catalog =
        serde_yaml::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(catalog.len(), 35);
}

#[test]
fn init_creates_config_once() {
    let dir = tempfile::tempdir().unwrap();
    let output = tstable(dir.path(), &["init"]);
    assert!(output.status.success());
    assert!(dir.path().join("tstable.toml").exists());

    let output = tstable(dir.path(), &["-l", "zh_cn", "init"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("配置文件已存在"));
}

const DAYS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<TS version="2.1" language="en_US">
<context>
    <name>Theme</name>
    <message numerus="yes">
        <source>%n 天</source>
        <translation><numerusform>%n Day</numerusform><numerusform>%n Days</numerusform></translation>
    </message>
    <message numerus="yes">
        <source>%n 天</source>
        <comment>countdown</comment>
        <translation><numerusform>%n day left</numerusform><numerusform>%n days left</numerusform></translation>
    </message>
    <message>
        <source>测试</source>
        <comment>toolbar</comment>
        <translation>Test run</translation>
    </message>
    <message>
        <source>测试</source>
        <translation>Debug</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn lookup_plural_and_comment() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("days.ts"), DAYS).unwrap();

    let cases: [(&[&str], &str); 5] = [
        (&["lookup", "days.ts", "%n 天", "-n", "3"], "3 Days"),
        (&["lookup", "days.ts", "%n 天", "-n", "1"], "1 Day"),
        (
            &["lookup", "days.ts", "%n 天", "-n", "1", "--comment", "countdown"],
            "1 day left",
        ),
        (&["lookup", "days.ts", "测试", "--comment", "toolbar"], "Test run"),
        (&["lookup", "days.ts", "测试"], "Debug"),
    ];
    for (args, expected) in cases {
        let output = tstable(dir.path(), args);
        assert!(output.status.success(), "{:?}", args);
        assert_eq!(stdout(&output).trim_end(), expected, "{:?}", args);
    }
}

#[test]
fn stats_reports_fixture_progress() {
    let dir = tempfile::tempdir().unwrap();
    let file = fixture();
    let output = tstable(dir.path(), &["stats", file.to_str().unwrap(), "-f", "json"]);
    assert!(output.status.success());
    let reports: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let report = &reports[0];
    assert_eq!(report["total"], 35);
    assert_eq!(report["finished"], 25);
    assert_eq!(report["unfinished"], 8);
    assert_eq!(report["vanished"], 2);
    assert_eq!(report["contexts"][0]["name"], "Theme");
}

#[test]
fn fmt_check_rejects_non_canonical_file() {
    let dir = tempfile::tempdir().unwrap();
    let compact = r#"<TS version="2.1" language="en_US"><context><name>Theme</name><message><source>取消</source><translation>Cancel</translation></message></context></TS>"#;
    let path = dir.path().join("compact.ts");
    std::fs::write(&path, compact).unwrap();

    let output = tstable(dir.path(), &["fmt", "compact.ts", "--check"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), compact);

    let output = tstable(dir.path(), &["fmt", "compact.ts"]);
    assert!(output.status.success());
    let output = tstable(dir.path(), &["fmt", "compact.ts", "--check"]);
    assert!(output.status.success());
}

#[test]
fn fmt_keeps_length_variants_and_old_comment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("variants.ts");
    std::fs::write(
        &path,
        r#"<TS version="2.1" language="en_US"><context><name>Theme</name><message><source>天气</source><oldcomment>weather label</oldcomment><translation variants="yes"><lengthvariant>Weather</lengthvariant><lengthvariant>Wthr</lengthvariant></translation></message></context></TS>"#,
    )
    .unwrap();

    let output = tstable(dir.path(), &["fmt", "variants.ts"]);
    assert!(output.status.success());
    let rewritten = std::fs::read_to_string(&path).unwrap();
    assert!(rewritten.contains("<oldcomment>weather label</oldcomment>"));
    assert!(rewritten.contains("<lengthvariant>Wthr</lengthvariant>"));

    let output = tstable(dir.path(), &["lookup", "variants.ts", "天气"]);
    assert_eq!(stdout(&output).trim_end(), "Weather");
    let output = tstable(dir.path(), &["check", "variants.ts"]);
    assert!(output.status.success());
}

#[test]
fn help_works_with_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tstable.toml"), "[lookup\n").unwrap();

    let output = tstable(dir.path(), &["--help"]);
    assert!(output.status.success());

    let file = fixture();
    let output = tstable(dir.path(), &["lookup", file.to_str().unwrap(), "倒计时"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn workspace_root_flag_locates_config() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("ui");
    std::fs::create_dir_all(&sub).unwrap();
    std::fs::write(sub.join("tstable.toml"), "[lookup]\ndefault_context = \"Menu\"\n").unwrap();
    std::fs::write(
        sub.join("menu.ts"),
        r#"<TS version="2.1"><context><name>Menu</name><message><source>取消</source><translation>Close</translation></message></context></TS>"#,
    )
    .unwrap();

    let output = tstable(dir.path(), &["-C", "ui", "lookup", "ui/menu.ts", "取消"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "Close");

    let output = tstable(dir.path(), &["lookup", "ui/menu.ts", "取消"]);
    assert_eq!(stdout(&output).trim_end(), "取消");
}

#[test]
fn init_writes_runtime_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let output = tstable(dir.path(), &["-C", "ui", "-l", "zh_cn", "init"]);
    assert!(output.status.success());

    let written = std::fs::read_to_string(dir.path().join("tstable.toml")).unwrap();
    let config: toml::Value = toml::from_str(&written).unwrap();
    assert_eq!(config["workspace"]["root"].as_str(), Some("ui"));
    assert_eq!(config["i18n"]["language"].as_str(), Some("zh_cn"));
    assert_eq!(config["output"]["colored"].as_bool(), Some(true));
}

#[test]
fn init_failure_is_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let output = tstable(dir.path(), &["init", "-c", "missing/dir/tstable.toml"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Failed to create configuration file").count(), 1);
}
