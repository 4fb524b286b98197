use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, run};

#[test]
fn test_config_file_sets_roots_and_languages() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".locsyncrc.json",
        r#"{
            "sourceRoot": "./app",
            "localesRoot": "./i18n",
            "languages": ["en", "fr"],
            "globalNamespace": "common"
        }"#,
    )?;
    test.create_dir("i18n")?;
    test.write_file(
        "app/select.tsx",
        r#"
const [tg] = useTranslation();
tg("label.english");
"#,
    )?;

    let output = run(test.command())?;

    assert!(output.success);
    assert!(output.stdout.contains("Scanning source directory: app"));
    assert!(output.stdout.contains("Languages: en, fr"));
    assert!(output.stdout.contains("create language: fr"));
    assert!(output.stdout.contains("fr/common.json -- add: label.english"));
    assert_eq!(
        test.read_json("i18n/en/common.json")?,
        json!({ "label": { "english": "label.english" } })
    );
    assert!(!test.root().join("i18n/de").exists());

    Ok(())
}

#[test]
fn test_config_found_from_subdirectory() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(".locsyncrc.json", r#"{ "languages": ["en"] }"#)?;
    test.create_dir("src/components")?;
    test.write_file(
        "src/components/home.tsx",
        r#"const [t] = useTranslation("home"); t("page.title");"#,
    )?;

    let mut cmd = test.command();
    cmd.current_dir(test.root().join("src/components"));
    let output = run(cmd)?;

    assert!(output.success);
    assert_eq!(
        test.read_json("public/locales/en/home.json")?,
        json!({ "page": { "title": "page.title" } })
    );
    assert!(!test.root().join("public/locales/de/home.json").exists());

    Ok(())
}

#[test]
fn test_ignores_skip_files() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(
        ".locsyncrc.json",
        r#"{ "ignores": ["generated", "**/*.test.tsx"] }"#,
    )?;
    test.write_file(
        "src/generated/api.ts",
        r#"const [t] = useTranslation("api"); t("api.error");"#,
    )?;
    test.write_file(
        "src/home.test.tsx",
        r#"const [t] = useTranslation("fixture"); t("fixture.value");"#,
    )?;
    test.write_file(
        "src/home.tsx",
        r#"const [t] = useTranslation("home"); t("page.title");"#,
    )?;

    let output = run(test.command())?;

    assert!(output.success);
    assert!(output.stdout.contains("Scanned 1 source file"));
    assert!(test.root().join("public/locales/en/home.json").exists());
    assert!(!test.root().join("public/locales/en/api.json").exists());
    assert!(!test.root().join("public/locales/en/fixture.json").exists());

    Ok(())
}

#[test]
fn test_command_line_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locsyncrc.json", r#"{ "localesRoot": "./i18n" }"#)?;
    test.create_dir("src")?;
    test.create_dir("locales")?;
    test.write_file(
        "src/home.tsx",
        r#"const [t] = useTranslation("home"); t("page.title");"#,
    )?;

    let mut cmd = test.command();
    cmd.args(["--locales-root", "locales"]);
    let output = run(cmd)?;

    assert!(output.success);
    assert!(output.stdout.contains("Creating translation files in: locales"));
    assert!(test.root().join("locales/de/home.json").is_file());
    assert!(!test.root().join("i18n").exists());

    Ok(())
}

#[test]
fn test_environment_overrides_defaults() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("web")?;
    test.create_dir("public/locales")?;
    test.write_file(
        "web/home.tsx",
        r#"const [t] = useTranslation("home"); t("page.title");"#,
    )?;

    let mut cmd = test.command();
    cmd.env("LOCSYNC_SOURCE_ROOT", "web");
    let output = run(cmd)?;

    assert!(output.success);
    assert_eq!(
        test.read_json("public/locales/en/home.json")?,
        json!({ "page": { "title": "page.title" } })
    );

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(".locsyncrc.json", r#"{ "languages": [] }"#)?;

    let output = run(test.command())?;

    assert!(!output.success);
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error:"));
    assert!(output.stderr.contains("languages"));

    Ok(())
}

#[test]
fn test_malformed_config_fails() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(".locsyncrc.json", "{ languages: ")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Failed to parse config file"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_verbose_notes_default_configuration() -> Result<()> {
    let test = CliTest::with_locales()?;

    let mut cmd = test.command();
    cmd.arg("--verbose");
    let output = run(cmd)?;

    assert!(output.success);
    assert!(
        output
            .stderr
            .contains("Note: No .locsyncrc.json found, using default configuration")
    );

    test.write_file(".locsyncrc.json", "{}")?;
    let mut cmd = test.command();
    cmd.arg("--verbose");
    let output = run(cmd)?;

    assert!(!output.stderr.contains("Note:"));

    Ok(())
}
