use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, run};

const HOME: &str = r#"
import { useTranslation } from "react-i18next";

export function Home() {
    const [t] = useTranslation("home");
    return <h1>{t("home.title", { name: "Ada" })}</h1>;
}
"#;

const LANGUAGE_SELECT: &str = r#"
import { useTranslation } from "react-i18next";

export function LanguageSelect() {
    const [tg] = useTranslation();
    return (
        <Listbox>
            <ListboxLabel>{tg("label.english")}</ListboxLabel>
            <ListboxLabel>{tg("label.german")}</ListboxLabel>
        </Listbox>
    );
}
"#;

#[test]
fn test_scan_creates_namespace_in_every_language() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("src/routes/home.tsx", HOME)?;

    let output = run(test.command())?;

    assert!(output.success);
    assert!(output.stdout.contains("create namespace: home"));
    assert!(output.stdout.contains("en/home.json -- add: home.title"));
    assert!(output.stdout.contains("de/home.json -- add: home.title"));

    insta::assert_snapshot!(test.read_file("public/locales/en/home.json")?, @r#"
    {
        "home": {
            "title": "home.title"
        }
    }
    "#);
    assert_eq!(
        test.read_file("public/locales/de/home.json")?,
        test.read_file("public/locales/en/home.json")?
    );

    Ok(())
}

#[test]
fn test_scan_global_namespace() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("src/components/base/language-select.tsx", LANGUAGE_SELECT)?;

    let output = run(test.command())?;

    assert!(output.success);
    assert!(output.stdout.contains("create namespace: translation"));
    assert_eq!(
        test.read_json("public/locales/de/translation.json")?,
        json!({ "label": { "english": "label.english", "german": "label.german" } })
    );

    Ok(())
}

#[test]
fn test_second_run_changes_nothing() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("src/routes/home.tsx", HOME)?;
    test.write_file("src/components/language-select.tsx", LANGUAGE_SELECT)?;

    run(test.command())?;
    let en_home = test.read_file("public/locales/en/home.json")?;
    let de_global = test.read_file("public/locales/de/translation.json")?;

    let output = run(test.command())?;

    assert!(output.success);
    assert!(!output.stdout.contains("add:"));
    assert!(!output.stdout.contains("create"));
    assert!(
        output
            .stdout
            .contains("Scanned 2 source files: 0 added, 0 removed")
    );
    assert_eq!(test.read_file("public/locales/en/home.json")?, en_home);
    assert_eq!(test.read_file("public/locales/de/translation.json")?, de_global);

    Ok(())
}

#[test]
fn test_existing_translations_are_not_overwritten() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(
        "public/locales/de/home.json",
        r#"{"greeting": "Hallo", "home": {"title": "Startseite"}}"#,
    )?;
    test.write_file(
        "src/home.tsx",
        r#"
const [t] = useTranslation("home");
t("home.title");
t("home.subtitle");
"#,
    )?;

    let output = run(test.command())?;

    assert!(output.success);
    assert!(!output.stdout.contains("de/home.json -- add: home.title"));
    assert!(output.stdout.contains("de/home.json -- add: home.subtitle"));
    insta::assert_snapshot!(test.read_file("public/locales/de/home.json")?, @r#"
    {
        "greeting": "Hallo",
        "home": {
            "subtitle": "home.subtitle",
            "title": "Startseite"
        }
    }
    "#);

    Ok(())
}

#[test]
fn test_namespaces_are_mirrored_across_languages() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("public/locales/en/login.json", r#"{"form": {"user": "User"}}"#)?;
    test.write_file("public/locales/de/profile.json", "{}")?;

    let output = run(test.command())?;

    assert!(output.success);
    assert!(output.stdout.contains("create file: en/profile.json"));
    assert!(output.stdout.contains("create file: de/login.json"));
    assert_eq!(test.read_file("public/locales/de/login.json")?, "{}\n");
    assert_eq!(test.read_file("public/locales/en/profile.json")?, "{}\n");

    Ok(())
}

#[test]
fn test_missing_language_directory_is_created() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("src")?;
    test.write_file("public/locales/en/home.json", "{}")?;

    let output = run(test.command())?;

    assert!(output.success);
    assert!(output.stdout.contains("create language: de"));
    assert!(test.root().join("public/locales/de/home.json").is_file());

    Ok(())
}

#[test]
fn test_files_are_normalized() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(
        "public/locales/en/menu.json",
        r#"{"zeta": "Z", "alpha": {"b": "B", "a": "A"}}"#,
    )?;
    test.write_file("public/locales/de/menu.json", r#"{"alpha": {"a": "A"}}"#)?;

    let output = run(test.command())?;

    assert!(output.success);
    assert_eq!(
        test.read_file("public/locales/en/menu.json")?,
        "{\n    \"alpha\": {\n        \"a\": \"A\",\n        \"b\": \"B\"\n    },\n    \"zeta\": \"Z\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_conflicting_namespaces_are_reported() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(
        "src/mixed.tsx",
        r#"
const [t] = useTranslation("home");
const [t2] = useTranslation("login");
const [tg] = useTranslation();
t("home.title");
tg("label.save");
"#,
    )?;

    let output = run(test.command())?;

    assert!(output.success);
    assert!(output.stdout.contains(
        "error: only one local namespace per file is supported, found: home, login | file: src/mixed.tsx"
    ));
    assert!(output.stdout.contains("create namespace: translation"));
    assert!(!output.stdout.contains("add:"));
    assert_eq!(test.read_file("public/locales/en/home.json")?, "{}\n");
    assert_eq!(test.read_file("public/locales/de/translation.json")?, "{}\n");
    assert!(output.stdout.contains("(1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_local_keys_without_namespace_are_reported() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("src/button.tsx", r#"export const label = t("button.save");"#)?;

    let output = run(test.command())?;

    assert!(output.success);
    assert!(output.stdout.contains(
        "error: found local translations without a local namespace: button.save | file: src/button.tsx"
    ));
    assert!(output.stdout.contains("hint: use `tg(...)`"));

    Ok(())
}

#[test]
fn test_corrupt_locale_file_is_skipped() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("public/locales/en/home.json", "{ not json")?;
    test.write_file("public/locales/de/home.json", "{}")?;
    test.write_file("src/home.tsx", HOME)?;

    let output = run(test.command())?;

    assert!(output.success);
    assert!(output.stdout.contains("error: Failed to parse JSON"));
    assert_eq!(test.read_file("public/locales/en/home.json")?, "{ not json");
    assert_eq!(
        test.read_json("public/locales/de/home.json")?,
        json!({ "home": { "title": "home.title" } })
    );

    Ok(())
}

#[test]
fn test_missing_locales_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/home.tsx", HOME)?;

    let output = run(test.command())?;

    assert!(!output.success);
    assert_eq!(output.code, Some(2));
    assert!(output.stdout.contains("does not exist, please create it"));
    assert!(!test.root().join("public").exists());

    Ok(())
}

#[test]
fn test_help_does_not_scan() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("src/home.tsx", HOME)?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;

    assert!(output.success);
    assert!(output.stdout.contains("Usage: locsync"));
    assert!(output.stdout.contains("--watch"));
    assert!(output.stdout.contains("--remove-unused"));
    assert!(!test.root().join("public/locales/en/home.json").exists());

    Ok(())
}

#[test]
fn test_verbose_lists_scanned_files() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("src/home.tsx", HOME)?;
    test.write_file("src/styles.css", "h1 { color: red; }")?;

    let mut cmd = test.command();
    cmd.arg("--verbose");
    let output = run(cmd)?;

    assert!(output.stdout.contains("scan: src/home.tsx"));
    assert!(!output.stdout.contains("styles.css"));

    Ok(())
}
