use std::sync::LazyLock;

use regex::Regex;

use super::{Extractor, FileFacts};
use crate::core::KeyPath;

// const [tg] = useTranslation();
static GLOBAL_NAMESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"useTranslation\(\s*\)").unwrap());

// const [t] = useTranslation("home");
// Captures empty names too so they can be reported.
static LOCAL_NAMESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"useTranslation\(\s*"([^"]*)"\s*\)"#).unwrap());

// t("title.main", ...)  ->  ("title", "main")
static LOCAL_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bt\(\s*"([^."]+)\.([^\s",)]+)""#).unwrap());

// tg("label.save", ...)  ->  ("label", "save")
static GLOBAL_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\btg\(\s*"([^."]+)\.([^\s",)]+)""#).unwrap());

/// Regex-based extractor for `react-i18next` style lookups.
///
/// Recognizes `useTranslation()` / `useTranslation("ns")` declarations and
/// dotted two-segment string literals passed to `t(...)` and `tg(...)`.
/// Everything after the first dot belongs to the inner key, so
/// `t("a.b.c")` yields `("a", "b.c")`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternExtractor;

impl PatternExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for PatternExtractor {
    fn extract(&self, content: &str) -> FileFacts {
        FileFacts {
            uses_global: GLOBAL_NAMESPACE_REGEX.is_match(content),
            local_namespaces: LOCAL_NAMESPACE_REGEX
                .captures_iter(content)
                .map(|cap| cap[1].to_string())
                .collect(),
            local_keys: key_paths(&LOCAL_KEY_REGEX, content),
            global_keys: key_paths(&GLOBAL_KEY_REGEX, content),
        }
    }
}

fn key_paths(regex: &Regex, content: &str) -> Vec<KeyPath> {
    regex
        .captures_iter(content)
        .map(|cap| KeyPath::nested(&cap[1], &cap[2]))
        .collect()
}
