use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Every non-fallback locale must define at least the keys of `en-US`, and
/// every `t!("...")` literal used under `src/` must exist in the fallback.
///
/// Adding a locale: create `ui/i18n/<locale>/chronopath-ui.ftl`, copy the keys
/// from `en-US`, translate, then register it in `LOCALES` below.
const EN_US: &str = include_str!("../i18n/en-US/chronopath-ui.ftl");
const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/chronopath-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/chronopath-ui.ftl")),
];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);
    assert!(!fallback_keys.is_empty(), "Fallback (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);
        let keys = extract_keys(src);
        let missing: Vec<&String> = fallback_keys.difference(&keys).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing
                    .iter()
                    .map(|k| k.as_str())
                    .collect::<Vec<_>>()
                    .join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback_keys = extract_keys(EN_US);
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = referenced_keys(&src_root);
    assert!(
        referenced.contains("home-journey-title"),
        "source scan found no t!() call sites; did the macro name change?"
    );

    let missing: Vec<&String> = referenced.difference(&fallback_keys).collect();
    assert!(
        missing.is_empty(),
        "Keys used in src/ but missing from en-US: {missing:?}"
    );
}

#[test]
fn fallback_keys_are_all_referenced() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = referenced_keys(&src_root);
    // `era-*` names are looked up dynamically through `era_name`.
    let unused: Vec<String> = extract_keys(EN_US)
        .into_iter()
        .filter(|key| !key.starts_with("era-") && !referenced.contains(key))
        .collect();
    assert!(unused.is_empty(), "Keys in en-US never used in src/: {unused:?}");
}

#[test]
fn every_catalog_era_has_a_translated_name() {
    let keys = extract_keys(EN_US);
    for option in ui::core::ERA_OPTIONS.iter() {
        let key = format!("era-{}", option.code);
        assert!(keys.contains(&key), "missing era name key `{key}`");
    }
}

/// Message keys from a Fluent file: `key = ...` lines, ignoring comments,
/// attributes, terms and continuation lines.
fn extract_keys(src: &str) -> BTreeSet<String> {
    src.lines().filter_map(message_key).collect()
}

fn message_key(line: &str) -> Option<String> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') || line.starts_with('-')
    {
        return None;
    }
    let (left, _) = line.split_once('=')?;
    let key = left.trim();
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'));
    valid.then(|| key.to_string())
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = BTreeSet::new();
    let dups: Vec<String> = src
        .lines()
        .filter_map(message_key)
        .filter(|key| !seen.insert(key.clone()))
        .collect();
    assert!(dups.is_empty(), "Duplicate key definitions in {locale}: {dups:?}");
}

/// Literal first arguments of `t!("...")` across all `.rs` files under `root`.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    let needle = "t!(\"";

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            // Skip other macros ending in `t!`, e.g. `format!`.
            let standalone = rest[..pos]
                .chars()
                .next_back()
                .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
            rest = &rest[pos + needle.len()..];
            if !standalone {
                continue;
            }
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if key.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')) {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }

    found
}
