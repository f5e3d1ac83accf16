//! Embeds the per-locale translation tables from `lang/*.json`.
//!
//! The JSON files are nested; they are flattened here to dotted key paths
//! and checked for key parity across locales, so a translation missing in
//! one language fails the build instead of surfacing at render time.
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::{env, fs};

use anyhow::{bail, Context, Result};
use serde_json::Value;

const LANG_DIR: &str = "lang";

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed={LANG_DIR}");

    let mut tables: Vec<(String, BTreeMap<String, String>)> = Vec::new();
    let mut entries: Vec<_> = fs::read_dir(LANG_DIR)
        .with_context(|| format!("read `{LANG_DIR}/`"))?
        .collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.path());
    for entry in entries {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        println!("cargo:rerun-if-changed={}", path.display());
        let code = path
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("locale code from `{}`", path.display()))?
            .to_string();
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("read `{}`", path.display()))?;
        let root: Value = serde_json::from_str(&raw)
            .with_context(|| format!("parse `{}`", path.display()))?;
        let mut flat = BTreeMap::new();
        flatten("", &root, &mut flat)
            .with_context(|| format!("flatten `{}`", path.display()))?;
        tables.push((code, flat));
    }
    if tables.is_empty() {
        bail!("no translation tables found under `{LANG_DIR}/`");
    }

    check_parity(&tables)?;

    let out = Path::new(&env::var("OUT_DIR")?).join("lang_data.rs");
    fs::write(out, render(&tables)?)?;
    Ok(())
}

/// Flatten nested objects into `a.b.c` keys; only string leaves are allowed.
fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) -> Result<()> {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, out)?;
            }
        }
        Value::String(s) => {
            if s.is_empty() {
                bail!("`{prefix}` is empty");
            }
            out.insert(prefix.to_string(), s.clone());
        }
        other => bail!("`{prefix}`: expected object or string, got {other}"),
    }
    Ok(())
}

/// Every locale must define exactly the union of key paths.
fn check_parity(tables: &[(String, BTreeMap<String, String>)]) -> Result<()> {
    let union: BTreeSet<&str> = tables
        .iter()
        .flat_map(|(_, t)| t.keys().map(String::as_str))
        .collect();
    let mut problems = Vec::new();
    for (code, table) in tables {
        for key in &union {
            if !table.contains_key(*key) {
                problems.push(format!("locale `{code}` is missing `{key}`"));
            }
        }
    }
    if !problems.is_empty() {
        bail!("translation tables out of sync:\n  {}", problems.join("\n  "));
    }
    Ok(())
}

fn render(tables: &[(String, BTreeMap<String, String>)]) -> Result<String> {
    let mut src = String::from(
        "/// Flattened locale tables generated from `lang/*.json`.\n\
         pub static EMBEDDED_LANGS: &[(&str, &str)] = &[\n",
    );
    for (code, table) in tables {
        let json = serde_json::to_string(table)?;
        src.push_str(&format!("    ({code:?}, {json:?}),\n"));
    }
    src.push_str("];\n");
    Ok(src)
}
