use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

pub const CONFIG_FILENAME: &str = "tm-splitter.toml";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub split: SplitSection,
    #[serde(default)]
    pub glossary: GlossarySection,
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct SplitSection {
    /// Progress line cadence in rows (default 100). 0 disables per-row
    /// milestones.
    #[serde(default)]
    pub progress_every: Option<usize>,
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct GlossarySection {
    /// Extra phrase translations layered over the built-in table; they win
    /// over built-ins on both exact and case-insensitive lookups.
    #[serde(default)]
    pub terms: Vec<GlossaryTerm>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GlossaryTerm {
    pub en: String,
    pub ar: String,
}

/// Search for `tm-splitter.toml` upwards from the CWD, the input's directory,
/// and the executable's directory, in that order.
pub fn find_default_config(workdir: &Path) -> Option<PathBuf> {
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(p) = find_file_upwards(&cwd, CONFIG_FILENAME, 8) {
            return Some(p);
        }
    }
    if let Some(p) = find_file_upwards(workdir, CONFIG_FILENAME, 8) {
        return Some(p);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            if let Some(p) = find_file_upwards(dir, CONFIG_FILENAME, 8) {
                return Some(p);
            }
        }
    }
    None
}

fn find_file_upwards(start: &Path, filename: &str, max_depth: usize) -> Option<PathBuf> {
    let mut dir = Some(start.to_path_buf());
    for _ in 0..max_depth {
        let d = dir?;
        let candidate = d.join(filename);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = d.parent().map(Path::to_path_buf);
    }
    None
}

pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: AppConfig = toml::from_str(&text).context("parse config toml")?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::AppConfig;

    #[test]
    fn parses_full_config() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [split]
            progress_every = 250

            [[glossary.terms]]
            en = "Hello"
            ar = "أهلين"

            [[glossary.terms]]
            en = "Checkout"
            ar = "الدفع عند الخروج"
            "#,
        )
        .expect("parse config");

        assert_eq!(cfg.split.progress_every, Some(250));
        assert_eq!(cfg.glossary.terms.len(), 2);
        assert_eq!(cfg.glossary.terms[1].en, "Checkout");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").expect("parse empty config");
        assert!(cfg.split.progress_every.is_none());
        assert!(cfg.glossary.terms.is_empty());
    }
}
