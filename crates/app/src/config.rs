use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use learn_core::Catalog;

pub const MEMORY_DB_URL: &str = "sqlite::memory:";

/// Turn a bare path or `sqlite:` URL into an absolute `sqlite://` URL.
pub fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == MEMORY_DB_URL || trimmed.starts_with("sqlite://") {
        return trimmed.to_owned();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Create the database file and its parent directory if they are missing.
pub fn prepare_sqlite_file(db_url: &str) -> anyhow::Result<()> {
    if db_url == MEMORY_DB_URL {
        return Ok(());
    }

    let Some(path) = db_url.strip_prefix("sqlite://") else {
        bail!("invalid --db value: {db_url}");
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        bail!("invalid --db value: {db_url}");
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("creating {}", path.display()))?;
    }
    Ok(())
}

/// The catalog file given on the command line, or the bundled curriculum.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let Some(path) = path else {
        return Catalog::bundled().context("loading bundled catalog");
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog =
        Catalog::from_json(&json).with_context(|| format!("parsing catalog {}", path.display()))?;
    tracing::info!(path = %path.display(), courses = catalog.len(), "catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_and_full_urls_pass_through() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(normalize_sqlite_url("sqlite:///tmp/x.db"), "sqlite:///tmp/x.db");
    }

    #[test]
    fn relative_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/learn.sqlite3");
        let path = url.strip_prefix("sqlite://").unwrap();
        assert!(Path::new(path).is_absolute());
        assert!(path.ends_with("data/learn.sqlite3"));

        let url = normalize_sqlite_url("/var/tmp/l.db");
        assert_eq!(url, "sqlite:///var/tmp/l.db");
    }

    #[test]
    fn prepare_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested/state.sqlite3");
        let url = format!("sqlite://{}?mode=rwc", file.display());
        prepare_sqlite_file(&url).unwrap();
        assert!(file.exists());
        assert!(prepare_sqlite_file("sqlite:relative").is_err());
    }

    #[test]
    fn catalog_file_is_validated() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("catalog.json");
        std::fs::write(&file, r#"[{"id":1,"title":"","category":"C","level":"Beginner","lessons":[]}]"#)
            .unwrap();
        assert!(load_catalog(Some(&file)).is_err());
        assert_eq!(load_catalog(None).unwrap().len(), 4);
    }
}
