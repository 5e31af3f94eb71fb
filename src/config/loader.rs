//! Config file loading
//!
//! Dispatches on the file extension to a format-specific decoder. The
//! extension is inspected before any file I/O, so an unrecognized path never
//! touches the disk.

use crate::config::{Config, ConfigError};
use crate::cue::{self, CueValue};
use std::fs;
use std::path::Path;

/// Produce a [`Config`] from a file path.
///
/// `.json` and `.cue` are the only recognized extensions; anything else
/// (including no extension at all) is rejected up front.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    // Case-sensitive on purpose: `config.JSON` is not a recognized type.
    match ext {
        "" => Err(ConfigError::MissingExtension(path.to_path_buf())),
        "json" => load_json(path),
        "cue" => load_cue(path),
        _ => Err(ConfigError::UnsupportedExtension(path.to_path_buf())),
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
}

fn load_json(path: &Path) -> Result<Config, ConfigError> {
    let content = read_file(path)?;
    serde_json::from_str(&content)
        .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
}

/// Decode a CUE document by looking up four scoped paths individually.
///
/// A document that fails to compile is an error; a missing or wrong-typed
/// field falls back to the zero value for that field, with a warning. The
/// fallback matches how absent JSON keys behave, but is logged so it is
/// observable.
fn load_cue(path: &Path) -> Result<Config, ConfigError> {
    let content = read_file(path)?;
    let root = cue::compile(&content)
        .map_err(|source| ConfigError::Cue { path: path.to_path_buf(), source })?;

    let mut config = Config::default();
    config.http.listen_port = lookup_int(&root, "config.http.listen_port");
    config.database.host = lookup_string(&root, "config.database.host");
    config.database.user = lookup_string(&root, "config.database.user");
    config.database.password = lookup_string(&root, "config.database.password");

    Ok(config)
}

fn lookup_int(root: &CueValue, path: &str) -> i64 {
    match root.lookup(path).and_then(CueValue::as_i64) {
        Some(n) => n,
        None => {
            tracing::warn!("CUE field {} missing or not an integer, using 0", path);
            0
        }
    }
}

fn lookup_string(root: &CueValue, path: &str) -> String {
    match root.lookup(path).and_then(CueValue::as_str) {
        Some(s) => s.to_string(),
        None => {
            tracing::warn!("CUE field {} missing or not a string, using \"\"", path);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_all_fields() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.json");
        fs::write(
            &path,
            r#"{"http": {"listen_port": 8080},
                "database": {"host": "db", "user": "u", "password": "p"}}"#,
        )
        .expect("write");

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.http.listen_port, 8080);
        assert_eq!(cfg.database.host, "db");
        assert_eq!(cfg.database.user, "u");
        assert_eq!(cfg.database.password, "p");
    }

    #[test]
    fn test_load_json_missing_fields_default_to_zero_values() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{"http": {"listen_port": 9090}}"#).expect("write");

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.http.listen_port, 9090);
        assert_eq!(cfg.database.host, "");
        assert_eq!(cfg.database.user, "");
        assert_eq!(cfg.database.password, "");
    }

    #[test]
    fn test_missing_extension_rejected_before_any_read() {
        // The path does not exist; a file read would surface as Io instead.
        let result = load_config(Path::new("/nonexistent/config"));
        assert!(matches!(result, Err(ConfigError::MissingExtension(_))));
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let result = load_config(Path::new("config.xml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedExtension(_))));
    }

    #[test]
    fn test_nonexistent_json_file_is_io_error() {
        let tmp = TempDir::new().expect("tmp");
        let result = load_config(&tmp.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.json");
        fs::write(&path, "{not json").expect("write");

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Json { .. })));
    }

    #[test]
    fn test_json_incompatible_type_is_decode_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{"http": {"listen_port": "not a number"}}"#).expect("write");

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Json { .. })));
    }

    #[test]
    fn test_load_cue_all_fields() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.cue");
        fs::write(
            &path,
            r#"config: {http: {listen_port: 8080}, database: {host: "db", user: "u", password: "p"}}"#,
        )
        .expect("write");

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.http.listen_port, 8080);
        assert_eq!(cfg.database.host, "db");
        assert_eq!(cfg.database.user, "u");
        assert_eq!(cfg.database.password, "p");
    }

    #[test]
    fn test_load_cue_missing_host_falls_back_to_empty_string() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.cue");
        fs::write(
            &path,
            r#"
config: {
    http: {
        listen_port: 8080
    }
    database: {
        user: "u"
        password: "p"
    }
}
"#,
        )
        .expect("write");

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.http.listen_port, 8080);
        assert_eq!(cfg.database.host, "");
        assert_eq!(cfg.database.user, "u");
    }

    #[test]
    fn test_load_cue_syntax_error_is_decode_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.cue");
        fs::write(&path, "config: {http: {").expect("write");

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Cue { .. })));
    }

    #[test]
    fn test_extension_matching_is_case_sensitive() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.JSON");
        fs::write(&path, r#"{"http": {"listen_port": 1}}"#).expect("write");

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedExtension(_))));
    }

    #[test]
    fn test_json_port_above_u16_range_loads_unchanged() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{"http": {"listen_port": 70000}}"#).expect("write");

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.http.listen_port, 70000);
    }

    #[test]
    fn test_cue_port_above_u16_range_loads_unchanged() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.cue");
        fs::write(&path, "config: {http: {listen_port: 70000}}").expect("write");

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.http.listen_port, 70000);
    }
}
