use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::debug;

const PREFERENCES_FILE_NAME: &str = ".twig.yaml";

fn get_preferences_file_path(root: &Path) -> PathBuf {
    root.join(PREFERENCES_FILE_NAME)
}

/// Optional per-directory defaults for the CLI flags, read from `.twig.yaml`
/// in the scanned root. Explicit CLI arguments win over these values.
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    pub all: Option<bool>,
    pub color: Option<bool>,
    pub depth: Option<usize>,
}

impl Preferences {
    pub fn read(root: &Path) -> Result<Self, PreferencesError> {
        let path = get_preferences_file_path(root);
        debug!("Looking for preferences file: {}", path.display());

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!("No preferences file found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(source).context(ReadSnafu {
                    file_path: path.display().to_string(),
                });
            }
        };

        contents.as_str().try_into()
    }

    fn parse_preferences_from_yaml(top_level: &LinkedHashMap<Yaml, Yaml>) -> Self {
        let mut preferences = Self::default();

        for (key, value) in top_level {
            let Yaml::Value(Scalar::String(key)) = key else {
                debug!("Skipping non-string preference key: {:?}", key);
                continue;
            };

            match (key.as_ref(), value) {
                ("all", Yaml::Value(Scalar::Boolean(flag))) => preferences.all = Some(*flag),
                ("color", Yaml::Value(Scalar::Boolean(flag))) => preferences.color = Some(*flag),
                ("depth", Yaml::Value(Scalar::Integer(depth))) if *depth >= 0 => {
                    preferences.depth = Some(*depth as usize);
                }
                _ => debug!("Skipping invalid preference entry: {:?}", key),
            }
        }

        preferences
    }
}

impl TryFrom<&str> for Preferences {
    type Error = PreferencesError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let contents_vec = Yaml::load_from_str(contents)
            .map_err(|e| PreferencesError::ParseError { source: e })?;
        let contents = contents_vec
            .get(0)
            .ok_or(PreferencesError::MalformedPreferences)?;

        let top_level = contents
            .as_mapping()
            .ok_or(PreferencesError::TopLevelNotMap)?;

        Ok(Self::parse_preferences_from_yaml(top_level))
    }
}

#[derive(Debug, Snafu)]
pub enum PreferencesError {
    #[snafu(display("Failed to read the preferences file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the preferences file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted preferences file"))]
    MalformedPreferences,
    #[snafu(display("Top level of the preferences file should be a map"))]
    TopLevelNotMap,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn preferences_default_when_file_is_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let preferences = Preferences::read(temp_dir.path()).expect("read should succeed");

        assert_eq!(preferences.all, None);
        assert_eq!(preferences.color, None);
        assert_eq!(preferences.depth, None);
    }

    #[test]
    fn preferences_read_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(
            temp_dir.path().join(PREFERENCES_FILE_NAME),
            "all: true\ncolor: false\ndepth: 4",
        )
        .expect("Failed to write preferences file");

        let preferences = Preferences::read(temp_dir.path()).expect("read should succeed");
        assert_eq!(preferences.all, Some(true));
        assert_eq!(preferences.color, Some(false));
        assert_eq!(preferences.depth, Some(4));
    }

    #[test]
    fn preferences_returns_error_on_invalid_yaml() {
        let invalid_yaml = "invalid: yaml: content: [unclosed";
        let result: Result<Preferences, _> = invalid_yaml.try_into();
        assert!(matches!(result, Err(PreferencesError::ParseError { .. })));
    }

    #[test]
    fn preferences_returns_error_on_empty_file() {
        let result: Result<Preferences, _> = "".try_into();
        assert!(matches!(
            result,
            Err(PreferencesError::MalformedPreferences)
        ));
    }

    #[test]
    fn preferences_returns_error_when_top_level_is_not_map() {
        let result: Result<Preferences, _> = "- item1\n- item2".try_into();
        assert!(matches!(result, Err(PreferencesError::TopLevelNotMap)));
    }

    #[test]
    fn preferences_returns_error_when_top_level_is_scalar() {
        let result: Result<Preferences, _> = "just a string".try_into();
        assert!(matches!(result, Err(PreferencesError::TopLevelNotMap)));
    }

    #[test]
    fn preferences_skips_invalid_entries() {
        let yaml = "all: true\ndepth: -3\ncolor: \"red\"\nunknown: true\n123: false";
        let preferences: Preferences = yaml.try_into().expect("parse should succeed");

        assert_eq!(preferences.all, Some(true));
        assert_eq!(preferences.color, None);
        assert_eq!(preferences.depth, None);
    }

    #[test]
    fn preferences_handles_partial_files() {
        let preferences: Preferences = "depth: 0".try_into().expect("parse should succeed");

        assert_eq!(preferences.depth, Some(0));
        assert_eq!(preferences.all, None);
        assert_eq!(preferences.color, None);
    }
}
