use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::core::snapshot::MalformedPolicy;
use crate::core::view_model::ArrayDisplay;
use crate::error::ConfigError;
use crate::source::SourceKind;
use crate::state::panel::{PANEL_TITLE, PanelOptions};
use crate::ui::region::MIN_HEIGHT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub source: Option<PathBuf>,
    pub kind: SourceKind,
    pub root_label: String,
    pub on_malformed: MalformedPolicy,
    pub array_display: ArrayDisplay,
    pub panel_height: u16,
    pub open_on_start: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            kind: SourceKind::Auto,
            root_label: "root".to_string(),
            on_malformed: MalformedPolicy::Raw,
            array_display: ArrayDisplay::Distinct,
            panel_height: 10,
            open_on_start: true,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads a YAML config. Relative paths inside it are resolved against the
    /// directory holding the file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str::<Self>(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };

        if let Some(base) = path.parent() {
            config.source = config.source.map(|source| rebase(base, source));
            config.log_file = config.log_file.map(|file| rebase(base, file));
        }
        Ok(config)
    }

    /// Config file (if any) overlaid with the command line, then validated.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match cli.config.as_deref() {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(source) = &cli.source {
            self.source = Some(source.clone());
        }
        if let Some(kind) = cli.kind {
            self.kind = kind;
        }
        if let Some(label) = &cli.root_label {
            self.root_label = label.clone();
        }
        if let Some(policy) = cli.on_malformed {
            self.on_malformed = policy;
        }
        if let Some(display) = cli.array_display {
            self.array_display = display;
        }
        if let Some(height) = cli.panel_height {
            self.panel_height = height;
        }
        if cli.closed {
            self.open_on_start = false;
        }
        if let Some(file) = &cli.log_file {
            self.log_file = Some(file.clone());
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.is_none() {
            return Err(ConfigError::MissingSource);
        }
        if self.panel_height < MIN_HEIGHT {
            return Err(ConfigError::PanelTooSmall {
                min: MIN_HEIGHT,
                got: self.panel_height,
            });
        }
        self.log_filter()?;
        Ok(())
    }

    pub fn log_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_level).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn panel_options(&self) -> PanelOptions {
        PanelOptions {
            title: PANEL_TITLE.to_string(),
            root_label: self.root_label.clone(),
            height: self.panel_height,
            malformed: self.on_malformed,
            array_display: self.array_display,
        }
    }
}

fn rebase(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() && !base.as_os_str().is_empty() {
        base.join(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::cli::Cli;
    use crate::core::snapshot::MalformedPolicy;
    use crate::core::view_model::ArrayDisplay;
    use crate::error::ConfigError;
    use crate::source::SourceKind;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn yaml_fields_fill_the_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("viewer.yaml");
        fs::write(
            &path,
            "source: store.json\nkind: json\non_malformed: fail\narray_display: legacy\npanel_height: 6\n",
        )
        .expect("write config");

        let config = Config::from_yaml_file(&path).expect("config");
        assert_eq!(config.source, Some(dir.path().join("store.json")));
        assert_eq!(config.kind, SourceKind::Json);
        assert_eq!(config.on_malformed, MalformedPolicy::Fail);
        assert_eq!(config.array_display, ArrayDisplay::Legacy);
        assert_eq!(config.panel_height, 6);
        assert_eq!(config.root_label, "root");
        assert!(config.open_on_start);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("viewer.yaml");
        fs::write(&path, "source: a.json\ncolour: red\n").expect("write config");

        assert!(matches!(
            Config::from_yaml_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn command_line_overrides_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("viewer.yaml");
        fs::write(&path, "source: a.json\nroot_label: storage\npanel_height: 8\n")
            .expect("write config");

        let cli = Cli {
            config: Some(path),
            source: Some(PathBuf::from("/data/b.json")),
            panel_height: Some(4),
            closed: true,
            ..Cli::default()
        };
        let config = Config::load(&cli).expect("config");
        assert_eq!(config.source, Some(PathBuf::from("/data/b.json")));
        assert_eq!(config.root_label, "storage");
        assert_eq!(config.panel_height, 4);
        assert!(!config.open_on_start);
    }

    #[test]
    fn validation_catches_missing_source_and_tiny_panel() {
        let mut config = Config::default();
        assert!(matches!(config.validate(), Err(ConfigError::MissingSource)));

        config.source = Some(PathBuf::from("store.json"));
        config.panel_height = 2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PanelTooSmall { min: 3, got: 2 })
        ));

        config.panel_height = 3;
        assert!(config.validate().is_ok());
        assert_eq!(config.panel_options().height, 3);
    }
}
