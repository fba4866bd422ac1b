use std::{ffi::OsString, path::PathBuf, time::Duration};

use clap::Parser;

use proj::config::{
    ChooserOptions, FileConfig, MarkerSet, OutputMode, Settings, file::expand_tilde,
    settings::DEFAULT_EDITOR,
};

#[derive(Parser)]
struct OutputArgs {
    /// Print the candidate records instead of opening the chooser
    #[arg(long, conflicts_with = "json")]
    list: bool,

    /// Print the candidates as JSON instead of opening the chooser
    #[arg(long, conflicts_with = "list")]
    json: bool,
}

#[derive(Parser)]
#[command(name = "proj", version)]
#[command(about = "Pick a project directory inside a monorepo and print its path")]
pub(crate) struct Cli {
    /// Directory to search instead of the git top-level
    #[arg(long, env = "MONOREPO_ROOT", value_name = "DIR")]
    root: Option<PathBuf>,

    /// Whitespace-separated marker filenames replacing the defaults
    #[arg(long, env = "PROJECT_MARKERS", value_name = "LIST")]
    markers: Option<String>,

    /// Chooser binary to run
    #[arg(long, env = "FZF_BIN", value_name = "BIN")]
    chooser: Option<String>,

    /// Editor opened when a project is picked with Tab
    #[arg(long, env = "PROJ_EDITOR", value_name = "BIN")]
    editor: Option<String>,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,

    /// Print diagnostics to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl Cli {
    pub(crate) fn output_mode(&self) -> OutputMode {
        if self.output.list {
            OutputMode::List
        } else if self.output.json {
            OutputMode::Json
        } else {
            OutputMode::Interactive
        }
    }

    /// Fold flags and environment over the config file and defaults.
    pub(crate) fn settings(
        &self,
        file_config: &FileConfig,
        cwd: PathBuf,
        search_path: Option<OsString>,
    ) -> Settings {
        let root_override = self
            .root
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| file_config.root.as_deref().map(expand_tilde));

        // A set marker list replaces the defaults even when it names nothing.
        let markers = self
            .markers
            .as_deref()
            .map(MarkerSet::parse)
            .or_else(|| {
                file_config
                    .markers
                    .as_ref()
                    .map(|list| list.iter().map(String::as_str).collect())
            })
            .unwrap_or_default();

        let file_chooser = &file_config.chooser;
        let defaults = ChooserOptions::default();
        let chooser = ChooserOptions {
            bin: non_blank(self.chooser.as_deref())
                .or(file_chooser.bin.as_deref())
                .map_or(defaults.bin, str::to_string),
            prompt: file_chooser.prompt.clone().unwrap_or(defaults.prompt),
            height: file_chooser.height.clone().unwrap_or(defaults.height),
            preview_limit: file_chooser.preview_limit.unwrap_or(defaults.preview_limit),
            timeout: file_chooser.timeout_secs.map(Duration::from_secs),
        };

        let editor = non_blank(self.editor.as_deref())
            .or(file_config.editor.as_deref())
            .unwrap_or(DEFAULT_EDITOR)
            .to_string();

        Settings {
            root_override,
            cwd,
            markers,
            chooser,
            editor,
            search_path,
            output: self.output_mode(),
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn bare() -> Cli {
        Cli {
            root: None,
            markers: None,
            chooser: None,
            editor: None,
            output: OutputArgs {
                list: false,
                json: false,
            },
            verbose: false,
        }
    }

    fn settings(cli: &Cli, file_config: &FileConfig) -> Settings {
        cli.settings(file_config, PathBuf::from("/work"), None)
    }

    #[test]
    fn test_defaults_without_flags_or_config() {
        let settings = settings(&bare(), &FileConfig::default());

        assert!(settings.root_override.is_none());
        assert_eq!(settings.markers, MarkerSet::default());
        assert_eq!(settings.chooser, ChooserOptions::default());
        assert_eq!(settings.editor, "code");
        assert_eq!(settings.output, OutputMode::Interactive);
        assert_eq!(settings.cwd, PathBuf::from("/work"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let cli = Cli {
            root: Some(PathBuf::from("/from/flag")),
            markers: Some("mix.exs".to_string()),
            chooser: Some("sk".to_string()),
            editor: Some("zed".to_string()),
            ..bare()
        };
        let file_config: FileConfig = toml::from_str(
            r#"
root = "/from/file"
markers = ["go.mod"]
editor = "vim"

[chooser]
bin = "fzy"
"#,
        )
        .unwrap();

        let settings = settings(&cli, &file_config);

        assert_eq!(settings.root_override, Some(PathBuf::from("/from/flag")));
        assert_eq!(settings.markers, MarkerSet::parse("mix.exs"));
        assert_eq!(settings.chooser.bin, "sk");
        assert_eq!(settings.editor, "zed");
    }

    #[test]
    fn test_config_file_fills_gaps() {
        let file_config: FileConfig = toml::from_str(
            r#"
root = "/from/file"
markers = ["go.mod", "Cargo.toml"]
editor = "vim"

[chooser]
bin = "fzy"
prompt = "> "
height = "100%"
preview_limit = 5
timeout_secs = 9
"#,
        )
        .unwrap();

        let settings = settings(&bare(), &file_config);

        assert_eq!(settings.root_override, Some(PathBuf::from("/from/file")));
        assert_eq!(
            settings.markers,
            MarkerSet::parse("Cargo.toml go.mod")
        );
        assert_eq!(settings.editor, "vim");
        assert_eq!(settings.chooser.bin, "fzy");
        assert_eq!(settings.chooser.prompt, "> ");
        assert_eq!(settings.chooser.height, "100%");
        assert_eq!(settings.chooser.preview_limit, 5);
        assert_eq!(settings.chooser.timeout, Some(Duration::from_secs(9)));
    }

    #[test]
    fn test_blank_values_fall_through() {
        let cli = Cli {
            root: Some(PathBuf::new()),
            chooser: Some(String::new()),
            editor: Some(" ".to_string()),
            ..bare()
        };

        let settings = settings(&cli, &FileConfig::default());

        assert!(settings.root_override.is_none());
        assert_eq!(settings.markers, MarkerSet::default());
        assert_eq!(settings.chooser.bin, "fzf");
        assert_eq!(settings.editor, "code");
    }

    #[test]
    fn test_blank_marker_list_replaces_defaults() {
        let cli = Cli {
            markers: Some("   ".to_string()),
            ..bare()
        };
        let file_config: FileConfig = toml::from_str(r#"markers = ["go.mod"]"#).unwrap();

        let settings = settings(&cli, &file_config);

        assert!(settings.markers.is_empty());
    }

    #[test]
    fn test_empty_marker_array_in_config_replaces_defaults() {
        let file_config: FileConfig = toml::from_str("markers = []").unwrap();

        let settings = settings(&bare(), &file_config);

        assert!(settings.markers.is_empty());
    }

    #[test]
    fn test_output_modes() {
        let list = Cli::try_parse_from(["proj", "--list"]).unwrap();
        assert_eq!(list.output_mode(), OutputMode::List);

        let json = Cli::try_parse_from(["proj", "--json"]).unwrap();
        assert_eq!(json.output_mode(), OutputMode::Json);

        assert!(Cli::try_parse_from(["proj", "--list", "--json"]).is_err());
    }

    #[test]
    fn test_search_path_is_passed_through() {
        let settings = bare().settings(
            &FileConfig::default(),
            PathBuf::from("/work"),
            Some(OsString::from("/usr/bin")),
        );

        assert_eq!(settings.search_path.as_deref(), Some(OsStr::new("/usr/bin")));
    }
}
