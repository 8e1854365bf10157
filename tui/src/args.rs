//! Parsing command-line arguments.

use clap::{command, error::ErrorKind, value_parser, Arg, ArgAction, Command, Error};
use std::{ffi::OsString, fs, path::Path, path::PathBuf};
use tinylife_lib::{rules::Life, Config, Error as LifeError, PatternLayout, StepMode};

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse() {
        Ok(0) | Err(_) => Err(String::from("must be a positive integer")),
        Ok(n) => Ok(n),
    }
}

fn parse_rule(s: &str) -> Result<String, String> {
    s.parse::<Life>()
        .map(|_| s.to_owned())
        .map_err(|e| e.to_string())
}

/// Reads a [`Config`] from a settings file.
///
/// The format is chosen by the extension: `.toml`, `.yaml` / `.yml` or `.json`.
/// Missing fields take their default values.
pub(crate) fn read_settings(path: &Path) -> Result<Config, LifeError> {
    let text = fs::read_to_string(path)
        .map_err(|e| LifeError::SettingsError(format!("{}: {}", path.display(), e)))?;
    let config: Config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&text).map_err(|e| e.to_string()),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        Some("json") => serde_json::from_str(&text).map_err(|e| e.to_string()),
        _ => Err(String::from(
            "unknown settings format, expected .toml, .yaml or .json",
        )),
    }
    .map_err(|e| LifeError::SettingsError(format!("{}: {}", path.display(), e)))?;
    Ok(config)
}

fn app() -> Command {
    command!()
        .long_about(
            "Conway's Game of Life on a small bounded grid\n\
             \n\
             The first generation is read from a pattern file: \
             the width on the first line, the height on the second, \
             then one line per row where `o` marks a living cell.\n\
             If the pattern file is missing or invalid, \
             living cells are placed at random.\n\
             \n\
             The game ends when every cell is dead, \
             or when X is pressed.\n",
        )
        .arg(
            Arg::new("CONFIG")
                .help("Pattern file of the first generation")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .default_value("CONFIG.TXT"),
        )
        .arg(
            Arg::new("SETTINGS")
                .help("Settings file (.toml, .yaml or .json)")
                .long_help(
                    "Settings file (.toml, .yaml or .json)\n\
                     Any field may be omitted. Options given on the command line \
                     take precedence.\n",
                )
                .short('s')
                .long("settings")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("RULE")
                .help("Rule of the cellular automaton [default: B3/S23]")
                .long_help(
                    "Rule of the cellular automaton [default: B3/S23]\n\
                     Supports Life-like rules without B0.\n",
                )
                .short('r')
                .long("rule")
                .value_parser(parse_rule),
        )
        .arg(
            Arg::new("MAXWIDTH")
                .help("Maximal width, also the width of random worlds [default: 10]")
                .long("max-width")
                .value_name("N")
                .value_parser(parse_positive),
        )
        .arg(
            Arg::new("MAXHEIGHT")
                .help("Maximal height, also the height of random worlds [default: 10]")
                .long("max-height")
                .value_name("N")
                .value_parser(parse_positive),
        )
        .arg(
            Arg::new("LAYOUT")
                .help("Whether the lines of the pattern file are rows or columns [default: rows]")
                .short('l')
                .long("layout")
                .value_parser(["rows", "columns", "r", "c"]),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random number generator")
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("NOWAIT")
                .help("Advances without waiting for a key press")
                .short('n')
                .long("no-wait")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("DELAY")
                .help("Pause between generations in milliseconds, with --no-wait")
                .short('d')
                .long("delay")
                .value_name("MS")
                .requires("NOWAIT")
                .value_parser(value_parser!(u64)),
        )
}

/// A struct to store the parse results.
#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) pattern: PathBuf,
    pub(crate) seed: Option<u64>,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::parse_from(std::env::args_os())
    }

    pub(crate) fn parse_from<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().try_get_matches_from(args)?;

        let mut config = match matches.get_one::<PathBuf>("SETTINGS") {
            Some(path) => read_settings(path).map_err(|e| Error::raw(ErrorKind::Io, e))?,
            None => Config::default(),
        };

        if let Some(rule_string) = matches.get_one::<String>("RULE") {
            config.rule_string = rule_string.clone();
        }
        if let Some(&max_width) = matches.get_one::<usize>("MAXWIDTH") {
            config.max_width = max_width;
        }
        if let Some(&max_height) = matches.get_one::<usize>("MAXHEIGHT") {
            config.max_height = max_height;
        }
        if let Some(layout) = matches.get_one::<String>("LAYOUT") {
            config.layout = layout
                .parse::<PatternLayout>()
                .map_err(|e| Error::raw(ErrorKind::InvalidValue, e))?;
        }
        if matches.get_flag("NOWAIT") {
            config.step_mode = StepMode::Auto;
        }
        if let Some(&delay_ms) = matches.get_one::<u64>("DELAY") {
            config.delay_ms = delay_ms;
        }

        config
            .validate()
            .map_err(|e| Error::raw(ErrorKind::InvalidValue, format!("{}\n", e)))?;

        let pattern = matches
            .get_one::<PathBuf>("CONFIG")
            .cloned()
            .unwrap_or_else(|| PathBuf::from("CONFIG.TXT"));
        let seed = matches.get_one::<u64>("SEED").copied();

        Ok(Args {
            config,
            pattern,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    fn settings_file(name: &str, contents: &str) -> Result<PathBuf, Box<dyn StdError>> {
        let path = std::env::temp_dir().join(format!("tinylife-{}-{}", std::process::id(), name));
        fs::write(&path, contents)?;
        Ok(path)
    }

    #[test]
    fn defaults() -> Result<(), Box<dyn StdError>> {
        let args = Args::parse_from(["tinylife"])?;
        assert_eq!(args.config, Config::default());
        assert_eq!(args.pattern, PathBuf::from("CONFIG.TXT"));
        assert_eq!(args.seed, None);
        Ok(())
    }

    #[test]
    fn options() -> Result<(), Box<dyn StdError>> {
        let args = Args::parse_from([
            "tinylife",
            "--config",
            "glider.txt",
            "-r",
            "B36/S23",
            "--max-width",
            "20",
            "--max-height",
            "15",
            "-l",
            "columns",
            "--seed",
            "7",
            "-n",
            "--delay",
            "100",
        ])?;
        assert_eq!(args.pattern, PathBuf::from("glider.txt"));
        assert_eq!(args.seed, Some(7));
        assert_eq!(
            args.config,
            Config::new(20, 15)
                .set_rule_string("B36/S23")
                .set_layout(PatternLayout::ColumnsAreLines)
                .set_step_mode(StepMode::Auto)
                .set_delay_ms(100)
        );
        Ok(())
    }

    #[test]
    fn invalid_options() {
        let kind = |args: &[&str]| Args::parse_from(args).unwrap_err().kind();
        assert_eq!(
            kind(&["tinylife", "--max-width", "0"]),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            kind(&["tinylife", "--rule", "B0/S8"]),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            kind(&["tinylife", "--layout", "diagonal"]),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            kind(&["tinylife", "--max-width", "50000", "--max-height", "50000"]),
            ErrorKind::InvalidValue
        );
    }

    #[test]
    fn toml_settings() -> Result<(), Box<dyn StdError>> {
        let path = settings_file(
            "settings.toml",
            "max_width = 16\n\
             layout = \"columns\"\n\
             step_mode = \"auto\"\n\
             exit_key = \"q\"\n",
        )?;
        let args = Args::parse_from([
            OsString::from("tinylife"),
            OsString::from("--settings"),
            path.clone().into_os_string(),
            OsString::from("--max-width"),
            OsString::from("12"),
        ]);
        fs::remove_file(&path)?;
        let config = args?.config;
        assert_eq!(config.max_width, 12);
        assert_eq!(config.max_height, 10);
        assert_eq!(config.layout, PatternLayout::ColumnsAreLines);
        assert_eq!(config.step_mode, StepMode::Auto);
        assert_eq!(config.exit_key, 'q');
        Ok(())
    }

    #[test]
    fn yaml_and_json_settings() -> Result<(), Box<dyn StdError>> {
        let yaml = settings_file("settings.yaml", "rule_string: B36/S23\nalive_marker: '#'\n")?;
        let config = read_settings(&yaml);
        fs::remove_file(&yaml)?;
        let config = config?;
        assert_eq!(config.rule_string, "B36/S23");
        assert_eq!(config.alive_marker, '#');

        let json = settings_file("settings.json", r#"{"random_min": 3, "random_spread": 2}"#)?;
        let config = read_settings(&json);
        fs::remove_file(&json)?;
        let config = config?;
        assert_eq!(config.random_min, 3);
        assert_eq!(config.random_spread, 2);
        assert_eq!(config.rule_string, "B3/S23");
        Ok(())
    }

    #[test]
    fn bad_settings() -> Result<(), Box<dyn StdError>> {
        let missing = std::env::temp_dir().join("tinylife-missing-settings.toml");
        assert!(matches!(
            read_settings(&missing),
            Err(LifeError::SettingsError(_))
        ));

        let ini = settings_file("settings.ini", "max_width = 3\n")?;
        let result = read_settings(&ini);
        fs::remove_file(&ini)?;
        assert!(matches!(result, Err(LifeError::SettingsError(_))));

        let invalid = settings_file("invalid.toml", "alive_marker = \".\"\n")?;
        let result = Args::parse_from([
            OsString::from("tinylife"),
            OsString::from("-s"),
            invalid.clone().into_os_string(),
        ]);
        fs::remove_file(&invalid)?;
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidValue);
        Ok(())
    }
}
