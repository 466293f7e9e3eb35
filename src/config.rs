use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "timetable_data.json";
pub const DEFAULT_EXPORT_FILE: &str = "timetable.txt";

pub const DATA_ENV: &str = "TIMETABLE_DATA";
pub const EXPORT_ENV: &str = "TIMETABLE_EXPORT";

/// Where the store keeps its data and writes exports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub export_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl Config {
    /// Resolves paths from the process arguments and environment.
    pub fn from_env() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_sources(&args, |key| std::env::var(key).ok())
    }

    /// Flags win over environment variables, which win over defaults.
    ///
    /// Recognised flags: `--data <path>` and `--export <path>`.
    pub fn from_sources<F>(args: &[String], env: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = env(DATA_ENV).filter(|p| !p.is_empty()) {
            config.data_file = PathBuf::from(path);
        }
        if let Some(path) = env(EXPORT_ENV).filter(|p| !p.is_empty()) {
            config.export_file = PathBuf::from(path);
        }

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let target = match arg.as_str() {
                "--data" => &mut config.data_file,
                "--export" => &mut config.export_file,
                other => return Err(format!("unknown argument '{}'", other)),
            };
            let value = iter
                .next()
                .ok_or_else(|| format!("missing value for {}", arg))?;
            *target = PathBuf::from(value);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let config = Config::from_sources(&[], |_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.data_file, PathBuf::from("timetable_data.json"));
        assert_eq!(config.export_file, PathBuf::from("timetable.txt"));
    }

    #[test]
    fn env_overrides_defaults_and_flags_override_env() {
        let env = |key: &str| match key {
            DATA_ENV => Some("/var/lib/tt.json".to_string()),
            EXPORT_ENV => Some("/tmp/tt.txt".to_string()),
            _ => None,
        };

        let config = Config::from_sources(&[], env).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/var/lib/tt.json"));
        assert_eq!(config.export_file, PathBuf::from("/tmp/tt.txt"));

        let config = Config::from_sources(&args(&["--data", "local.json"]), env).unwrap();
        assert_eq!(config.data_file, PathBuf::from("local.json"));
        assert_eq!(config.export_file, PathBuf::from("/tmp/tt.txt"));
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(Config::from_sources(&args(&["--data"]), |_| None).is_err());
        assert!(Config::from_sources(&args(&["--verbose"]), |_| None).is_err());
    }
}
