use app_core::string_error::ErrorStringExt;
use std::{io::Read, path::PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Initial directory of the load/save dialogs.
    pub data_dir: PathBuf,
    /// Initial directory of the screenshot dialog.
    pub screenshot_dir: PathBuf,
    /// Replaces the built-in algorithm catalog.
    pub algorithms_path: Option<PathBuf>,
    /// Overrides entries of the built-in properties.
    pub properties_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            screenshot_dir: PathBuf::from("."),
            algorithms_path: None,
            properties_path: None,
        }
    }
}

impl Config {
    pub fn from_config_file() -> Result<Self, String> {
        #[allow(deprecated)]
        let Some(home) = std::env::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        let config_raw = {
            let path = home.join(PathBuf::from(".vilij"));
            let mut file = std::fs::File::open(path).err_to_string("could not open config file")?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)
                .err_to_string("could not load config file")?;
            buf
        };
        Ok(Self::parse(&config_raw))
    }

    /// Reads `key=value` lines, unknown keys are ignored.
    pub fn parse(config_raw: &str) -> Self {
        let mut config = Self::default();
        for line in config_raw.lines() {
            // Lines starting with "#" are considered comments.
            if line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            let val = val.trim();
            if val.is_empty() {
                log::warn!("ignoring empty value for config key '{}'", key.trim());
                continue;
            }
            match key.trim() {
                "data_dir" => config.data_dir = PathBuf::from(val),
                "screenshot_dir" => config.screenshot_dir = PathBuf::from(val),
                "algorithms_path" => config.algorithms_path = Some(PathBuf::from(val)),
                "properties_path" => config.properties_path = Some(PathBuf::from(val)),
                other => log::warn!("unknown config key '{other}'"),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_file() {
        // Depends on the machine, must not panic.
        let _ = dbg!(Config::from_config_file());
    }

    #[test]
    fn test_parse() {
        let config = Config::parse(
            "# vilij\ndata_dir=/home/me/data\nalgorithms_path = /etc/algos.json\nscreenshot_dir=\nunknown=1\nnot a pair\n",
        );
        assert_eq!(
            config,
            Config {
                data_dir: PathBuf::from("/home/me/data"),
                screenshot_dir: PathBuf::from("."),
                algorithms_path: Some(PathBuf::from("/etc/algos.json")),
                properties_path: None,
            }
        );
    }
}
