use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

impl AppDirs {
    pub fn preferences_path(&self) -> PathBuf {
        self.app_data_root.join("preferences.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.app_data_root.join("config.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_dirs_derives_concrete_locations_from_app_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/portfolio"),
        };

        assert_eq!(
            dirs.preferences_path(),
            PathBuf::from("/tmp/portfolio/preferences.json")
        );
        assert_eq!(dirs.config_path(), PathBuf::from("/tmp/portfolio/config.toml"));
        assert_eq!(dirs.logs_dir(), PathBuf::from("/tmp/portfolio/logs"));
    }
}
