//! Which content directory and site details a run uses.

use cabinet_config::Config;
use std::path::{self, PathBuf};

/// Settings chosen for one run.
#[derive(Debug, PartialEq, Eq)]
pub struct RunSettings {
    pub config: Config,
    /// Content path came from the config file rather than the command line.
    pub from_config: bool,
    /// No config file exists yet; this run should write one.
    pub first_run: bool,
}

/// Combines the command-line directory with the stored config.
///
/// An explicit directory wins over `content_path` but keeps the stored site
/// details. Returns `None` when there is neither.
pub fn resolve(arg: Option<&str>, stored: Option<Config>) -> Option<RunSettings> {
    match (arg, stored) {
        (Some(dir), Some(stored)) => Some(RunSettings {
            config: Config {
                content_path: PathBuf::from(dir),
                site: stored.site,
            },
            from_config: false,
            first_run: false,
        }),
        (Some(dir), None) => Some(RunSettings {
            config: Config::new(path::absolute(dir).unwrap_or_else(|_| PathBuf::from(dir))),
            from_config: false,
            first_run: true,
        }),
        (None, Some(stored)) => Some(RunSettings {
            config: stored,
            from_config: true,
            first_run: false,
        }),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinet_config::SiteConfig;
    use pretty_assertions::assert_eq;

    fn stored() -> Config {
        Config {
            content_path: PathBuf::from("/srv/blog"),
            site: SiteConfig {
                name: "Cabinet du Dr. Martin".to_string(),
                base_url: "https://cabinet-martin.fr".to_string(),
            },
        }
    }

    #[test]
    fn stored_config_is_used_without_argument() {
        let settings = resolve(None, Some(stored())).unwrap();
        assert_eq!(settings.config, stored());
        assert!(settings.from_config);
        assert!(!settings.first_run);
    }

    #[test]
    fn argument_overrides_path_but_keeps_site() {
        let settings = resolve(Some("/tmp/drafts"), Some(stored())).unwrap();
        assert_eq!(settings.config.content_path, PathBuf::from("/tmp/drafts"));
        assert_eq!(settings.config.site, stored().site);
        assert!(!settings.from_config);
        assert!(!settings.first_run);
    }

    #[test]
    fn first_run_gets_default_site_and_is_saved() {
        let settings = resolve(Some("/srv/blog"), None).unwrap();
        assert_eq!(settings.config, Config::new("/srv/blog"));
        assert!(settings.first_run);
    }

    #[test]
    fn first_run_stores_an_absolute_path() {
        let settings = resolve(Some("content/blog"), None).unwrap();
        assert!(settings.config.content_path.is_absolute());
        assert!(settings.config.content_path.ends_with("content/blog"));
    }

    #[test]
    fn nothing_to_go_on() {
        assert_eq!(resolve(None, None), None);
    }
}
