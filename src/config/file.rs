use std::{borrow::Cow, ffi::OsString, path::{Path, PathBuf}};

macro_rules! get_path_env_var { () => { "ART_FINDER_CONFIG" } }
pub static PATH_ENV_VAR: &str = get_path_env_var!();

const POST_CONFIG_HOME_DEFAULT_PATH: &str = "art-finder/config.toml";

/// How the user specified (or did not specify) the configuration file path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigPathChoice<'a> {
    /// Explicitly provided by a flag in the CLI.
    /// This has the highest priority, and overrides the environmental variable and default path.
    Explicit(&'a Path),
    /// Inferred based on an environmental variable.
    /// This has the second-highest priority, overriding the default path but not one passed through a CLI flag.
    Environmental(OsString),
    /// Automatically determined path within the user's configuration directory.
    /// This is the default, hence the name.
    Automatic(PathBuf),
}
impl<'a> ConfigPathChoice<'a> {
    pub fn new(explicit: Option<&'a Path>) -> ConfigPathChoice<'a> {
        if let Some(explicit) = explicit {
            Self::Explicit(explicit)
        } else {
            std::env::var_os(PATH_ENV_VAR).map(Self::Environmental)
                .unwrap_or_else(Self::automatic)
        }
    }

    pub fn automatic() -> Self {
        #[allow(deprecated)] // Only misbehaves on Windows, which falls through to the relative path anyway.
        let home = std::env::home_dir();
        Self::Automatic(automatic_path(std::env::var_os("XDG_CONFIG_HOME"), home))
    }

    pub fn as_path(&self) -> &Path {
        match self {
            Self::Explicit(explicit) => explicit,
            Self::Environmental(environmental) => Path::new(environmental),
            Self::Automatic(automatic) => automatic
        }
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.as_path().to_string_lossy()
    }

    pub const fn describe_for_choice_reasoning_suffix(&self) -> &'static str {
        match self {
            Self::Explicit(_) => "explicitly provided",
            Self::Automatic(_) => "the application default",
            Self::Environmental(_) => concat!("sourced from the ", get_path_env_var!(), " environmental variable")
        }
    }

    pub const fn was_auto(&self) -> bool {
        matches!(self, Self::Automatic(..))
    }
}
impl AsRef<Path> for ConfigPathChoice<'_> {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
impl core::default::Default for ConfigPathChoice<'_> {
    fn default() -> Self {
        Self::automatic()
    }
}

/// `$XDG_CONFIG_HOME`, then `~/.config`; an empty or relative `$XDG_CONFIG_HOME` is ignored.
fn automatic_path(config_home: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    let config_home = config_home
        .map(PathBuf::from)
        .filter(|path| path.is_absolute())
        .or_else(|| home.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"));
    config_home.join(POST_CONFIG_HOME_DEFAULT_PATH)
}
