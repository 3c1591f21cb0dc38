// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file:
///
/// ```toml
/// [session]
/// debug = false
/// shell = "/bin/bash"
/// prompt = "stdin: "
/// ```
///
/// All sections and fields are optional and have defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub session: SessionConfig,
}

/// `[session]` section: process-wide settings for one interactive session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Emit extra `[debug]` diagnostic lines on the stderr channel.
    ///
    /// Also enabled by setting the `CELLRUN_DEBUG` environment variable.
    #[serde(default)]
    pub debug: bool,

    /// Shell interpreter used to run directives, invoked as `<shell> -c`.
    ///
    /// If unset, the platform default is used (`sh` on unix, `cmd /C` on
    /// Windows). The `CELLRUN_SHELL` environment variable takes precedence
    /// over this field.
    #[serde(default)]
    pub shell: Option<String>,

    /// Prompt shown when forwarded input is read from the user.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    "stdin: ".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debug: false,
            shell: None,
            prompt: default_prompt(),
        }
    }
}
