//! Opening URLs in a detached browser window.

use std::process::{Command, Stdio};
use tracing::{debug, warn};
use url::Url;

/// Browser executable and the flags placed before the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            program: "firefox".to_string(),
            args: vec!["--new-window".to_string()],
        }
    }
}

/// Builds the browser invocation for `url`, with all stdio detached.
#[must_use]
pub fn browser_command(config: &BrowserConfig, url: &Url) -> Command {
    let mut command = Command::new(&config.program);
    command
        .args(&config.args)
        .arg(url.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}

/// Opens `url` and returns immediately.
///
/// The browser is never waited on and its exit status is never observed. A
/// failure to start it is logged and otherwise ignored.
pub fn open(config: &BrowserConfig, url: &Url) {
    match browser_command(config, url).spawn() {
        Ok(child) => debug!(program = %config.program, pid = child.id(), "Browser launched"),
        Err(e) => warn!(program = %config.program, error = %e, "Failed to launch browser"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_url() -> Url {
        Url::parse("https://github.com/Curbcut/cc.v3/blob/main/src/App.tsx").unwrap()
    }

    #[test]
    fn command_puts_url_after_flags() {
        let command = browser_command(&BrowserConfig::default(), &sample_url());

        assert_eq!(command.get_program(), "firefox");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(
            args,
            vec![
                "--new-window",
                "https://github.com/Curbcut/cc.v3/blob/main/src/App.tsx"
            ]
        );
    }

    #[test]
    fn missing_browser_is_not_fatal() {
        let config = BrowserConfig {
            program: "/nonexistent/ccfind-browser".to_string(),
            args: Vec::new(),
        };
        open(&config, &sample_url());
    }
}
