#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod browser;
pub mod chooser;
pub mod config;
pub mod locator;
pub mod remote;
pub mod resolver;
pub mod runner;
pub mod search;

pub use browser::{browser_command, BrowserConfig};
pub use chooser::{choose, ChoiceError};
pub use config::{ConfigError, ConfigFile, WorkspaceConfig, DEFAULT_WORKSPACE_DIR};
pub use locator::{locate, strip_extension, FileMatch};
pub use remote::{RemoteConfig, RemoteError, RepoNameMap};
pub use resolver::resolve_subfolder;
pub use runner::{select_match, Runner, RunnerError, EXIT_FAILURE, EXIT_SEARCH_UNAVAILABLE};
pub use search::{exit_code, run_search, search_command, SearchConfig, SearchError};
