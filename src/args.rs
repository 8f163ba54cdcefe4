//! Command-line argument definition.

use clap::Parser;

/// Bajraweb - marketing site and CMS frontend for Bajramedia
#[derive(Parser, Debug)]
#[command(name = "bajraweb")]
#[command(version)]
#[command(about = "Marketing site and CMS frontend for Bajramedia", long_about = None)]
pub struct Args {
    /// Address and port to listen on
    #[arg(long, default_value = "0.0.0.0:4311")]
    pub bind: String,

    /// Base URL of the CMS REST backend
    #[arg(long, default_value = "http://127.0.0.1:3001")]
    pub api_base: String,

    /// Specify the configuration directory (default: ~/.config/bajraweb)
    #[arg(long)]
    pub config_dir: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Defaults apply when no flags are passed
    ///
    /// - Input: Bare invocation
    /// - Output: Default bind, backend and log level; no config override
    fn args_defaults() {
        let args = Args::try_parse_from(["bajraweb"]).expect("parse");
        assert_eq!(args.bind, "0.0.0.0:4311");
        assert_eq!(args.api_base, "http://127.0.0.1:3001");
        assert_eq!(args.log_level, "info");
        assert!(args.config_dir.is_none());
    }

    #[test]
    /// What: Every flag overrides its default
    ///
    /// - Input: All four flags set
    /// - Output: Parsed values echo the flags
    fn args_overrides() {
        let args = Args::try_parse_from([
            "bajraweb",
            "--bind",
            "127.0.0.1:8080",
            "--api-base",
            "http://cms.internal:3001",
            "--config-dir",
            "/tmp/bajraweb-conf",
            "--log-level",
            "debug",
        ])
        .expect("parse");
        assert_eq!(args.bind, "127.0.0.1:8080");
        assert_eq!(args.api_base, "http://cms.internal:3001");
        assert_eq!(args.config_dir.as_deref(), Some("/tmp/bajraweb-conf"));
        assert_eq!(args.log_level, "debug");
    }
}
