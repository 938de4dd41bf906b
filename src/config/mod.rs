use crate::core::TargetProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_targets, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGETS: [&str; 3] = [
    "https://ft-tech-test-example.s3-eu-west-1.amazonaws.com/ftse-fsi.json",
    "https://ft-tech-test-example.s3-eu-west-1.amazonaws.com/gbp-hkd.json",
    "https://ft-tech-test-example.s3-eu-west-1.amazonaws.com/gbp-usd.json",
];

/// The built-in target list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTargets;

impl TargetProvider for DefaultTargets {
    fn targets(&self) -> &[&'static str] {
        &DEFAULT_TARGETS
    }
}

impl Validate for DefaultTargets {
    fn validate(&self) -> Result<()> {
        validate_targets(self.targets())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "json-batch-fetch")]
#[command(about = "Fetch a fixed set of JSON endpoints concurrently and report the elapsed time")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process memory usage when the batch settles")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl TargetProvider for CliConfig {
    fn targets(&self) -> &[&'static str] {
        DefaultTargets.targets()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        DefaultTargets.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_are_valid() {
        assert!(DefaultTargets.validate().is_ok());
        assert_eq!(DefaultTargets.targets().len(), 3);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flags() {
        let config = CliConfig::parse_from(["json-batch-fetch", "--verbose", "--monitor"]);
        assert!(config.verbose);
        assert!(config.monitor);
        assert_eq!(config.targets(), &DEFAULT_TARGETS);

        let config = CliConfig::parse_from(["json-batch-fetch"]);
        assert!(!config.verbose);
        assert!(!config.monitor);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_rejects_url_arguments() {
        assert!(CliConfig::try_parse_from(["json-batch-fetch", "https://example.com"]).is_err());
    }
}
