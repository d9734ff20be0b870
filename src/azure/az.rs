//! Live [`NetworkSource`] backed by the `az` CLI.

use super::cli::{parse_json, run_args, split_command};
use super::retry::with_retry;
use super::NetworkSource;
use crate::config::Config;
use crate::models::{Subscription, SubnetRecord, VirtualNetwork, VnetRecord};
use crate::AnyError;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Projection of `az network vnet list`.
const VNET_QUERY: &str =
    "[].{name:name, resourceGroup:resourceGroup, addressSpace:addressSpace.addressPrefixes}";

/// Projection of `az network vnet subnet list`.
const SUBNET_QUERY: &str =
    "[].{name:name, addressPrefix:addressPrefix, addressPrefixes:addressPrefixes}";

#[derive(Debug, Clone)]
pub struct AzCli {
    program: String,
    base_args: Vec<String>,
    retries: u32,
    retry_delay: Duration,
}

impl AzCli {
    pub fn new(config: &Config) -> Result<AzCli, AnyError> {
        let mut words = split_command(&config.az_command).into_iter();
        let program = words
            .next()
            .ok_or_else(|| format!("Empty az command '{}'", config.az_command))?;
        Ok(AzCli {
            program,
            base_args: words.collect(),
            retries: config.retries,
            retry_delay: config.retry_delay(),
        })
    }

    /// Full argument list for one query, always asking for JSON output.
    fn args(&self, args: &[&str]) -> Vec<String> {
        self.base_args
            .iter()
            .cloned()
            .chain(args.iter().map(|a| a.to_string()))
            .chain(["--output".to_string(), "json".to_string()])
            .collect()
    }

    fn query<T: DeserializeOwned>(&self, what: &str, args: &[&str]) -> Result<T, AnyError> {
        let args = self.args(args);
        with_retry(self.retries, self.retry_delay, what, || {
            let output = run_args(&self.program, &args)?;
            parse_json(&output, what)
        })
    }
}

impl NetworkSource for AzCli {
    fn list_subscriptions(&self) -> Result<Vec<Subscription>, AnyError> {
        self.query("subscriptions", &["account", "list", "--all"])
    }

    fn list_vnets(&self, subscription: &Subscription) -> Result<Vec<VnetRecord>, AnyError> {
        self.query(
            &format!("vnets of {}", subscription.id),
            &[
                "network",
                "vnet",
                "list",
                "--subscription",
                subscription.id.as_str(),
                "--query",
                VNET_QUERY,
            ],
        )
    }

    fn list_subnets(&self, vnet: &VirtualNetwork) -> Result<Vec<SubnetRecord>, AnyError> {
        self.query(
            &format!("subnets of {vnet}"),
            &[
                "network",
                "vnet",
                "subnet",
                "list",
                "--subscription",
                vnet.subscription_id.as_str(),
                "--resource-group",
                vnet.resource_group.as_str(),
                "--vnet-name",
                vnet.name.as_str(),
                "--query",
                SUBNET_QUERY,
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn az_with(command: &str) -> AzCli {
        let config = Config {
            az_command: command.to_string(),
            retries: 0,
            retry_delay_ms: 0,
            ..Config::default()
        };
        AzCli::new(&config).unwrap()
    }

    #[test]
    fn test_args_append_json_output() {
        let az = az_with("az --only-show-errors");
        assert_eq!(az.program, "az");
        assert_eq!(
            az.args(&["account", "list"]),
            vec!["--only-show-errors", "account", "list", "--output", "json"]
        );
    }

    #[test]
    fn test_empty_command_rejected() {
        let config = Config {
            az_command: "  ".to_string(),
            ..Config::default()
        };
        assert!(AzCli::new(&config).is_err());
    }

    #[test]
    fn test_failing_binary_is_an_error() {
        let az = az_with("definitely-not-an-az-binary-0x42");
        let err = az.list_subscriptions().unwrap_err();
        assert!(err.to_string().contains("Failed to execute"));
    }

    #[cfg(unix)]
    #[test]
    fn test_query_decodes_stdout() {
        // sh -c ignores the trailing query words, they become positional parameters.
        let az = az_with("sh -c 'cat src/tests/test_data/az_account_list.json'");
        let subs = az.list_subscriptions().unwrap();
        assert_eq!(subs.len(), 3);
        assert_eq!(subs[0].name, "z-prod");
        assert_eq!(subs.iter().filter(|s| s.is_enabled()).count(), 2);
    }

    /// Fresh per-test file under the temp dir; the path holds no spaces or quotes.
    #[cfg(unix)]
    fn scratch_file(tag: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "azure-vnet-report-{tag}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[cfg(unix)]
    fn az_retrying(command: String) -> AzCli {
        let config = Config {
            az_command: command,
            retries: 1,
            retry_delay_ms: 0,
            ..Config::default()
        };
        AzCli::new(&config).unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_query_is_attempted_again() {
        let counter = scratch_file("attempts");
        let az = az_retrying(format!(
            "sh -c 'echo attempt >> {}; exit 1'",
            counter.display()
        ));

        assert!(az.list_subscriptions().is_err());
        let attempts = std::fs::read_to_string(&counter).unwrap();
        assert_eq!(attempts.lines().count(), 2);
        let _ = std::fs::remove_file(&counter);
    }

    #[cfg(unix)]
    #[test]
    fn test_second_attempt_result_is_returned() {
        let marker = scratch_file("marker");
        let az = az_retrying(format!(
            "sh -c 'if [ -e {m} ]; then cat src/tests/test_data/az_account_list.json; else touch {m}; exit 1; fi'",
            m = marker.display()
        ));

        let subs = az.list_subscriptions().unwrap();
        assert_eq!(subs.len(), 3);
        let _ = std::fs::remove_file(&marker);
    }
}
