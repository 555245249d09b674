use crate::error::FastDnsError;
use crate::network::{parse_service_order, DnsConfigurator};
use crate::utils::command::run_command;
use std::net::IpAddr;
use tracing::debug;

const NETWORK_SETUP_COMMAND: &str = "networksetup";
const SERVICE_ORDER_ARG: &str = "-listnetworkserviceorder";
const DNS_SET_ARG: &str = "-setdnsservers";

/// `networksetup`-backed configurator for macOS.
pub struct NetworkSetup;

impl NetworkSetup {
    /// Runs `networksetup` with the given arguments and collects its stdout.
    ///
    /// A non-zero exit status or any stderr output is a failure.
    fn run(&self, arguments: &[&str]) -> Result<String, FastDnsError> {
        let command = format!("{NETWORK_SETUP_COMMAND} {}", arguments.join(" "));
        debug!("running `{command}`");

        let output = run_command(NETWORK_SETUP_COMMAND, arguments)
            .and_then(|child| {
                child
                    .wait_with_output()
                    .map_err(anyhow::Error::from)
            })
            .map_err(|err| FastDnsError::CommandExecutionFailed {
                command: command.clone(),
                output: err.to_string(),
            })?;

        if !output.status.success() || !output.stderr.is_empty() {
            // networksetup reports some errors on stdout
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let message = if stderr.trim().is_empty() {
                stdout
            } else {
                stderr
            };

            return Err(FastDnsError::CommandExecutionFailed {
                command,
                output: message.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl DnsConfigurator for NetworkSetup {
    fn list_services(&self) -> Result<Vec<String>, FastDnsError> {
        // networksetup -listnetworkserviceorder
        let output = self.run(&[SERVICE_ORDER_ARG])?;

        parse_service_order(&output)
    }

    fn set_dns_servers(&self, service: &str, dns_servers: &[IpAddr]) -> Result<(), FastDnsError> {
        let dns_servers_args = dns_servers
            .iter()
            .map(|ip| ip.to_string())
            .collect::<Vec<_>>();

        // networksetup -setdnsservers <service> <dns_servers...>
        // The service name travels as a single process argument, so embedded
        // spaces need no quoting.
        let mut arguments = vec![DNS_SET_ARG, service];
        arguments.extend(dns_servers_args.iter().map(|addr| addr.as_str()));

        self.run(&arguments)?;

        Ok(())
    }
}
