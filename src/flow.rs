use crate::constants::RECOMMENDED_DNS_SERVERS;
use crate::error::FastDnsError;
use crate::network::DnsConfigurator;
use crate::prompt;
use std::net::IpAddr;
use tracing::{debug, warn};

/// The DNS configuration chosen in the first prompt step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsChoice {
    /// The fixed recommended resolver set.
    Recommended,
    /// A single user-entered address.
    Custom(IpAddr),
}

impl DnsChoice {
    /// Resolves the choice into the ordered list of servers to apply.
    pub fn resolvers(&self) -> Vec<IpAddr> {
        match self {
            DnsChoice::Recommended => RECOMMENDED_DNS_SERVERS.to_vec(),
            DnsChoice::Custom(address) => vec![*address],
        }
    }
}

/// The result of applying one resolver list to one network service.
#[derive(Debug)]
pub struct ApplyOutcome {
    pub service: String,
    pub result: Result<(), FastDnsError>,
}

/// Assigns the resolver list to every selected service, best-effort.
///
/// A failure on one service does not stop the remaining assignments; the
/// caller gets one outcome per service, in selection order. Nothing applied
/// before a failure is rolled back.
pub fn apply_dns_servers(
    configurator: &impl DnsConfigurator,
    services: &[String],
    dns_servers: &[IpAddr],
) -> Vec<ApplyOutcome> {
    services
        .iter()
        .map(|service| {
            let result = configurator.set_dns_servers(service, dns_servers);

            match &result {
                Ok(()) => debug!("DNS servers set for '{service}'"),
                Err(err) => warn!("failed to set DNS servers for '{service}': {err}"),
            }

            ApplyOutcome {
                service: service.clone(),
                result,
            }
        })
        .collect()
}

/// Turns a raw multi-select result into a validated, non-empty selection.
///
/// `None` means the prompt was cancelled; an empty list means the toolkit
/// returned past the required constraint without a pick.
pub fn validate_selection(selected: Option<Vec<String>>) -> Result<Vec<String>, FastDnsError> {
    match selected {
        None => Err(FastDnsError::UserCancelled),
        Some(services) if services.is_empty() => Err(FastDnsError::SelectionRequired),
        Some(services) => Ok(services),
    }
}

/// Runs the whole interactive flow against the given configurator.
///
/// List services, pick a DNS configuration, pick services, apply. Every step
/// aborts the flow on failure; only the apply step is best-effort.
pub fn run_interactive(configurator: &impl DnsConfigurator) -> Result<(), FastDnsError> {
    prompt::intro();

    let services = configurator.list_services()?;
    let choice = prompt::select_dns_choice()?;
    let selected_services = prompt::select_services(&services)?;

    let outcomes = apply_dns_servers(configurator, &selected_services, &choice.resolvers());
    prompt::outro(&outcomes);

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::FastDnsError;
    use crate::flow::{validate_selection, DnsChoice};
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_recommended_resolvers() {
        let resolvers = DnsChoice::Recommended.resolvers();
        let expected: Vec<IpAddr> = [
            "1.1.1.1",
            "1.0.0.1",
            "2606:4700:4700::1111",
            "2606:4700:4700::1001",
        ]
        .iter()
        .map(|addr| addr.parse().unwrap())
        .collect();

        assert_eq!(resolvers, expected);
    }

    #[test]
    fn test_custom_resolvers_wrap_a_single_address() {
        let address = IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8));
        let resolvers = DnsChoice::Custom(address).resolvers();

        assert_eq!(resolvers, [address]);
    }

    #[test]
    fn test_validate_selection_accepts_non_empty() {
        let selected = validate_selection(Some(vec!["Wi-Fi".to_string()])).unwrap();

        assert_eq!(selected, ["Wi-Fi"]);
    }

    #[test]
    fn test_validate_selection_rejects_empty() {
        let result = validate_selection(Some(Vec::new()));

        assert!(matches!(result, Err(FastDnsError::SelectionRequired)));
    }

    #[test]
    fn test_validate_selection_maps_cancellation() {
        let result = validate_selection(None);

        assert!(matches!(result, Err(FastDnsError::UserCancelled)));
    }
}
