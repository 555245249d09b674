mod darwin;
pub use darwin::NetworkSetup;

use crate::error::FastDnsError;
use std::net::IpAddr;

/// Abstraction over the OS network configuration tool.
///
/// Keeps the interactive flow independent of any one OS; an implementation
/// only has to produce the ordered service list and write one resolver list
/// to one service.
pub trait DnsConfigurator {
    /// Lists the names of all network services on the endpoint, in the order
    /// reported by the OS.
    fn list_services(&self) -> Result<Vec<String>, FastDnsError>;

    /// Assigns the given DNS servers to the given network service.
    fn set_dns_servers(&self, service: &str, dns_servers: &[IpAddr]) -> Result<(), FastDnsError>;
}

/// Parses a service order listing into service names.
///
/// Service entries have the shape `(<n>) <name>`; the numeric prefix is
/// stripped and the listing order preserved. Lines of any other shape (the
/// preamble, hardware port details) are skipped.
///
/// ### Arguments
/// - `output` - the stdout of the service order listing command
///
/// ### Returns
/// The service names, or `NoServicesFound` if no line matched.
pub fn parse_service_order(output: &str) -> Result<Vec<String>, FastDnsError> {
    let services: Vec<String> = output.lines().filter_map(parse_service_line).collect();

    if services.is_empty() {
        return Err(FastDnsError::NoServicesFound);
    }

    Ok(services)
}

fn parse_service_line(line: &str) -> Option<String> {
    let rest = line.strip_prefix('(')?;
    let (index, name) = rest.split_once(") ")?;

    if index.is_empty() || !index.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    if name.is_empty() {
        return None;
    }

    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use crate::error::FastDnsError;
    use crate::network::parse_service_order;

    const SERVICE_ORDER_OUTPUT: &str = "\
An asterisk (*) denotes that a network service is disabled.
(1) Wi-Fi
(Hardware Port: Wi-Fi, Device: en0)

(2) Thunderbolt Ethernet
(Hardware Port: Thunderbolt Ethernet, Device: en4)

(3) iPhone USB
(Hardware Port: iPhone USB, Device: en6)
";

    #[test]
    fn test_parse_service_order() {
        let services = parse_service_order(SERVICE_ORDER_OUTPUT).unwrap();

        assert_eq!(services, ["Wi-Fi", "Thunderbolt Ethernet", "iPhone USB"]);
    }

    #[test]
    fn test_parse_preserves_listing_order() {
        let output = "(1) Zeta\n(2) Alpha\n(3) Midway\n";
        let services = parse_service_order(output).unwrap();

        assert_eq!(services, ["Zeta", "Alpha", "Midway"]);
    }

    #[test]
    fn test_parse_multi_digit_index() {
        let output = "(9) Nine\n(10) Ten\n(11) Eleven\n";
        let services = parse_service_order(output).unwrap();

        assert_eq!(services, ["Nine", "Ten", "Eleven"]);
    }

    #[test]
    fn test_parse_skips_hardware_port_lines() {
        let output = "(1) Wi-Fi\n(Hardware Port: Wi-Fi, Device: en0)\n";
        let services = parse_service_order(output).unwrap();

        assert_eq!(services, ["Wi-Fi"]);
    }

    #[test]
    fn test_parse_empty_output_is_an_error() {
        let result = parse_service_order("");

        assert!(matches!(result, Err(FastDnsError::NoServicesFound)));
    }

    #[test]
    fn test_parse_no_matching_lines_is_an_error() {
        let output = "An asterisk (*) denotes that a network service is disabled.\n";
        let result = parse_service_order(output);

        assert!(matches!(result, Err(FastDnsError::NoServicesFound)));
    }
}
