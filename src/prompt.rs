use crate::constants::RECOMMENDED_DNS_SERVERS;
use crate::error::FastDnsError;
use crate::flow::{validate_selection, ApplyOutcome, DnsChoice};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};
use nu_ansi_term::Color;
use std::io::ErrorKind;
use std::net::IpAddr;

const CUSTOM_DNS_LABEL: &str = "Let me pick my custom DNS";

/// Prints the banner shown before the first prompt.
pub fn intro() {
    println!("{}", Color::Cyan.bold().paint("FAST DNS"));
}

/// Prints the closing summary, naming any service the apply step failed on.
pub fn outro(outcomes: &[ApplyOutcome]) {
    let failed: Vec<&ApplyOutcome> = outcomes
        .iter()
        .filter(|outcome| outcome.result.is_err())
        .collect();

    if failed.is_empty() {
        println!(
            "{}",
            Color::Green.paint("All your DNS are set, enjoy faster and more secure internet!")
        );
        return;
    }

    for outcome in &failed {
        if let Err(err) = &outcome.result {
            eprintln!(
                "{}",
                Color::Red.paint(format!("could not set DNS for '{}': {err}", outcome.service))
            );
        }
    }

    println!(
        "DNS set on {} of {} selected services.",
        outcomes.len() - failed.len(),
        outcomes.len()
    );
}

/// Prompts for the DNS configuration to apply.
pub fn select_dns_choice() -> Result<DnsChoice, FastDnsError> {
    let recommended_label = format!("Cloudflare DNS ({}) [recommended]", RECOMMENDED_DNS_SERVERS[0]);
    let options = [recommended_label.as_str(), CUSTOM_DNS_LABEL];

    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which DNS would you like to use?")
        .default(0)
        .items(&options)
        .interact_opt()
        .map_err(map_prompt_error)?;

    match selected {
        Some(0) => Ok(DnsChoice::Recommended),
        Some(_) => Ok(DnsChoice::Custom(prompt_custom_dns()?)),
        None => Err(FastDnsError::UserCancelled),
    }
}

/// Prompts for a single custom DNS address, re-prompting until the input is a
/// syntactically valid IPv4 or IPv6 address.
fn prompt_custom_dns() -> Result<IpAddr, FastDnsError> {
    loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Insert a custom DNS")
            .validate_with(|text: &String| validate_ip_address(text))
            .interact_text()
            .map_err(map_prompt_error)?;

        // The validator only lets parseable addresses through, so this loops
        // at most once in practice.
        if let Ok(address) = input.trim().parse() {
            return Ok(address);
        }
    }
}

/// Checks that the entered text is a syntactically valid IP address.
pub fn validate_ip_address(input: &str) -> Result<(), String> {
    match input.trim().parse::<IpAddr>() {
        Ok(_) => Ok(()),
        Err(_) => Err(format!("'{}' is not a valid IP address", input.trim())),
    }
}

/// Prompts for the network services to apply the chosen DNS configuration to.
///
/// Candidates keep the listing order; the returned subset is in the order the
/// toolkit reports the picks. At least one service is required.
pub fn select_services(services: &[String]) -> Result<Vec<String>, FastDnsError> {
    let selected = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select network services to set DNS on")
        .items(services)
        .interact_opt()
        .map_err(map_prompt_error)?;

    let selected_services = selected.map(|indices| {
        indices
            .into_iter()
            .filter_map(|index| services.get(index).cloned())
            .collect()
    });

    validate_selection(selected_services)
}

/// Maps a toolkit error to the flow's error kinds.
///
/// An interrupt (Ctrl-C) is user cancellation; anything else is a genuine
/// prompt failure.
fn map_prompt_error(error: dialoguer::Error) -> FastDnsError {
    match &error {
        dialoguer::Error::IO(io_error) if io_error.kind() == ErrorKind::Interrupted => {
            FastDnsError::UserCancelled
        }
        _ => FastDnsError::PromptFailed(error),
    }
}

#[cfg(test)]
mod tests {
    use crate::prompt::validate_ip_address;

    #[test]
    fn test_valid_ipv4_is_accepted() {
        assert!(validate_ip_address("8.8.8.8").is_ok());
    }

    #[test]
    fn test_valid_ipv6_is_accepted() {
        assert!(validate_ip_address("::1").is_ok());
        assert!(validate_ip_address("2606:4700:4700::1111").is_ok());
    }

    #[test]
    fn test_out_of_range_octet_is_rejected() {
        assert!(validate_ip_address("999.1.1.1").is_err());
    }

    #[test]
    fn test_non_address_text_is_rejected() {
        assert!(validate_ip_address("").is_err());
        assert!(validate_ip_address("dns.example.com").is_err());
        assert!(validate_ip_address("1.1.1").is_err());
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        assert!(validate_ip_address(" 1.1.1.1 ").is_ok());
    }
}
