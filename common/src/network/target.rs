//! # Sweep Target
//!
//! Validates the `--start` / `--end` pair of a sweep.
//!
//! Only dotted-quad IPv4 addresses are accepted. IPv6 literals and hostnames are rejected
//! before any network activity takes place.

use std::net::{IpAddr, Ipv4Addr};

use thiserror::Error;

use crate::network::range::RangeError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("'{0}' is not a valid IP address")]
    Invalid(String),
    #[error("'{0}' is not an IPv4 address")]
    NotIpv4(String),
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Parses a single IPv4 address.
///
/// Used as the clap value parser for the address flags, so the message doubles as the
/// user-facing error.
pub fn parse_ipv4(s: &str) -> Result<Ipv4Addr, TargetError> {
    let trimmed = s.trim();
    match trimmed.parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => Ok(addr),
        Ok(IpAddr::V6(_)) => Err(TargetError::NotIpv4(trimmed.to_string())),
        Err(_) => Err(TargetError::Invalid(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4() {
        assert_eq!(parse_ipv4("192.168.1.1"), Ok(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(parse_ipv4(" 10.0.0.1 "), Ok(Ipv4Addr::new(10, 0, 0, 1)));

        // --- Error Cases ---

        assert_eq!(
            parse_ipv4("not-an-ip"),
            Err(TargetError::Invalid("not-an-ip".into()))
        );
        assert!(matches!(parse_ipv4("::1"), Err(TargetError::NotIpv4(_))));
        assert!(matches!(parse_ipv4("10.0.0.256"), Err(TargetError::Invalid(_))));
        assert!(matches!(parse_ipv4("10.0.0"), Err(TargetError::Invalid(_))));
        assert!(matches!(parse_ipv4(""), Err(TargetError::Invalid(_))));
    }

    #[test]
    fn error_messages_name_the_input() {
        let err = parse_ipv4("not-an-ip").unwrap_err();
        assert_eq!(err.to_string(), "'not-an-ip' is not a valid IP address");
    }
}
