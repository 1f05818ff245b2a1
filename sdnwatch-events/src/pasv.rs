//! Passive-mode descriptors
//!
//! The engine reports the data channel it was told to use as `host:[ip]:port`.
//! The ip is always bracketed, so IPv6 addresses parse the same way as IPv4.

use once_cell::sync::Lazy;
use regex::Regex;
use sdnwatch_common::{Endpoint, HostField, IpField};

#[allow(clippy::unwrap_used)]
static DESCRIPTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z0-9._-]+):\[([0-9a-f.:]+)\]:([0-9]+)").unwrap());

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("the description could not be parsed: {description}")]
pub struct EndpointParseError {
    pub description: String,
}

#[derive(Default)]
pub struct EndpointParser;

impl EndpointParser {
    pub fn new() -> Self {
        Self
    }

    /// Extract the endpoint from the first `host:[ip]:port` found in the description.
    ///
    /// Host and ip are truncated to their field capacity. The port is kept as
    /// reported, and only left out when it does not fit 32 bits.
    pub fn parse_endpoint(&self, description: &str) -> Result<Endpoint, EndpointParseError> {
        let captures = DESCRIPTOR
            .captures(description)
            .ok_or_else(|| EndpointParseError {
                description: description.to_owned(),
            })?;

        let (Some(host), Some(ip), Some(port)) = (captures.get(1), captures.get(2), captures.get(3))
        else {
            return Err(EndpointParseError {
                description: description.to_owned(),
            });
        };

        Ok(Endpoint {
            host: HostField::truncating(host.as_str()),
            ip: Some(IpField::truncating(ip.as_str())),
            port: port.as_str().parse().ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use sdnwatch_common::{HOST_CAPACITY, IP_CAPACITY};

    use super::*;

    #[test]
    fn test_parse_ipv4() {
        let parser = EndpointParser::new();

        let endpoint = parser.parse_endpoint("ftpnode1:[192.168.1.10]:20000").unwrap();
        assert_eq!(endpoint.host, "ftpnode1");
        assert_eq!(endpoint.ip.as_ref().map(|x| x.as_str()), Some("192.168.1.10"));
        assert_eq!(endpoint.port, Some(20000));
    }

    #[test]
    fn test_parse_ipv6() {
        let parser = EndpointParser::new();

        let endpoint = parser.parse_endpoint("ftpnode1:[2001:db8::1]:20000").unwrap();
        assert_eq!(endpoint.host, "ftpnode1");
        assert_eq!(endpoint.ip.as_ref().map(|x| x.as_str()), Some("2001:db8::1"));
        assert_eq!(endpoint.port, Some(20000));
    }

    #[test]
    fn test_parse_fqdn_host() {
        let parser = EndpointParser::new();

        let endpoint = parser
            .parse_endpoint("gridftp-01.cern.ch:[10.0.0.7]:50123")
            .unwrap();
        assert_eq!(endpoint.host, "gridftp-01.cern.ch");
        assert_eq!(endpoint.port, Some(50123));
    }

    #[test]
    fn test_parse_invalid() {
        let parser = EndpointParser::new();

        assert_eq!(
            parser.parse_endpoint("not-a-valid-descriptor"),
            Err(EndpointParseError {
                description: "not-a-valid-descriptor".into()
            })
        );
        assert!(parser.parse_endpoint("").is_err());
        // brackets are mandatory, even for IPv4
        assert!(parser.parse_endpoint("ftpnode1:192.168.1.10:20000").is_err());
        // uppercase hex is outside the ip alphabet
        assert!(parser.parse_endpoint("ftpnode1:[2001:DB8::1]:20000").is_err());
        assert!(parser.parse_endpoint("ftpnode1:[192.168.1.10]:").is_err());
    }

    #[test]
    fn test_descriptor_inside_longer_text() {
        let parser = EndpointParser::new();

        let endpoint = parser
            .parse_endpoint("Entering passive mode ftpnode1:[192.168.1.10]:20000 (ok)")
            .unwrap();
        assert_eq!(endpoint.host, "ftpnode1");
        assert_eq!(endpoint.port, Some(20000));
    }

    #[test]
    fn test_port_above_tcp_range_is_kept() {
        let parser = EndpointParser::new();

        let endpoint = parser.parse_endpoint("ftpnode1:[192.168.1.10]:99999").unwrap();
        assert_eq!(endpoint.host, "ftpnode1");
        assert_eq!(endpoint.port, Some(99999));
        assert_eq!(endpoint.to_string(), "ftpnode1:[192.168.1.10]:99999");
    }

    #[test]
    fn test_port_overflow() {
        let parser = EndpointParser::new();

        let endpoint = parser
            .parse_endpoint("ftpnode1:[192.168.1.10]:99999999999")
            .unwrap();
        assert_eq!(endpoint.host, "ftpnode1");
        assert_eq!(endpoint.port, None);
    }

    #[test]
    fn test_port_with_leading_zeroes() {
        let parser = EndpointParser::new();

        let endpoint = parser.parse_endpoint("h:[::1]:00021").unwrap();
        assert_eq!(endpoint.port, Some(21));
    }

    #[test]
    fn test_host_truncated_at_capacity() {
        let parser = EndpointParser::new();

        for len in (HOST_CAPACITY - 5)..=(HOST_CAPACITY + 40) {
            let host: String = "abcdefghij.-_0123".chars().cycle().take(len).collect();
            let endpoint = parser
                .parse_endpoint(&format!("{host}:[10.1.2.3]:2811"))
                .unwrap();
            assert_eq!(endpoint.host.len(), len.min(HOST_CAPACITY));
            assert!(host.starts_with(endpoint.host.as_str()));
            assert_eq!(endpoint.port, Some(2811));
        }
    }

    #[test]
    fn test_ip_truncated_at_capacity() {
        let parser = EndpointParser::new();

        for len in (IP_CAPACITY - 5)..=(IP_CAPACITY + 40) {
            let ip: String = "0123456789abcdef.:".chars().cycle().take(len).collect();
            let endpoint = parser
                .parse_endpoint(&format!("node:[{ip}]:2811"))
                .unwrap();
            let parsed = endpoint.ip.unwrap();
            assert_eq!(parsed.len(), len.min(IP_CAPACITY));
            assert!(ip.starts_with(parsed.as_str()));
            assert_eq!(endpoint.host, "node");
        }
    }
}
