use std::fmt::Display;

use serde::Serialize;

use super::BoundedString;

pub const HOST_CAPACITY: usize = 255;
pub const IP_CAPACITY: usize = 63;

pub type HostField = BoundedString<HOST_CAPACITY>;
pub type IpField = BoundedString<IP_CAPACITY>;

/// Data channel address negotiated for a passive-mode transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub host: HostField,
    pub ip: Option<IpField>,
    pub port: Option<u32>,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:[", self.host)?;
        if let Some(ip) = &self.ip {
            write!(f, "{ip}")?;
        }
        write!(f, "]:")?;
        if let Some(port) = self.port {
            write!(f, "{port}")?;
        }
        Ok(())
    }
}
