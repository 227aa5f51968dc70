//! The known IP-reporting services and how to read their answers.

use std::fmt;

use super::ProviderError;

const IP4ONLY_URL: &str = "http://ip4only.me/api";
const WHATISMYIP_URL: &str = "http://ipv4bot.whatismyipaddress.com";
const IPIFY_URL: &str = "https://api.ipify.org";

/// A service that reports the caller's public IPv4 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// `ip4only.me`: comma separated line, address in the second field.
    Ip4Only,
    /// `whatismyipaddress.com`: the body is the address.
    WhatIsMyIp,
    /// `ipify.org`: the body is the address (plain text format).
    Ipify,
}

impl ProviderKind {
    /// Every known provider, in query order.
    pub const ALL: [Self; 3] = [Self::Ip4Only, Self::WhatIsMyIp, Self::Ipify];

    /// Short name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ip4Only => "ip4only",
            Self::WhatIsMyIp => "whatismyip",
            Self::Ipify => "ipify",
        }
    }

    /// Fixed endpoint queried for this provider.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Ip4Only => IP4ONLY_URL,
            Self::WhatIsMyIp => WHATISMYIP_URL,
            Self::Ipify => IPIFY_URL,
        }
    }

    /// Extracts the candidate address from a raw response body.
    ///
    /// Pure function, no network access. The candidate is not validated as
    /// an IPv4 address; it is only compared as a string later on.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unparsable`] when an `ip4only` body contains
    /// no comma. The other providers never fail to parse.
    pub fn parse(self, raw: &str) -> Result<String, ProviderError> {
        match self {
            Self::Ip4Only => raw
                .split(',')
                .nth(1)
                .map(str::to_owned)
                .ok_or_else(|| ProviderError::Unparsable {
                    url: self.endpoint(),
                    body: raw.to_owned(),
                }),
            Self::WhatIsMyIp | Self::Ipify => Ok(raw.to_owned()),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
