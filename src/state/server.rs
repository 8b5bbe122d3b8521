//! Server list and menu types.

/// Transport an endpoint is reachable over.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transport {
    Tcp,
    Udp,
}

impl Transport {
    /// Lowercase name, as shown in the menu and passed to `openvpn --remote`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Transport::Tcp => "tcp",
            Transport::Udp => "udp",
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which transports the menu should offer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TransportFilter {
    pub show_tcp: bool,
    pub show_udp: bool,
}

impl TransportFilter {
    /// Offer both transports.
    pub const BOTH: Self = Self {
        show_tcp: true,
        show_udp: true,
    };

    /// Build the filter from the mutually exclusive `--tcp` / `--udp` flags.
    #[must_use]
    pub const fn from_flags(only_tcp: bool, only_udp: bool) -> Self {
        match (only_tcp, only_udp) {
            (true, false) => Self {
                show_tcp: true,
                show_udp: false,
            },
            (false, true) => Self {
                show_tcp: false,
                show_udp: true,
            },
            _ => Self::BOTH,
        }
    }

    #[must_use]
    pub const fn allows(self, transport: Transport) -> bool {
        match transport {
            Transport::Tcp => self.show_tcp,
            Transport::Udp => self.show_udp,
        }
    }
}

/// One proXPN location as published in the server list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerEntry {
    /// Display name, e.g. "Amsterdam".
    pub name: String,
    /// `OpenVPN` over TCP endpoint, if offered.
    pub tcp_address: Option<String>,
    /// `OpenVPN` over UDP endpoint, if offered.
    pub udp_address: Option<String>,
}

impl ServerEntry {
    /// Address for `transport`, if this location offers it.
    #[must_use]
    pub fn address(&self, transport: Transport) -> Option<&str> {
        match transport {
            Transport::Tcp => self.tcp_address.as_deref(),
            Transport::Udp => self.udp_address.as_deref(),
        }
    }
}

/// A selectable (transport, location) pair with its 1-based menu number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuOption {
    pub index: usize,
    pub transport: Transport,
    pub name: String,
    pub address: String,
}
