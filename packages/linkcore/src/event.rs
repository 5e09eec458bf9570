/// Lifecycle events delivered asynchronously by the radio and network stack.
///
/// Payloads are opaque to the state machine: only `AddressAcquired` carries
/// data the supervisor looks at, and that is logged, not stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkEvent {
    /// Station interface came up; the first association may be issued.
    LinkStart,
    /// Association lost or never established, with the vendor reason code.
    LinkLost { reason: u8 },
    /// DHCP completed; the station holds a usable IPv4 address.
    AddressAcquired { addr: [u8; 4] },
}

impl LinkEvent {
    pub const fn kind(self) -> &'static str {
        match self {
            Self::LinkStart => "link_start",
            Self::LinkLost { .. } => "link_lost",
            Self::AddressAcquired { .. } => "address_acquired",
        }
    }
}

pub fn disconnect_reason_label(reason: u8) -> &'static str {
    match reason {
        200 => "beacon_timeout",
        201 => "no_ap_found",
        202 => "auth_fail",
        203 => "assoc_fail",
        204 => "handshake_timeout",
        205 => "connection_fail",
        210 => "no_ap_found_compatible_security",
        211 => "no_ap_found_authmode_threshold",
        212 => "no_ap_found_rssi_threshold",
        _ => "other",
    }
}
