pub const SSID_MAX: usize = 32;
pub const PASSWORD_MAX: usize = 64;

/// Retry budget used when the build does not override it.
pub const DEFAULT_RETRY_LIMIT: u32 = 5;

/// Minimum acceptable authentication strength for the target access point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthFloor {
    Open,
    Wep,
    WpaPsk,
    #[default]
    Wpa2Psk,
    WpaWpa2Psk,
    Wpa3Psk,
    Wpa2Wpa3Psk,
}

impl AuthFloor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Wep => "wep",
            Self::WpaPsk => "wpa_psk",
            Self::Wpa2Psk => "wpa2_psk",
            Self::WpaWpa2Psk => "wpa_wpa2_psk",
            Self::Wpa3Psk => "wpa3_psk",
            Self::Wpa2Wpa3Psk => "wpa2_wpa3_psk",
        }
    }
}

/// Network identifier and credential, length-validated at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credentials {
    ssid: [u8; SSID_MAX],
    ssid_len: u8,
    password: [u8; PASSWORD_MAX],
    password_len: u8,
}

impl Credentials {
    pub fn from_parts(ssid: &[u8], password: &[u8]) -> Result<Self, &'static str> {
        if ssid.is_empty() || ssid.len() > SSID_MAX || password.len() > PASSWORD_MAX {
            return Err("invalid credentials length");
        }
        let mut result = Self {
            ssid: [0u8; SSID_MAX],
            ssid_len: ssid.len() as u8,
            password: [0u8; PASSWORD_MAX],
            password_len: password.len() as u8,
        };
        result.ssid[..ssid.len()].copy_from_slice(ssid);
        result.password[..password.len()].copy_from_slice(password);
        Ok(result)
    }

    pub fn ssid(&self) -> Option<&str> {
        core::str::from_utf8(&self.ssid[..self.ssid_len as usize]).ok()
    }

    pub fn password(&self) -> Option<&str> {
        core::str::from_utf8(&self.password[..self.password_len as usize]).ok()
    }
}

/// Immutable for the duration of one bring-up cycle; read-only to the
/// supervisor.
#[derive(Clone, Copy, Debug)]
pub struct ConnectionConfig {
    pub credentials: Credentials,
    pub auth_floor: AuthFloor,
    pub retry_limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_ssid() {
        assert!(Credentials::from_parts(b"", b"secret").is_err());
    }

    #[test]
    fn rejects_oversized_fields() {
        assert!(Credentials::from_parts(&[b'a'; SSID_MAX + 1], b"").is_err());
        assert!(Credentials::from_parts(b"net", &[b'p'; PASSWORD_MAX + 1]).is_err());
    }

    #[test]
    fn round_trips_utf8_parts() {
        let credentials = Credentials::from_parts(b"home-ap", b"hunter22").unwrap();
        assert_eq!(credentials.ssid(), Some("home-ap"));
        assert_eq!(credentials.password(), Some("hunter22"));
    }

    #[test]
    fn empty_password_is_allowed() {
        let credentials = Credentials::from_parts(b"open-ap", b"").unwrap();
        assert_eq!(credentials.password(), Some(""));
    }
}
