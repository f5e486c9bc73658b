use crate::error::{GatewayError, Result};
use std::fmt;
use std::str::FromStr;

/// Identifies a payment backend.
///
/// The discriminants are the stable numeric codes of each backend and are
/// accepted back through `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GatewayKind {
    Protobase = 1,
    Shift4 = 2,
    WellsFargo = 3,
}

impl GatewayKind {
    pub const ALL: [GatewayKind; 3] = [Self::Protobase, Self::Shift4, Self::WellsFargo];

    /// Order in which the console demo exercises the gateways.
    pub const DEMO_ORDER: [GatewayKind; 3] = [Self::Shift4, Self::WellsFargo, Self::Protobase];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Canonical upper-case name, also used as the registry key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Protobase => "PROTOBASE",
            Self::Shift4 => "SHIFT4",
            Self::WellsFargo => "WELLSFARGO",
        }
    }
}

impl fmt::Display for GatewayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GatewayKind {
    type Err = GatewayError;

    /// Accepts a canonical name in any case, or a numeric code.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if let Ok(code) = name.parse::<u8>() {
            return Self::try_from(code);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| GatewayError::UnknownKind(name.to_string()))
    }
}

impl TryFrom<u8> for GatewayKind {
    type Error = GatewayError;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or(GatewayError::UnknownCode(code))
    }
}

/// A payment backend integration point.
///
/// `invoke` has no failure mode: implementations deal with their own errors.
pub trait PaymentGateway: Send + Sync {
    fn invoke(&self);

    /// Name of the backend behind this gateway.
    fn name(&self) -> &'static str;

    fn is_null(&self) -> bool {
        false
    }
}
