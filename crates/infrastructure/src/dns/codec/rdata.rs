use super::name::{decode_name, encode_name};
use rootwalk_domain::{DomainError, RecordType};
use std::fmt;
use std::net::Ipv4Addr;

/// Type-specific record payload.
///
/// Only the types the referral walk reads are interpreted; everything else
/// is kept as the raw RDATA bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Ns(String),
    Opaque(Vec<u8>),
}

impl RData {
    /// Interpret `len` bytes of RDATA starting at `offset` inside `buf`.
    ///
    /// NS targets may be compressed, so the whole message is needed rather
    /// than just the RDATA slice.
    pub fn decode(rtype: u16, buf: &[u8], offset: usize, len: usize) -> Result<Self, DomainError> {
        let end = offset + len;
        let raw = buf.get(offset..end).ok_or_else(|| {
            DomainError::malformed(format!("RDATA at offset {} runs past end of message", offset))
        })?;

        match RecordType::from_u16(rtype) {
            Some(RecordType::A) => {
                let octets: [u8; 4] = raw.try_into().map_err(|_| {
                    DomainError::malformed(format!("A record RDATA is {} bytes, expected 4", len))
                })?;
                Ok(RData::A(Ipv4Addr::from(octets)))
            }
            Some(RecordType::NS) => {
                let (name, name_end) = decode_name(buf, offset)?;
                if name_end > end {
                    return Err(DomainError::malformed(format!(
                        "NS target at offset {} overruns its {}-byte RDATA",
                        offset, len
                    )));
                }
                Ok(RData::Ns(name))
            }
            _ => Ok(RData::Opaque(raw.to_vec())),
        }
    }

    /// Uncompressed wire form, as a sender would emit it.
    pub fn to_wire(&self) -> Result<Vec<u8>, DomainError> {
        match self {
            RData::A(ip) => Ok(ip.octets().to_vec()),
            RData::Ns(name) => encode_name(name),
            RData::Opaque(bytes) => Ok(bytes.clone()),
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(ip) => write!(f, "{}", ip),
            RData::Ns(name) => write!(f, "{}", name),
            RData::Opaque(bytes) => write!(f, "\\# {}", bytes.len()),
        }
    }
}
