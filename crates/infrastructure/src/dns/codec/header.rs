use rootwalk_domain::DomainError;

pub const HEADER_LEN: usize = 12;

const QR_MASK: u16 = 0x8000;
const OPCODE_SHIFT: u16 = 11;
const OPCODE_MASK: u16 = 0x0F;
const AA_MASK: u16 = 0x0400;
const TC_MASK: u16 = 0x0200;
const RD_MASK: u16 = 0x0100;
const RA_MASK: u16 = 0x0080;
const RCODE_MASK: u16 = 0x000F;

/// The fixed 12-byte message header.
///
/// Counts are trusted only as iteration bounds while decoding; the section
/// parsers still check every read against the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    /// Header for a non-recursive query carrying a single question.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            question_count: 1,
            ..Self::default()
        }
    }

    pub fn pack(&self, out: &mut Vec<u8>) {
        for field in [
            self.id,
            self.flags,
            self.question_count,
            self.answer_count,
            self.authority_count,
            self.additional_count,
        ] {
            out.extend_from_slice(&field.to_be_bytes());
        }
    }

    pub fn parse(buf: &[u8]) -> Result<Self, DomainError> {
        if buf.len() < HEADER_LEN {
            return Err(DomainError::malformed(format!(
                "message is {} bytes, shorter than the {}-byte header",
                buf.len(),
                HEADER_LEN
            )));
        }

        let field = |i: usize| u16::from_be_bytes([buf[i], buf[i + 1]]);

        Ok(Self {
            id: field(0),
            flags: field(2),
            question_count: field(4),
            answer_count: field(6),
            authority_count: field(8),
            additional_count: field(10),
        })
    }

    pub fn is_response(&self) -> bool {
        self.flags & QR_MASK != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    pub fn authoritative(&self) -> bool {
        self.flags & AA_MASK != 0
    }

    pub fn truncated(&self) -> bool {
        self.flags & TC_MASK != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & RD_MASK != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & RA_MASK != 0
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from_u8((self.flags & RCODE_MASK) as u8)
    }

    /// Total resource records the header announces across all three sections.
    pub fn record_count(&self) -> usize {
        usize::from(self.answer_count)
            + usize::from(self.authority_count)
            + usize::from(self.additional_count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotImp,
    Refused,
    Other(u8),
}

impl ResponseCode {
    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NxDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Other(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NxDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }
}
