use super::header::{Header, HEADER_LEN};
use super::name::encode_name_into;
use super::rdata::RData;
use super::WireReader;
use rootwalk_domain::{DomainError, RecordType};
use std::fmt;
use std::net::Ipv4Addr;

/// The Internet class; the only one this resolver asks for.
pub const CLASS_IN: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            qtype: record_type.to_u16(),
            qclass: CLASS_IN,
        }
    }

    pub fn pack(&self, out: &mut Vec<u8>) -> Result<(), DomainError> {
        encode_name_into(&self.name, out)?;
        out.extend_from_slice(&self.qtype.to_be_bytes());
        out.extend_from_slice(&self.qclass.to_be_bytes());
        Ok(())
    }

    pub(crate) fn parse(reader: &mut WireReader<'_>) -> Result<Self, DomainError> {
        let name = reader.read_name()?;
        let qtype = reader.read_u16("QTYPE")?;
        let qclass = reader.read_u16("QCLASS")?;
        Ok(Self {
            name,
            qtype,
            qclass,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdata: RData,
}

impl ResourceRecord {
    pub fn a(name: impl Into<String>, ttl: u32, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            rtype: RecordType::A.to_u16(),
            class: CLASS_IN,
            ttl,
            rdata: RData::A(address),
        }
    }

    pub fn ns(name: impl Into<String>, ttl: u32, nameserver: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rtype: RecordType::NS.to_u16(),
            class: CLASS_IN,
            ttl,
            rdata: RData::Ns(nameserver.into()),
        }
    }

    pub fn is_internet(&self) -> bool {
        self.class == CLASS_IN
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.rdata {
            RData::A(ip) => Some(ip),
            _ => None,
        }
    }

    pub fn nameserver(&self) -> Option<&str> {
        match &self.rdata {
            RData::Ns(name) => Some(name),
            _ => None,
        }
    }

    pub fn pack(&self, out: &mut Vec<u8>) -> Result<(), DomainError> {
        let rdata = self.rdata.to_wire()?;
        let rdlength = u16::try_from(rdata.len()).map_err(|_| {
            DomainError::EncodeError(format!("RDATA of {} bytes does not fit RDLENGTH", rdata.len()))
        })?;

        encode_name_into(&self.name, out)?;
        out.extend_from_slice(&self.rtype.to_be_bytes());
        out.extend_from_slice(&self.class.to_be_bytes());
        out.extend_from_slice(&self.ttl.to_be_bytes());
        out.extend_from_slice(&rdlength.to_be_bytes());
        out.extend_from_slice(&rdata);
        Ok(())
    }

    pub(crate) fn parse(reader: &mut WireReader<'_>) -> Result<Self, DomainError> {
        let name = reader.read_name()?;
        let rtype = reader.read_u16("TYPE")?;
        let class = reader.read_u16("CLASS")?;
        let ttl = reader.read_u32("TTL")?;
        let rdlength = usize::from(reader.read_u16("RDLENGTH")?);

        let rdata_at = reader.position();
        reader.read_bytes(rdlength, "RDATA")?;
        let rdata = RData::decode(rtype, reader.buffer(), rdata_at, rdlength)?;

        Ok(Self {
            name,
            rtype,
            class,
            ttl,
            rdata,
        })
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = if self.class == CLASS_IN { "IN" } else { "??" };
        match self.record_type() {
            Some(rt) => write!(f, "{} {} {} {} {}", self.name, self.ttl, class, rt, self.rdata),
            None => write!(
                f,
                "{} {} {} TYPE{} {}",
                self.name, self.ttl, class, self.rtype, self.rdata
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    /// Serialize without compression. Header counts are taken from the
    /// section lengths, not from `self.header`.
    pub fn pack(&self) -> Result<Vec<u8>, DomainError> {
        let header = Header {
            question_count: section_count(self.questions.len(), "question")?,
            answer_count: section_count(self.answers.len(), "answer")?,
            authority_count: section_count(self.authorities.len(), "authority")?,
            additional_count: section_count(self.additionals.len(), "additional")?,
            ..self.header
        };

        let mut out = Vec::with_capacity(512);
        header.pack(&mut out);
        for question in &self.questions {
            question.pack(&mut out)?;
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            record.pack(&mut out)?;
        }
        Ok(out)
    }

    /// Decode a complete message. A buffer holding fewer entries than the
    /// header announces is an error, never a partial message.
    pub fn parse(buf: &[u8]) -> Result<Self, DomainError> {
        let header = Header::parse(buf)?;
        let mut reader = WireReader::new(buf, HEADER_LEN);

        let questions = (0..header.question_count)
            .map(|_| Question::parse(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;
        let answers = parse_section(&mut reader, header.answer_count)?;
        let authorities = parse_section(&mut reader, header.authority_count)?;
        let additionals = parse_section(&mut reader, header.additional_count)?;

        Ok(Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    /// IN-class answer records of `record_type`; every IN-class answer for
    /// `ANY`.
    pub fn answers_for(&self, record_type: RecordType) -> impl Iterator<Item = &ResourceRecord> {
        let code = record_type.to_u16();
        self.answers.iter().filter(move |record| {
            record.is_internet() && (record_type == RecordType::ANY || record.rtype == code)
        })
    }

    /// First IN-class A record in the answer section.
    pub fn answer_ipv4(&self) -> Option<Ipv4Addr> {
        self.answers_for(RecordType::A)
            .find_map(ResourceRecord::ipv4)
    }

    /// First IN-class A record in the additional section (glue for a referral).
    pub fn glue_ipv4(&self) -> Option<Ipv4Addr> {
        self.additionals
            .iter()
            .filter(|record| record.is_internet())
            .find_map(ResourceRecord::ipv4)
    }

    /// First IN-class NS target in the authority section.
    pub fn referral_nameserver(&self) -> Option<&str> {
        self.authorities
            .iter()
            .filter(|record| record.is_internet())
            .find_map(ResourceRecord::nameserver)
    }
}

fn section_count(len: usize, section: &str) -> Result<u16, DomainError> {
    u16::try_from(len)
        .map_err(|_| DomainError::EncodeError(format!("{} {} entries exceed 65535", len, section)))
}

fn parse_section(
    reader: &mut WireReader<'_>,
    count: u16,
) -> Result<Vec<ResourceRecord>, DomainError> {
    (0..count)
        .map(|_| ResourceRecord::parse(reader))
        .collect()
}
