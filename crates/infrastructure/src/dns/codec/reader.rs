use super::name::decode_name;
use rootwalk_domain::DomainError;

/// Bounds-checked cursor over a received message.
///
/// Name reads see the whole buffer so compression pointers can resolve.
pub(crate) struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    pub fn read_bytes(&mut self, len: usize, what: &str) -> Result<&'a [u8], DomainError> {
        let end = self.pos.checked_add(len).filter(|&end| end <= self.buf.len());
        let Some(end) = end else {
            return Err(DomainError::malformed(format!(
                "{} at offset {} needs {} bytes, only {} remain",
                what,
                self.pos,
                len,
                self.buf.len().saturating_sub(self.pos)
            )));
        };
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_u16(&mut self, what: &str) -> Result<u16, DomainError> {
        let b = self.read_bytes(2, what)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self, what: &str) -> Result<u32, DomainError> {
        let b = self.read_bytes(4, what)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_name(&mut self) -> Result<String, DomainError> {
        let (name, next) = decode_name(self.buf, self.pos)?;
        self.pos = next;
        Ok(name)
    }
}
