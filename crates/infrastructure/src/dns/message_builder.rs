//! DNS Message Builder
//!
//! Builds iterative queries in wire format: one question, class IN, and the
//! Recursion Desired bit left clear so each server answers only for the
//! zones it is authoritative for.

use super::codec::{Header, Message, Question};
use rootwalk_domain::{DomainError, RecordType};

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query with a random transaction id.
    ///
    /// Returns the id alongside the bytes so the response can be matched.
    pub fn build_query(
        domain: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let bytes = Self::build_query_with_id(domain, record_type, id)?;
        Ok((id, bytes))
    }

    pub fn build_query_with_id(
        domain: &str,
        record_type: &RecordType,
        id: u16,
    ) -> Result<Vec<u8>, DomainError> {
        let message = Message {
            header: Header::query(id),
            questions: vec![Question::new(domain, *record_type)],
            ..Message::default()
        };
        message.pack()
    }
}
