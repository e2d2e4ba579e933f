//! DNS wire format (RFC 1035 §4.1)
//!
//! Every multi-byte field is big-endian. Decoding walks a single cursor
//! through the buffer and fails with `MalformedResponse` instead of reading
//! past the end, whatever the header counts claim.

pub mod header;
pub mod message;
pub mod name;
pub mod rdata;
mod reader;

pub use header::{Header, ResponseCode, HEADER_LEN};
pub use message::{Message, Question, ResourceRecord, CLASS_IN};
pub use name::{decode_name, encode_name, encode_name_into};
pub use rdata::RData;
pub(crate) use reader::WireReader;
