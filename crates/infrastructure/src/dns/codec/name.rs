//! Domain name encoding and decompression (RFC 1035 §3.1, §4.1.4)

use rootwalk_domain::DomainError;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

const LABEL_TYPE_MASK: u8 = 0xC0;
const POINTER_TAG: u8 = 0xC0;
const POINTER_OFFSET_MASK: u8 = 0x3F;

/// Encode a dotted name as length-prefixed labels ending with the root label.
///
/// A trailing dot is accepted; `""` and `"."` both encode the root name.
pub fn encode_name(name: &str) -> Result<Vec<u8>, DomainError> {
    let mut out = Vec::with_capacity(name.len() + 2);
    encode_name_into(name, &mut out)?;
    Ok(out)
}

pub fn encode_name_into(name: &str, out: &mut Vec<u8>) -> Result<(), DomainError> {
    let start = out.len();
    let relative = name.strip_suffix('.').unwrap_or(name);

    if !relative.is_empty() {
        for label in relative.split('.') {
            if label.is_empty() {
                out.truncate(start);
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                out.truncate(start);
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' is {} bytes, limit is {}",
                    label,
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
    }
    out.push(0);

    if out.len() - start > MAX_NAME_LEN {
        out.truncate(start);
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' exceeds {} bytes in wire form",
            name, MAX_NAME_LEN
        )));
    }

    Ok(())
}

/// Decode the name starting at `offset`, following compression pointers.
///
/// Returns the fully qualified name (`"example.com."`, root is `"."`) and the
/// offset just past the name as it appears at `offset`: after the root label,
/// or after the first pointer when the name is compressed.
///
/// Every pointer must target an offset before the label run it terminates,
/// so each jump moves strictly backwards and decoding always ends.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
    let mut labels: Vec<String> = Vec::new();
    let mut wire_len = 1;
    let mut pos = offset;
    let mut run_start = offset;
    let mut resume_at: Option<usize> = None;

    loop {
        let len = *buf.get(pos).ok_or_else(|| {
            DomainError::malformed(format!("name at offset {} runs past end of message", offset))
        })?;

        match len & LABEL_TYPE_MASK {
            POINTER_TAG => {
                let low = *buf.get(pos + 1).ok_or_else(|| {
                    DomainError::malformed(format!("truncated compression pointer at offset {}", pos))
                })?;
                let target = (usize::from(len & POINTER_OFFSET_MASK) << 8) | usize::from(low);

                if target >= run_start {
                    return Err(DomainError::malformed(format!(
                        "compression pointer at offset {} targets {}, which is not before {}",
                        pos, target, run_start
                    )));
                }

                resume_at.get_or_insert(pos + 2);
                pos = target;
                run_start = target;
            }
            0x00 => {
                if len == 0 {
                    resume_at.get_or_insert(pos + 1);
                    break;
                }

                let start = pos + 1;
                let end = start + usize::from(len);
                let label = buf.get(start..end).ok_or_else(|| {
                    DomainError::malformed(format!("label at offset {} runs past end of message", pos))
                })?;

                wire_len += label.len() + 1;
                if wire_len > MAX_NAME_LEN {
                    return Err(DomainError::malformed(format!(
                        "name at offset {} exceeds {} bytes",
                        offset, MAX_NAME_LEN
                    )));
                }

                // a '.' inside a label or non-UTF-8 bytes cannot survive the
                // dotted text form
                if label.contains(&b'.') {
                    return Err(DomainError::malformed(format!(
                        "label at offset {} contains a '.' byte",
                        pos
                    )));
                }
                let label = std::str::from_utf8(label).map_err(|_| {
                    DomainError::malformed(format!("label at offset {} is not valid UTF-8", pos))
                })?;

                labels.push(label.to_string());
                pos = end;
            }
            _ => {
                return Err(DomainError::malformed(format!(
                    "reserved label type {:#04x} at offset {}",
                    len, pos
                )));
            }
        }
    }

    let name = if labels.is_empty() {
        ".".to_string()
    } else {
        let mut joined = labels.join(".");
        joined.push('.');
        joined
    };

    // resume_at is always set once the loop breaks
    Ok((name, resume_at.unwrap_or(pos + 1)))
}
