use rootwalk_domain::{DnsQuery, RecordType};
use std::str::FromStr;

#[test]
fn test_record_type_codes() {
    assert_eq!(RecordType::A.to_u16(), 1);
    assert_eq!(RecordType::NS.to_u16(), 2);
    assert_eq!(RecordType::CNAME.to_u16(), 5);
    assert_eq!(RecordType::SOA.to_u16(), 6);
    assert_eq!(RecordType::PTR.to_u16(), 12);
    assert_eq!(RecordType::MX.to_u16(), 15);
    assert_eq!(RecordType::TXT.to_u16(), 16);
    assert_eq!(RecordType::AAAA.to_u16(), 28);
    assert_eq!(RecordType::SRV.to_u16(), 33);
    assert_eq!(RecordType::ANY.to_u16(), 255);
}

#[test]
fn test_code_table_is_bijective() {
    for rt in RecordType::ALL {
        assert_eq!(
            RecordType::from_u16(rt.to_u16()),
            Some(rt),
            "code lookup failed for {}",
            rt
        );
        assert_eq!(RecordType::from_str(rt.as_str()), Ok(rt));
    }
}

#[test]
fn test_unknown_code_returns_none() {
    assert_eq!(RecordType::from_u16(0), None);
    assert_eq!(RecordType::from_u16(41), None);
    assert_eq!(RecordType::from_u16(u16::MAX), None);
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!(RecordType::from_str("ns"), Ok(RecordType::NS));
    assert_eq!(RecordType::from_str("Aaaa"), Ok(RecordType::AAAA));
}

#[test]
fn test_from_str_rejects_unknown_mnemonic() {
    let err = RecordType::from_str("DNSKEY").unwrap_err();
    assert!(err.contains("DNSKEY"), "error should name the type: {}", err);
}

#[test]
fn test_display_matches_mnemonic() {
    assert_eq!(RecordType::SRV.to_string(), "SRV");
    assert_eq!(format!("{}", RecordType::ANY), "ANY");
}

#[test]
fn test_dns_query_keeps_domain_as_given() {
    let query = DnsQuery::new("example.com.", RecordType::A);
    assert_eq!(&*query.domain, "example.com.");
    assert_eq!(query.record_type, RecordType::A);
}
