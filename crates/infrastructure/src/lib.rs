//! Rootwalk Infrastructure Layer
//!
//! DNS wire codec, UDP transport and the iterative resolver that walks
//! delegations down from a root nameserver.
pub mod dns;
