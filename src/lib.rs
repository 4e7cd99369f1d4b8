#![forbid(unsafe_code)]
//! mailfsm_lib — single-pass FSM validation of a restricted email syntax.
//!
//! One linear scan over the candidate address, no I/O, no DNS, no
//! allocation beyond a handful of local counters. Stricter than RFC 5322
//! by design: no quoted local parts, no comments, no IDNA conversion —
//! anything the grammar cannot prove valid is simply invalid.

pub mod validator;
pub use validator::{RejectReason, ValidationReport, check_email, is_email_valid, validate_email};
