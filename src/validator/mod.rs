mod classify;
mod fsm;
mod types;

pub use types::{RejectReason, ValidationReport};

use classify::MAX_ADDRESS_CHARS;
use fsm::Scan;

/// Full scan with a reason on rejection. `Ok(())` exactly when
/// [`is_email_valid`] returns `true`.
///
/// `None` is a legitimate input (an absent address), not an error; it
/// rejects like the empty string does. The function never panics.
pub fn check_email(address: Option<&str>) -> Result<(), RejectReason> {
    let Some(address) = address else {
        return Err(RejectReason::Missing);
    };
    if address.is_empty() {
        return Err(RejectReason::Empty);
    }
    if address.chars().count() > MAX_ADDRESS_CHARS {
        return Err(RejectReason::TooLong);
    }

    let mut scan = Scan::new();
    for ch in address.chars() {
        scan.step(ch)?;
    }
    scan.finish(address)
}

/// Boolean classification of a candidate address under the restricted
/// grammar: single `@`, local part of letters/digits plus
/// ``!#$%&'*+-/=?^_`{|}~``, no leading/trailing/consecutive dots,
/// dot-separated domain labels
/// that neither start nor end with `-`, RFC 5321 length limits, and a
/// carve-out for the bare `localhost` domain.
pub fn is_email_valid(address: Option<&str>) -> bool {
    check_email(address).is_ok()
}

/// Same scan, packaged as a report for batch consumers.
pub fn validate_email(address: Option<&str>) -> ValidationReport {
    match check_email(address) {
        Ok(()) => ValidationReport {
            ok: true,
            reason: None,
        },
        Err(reason) => ValidationReport {
            ok: false,
            reason: Some(reason),
        },
    }
}
