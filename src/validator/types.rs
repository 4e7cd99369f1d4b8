use thiserror::Error;

/// Why the scan rejected an address. Every variant maps to a plain `false`
/// in [`is_email_valid`](crate::is_email_valid); the enum exists so callers
/// and the CLI can report *which* rule failed.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    #[error("no address supplied")]
    Missing,
    #[error("empty address")]
    Empty,
    #[error("address longer than 320 characters")]
    TooLong,
    #[error("local part longer than 63 characters")]
    LocalTooLong,
    #[error("empty local part")]
    EmptyLocal,
    #[error("character {0:?} not allowed in local part")]
    InvalidLocalChar(char),
    #[error("dot at an invalid position in local part")]
    MisplacedLocalDot,
    #[error("consecutive dots in local part")]
    ConsecutiveLocalDots,
    #[error("missing '@' separator")]
    MissingAt,
    #[error("empty domain")]
    EmptyDomain,
    #[error("character {0:?} not allowed in domain")]
    InvalidDomainChar(char),
    #[error("domain longer than 255 characters")]
    DomainTooLong,
    #[error("empty domain label")]
    EmptyLabel,
    #[error("domain label starts or ends with a hyphen")]
    HyphenAtLabelEdge,
    #[error("address ends with '.' or '-'")]
    TrailingDelimiter,
    #[error("domain needs at least one dot (or must be localhost)")]
    SingleLabelDomain,
}

/// Outcome of one validation call.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub ok: bool,
    pub reason: Option<RejectReason>,
}
