//! The scan itself: one state per grammar position, one transition per
//! input character, counters for the length limits.

use super::classify::{
    AT, DOT, HYPHEN, LOCALHOST_SUFFIX, MAX_DOMAIN_CHARS, MAX_LOCAL_CHARS, is_letter_or_digit,
    is_local_char,
};
use super::types::RejectReason;

/// Where in the grammar the scan currently is. There is no accept state;
/// validity falls out of the final state plus the flags in [`Scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Start,
    Local,
    DotLocal,
    AtSymbol,
    Domain,
    DotDomain,
}

/// One in-flight scan. Counters and flags live here and never outlast the
/// call; the cursor only ever moves forward, with `prev` standing in for
/// the single character of lookbehind the grammar needs.
#[derive(Debug)]
pub(crate) struct Scan {
    state: State,
    local_len: usize,
    domain_len: usize,
    label_len: usize,
    has_at: bool,
    has_domain_dot: bool,
    prev: Option<char>,
}

impl Scan {
    pub(crate) fn new() -> Self {
        Self {
            state: State::Start,
            local_len: 0,
            domain_len: 0,
            label_len: 0,
            has_at: false,
            has_domain_dot: false,
            prev: None,
        }
    }

    /// Consume one character. `Err` means the address is already known
    /// invalid and the scan must stop.
    pub(crate) fn step(&mut self, ch: char) -> Result<(), RejectReason> {
        match self.state {
            State::Start => {
                if ch == DOT {
                    return Err(RejectReason::MisplacedLocalDot);
                }
                if ch == AT {
                    return Err(RejectReason::EmptyLocal);
                }
                if !is_local_char(ch) {
                    return Err(RejectReason::InvalidLocalChar(ch));
                }
                self.local_len = 1;
                self.state = State::Local;
            }
            State::Local => {
                if self.local_len >= MAX_LOCAL_CHARS {
                    return Err(RejectReason::LocalTooLong);
                }
                if ch == DOT {
                    if self.prev == Some(DOT) {
                        return Err(RejectReason::ConsecutiveLocalDots);
                    }
                    self.state = State::DotLocal;
                } else if ch == AT {
                    if self.prev == Some(DOT) {
                        return Err(RejectReason::MisplacedLocalDot);
                    }
                    self.has_at = true;
                    self.state = State::AtSymbol;
                } else if !is_local_char(ch) {
                    return Err(RejectReason::InvalidLocalChar(ch));
                } else {
                    self.local_len += 1;
                }
            }
            State::DotLocal => {
                if ch == DOT {
                    return Err(RejectReason::ConsecutiveLocalDots);
                }
                if ch == AT {
                    return Err(RejectReason::MisplacedLocalDot);
                }
                if !is_local_char(ch) {
                    return Err(RejectReason::InvalidLocalChar(ch));
                }
                self.local_len += 1;
                self.state = State::Local;
            }
            State::AtSymbol => {
                if !is_letter_or_digit(ch) {
                    return Err(match ch {
                        DOT => RejectReason::EmptyLabel,
                        HYPHEN => RejectReason::HyphenAtLabelEdge,
                        other => RejectReason::InvalidDomainChar(other),
                    });
                }
                self.domain_len = 1;
                self.label_len = 1;
                self.state = State::Domain;
            }
            State::Domain => {
                if self.domain_len >= MAX_DOMAIN_CHARS {
                    return Err(RejectReason::DomainTooLong);
                }
                if ch == DOT {
                    if self.label_len == 0 {
                        return Err(RejectReason::EmptyLabel);
                    }
                    if self.prev == Some(HYPHEN) {
                        return Err(RejectReason::HyphenAtLabelEdge);
                    }
                    self.label_len = 0;
                    self.has_domain_dot = true;
                    self.state = State::DotDomain;
                } else if is_letter_or_digit(ch) || ch == HYPHEN {
                    if self.label_len == 0 && ch == HYPHEN {
                        return Err(RejectReason::HyphenAtLabelEdge);
                    }
                    self.domain_len += 1;
                    self.label_len += 1;
                } else {
                    // covers a second '@' as well
                    return Err(RejectReason::InvalidDomainChar(ch));
                }
            }
            State::DotDomain => {
                if !is_letter_or_digit(ch) {
                    return Err(match ch {
                        DOT => RejectReason::EmptyLabel,
                        HYPHEN => RejectReason::HyphenAtLabelEdge,
                        other => RejectReason::InvalidDomainChar(other),
                    });
                }
                self.domain_len += 1;
                self.label_len = 1;
                self.state = State::Domain;
            }
        }
        self.prev = Some(ch);
        Ok(())
    }

    /// Checks that run only once the whole input has been consumed.
    pub(crate) fn finish(self, address: &str) -> Result<(), RejectReason> {
        if address.ends_with([DOT, HYPHEN]) {
            return Err(RejectReason::TrailingDelimiter);
        }
        match self.state {
            State::Domain => {}
            State::AtSymbol => return Err(RejectReason::EmptyDomain),
            _ => return Err(RejectReason::MissingAt),
        }
        if !self.has_at {
            return Err(RejectReason::MissingAt);
        }
        if self.label_len == 0 {
            return Err(RejectReason::EmptyLabel);
        }
        if self.domain_len > MAX_DOMAIN_CHARS {
            return Err(RejectReason::DomainTooLong);
        }
        if !self.has_domain_dot && !address.ends_with(LOCALHOST_SUFFIX) {
            return Err(RejectReason::SingleLabelDomain);
        }
        Ok(())
    }
}
