// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Diagnostic location of the code that set up a subscription.

use std::fmt::{self, Display};
use std::panic::Location;

/// Where an operator was invoked: member, file and line.
///
/// Captured when the operator is called, not when a failure happens, so an error
/// report points at the code that wired the pipeline. Use [`call_site!`](crate::call_site!)
/// to capture the enclosing module path as the member name.
///
/// ```
/// use rivulet_core::call_site;
///
/// let site = call_site!();
/// assert!(site.file.ends_with(".rs"));
/// assert!(site.line > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Calling member (module path, or a name supplied by the caller)
    pub member: &'static str,
    /// Source file of the call
    pub file: &'static str,
    /// Line of the call
    pub line: u32,
}

impl CallSite {
    /// Placeholder member for sites captured without a name.
    pub const UNKNOWN_MEMBER: &'static str = "<unknown>";

    /// Creates a call site from explicit parts.
    #[must_use]
    pub const fn new(member: &'static str, file: &'static str, line: u32) -> Self {
        Self { member, file, line }
    }

    /// Captures the location of the caller of the enclosing `#[track_caller]` chain.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            member: Self::UNKNOWN_MEMBER,
            file: location.file(),
            line: location.line(),
        }
    }

    /// Replaces the member name.
    #[must_use]
    pub const fn with_member(mut self, member: &'static str) -> Self {
        self.member = member;
        self
    }
}

impl Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.member, self.file, self.line)
    }
}

/// Captures a [`CallSite`] for the current location.
///
/// `call_site!()` uses the module path as the member name;
/// `call_site!("name")` uses the given name.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(module_path!(), file!(), line!())
    };
    ($member:expr) => {
        $crate::CallSite::new($member, file!(), line!())
    };
}
