// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Broad classification of library errors.
//!
//! Every error returned by this crate is caused by bad input from the caller;
//! nothing is transient. [`ErrorKind`] lets callers tell apart a bad argument
//! from a frequency that no supported unit can explain.

/// The kind of a library error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter was outside of its domain (e.g. a non-positive bandwidth or
    /// an unknown telescope name).
    InvalidArgument,

    /// A frequency didn't fall into any of the Hz, MHz or GHz windows of a
    /// telescope.
    OutOfRange,
}
