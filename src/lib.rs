//! Readable status values for failed system calls.
//!
//! ```
//! use errno_status::{errno_status, StatusCode};
//!
//! let status = errno_status("could not open file", libc::ENOENT);
//! assert_eq!(status.code(), StatusCode::Unknown);
//! assert_eq!(status.message(), "could not open file (No such file or directory)");
//! ```
#![cfg(any(unix, windows))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg_attr(unix, path = "unix.rs")]
#[cfg_attr(windows, path = "windows.rs")]
pub(crate) mod sys;

mod error;
pub use error::{Description, Errno, MAX_DESCRIPTION_LEN};

pub mod status;
pub use status::{errno_status, last_errno_status, Status, StatusCode};

#[cfg(feature = "std")]
pub mod dict;
