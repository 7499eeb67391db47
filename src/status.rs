//! Status values describing the outcome of a system call.

use crate::Errno;
use alloc::string::String;
use core::fmt;

/// Classification of a [`Status`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// the operation succeeded
    Ok,
    /// the operation failed, for a reason not classified any further
    Unknown,
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusCode::Ok => "OK",
            StatusCode::Unknown => "UNKNOWN",
        })
    }
}

/// The outcome of an operation, with a message for humans.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Status {
    code: StatusCode,
    message: String,
}

impl Status {
    /// A successful status with an empty message.
    pub fn ok() -> Self {
        Self {
            code: StatusCode::Ok,
            message: String::new(),
        }
    }

    /// A failed status.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::Unknown,
            message: message.into(),
        }
    }

    /// Describe a failed I/O operation.
    ///
    /// Errors carrying an OS error number are described like [`errno_status`] does. The result is
    /// never [`StatusCode::Ok`].
    #[cfg(feature = "std")]
    pub fn from_io_error(context: &str, error: &std::io::Error) -> Self {
        match error.raw_os_error() {
            Some(code) if code != 0 => errno_status(context, code),
            _ => Self::unknown(format!("{} ({})", context, error)),
        }
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_ok(&self) -> bool {
        self.code == StatusCode::Ok
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            StatusCode::Ok => write!(f, "{}", self.code),
            _ => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Status {}

/// Summarize the result of a system call that reported `error_code`.
///
/// An `error_code` of zero is success. Anything else is a [`StatusCode::Unknown`] failure with
/// the message `"<context> (<description>)"`, where the description comes from the OS, or is
/// `Unknown error <error_code>` if the OS does not know the code.
///
/// This function never fails and is safe to call from any number of threads at once.
pub fn errno_status(context: &str, error_code: i32) -> Status {
    let description = Errno(error_code).description();

    let mut message = String::with_capacity(context.len() + description.len() + 3);
    message.push_str(context);
    message.push_str(" (");
    message.push_str(&description);
    message.push(')');

    let code = if error_code == 0 {
        StatusCode::Ok
    } else {
        StatusCode::Unknown
    };
    Status { code, message }
}

/// Summarize the result of the last failed system call on this thread.
///
/// Equivalent to calling [`errno_status`] with the current `errno`.
pub fn last_errno_status(context: &str) -> Status {
    errno_status(context, Errno::last().0)
}
