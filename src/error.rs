use crate::sys;
use core::fmt::{self, Write};

/// Size of the buffer an OS error description is rendered into, including the terminating NUL.
///
/// Descriptions are therefore always shorter than this.
pub const MAX_DESCRIPTION_LEN: usize = 128;

/// An error number reported by the OS.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Errno(pub i32);

impl Errno {
    /// The last error number set on the calling thread.
    pub fn last() -> Self {
        Errno(sys::errno() as i32)
    }

    /// The OS description of this error number.
    pub fn description(self) -> Description {
        Description::new(self.0)
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (os error {})", self.description(), self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Errno {}

#[cfg(feature = "std")]
impl From<Errno> for std::io::Error {
    fn from(e: Errno) -> Self {
        Self::from_raw_os_error(e.0)
    }
}

/// The description of an error number, as reported by the OS.
///
/// The text lives inline in a fixed buffer of [`MAX_DESCRIPTION_LEN`] bytes. Longer descriptions
/// are truncated. Error numbers unknown to the OS are described as `Unknown error <code>`.
#[derive(Copy, Clone)]
pub struct Description {
    buf: [u8; MAX_DESCRIPTION_LEN],
    len: usize,
}

impl Description {
    fn new(code: i32) -> Self {
        let mut buf = [0; MAX_DESCRIPTION_LEN];
        let len = if sys::describe(code, &mut buf) {
            text_len(&buf)
        } else {
            let mut cursor = Cursor {
                buf: &mut buf[..MAX_DESCRIPTION_LEN - 1],
                len: 0,
            };
            // Always fits: "Unknown error -2147483648" is 25 bytes
            let _ = write!(cursor, "Unknown error {}", code);
            cursor.len
        };
        Self { buf, len }
    }

    /// The description text.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }
}

impl core::ops::Deref for Description {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl PartialEq<str> for Description {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Description {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Length of the valid UTF-8 text at the start of `buf`, up to the first NUL.
///
/// The last byte is reserved for the NUL, so the OS is never trusted to terminate the string.
fn text_len(buf: &[u8]) -> usize {
    let len = buf
        .iter()
        .position(|&b| b == 0)
        .unwrap_or_else(|| buf.len().saturating_sub(1));
    match core::str::from_utf8(&buf[..len]) {
        Ok(_) => len,
        Err(e) => e.valid_up_to(),
    }
}

/// Formats into a byte slice, cutting off whatever does not fit.
struct Cursor<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl Write for Cursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let available = self.buf.len() - self.len;
        let mut n = s.len().min(available);
        while !s.is_char_boundary(n) {
            n -= 1;
        }
        self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        if n == s.len() {
            Ok(())
        } else {
            Err(fmt::Error)
        }
    }
}
