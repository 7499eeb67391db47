use libc::{c_char, c_int, size_t};

extern "C" {
    fn strerror_s(buffer: *mut c_char, size: size_t, errnum: c_int) -> c_int;
    fn _get_errno(value: *mut c_int) -> c_int;
}

/// What the CRT writes for any errno it has no entry for.
const CRT_UNKNOWN_ERROR: &[u8] = b"Unknown error\0";

pub(crate) fn errno() -> c_int {
    let mut value = 0;
    // Safety: value is a valid pointer
    unsafe {
        _get_errno(&mut value);
    }
    value
}

/// Write the description of `code` into `buf` as a NUL-terminated string.
///
/// Returns `false` if the CRT does not know `code`, in which case the contents of `buf` are
/// unspecified.
pub(crate) fn describe(code: i32, buf: &mut [u8]) -> bool {
    // Safety: buf is valid for writes of buf.len() bytes
    let result = unsafe { strerror_s(buf.as_mut_ptr() as *mut c_char, buf.len(), code as c_int) };
    result == 0 && !buf.starts_with(CRT_UNKNOWN_ERROR)
}
