use libc::{c_char, c_int};

pub(crate) fn errno() -> c_int {
    #[cfg(any(target_os = "solaris", target_os = "illumos"))]
    use libc::___errno as errno_location;
    #[cfg(any(target_os = "android", target_os = "netbsd", target_os = "openbsd"))]
    use libc::__errno as errno_location;
    #[cfg(any(target_os = "linux", target_os = "redox", target_os = "dragonfly"))]
    use libc::__errno_location as errno_location;
    #[cfg(any(target_os = "freebsd", target_os = "ios", target_os = "macos"))]
    use libc::__error as errno_location;

    unsafe { *errno_location() as c_int }
}

/// Write the description of `code` into `buf` as a NUL-terminated string.
///
/// Returns `false` if the platform does not know `code`, in which case the contents of `buf` are
/// unspecified.
pub(crate) fn describe(code: i32, buf: &mut [u8]) -> bool {
    // libc binds the XSI variant here, `__xpg_strerror_r` on glibc.
    // Safety: buf is valid for writes of buf.len() bytes
    let result = unsafe {
        libc::strerror_r(
            code as c_int,
            buf.as_mut_ptr() as *mut c_char,
            buf.len(),
        )
    };

    // glibc before 2.13 reports through errno instead
    let result = if result == -1 { errno() } else { result };

    // ERANGE leaves a truncated description, which is still usable
    result == 0 || result == libc::ERANGE
}
