use errno_status::{errno_status, Errno, StatusCode, MAX_DESCRIPTION_LEN};
use proptest::prelude::*;

#[test]
fn sweep_small_and_extreme_codes() {
    let extremes = [i32::MIN, i32::MIN + 1, -1, i32::MAX - 1, i32::MAX];
    for code in (-4096..=4096).chain(extremes.iter().copied()) {
        let description = Errno(code).description();
        assert!(description.len() < MAX_DESCRIPTION_LEN, "{}", code);
        assert!(!description.is_empty(), "{}", code);
    }
}

#[cfg(any(all(target_os = "linux", target_env = "gnu"), target_os = "macos"))]
#[test]
fn unknown_codes_fall_back() {
    for &code in &[123456, -5, i32::MIN, i32::MAX] {
        assert_eq!(
            Errno(code).description().as_str(),
            format!("Unknown error {}", code)
        );
    }
}

proptest! {
    #[test]
    fn description_fits_buffer(code in any::<i32>()) {
        let description = Errno(code).description();
        prop_assert!(description.len() < MAX_DESCRIPTION_LEN);
        prop_assert!(!description.is_empty());
    }

    #[test]
    fn message_format(context in ".*", code in any::<i32>()) {
        let status = errno_status(&context, code);
        let expected_code = if code == 0 { StatusCode::Ok } else { StatusCode::Unknown };
        prop_assert_eq!(status.code(), expected_code);
        prop_assert_eq!(
            status.message(),
            format!("{} ({})", context, Errno(code).description())
        );
    }
}
