use std::path::Path;

use lang_indicator::{clamp, format_version, startup_command};

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn clamp_prefers_low_bound_for_empty_range() {
    assert_eq!(clamp(5.0, 3.0, 1.0), 3.0);
}

#[test]
fn format_version_drops_revision() {
    assert_eq!(format_version("1.2.3.4"), "1.2.3");
}

#[test]
fn format_version_fills_missing_parts() {
    assert_eq!(format_version("2"), "2.0.0");
    assert_eq!(format_version(" 1.2 "), "1.2.0");
}

#[test]
fn format_version_zeroes_unparsable_minor_parts() {
    assert_eq!(format_version("1.x.3"), "1.0.3");
}

#[test]
fn format_version_falls_back_when_major_is_invalid() {
    assert_eq!(format_version("x.1"), "0.0.1");
    assert_eq!(format_version(""), "0.0.1");
}

#[test]
fn format_version_of_package_version() {
    assert_eq!(format_version(env!("CARGO_PKG_VERSION")), "1.0.0");
}

#[test]
fn startup_command_quotes_path_with_spaces() {
    let exe = Path::new(r"C:\Program Files\LangIndicator\lang-indicator.exe");
    assert_eq!(
        startup_command(exe),
        "\"C:\\Program Files\\LangIndicator\\lang-indicator.exe\""
    );
}
