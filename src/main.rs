// Release builds on Windows run without a console window
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

#[cfg(target_os = "windows")]
mod windows_main;

#[cfg(target_os = "windows")]
fn main() {
    windows_main::run();
}

#[cfg(not(target_os = "windows"))]
fn main() {
    lang_indicator::logging::init(None);
    tracing::error!("LangIndicator reads the Windows input method state and only runs on Windows");
    std::process::exit(1);
}
