//! Launch-at-login registration under the current user's `Run` key.

use std::path::Path;

use tracing::{debug, info};
use winreg::enums::{HKEY_CURRENT_USER, KEY_READ, KEY_WRITE};
use winreg::RegKey;

use crate::error::{Error, Result};
use crate::model::constants::APP_NAME;
use crate::startup_command;

const RUN_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Run";

/// Whether a startup entry for this app exists.
pub fn is_registered() -> bool {
    RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey_with_flags(RUN_KEY, KEY_READ)
        .and_then(|key| key.get_value::<String, _>(APP_NAME))
        .map(|value| !value.is_empty())
        .unwrap_or(false)
}

/// Register `exe` to start at login.
pub fn register(exe: &Path) -> Result<()> {
    let (key, _) = RegKey::predef(HKEY_CURRENT_USER)
        .create_subkey(RUN_KEY)
        .map_err(Error::Startup)?;
    key.set_value(APP_NAME, &startup_command(exe))
        .map_err(Error::Startup)?;
    info!(exe = %exe.display(), "registered launch at startup");
    Ok(())
}

/// Remove the startup entry. Missing entries are not an error.
pub fn unregister() -> Result<()> {
    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey_with_flags(RUN_KEY, KEY_WRITE)
        .map_err(Error::Startup)?;
    match key.delete_value(APP_NAME) {
        Ok(()) => info!("removed launch at startup"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no startup entry to remove")
        }
        Err(e) => return Err(Error::Startup(e)),
    }
    Ok(())
}

/// Register the running executable.
pub fn register_current() -> Result<()> {
    let exe = std::env::current_exe()?;
    register(&exe)
}
