// SPDX-License-Identifier: MPL-2.0
//! Opening files and folders with the platform's default application.

use crate::error::Result;
use std::path::Path;
use std::process::Command;

/// Hands `path` to the operating system's default opener.
///
/// Works for both files (default viewer) and directories (file manager). The
/// spawned process is not waited on.
pub fn open_with_default_app(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let program = "xdg-open";

    Command::new(program).arg(path).spawn()?;
    Ok(())
}
