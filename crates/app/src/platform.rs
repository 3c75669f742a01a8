//! Platform detection
//!
//! Clipboard export needs a display server on Linux. This module detects one
//! so the shell can fall back to printing when there is none (SSH sessions,
//! containers, CI).

use std::env;

/// Detected display server type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    Wayland,
    X11,
    /// macOS and Windows always have a system clipboard
    Native,
    /// Headless
    Unknown,
}

impl DisplayServer {
    /// Detect the current display server from environment
    pub fn detect() -> Self {
        if cfg!(any(target_os = "macos", target_os = "windows")) {
            return DisplayServer::Native;
        }
        Self::from_env(
            env::var_os("WAYLAND_DISPLAY").is_some(),
            env::var_os("DISPLAY").is_some(),
        )
    }

    fn from_env(wayland: bool, x11: bool) -> Self {
        if wayland {
            DisplayServer::Wayland
        } else if x11 {
            DisplayServer::X11
        } else {
            DisplayServer::Unknown
        }
    }

    /// Whether a system clipboard is plausibly reachable
    pub fn has_clipboard(&self) -> bool {
        !matches!(self, DisplayServer::Unknown)
    }
}

impl std::fmt::Display for DisplayServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayServer::Wayland => write!(f, "Wayland"),
            DisplayServer::X11 => write!(f, "X11"),
            DisplayServer::Native => write!(f, "Native"),
            DisplayServer::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Log platform information at startup
pub fn log_platform_info() {
    let display_server = DisplayServer::detect();
    tracing::info!(
        display_server = %display_server,
        clipboard = display_server.has_clipboard(),
        "Display server detected"
    );

    if let Ok(session_type) = env::var("XDG_SESSION_TYPE") {
        tracing::debug!(session_type = %session_type, "XDG session type");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_server_display() {
        assert_eq!(format!("{}", DisplayServer::Wayland), "Wayland");
        assert_eq!(format!("{}", DisplayServer::X11), "X11");
        assert_eq!(format!("{}", DisplayServer::Unknown), "Unknown");
    }

    #[test]
    fn wayland_preferred_over_x11() {
        assert_eq!(DisplayServer::from_env(true, true), DisplayServer::Wayland);
        assert_eq!(DisplayServer::from_env(false, true), DisplayServer::X11);
        assert_eq!(DisplayServer::from_env(false, false), DisplayServer::Unknown);
    }

    #[test]
    fn headless_has_no_clipboard() {
        assert!(!DisplayServer::Unknown.has_clipboard());
        assert!(DisplayServer::X11.has_clipboard());
    }
}
