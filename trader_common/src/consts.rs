//! Crate-wide constants.
//!
//! Single source of truth for default permissions, ports, timeouts and
//! character sets used by the helper modules.

/// Permission bits applied to directories created by [`crate::fs`].
pub const DEFAULT_PERMISSION_OCTAL: u32 = 0o770;

/// Port assumed when an address carries none.
pub const DEFAULT_PORT: u16 = 80;

/// Host assumed when an address carries only a port.
pub const DEFAULT_HOST: &str = "localhost";

/// Default outbound HTTP timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

/// Decimal digits, the default alphabet for random strings.
pub const NUMBER_CHARACTERS: &str = "0123456789";

/// Lowercase ASCII letters.
pub const SMALL_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters.
pub const CAPITAL_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Directory name of the data dir on Unix-like systems (under `$HOME`).
pub const DATA_DIR_NAME: &str = ".tradercommon";

/// Directory name of the data dir on Windows (under `%APPDATA%`).
pub const DATA_DIR_NAME_WINDOWS: &str = "TraderCommon";
