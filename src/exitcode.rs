//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error (unknown curve, bad depth or thickness)
pub const USAGE: i32 = 64;

/// Data format error (malformed state string)
pub const DATAERR: i32 = 65;

/// Internal software error (malformed curve definition)
pub const SOFTWARE: i32 = 70;

/// Can't create output file
pub const CANTCREAT: i32 = 73;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
