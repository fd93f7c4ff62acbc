//! Request codes of the Linux PTP clock character devices (`/dev/ptp*`).
//!
//! The values behind `PTP_CLOCK_GETCAPS` and friends are normally buried in
//! `_IOR`/`_IOW` macro expansion. This crate spells them out: [`uapi`]
//! mirrors the `linux/ptp_clock.h` definitions, [`ioc`] exposes the request
//! code bit layout, and [`dump`] writes the resolved values so they can be
//! checked against a generated binding or an ioctl number-space listing.

use std::io::Write;

use tracing::trace;

pub mod uapi;

pub mod ioc;
pub use ioc::{Dir, InvalidDirection};

pub use std::io::Error as Error;
pub use std::io::Result as Result;


/// PTP clock ioctls covered by [`dump`], in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ClockGetCaps,
    SysOffset,
    SysOffsetPrecise,
    SysOffsetExtended,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::ClockGetCaps,
        Command::SysOffset,
        Command::SysOffsetPrecise,
        Command::SysOffsetExtended,
    ];

    /// Name of the command in `linux/ptp_clock.h`.
    pub const fn name(self) -> &'static str {
        match self {
            Command::ClockGetCaps => "PTP_CLOCK_GETCAPS",
            Command::SysOffset => "PTP_SYS_OFFSET",
            Command::SysOffsetPrecise => "PTP_SYS_OFFSET_PRECISE",
            Command::SysOffsetExtended => "PTP_SYS_OFFSET_EXTENDED",
        }
    }

    /// Request code of the command on this platform.
    pub const fn code(self) -> u32 {
        match self {
            Command::ClockGetCaps => uapi::PTP_CLOCK_GETCAPS,
            Command::SysOffset => uapi::PTP_SYS_OFFSET,
            Command::SysOffsetPrecise => uapi::PTP_SYS_OFFSET_PRECISE,
            Command::SysOffsetExtended => uapi::PTP_SYS_OFFSET_EXTENDED,
        }
    }
}

/// Formats a request code as `0x` followed by 8 lowercase hex digits.
pub fn format_code(code: u32) -> String {
    format!("{:#010x}", code)
}

/// Writes one `NAME: 0x........` line per command, in [`Command::ALL`] order.
pub fn dump<W: Write>(out: &mut W) -> Result<()> {
    for cmd in &Command::ALL {
        let code = cmd.code();

        trace!(target: "ptp::dump", command=%cmd.name(), code=%format_code(code), "resolved");
        writeln!(out, "{}: {}", cmd.name(), format_code(code))?;
    }

    Ok(())
}
