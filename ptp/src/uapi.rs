use std::mem::size_of;

use nix::{request_code_read, request_code_readwrite, request_code_write};


/// ioctl type byte of the PTP clock character devices ('=').
pub const PTP_CLK_MAGIC: u8 = b'=';

pub const PTP_MAX_SAMPLES: usize = 25;

// struct ptp_clock_time
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct ClockTime {
    pub sec: i64,
    pub nsec: u32,
    pub reserved: u32,
}

// struct ptp_clock_caps
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct ClockCaps {
    pub max_adj: i32,
    pub n_alarm: i32,
    pub n_ext_ts: i32,
    pub n_per_out: i32,
    pub pps: i32,
    pub n_pins: i32,
    pub cross_timestamping: i32,
    pub adjust_phase: i32,
    pub max_phase_adj: i32,
    pub rsv: [i32; 11],
}

// struct ptp_sys_offset
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct SysOffset {
    pub n_samples: u32,
    pub rsv: [u32; 3],
    pub ts: [ClockTime; 2 * PTP_MAX_SAMPLES + 1],
}

// struct ptp_sys_offset_precise
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct SysOffsetPrecise {
    pub device: ClockTime,
    pub sys_realtime: ClockTime,
    pub sys_monoraw: ClockTime,
    pub rsv: [u32; 4],
}

// struct ptp_sys_offset_extended
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct SysOffsetExtended {
    pub n_samples: u32,
    pub clockid: i32,
    pub rsv: [u32; 2],
    pub ts: [[ClockTime; 3]; PTP_MAX_SAMPLES],
}

pub const PTP_CLOCK_GETCAPS: u32 =
    request_code_read!(PTP_CLK_MAGIC, 0x01, size_of::<ClockCaps>()) as u32;
pub const PTP_SYS_OFFSET: u32 =
    request_code_write!(PTP_CLK_MAGIC, 0x05, size_of::<SysOffset>()) as u32;
pub const PTP_SYS_OFFSET_PRECISE: u32 =
    request_code_readwrite!(PTP_CLK_MAGIC, 0x08, size_of::<SysOffsetPrecise>()) as u32;
pub const PTP_SYS_OFFSET_EXTENDED: u32 =
    request_code_readwrite!(PTP_CLK_MAGIC, 0x09, size_of::<SysOffsetExtended>()) as u32;
