//! Shared types for the VM22 assembler and simulator.
//!
//! Both tools need to agree on the instruction encoding, the I/O register
//! map, and sign extension of 12-bit immediates. This crate is the single
//! source of truth for that shared vocabulary, the way `emu-core` is the
//! shared vocabulary between a CPU crate and its machine crate.

mod bus;
mod io_bus;
mod ioreg;
mod opcode;
mod sext;
mod trace;
mod word;

pub use bus::Bus;
pub use io_bus::IoBus;
pub use ioreg::{IoReg, IO_REG_COUNT};
pub use opcode::Opcode;
pub use sext::sext12;
pub use trace::{HwAccess, HwAccessKind, StatusEntry};
pub use word::{decode_fields, encode_fields, Fields};

/// Number of general-purpose registers (r0..=r15).
pub const REGISTER_COUNT: usize = 16;

/// IMEM/DMEM size in words.
pub const MEMORY_SIZE: usize = 4096;

/// 12-bit address/PC mask.
pub const ADDR_MASK: u32 = 0x0FFF;

/// Disk geometry.
pub const DISK_SECTORS: usize = 128;
pub const SECTOR_WORDS: usize = 128;

/// Monitor framebuffer geometry.
pub const MONITOR_SIZE: usize = 256;

/// Cycles between a disk command being accepted and its completion
/// interrupt being raised.
pub const DISK_LATENCY_CYCLES: u64 = 1024;
