//! Execution log entry types, shared between the machine (which appends
//! them) and the simulator binary (which formats them to files).

use crate::IoReg;

/// One executed instruction: the state captured right after immediate
/// injection, before the opcode's own effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub pc: u16,
    pub inst: u64,
    pub registers: [i32; 16],
}

/// Whether an `in`/`out` access read or wrote an I/O register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwAccessKind {
    Read,
    Write,
}

impl HwAccessKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HwAccessKind::Read => "READ",
            HwAccessKind::Write => "WRITE",
        }
    }
}

/// One `in`/`out` access to an I/O register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HwAccess {
    pub cycle: u64,
    pub kind: HwAccessKind,
    pub reg: IoReg,
    pub data: u32,
}
