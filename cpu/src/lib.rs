//! The VM22 execute unit.
//!
//! `Cpu` owns the program counter and the 16-register file. It has no
//! notion of DMEM layout, disk state, or the I/O register map beyond what
//! [`vm22_core::Bus`] and [`vm22_core::IoBus`] expose to it, the same way
//! `cpu-6502` knows nothing about the C64's memory banking and only talks
//! to whatever implements `emu_core::Bus`.

use vm22_core::{decode_fields, sext12, Bus, IoBus, Opcode, StatusEntry, ADDR_MASK};

mod execute;

/// Outcome of a single `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Execution should continue to the next cycle.
    Continue,
    /// The `halt` opcode executed; the caller should stop after this
    /// cycle's peripherals and clock tick still run.
    Halted,
}

/// A fetched instruction decoded past the valid opcode range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidOpcode(pub u8);

/// The VM22 CPU core: program counter and 16 general-purpose registers.
#[derive(Debug, Clone)]
pub struct Cpu {
    pc: u16,
    regs: [i32; 16],
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pc: 0,
            regs: [0; 16],
        }
    }

    #[must_use]
    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.pc = (pc as u32 & ADDR_MASK) as u16;
    }

    #[must_use]
    pub fn registers(&self) -> [i32; 16] {
        self.regs
    }

    /// Executes the instruction word at the current PC.
    ///
    /// `inst` is the raw 48-bit word already fetched from IMEM by the
    /// caller (IMEM is read-only and lives outside the CPU, the way the
    /// C64's VIC-II reads memory through a bus it doesn't own). Returns
    /// the status-log entry for this instruction (captured after
    /// immediate injection, before the opcode's own effect) together with
    /// the step outcome, or the raw opcode byte if it falls outside
    /// 0..=21 -- in which case no registers are touched and no log entry
    /// is produced, matching the reference decoder's fail-fast ordering.
    pub fn step<B: Bus, I: IoBus>(
        &mut self,
        inst: u64,
        bus: &mut B,
        io: &mut I,
    ) -> Result<(StatusEntry, StepOutcome), InvalidOpcode> {
        let fields = decode_fields(inst);
        let Some(opcode) = Opcode::from_u8(fields.opcode) else {
            return Err(InvalidOpcode(fields.opcode));
        };

        let prev_pc = self.pc;
        self.regs[0] = 0;
        self.regs[1] = sext12(fields.imm1);
        self.regs[2] = sext12(fields.imm2);

        let status = StatusEntry {
            pc: prev_pc,
            inst,
            registers: self.regs,
        };

        let outcome = execute::run(self, opcode, fields, bus, io);

        // `halt` returns before the reference decoder's PC-advance step runs,
        // leaving PC pointed at the halt instruction itself.
        if outcome != StepOutcome::Halted {
            if self.pc == prev_pc {
                self.set_pc(self.pc.wrapping_add(1));
            }
            self.regs[0] = 0;
        }

        Ok((status, outcome))
    }

    fn reg(&self, index: u8) -> i32 {
        self.regs[index as usize & 0xF]
    }

    fn set_reg(&mut self, index: u8, value: i32) {
        self.regs[index as usize & 0xF] = value;
    }
}

/// Resolves the combined `rs + rt` I/O index used by `in`/`out`, matching
/// the reference design's guard: indices `>= 23` are silently ignored
/// (reserved slots 18/19 are valid indices with no special behavior).
fn io_index(value: i64) -> Option<u32> {
    if value < 0 || value >= i64::from(vm22_core::IO_REG_COUNT as u32) {
        None
    } else {
        Some(value as u32)
    }
}
