//! The 23-entry memory-mapped I/O register file.
//!
//! Owns `irq_busy` too: it gates the same `in`/`out` address space and has
//! no existence outside the interrupt unit's view of these registers, the
//! way the reference machine keeps it as a plain global beside `IORegister`.

use vm22_core::{HwAccess, HwAccessKind, IoBus, IoReg, IO_REG_COUNT};

#[derive(Debug, Clone)]
pub struct IoRegisters {
    regs: [u32; IO_REG_COUNT],
    irq_busy: bool,
    cycle: u64,
    hw_log: Vec<HwAccess>,
    leds_log: Vec<(u64, u32)>,
    display7seg_log: Vec<(u64, u32)>,
}

impl IoRegisters {
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: [0; IO_REG_COUNT],
            irq_busy: false,
            cycle: 0,
            hw_log: Vec::new(),
            leds_log: Vec::new(),
            display7seg_log: Vec::new(),
        }
    }

    /// Set by the machine before dispatching each instruction, so log
    /// entries carry the cycle they belong to.
    pub fn set_cycle(&mut self, cycle: u64) {
        self.cycle = cycle;
    }

    #[must_use]
    pub fn get(&self, reg: IoReg) -> u32 {
        self.regs[reg.index()]
    }

    pub fn set(&mut self, reg: IoReg, value: u32) {
        self.regs[reg.index()] = value;
    }

    #[must_use]
    pub fn irq_busy(&self) -> bool {
        self.irq_busy
    }

    pub fn set_irq_busy(&mut self, busy: bool) {
        self.irq_busy = busy;
    }

    #[must_use]
    pub fn hw_log(&self) -> &[HwAccess] {
        &self.hw_log
    }

    #[must_use]
    pub fn leds_log(&self) -> &[(u64, u32)] {
        &self.leds_log
    }

    #[must_use]
    pub fn display7seg_log(&self) -> &[(u64, u32)] {
        &self.display7seg_log
    }
}

impl Default for IoRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl IoBus for IoRegisters {
    fn io_read(&mut self, index: u32) -> Option<u32> {
        let reg = IoReg::from_index(index)?;
        let value = self.regs[reg.index()];
        self.hw_log.push(HwAccess {
            cycle: self.cycle,
            kind: HwAccessKind::Read,
            reg,
            data: value,
        });
        Some(value)
    }

    fn io_write(&mut self, index: u32, value: u32) -> bool {
        let Some(reg) = IoReg::from_index(index) else {
            return false;
        };
        self.regs[reg.index()] = value;
        self.hw_log.push(HwAccess {
            cycle: self.cycle,
            kind: HwAccessKind::Write,
            reg,
            data: value,
        });
        match reg {
            IoReg::Leds => self.leds_log.push((self.cycle, value)),
            IoReg::Display7Seg => self.display7seg_log.push((self.cycle, value)),
            _ => {}
        }
        true
    }

    fn irq_return(&self) -> u32 {
        self.regs[IoReg::IrqReturn.index()]
    }

    fn clear_irq_busy(&mut self) {
        self.irq_busy = false;
    }
}
