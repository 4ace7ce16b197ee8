//! The top-level `Machine`: a `Cpu` plus every peripheral, combined the way
//! `machine-c64`'s `C64` struct owns its CPU, memory banks, and disk drive
//! and drives them from one `tick` method.

use cpu_vm22::{Cpu, InvalidOpcode, StepOutcome};
use vm22_core::{IoReg, StatusEntry};

use crate::disk::Disk;
use crate::interrupt;
use crate::ioregs::IoRegisters;
use crate::irq2::Irq2Schedule;
use crate::memory::{Dmem, Imem};
use crate::monitor::Monitor;

pub struct Machine {
    cpu: Cpu,
    imem: Imem,
    dmem: Dmem,
    io: IoRegisters,
    disk: Disk,
    monitor: Monitor,
    irq2: Irq2Schedule,
    cycle: u64,
    status_log: Vec<StatusEntry>,
}

impl Machine {
    #[must_use]
    pub fn new(
        imem: Imem,
        dmem: Dmem,
        disk: Disk,
        irq2_schedule: impl IntoIterator<Item = u64>,
    ) -> Self {
        Self {
            cpu: Cpu::new(),
            imem,
            dmem,
            io: IoRegisters::new(),
            disk,
            monitor: Monitor::new(),
            irq2: Irq2Schedule::new(irq2_schedule),
            cycle: 0,
            status_log: Vec::new(),
        }
    }

    /// Runs one cycle in the fixed order: execute, monitor, timer, disk,
    /// interrupt check, clock tick. Returns `Ok(true)` once `halt`'s cycle
    /// has fully run, `Ok(false)` if execution should continue, or the
    /// decode error if the fetched opcode was invalid (in which case steps
    /// 2-6 never ran for this cycle).
    pub fn run_cycle(&mut self) -> Result<bool, InvalidOpcode> {
        let inst = self.imem.fetch(self.cpu.pc());
        self.io.set_cycle(self.cycle);

        let (status, outcome) = self.cpu.step(inst, &mut self.dmem, &mut self.io)?;
        self.status_log.push(status);

        self.monitor.tick(&mut self.io);
        crate::timer::tick(&mut self.io);
        self.disk.tick(self.cycle, &mut self.io, &mut self.dmem);
        interrupt::service(&mut self.cpu, &mut self.io, &mut self.irq2, self.cycle);

        self.io.set(IoReg::Clks, self.io.get(IoReg::Clks).wrapping_add(1));
        self.cycle += 1;

        Ok(outcome == StepOutcome::Halted)
    }

    /// Runs cycles until `halt` or a decode error. On a decode error, the
    /// offending opcode is reported and no further cycles run.
    pub fn run_to_completion(&mut self) -> Result<(), InvalidOpcode> {
        while !self.run_cycle()? {}
        Ok(())
    }

    #[must_use]
    pub fn registers(&self) -> [i32; 16] {
        self.cpu.registers()
    }

    #[must_use]
    pub fn dmem(&self) -> &[i32] {
        &self.dmem.0
    }

    #[must_use]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[must_use]
    pub fn disk(&self) -> &Disk {
        &self.disk
    }

    #[must_use]
    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    #[must_use]
    pub fn status_log(&self) -> &[StatusEntry] {
        &self.status_log
    }

    #[must_use]
    pub fn hw_log(&self) -> &[vm22_core::HwAccess] {
        self.io.hw_log()
    }

    #[must_use]
    pub fn leds_log(&self) -> &[(u64, u32)] {
        self.io.leds_log()
    }

    #[must_use]
    pub fn display7seg_log(&self) -> &[(u64, u32)] {
        self.io.display7seg_log()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vm22_core::{encode_fields, Fields, DISK_SECTORS, SECTOR_WORDS};

    fn inst(opcode: u8, rd: u8, rs: u8, rt: u8, rm: u8, imm1: i32, imm2: i32) -> u64 {
        encode_fields(Fields {
            opcode,
            rd,
            rs,
            rt,
            rm,
            imm1: (imm1 as u32 & 0xFFF) as u16,
            imm2: (imm2 as u32 & 0xFFF) as u16,
        })
    }

    #[test]
    fn halts_and_still_ticks_the_final_cycle() {
        let mut imem = Imem::new();
        imem.0[0] = inst(21, 0, 0, 0, 0, 0, 0); // halt
        let mut machine = Machine::new(imem, Dmem::new(), Disk::new([[0; SECTOR_WORDS]; DISK_SECTORS]), []);
        machine.run_to_completion().unwrap();
        assert_eq!(machine.cycle(), 1);
        assert_eq!(machine.status_log().len(), 1);
    }

    #[test]
    fn invalid_opcode_stops_without_ticking_peripherals() {
        let mut imem = Imem::new();
        imem.0[0] = inst(30, 0, 0, 0, 0, 0, 0);
        let mut machine = Machine::new(imem, Dmem::new(), Disk::new([[0; SECTOR_WORDS]; DISK_SECTORS]), []);
        let err = machine.run_to_completion().unwrap_err();
        assert_eq!(err.0, 30);
        assert_eq!(machine.cycle(), 0);
    }

    #[test]
    fn timer_interrupt_fires_and_is_observable_after_halt() {
        let mut imem = Imem::new();
        imem.0[0] = inst(21, 0, 0, 0, 0, 0, 0); // halt: still runs this cycle's timer/ISR
        let mut machine = Machine::new(imem, Dmem::new(), Disk::new([[0; SECTOR_WORDS]; DISK_SECTORS]), []);
        machine.io.set(IoReg::TimerEnable, 1);
        machine.io.set(IoReg::TimerMax, 0);
        machine.io.set(IoReg::Irq0Enable, 1);
        machine.io.set(IoReg::IrqHandler, 5);
        machine.run_to_completion().unwrap();
        assert_eq!(machine.io.get(IoReg::Irq0Status), 1);
        assert!(machine.io.irq_busy());
        assert_eq!(machine.cpu.pc(), 5);
    }
}
