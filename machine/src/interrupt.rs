//! Interrupt unit: refreshes IRQ2 from the schedule, then vectors to the
//! handler if nothing is already in service and any source is pending.

use cpu_vm22::Cpu;
use vm22_core::IoReg;

use crate::ioregs::IoRegisters;
use crate::irq2::Irq2Schedule;

pub fn service(cpu: &mut Cpu, io: &mut IoRegisters, irq2: &mut Irq2Schedule, cycle: u64) {
    if io.irq_busy() {
        return;
    }

    io.set(IoReg::Irq2Status, u32::from(irq2.fires_at(cycle)));

    let pending = (io.get(IoReg::Irq0Enable) & io.get(IoReg::Irq0Status)) != 0
        || (io.get(IoReg::Irq1Enable) & io.get(IoReg::Irq1Status)) != 0
        || (io.get(IoReg::Irq2Enable) & io.get(IoReg::Irq2Status)) != 0;

    if pending {
        io.set(IoReg::IrqReturn, u32::from(cpu.pc()));
        cpu.set_pc((io.get(IoReg::IrqHandler) & 0xFFF) as u16);
        io.set_irq_busy(true);
    }
}
