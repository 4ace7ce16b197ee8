//! Free-running timer: raises IRQ0 when the counter reaches its max value.

use vm22_core::IoReg;

use crate::ioregs::IoRegisters;

pub fn tick(io: &mut IoRegisters) {
    if io.get(IoReg::TimerEnable) == 0 {
        return;
    }

    if io.get(IoReg::TimerCurrent) == io.get(IoReg::TimerMax) {
        io.set(IoReg::TimerCurrent, 0);
        io.set(IoReg::Irq0Status, 1);
    } else {
        io.set(IoReg::TimerCurrent, io.get(IoReg::TimerCurrent).wrapping_add(1));
    }
}
