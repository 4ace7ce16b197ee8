//! Per-opcode effects, split out of `step` the way `cpu-6502` splits its
//! addressing modes and ALU ops into their own modules.

use vm22_core::{Bus, Fields, IoBus, Opcode, ADDR_MASK};

use crate::{io_index, Cpu, StepOutcome};

pub(crate) fn run<B: Bus, I: IoBus>(
    cpu: &mut Cpu,
    opcode: Opcode,
    f: Fields,
    bus: &mut B,
    io: &mut I,
) -> StepOutcome {
    let rs = cpu.reg(f.rs);
    let rt = cpu.reg(f.rt);
    let rm = cpu.reg(f.rm);

    match opcode {
        Opcode::Add => cpu.set_reg(f.rd, rs.wrapping_add(rt).wrapping_add(rm)),
        Opcode::Sub => cpu.set_reg(f.rd, rs.wrapping_sub(rt).wrapping_sub(rm)),
        Opcode::Mac => cpu.set_reg(f.rd, rs.wrapping_mul(rt).wrapping_add(rm)),
        Opcode::And => cpu.set_reg(f.rd, rs & rt & rm),
        Opcode::Or => cpu.set_reg(f.rd, rs | rt | rm),
        Opcode::Xor => cpu.set_reg(f.rd, rs ^ rt ^ rm),
        Opcode::Sll => cpu.set_reg(f.rd, ((rs as u32).wrapping_shl(shift_amount(rt))) as i32),
        Opcode::Sra => cpu.set_reg(f.rd, rs.wrapping_shr(shift_amount(rt))),
        Opcode::Srl => cpu.set_reg(f.rd, ((rs as u32).wrapping_shr(shift_amount(rt))) as i32),
        Opcode::Beq => {
            if rs == rt {
                branch(cpu, rm);
            }
        }
        Opcode::Bne => {
            if rs != rt {
                branch(cpu, rm);
            }
        }
        Opcode::Blt => {
            if rs < rt {
                branch(cpu, rm);
            }
        }
        Opcode::Bgt => {
            if rs > rt {
                branch(cpu, rm);
            }
        }
        Opcode::Ble => {
            if rs <= rt {
                branch(cpu, rm);
            }
        }
        Opcode::Bge => {
            if rs >= rt {
                branch(cpu, rm);
            }
        }
        Opcode::Jal => {
            // Two sequential statements in the reference: `rd` is written
            // first, then `rm` is read to form the branch target. When
            // `rd == rm`, the second read sees the just-written link.
            let link = (u32::from(cpu.pc()) + 1) & ADDR_MASK;
            cpu.set_reg(f.rd, link as i32);
            branch(cpu, cpu.reg(f.rm));
        }
        Opcode::Lw => {
            let addr = dmem_addr(rs, rt);
            cpu.set_reg(f.rd, bus.read_word(addr).wrapping_add(rm));
        }
        Opcode::Sw => {
            let addr = dmem_addr(rs, rt);
            bus.write_word(addr, rm.wrapping_add(cpu.reg(f.rd)));
        }
        Opcode::Reti => {
            cpu.set_pc(io.irq_return() as u16);
            io.clear_irq_busy();
        }
        Opcode::In => {
            if let Some(index) = io_index(i64::from(rs) + i64::from(rt)) {
                if let Some(value) = io.io_read(index) {
                    cpu.set_reg(f.rd, value as i32);
                }
            }
        }
        Opcode::Out => {
            if let Some(index) = io_index(i64::from(rs) + i64::from(rt)) {
                io.io_write(index, rm as u32);
            }
        }
        Opcode::Halt => return StepOutcome::Halted,
    }

    StepOutcome::Continue
}

fn branch(cpu: &mut Cpu, target: i32) {
    cpu.set_pc((target as u32 & ADDR_MASK) as u16);
}

fn dmem_addr(rs: i32, rt: i32) -> u16 {
    ((rs.wrapping_add(rt)) as u32 & ADDR_MASK) as u16
}

/// Shift amounts are taken modulo 32, matching a hardware barrel shifter
/// rather than C's undefined behavior for out-of-range shift counts.
fn shift_amount(rt: i32) -> u32 {
    (rt as u32) & 0x1F
}
