//! Formats a finished [`machine_vm22::Machine`]'s state into the
//! simulator's ten output files.

use std::fmt::Write as _;

use machine_vm22::Machine;
use vm22_core::{HwAccessKind, MONITOR_SIZE};

pub fn dmemout(machine: &Machine) -> String {
    truncated_hex_lines(machine.dmem().iter().map(|&v| v as u32))
}

pub fn diskout(machine: &Machine) -> String {
    let words = machine.disk().sectors().iter().flat_map(|sector| sector.iter().copied());
    truncated_hex_lines(words)
}

/// Renders every word as an 8-hex-digit line, stopping after the last
/// nonzero one (empty string if every word is zero).
fn truncated_hex_lines(words: impl Iterator<Item = u32> + Clone) -> String {
    let last_nonzero = words.clone().enumerate().filter(|&(_, w)| w != 0).map(|(i, _)| i).max();
    let Some(last_nonzero) = last_nonzero else {
        return String::new();
    };

    let mut out = String::new();
    for word in words.take(last_nonzero + 1) {
        writeln!(out, "{word:08x}").unwrap();
    }
    out
}

pub fn trace(machine: &Machine) -> String {
    let mut out = String::new();
    for entry in machine.status_log() {
        write!(out, "{:03x} {:012x} ", entry.pc, entry.inst).unwrap();
        for (i, reg) in entry.registers.iter().enumerate() {
            if i + 1 == entry.registers.len() {
                writeln!(out, "{:08x}", *reg as u32).unwrap();
            } else {
                write!(out, "{:08x} ", *reg as u32).unwrap();
            }
        }
    }
    out
}

pub fn hwregtrace(machine: &Machine) -> String {
    let mut out = String::new();
    for access in machine.hw_log() {
        let kind = match access.kind {
            HwAccessKind::Read => "READ",
            HwAccessKind::Write => "WRITE",
        };
        writeln!(out, "{} {} {} {:08x}", access.cycle, kind, access.reg.name(), access.data).unwrap();
    }
    out
}

pub fn leds(machine: &Machine) -> String {
    cycle_value_lines(machine.leds_log())
}

pub fn display7seg(machine: &Machine) -> String {
    cycle_value_lines(machine.display7seg_log())
}

fn cycle_value_lines(entries: &[(u64, u32)]) -> String {
    let mut out = String::new();
    for (cycle, value) in entries {
        writeln!(out, "{cycle} {value:08x}").unwrap();
    }
    out
}

pub fn cycles(machine: &Machine) -> String {
    format!("{}\n", machine.cycle())
}

/// Eight-hex-digit lines for r3..=r15 (r0..=r2 carry no persistent state of
/// their own: r0 is hardwired zero, r1/r2 hold the last instruction's
/// immediates).
pub fn regout(machine: &Machine) -> String {
    let mut out = String::new();
    for reg in &machine.registers()[3..] {
        writeln!(out, "{:08x}", *reg as u32).unwrap();
    }
    out
}

pub fn monitor_txt(machine: &Machine) -> String {
    let mut out = String::new();
    for row in machine.monitor().pixels() {
        for pixel in row {
            writeln!(out, "{pixel:02x}").unwrap();
        }
    }
    out
}

pub fn monitor_yuv(machine: &Machine) -> Vec<u8> {
    let mut out = Vec::with_capacity(MONITOR_SIZE * MONITOR_SIZE);
    for row in machine.monitor().pixels() {
        out.extend_from_slice(row);
    }
    out
}
