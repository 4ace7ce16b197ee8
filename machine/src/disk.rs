//! 128-sector x 128-word disk, DMA'd to/from DMEM with a 1024-cycle
//! completion latency and a sticky DISKSTATUS/IRQ1 handshake.

use vm22_core::{ADDR_MASK, DISK_SECTORS, IoReg, SECTOR_WORDS};

use crate::ioregs::IoRegisters;
use crate::memory::Dmem;

#[derive(Debug, Clone)]
pub struct Disk {
    sectors: [[u32; SECTOR_WORDS]; DISK_SECTORS],
    /// Cycle the in-flight command was accepted, or `None` if the disk has
    /// never accepted a command (the reference implementation's `~0`
    /// sentinel, expressed without relying on unsigned wraparound).
    last_cmd_cycle: Option<u64>,
}

impl Disk {
    #[must_use]
    pub fn new(sectors: [[u32; SECTOR_WORDS]; DISK_SECTORS]) -> Self {
        Self {
            sectors,
            last_cmd_cycle: None,
        }
    }

    #[must_use]
    pub fn sectors(&self) -> &[[u32; SECTOR_WORDS]; DISK_SECTORS] {
        &self.sectors
    }

    pub fn tick(&mut self, cycle: u64, io: &mut IoRegisters, dmem: &mut Dmem) {
        if self.last_cmd_cycle.is_some_and(|accepted| cycle - accepted == 1024) {
            io.set(IoReg::DiskStatus, 0);
            io.set(IoReg::Irq1Status, 1);
        }

        if io.get(IoReg::DiskStatus) != 0 || io.get(IoReg::DiskCmd) == 0 {
            return;
        }

        self.last_cmd_cycle = Some(cycle);
        io.set(IoReg::DiskStatus, 1);

        let sector = (io.get(IoReg::DiskSector) as usize) % DISK_SECTORS;
        let buffer = io.get(IoReg::DiskBuffer);

        match io.get(IoReg::DiskCmd) {
            1 => {
                for (i, word) in self.sectors[sector].iter().enumerate() {
                    let addr = (buffer.wrapping_add(i as u32) & ADDR_MASK) as u16;
                    dmem.0[addr as usize] = *word as i32;
                }
            }
            2 => {
                for (i, slot) in self.sectors[sector].iter_mut().enumerate() {
                    let addr = (buffer.wrapping_add(i as u32) & ADDR_MASK) as u16;
                    *slot = dmem.0[addr as usize] as u32;
                }
            }
            _ => {}
        }

        io.set(IoReg::DiskCmd, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_with_read_cmd(sector: u32, buffer: u32) -> IoRegisters {
        let mut io = IoRegisters::new();
        io.set(IoReg::DiskSector, sector);
        io.set(IoReg::DiskBuffer, buffer);
        io.set(IoReg::DiskCmd, 1);
        io
    }

    #[test]
    fn accepting_a_command_sets_busy_and_clears_diskcmd() {
        let mut disk = Disk::new([[0; SECTOR_WORDS]; DISK_SECTORS]);
        let mut dmem = Dmem::new();
        let mut io = io_with_read_cmd(0, 0);
        disk.tick(10, &mut io, &mut dmem);
        assert_eq!(io.get(IoReg::DiskStatus), 1);
        assert_eq!(io.get(IoReg::DiskCmd), 0);
    }

    #[test]
    fn read_copies_sector_into_dmem_immediately() {
        let mut sectors = [[0; SECTOR_WORDS]; DISK_SECTORS];
        sectors[3][0] = 0xAAAA_BBBB;
        let mut disk = Disk::new(sectors);
        let mut dmem = Dmem::new();
        let mut io = io_with_read_cmd(3, 100);
        disk.tick(0, &mut io, &mut dmem);
        assert_eq!(dmem.0[100] as u32, 0xAAAA_BBBB);
    }

    #[test]
    fn write_copies_dmem_into_sector_immediately() {
        let mut disk = Disk::new([[0; SECTOR_WORDS]; DISK_SECTORS]);
        let mut dmem = Dmem::new();
        dmem.0[50] = 0x1234;
        let mut io = IoRegisters::new();
        io.set(IoReg::DiskSector, 2);
        io.set(IoReg::DiskBuffer, 50);
        io.set(IoReg::DiskCmd, 2);
        disk.tick(0, &mut io, &mut dmem);
        assert_eq!(disk.sectors()[2][0], 0x1234);
    }

    #[test]
    fn completion_fires_exactly_1024_cycles_later() {
        let mut disk = Disk::new([[0; SECTOR_WORDS]; DISK_SECTORS]);
        let mut dmem = Dmem::new();
        let mut io = io_with_read_cmd(0, 0);
        disk.tick(0, &mut io, &mut dmem);
        for cycle in 1..1024 {
            disk.tick(cycle, &mut io, &mut dmem);
            assert_eq!(io.get(IoReg::Irq1Status), 0, "fired early at {cycle}");
        }
        disk.tick(1024, &mut io, &mut dmem);
        assert_eq!(io.get(IoReg::Irq1Status), 1);
        assert_eq!(io.get(IoReg::DiskStatus), 0);
    }

    #[test]
    fn a_busy_disk_ignores_a_new_command() {
        let mut disk = Disk::new([[0; SECTOR_WORDS]; DISK_SECTORS]);
        let mut dmem = Dmem::new();
        let mut io = io_with_read_cmd(0, 0);
        disk.tick(0, &mut io, &mut dmem);
        io.set(IoReg::DiskSector, 5);
        io.set(IoReg::DiskCmd, 1);
        disk.tick(1, &mut io, &mut dmem);
        assert_eq!(io.get(IoReg::DiskStatus), 1);
    }
}
