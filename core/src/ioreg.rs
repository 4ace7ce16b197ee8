//! The 23-entry memory-mapped I/O register file.

/// Number of I/O registers addressable via `in`/`out`.
pub const IO_REG_COUNT: usize = 23;

/// One of the 23 memory-mapped I/O registers, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum IoReg {
    Irq0Enable = 0,
    Irq1Enable = 1,
    Irq2Enable = 2,
    Irq0Status = 3,
    Irq1Status = 4,
    Irq2Status = 5,
    IrqHandler = 6,
    IrqReturn = 7,
    Clks = 8,
    Leds = 9,
    Display7Seg = 10,
    TimerEnable = 11,
    TimerCurrent = 12,
    TimerMax = 13,
    DiskCmd = 14,
    DiskSector = 15,
    DiskBuffer = 16,
    DiskStatus = 17,
    Reserved0 = 18,
    Reserved1 = 19,
    MonitorAddr = 20,
    MonitorData = 21,
    MonitorCmd = 22,
}

impl IoReg {
    /// Maps a 0..22 index to its register, returning `None` out of range.
    #[must_use]
    pub fn from_index(index: u32) -> Option<Self> {
        const ALL: [IoReg; IO_REG_COUNT] = [
            IoReg::Irq0Enable,
            IoReg::Irq1Enable,
            IoReg::Irq2Enable,
            IoReg::Irq0Status,
            IoReg::Irq1Status,
            IoReg::Irq2Status,
            IoReg::IrqHandler,
            IoReg::IrqReturn,
            IoReg::Clks,
            IoReg::Leds,
            IoReg::Display7Seg,
            IoReg::TimerEnable,
            IoReg::TimerCurrent,
            IoReg::TimerMax,
            IoReg::DiskCmd,
            IoReg::DiskSector,
            IoReg::DiskBuffer,
            IoReg::DiskStatus,
            IoReg::Reserved0,
            IoReg::Reserved1,
            IoReg::MonitorAddr,
            IoReg::MonitorData,
            IoReg::MonitorCmd,
        ];
        ALL.get(index as usize).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as u8 as usize
    }

    /// The lowercase name used in `hwregtrace` lines.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            IoReg::Irq0Enable => "irq0enable",
            IoReg::Irq1Enable => "irq1enable",
            IoReg::Irq2Enable => "irq2enable",
            IoReg::Irq0Status => "irq0status",
            IoReg::Irq1Status => "irq1status",
            IoReg::Irq2Status => "irq2status",
            IoReg::IrqHandler => "irqhandler",
            IoReg::IrqReturn => "irqreturn",
            IoReg::Clks => "clks",
            IoReg::Leds => "leds",
            IoReg::Display7Seg => "display7seg",
            IoReg::TimerEnable => "timerenable",
            IoReg::TimerCurrent => "timercurrent",
            IoReg::TimerMax => "timermax",
            IoReg::DiskCmd => "diskcmd",
            IoReg::DiskSector => "disksector",
            IoReg::DiskBuffer => "diskbuffer",
            IoReg::DiskStatus => "diskstatus",
            IoReg::Reserved0 => "reserved0",
            IoReg::Reserved1 => "reserved1",
            IoReg::MonitorAddr => "monitoraddr",
            IoReg::MonitorData => "monitordata",
            IoReg::MonitorCmd => "monitorcmd",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IoReg;

    #[test]
    fn round_trips_every_index() {
        for i in 0..23 {
            let reg = IoReg::from_index(i).unwrap();
            assert_eq!(reg.index() as u32, i);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(IoReg::from_index(23).is_none());
    }

    #[test]
    fn names_match_the_register_map() {
        assert_eq!(IoReg::DiskStatus.name(), "diskstatus");
        assert_eq!(IoReg::MonitorCmd.name(), "monitorcmd");
    }
}
