//! I/O register access for `in`/`out`/`reti`.
//!
//! Mirrors the reference machine's `IoBus`-style split from plain memory:
//! I/O registers live in their own 23-entry address space, separate from
//! DMEM, and reads/writes through it are the only operations the
//! simulator records in `hwregtrace`.

/// The 23-entry I/O register file, as seen by the execute unit.
pub trait IoBus {
    /// Reads I/O register `index`. Returns `None` and does nothing if
    /// `index` is out of range (the `in` opcode's guard condition); the
    /// implementor is responsible for logging the access when `Some`.
    fn io_read(&mut self, index: u32) -> Option<u32>;

    /// Writes `value` to I/O register `index`. Returns `false` and does
    /// nothing if `index` is out of range (the `out` opcode's guard
    /// condition); the implementor is responsible for logging the access
    /// when it applies.
    fn io_write(&mut self, index: u32, value: u32) -> bool;

    /// The current value of the `IRQRETURN` register, consumed by `reti`.
    fn irq_return(&self) -> u32;

    /// Clears the `irq_busy` latch, performed by `reti`.
    fn clear_irq_busy(&mut self);
}
