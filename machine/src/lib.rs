//! The VM22 machine: IMEM/DMEM, the I/O register file, the disk
//! controller, timer, monitor, IRQ2 schedule, and the cycle loop that ties
//! them to a [`cpu_vm22::Cpu`].
//!
//! Pure simulation state only -- no file I/O. The `vm22-sim` binary parses
//! input files into the typed values this crate consumes and serializes
//! its outputs back out, the same split `machine-c64` keeps from
//! `c64-runner`.

mod disk;
mod interrupt;
mod ioregs;
mod irq2;
mod machine;
mod memory;
mod monitor;
mod timer;

pub use disk::Disk;
pub use machine::Machine;
pub use memory::{Dmem, Imem};
pub use monitor::Monitor;
