//! IMEM and DMEM, the two fixed-size word arrays the CPU's bus traits see.

use vm22_core::{Bus, MEMORY_SIZE};

/// Read-only instruction memory: 4096 48-bit words, stored in `u64`s with
/// the top 16 bits always zero.
#[derive(Debug, Clone)]
pub struct Imem(pub [u64; MEMORY_SIZE]);

impl Imem {
    #[must_use]
    pub fn new() -> Self {
        Self([0; MEMORY_SIZE])
    }

    #[must_use]
    pub fn fetch(&self, pc: u16) -> u64 {
        self.0[pc as usize]
    }
}

impl Default for Imem {
    fn default() -> Self {
        Self::new()
    }
}

/// Data memory: 4096 signed 32-bit words, addressed by `lw`/`sw` and by the
/// disk controller's sector DMA.
#[derive(Debug, Clone)]
pub struct Dmem(pub [i32; MEMORY_SIZE]);

impl Dmem {
    #[must_use]
    pub fn new() -> Self {
        Self([0; MEMORY_SIZE])
    }
}

impl Default for Dmem {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for Dmem {
    fn read_word(&self, addr: u16) -> i32 {
        self.0[addr as usize]
    }

    fn write_word(&mut self, addr: u16, value: i32) {
        self.0[addr as usize] = value;
    }
}
