//! Parses the simulator's four text input files into typed values. Short
//! files are zero-filled, matching the reference reader stopping at EOF
//! with its destination arrays already zero-initialized.

use vm22_core::{DISK_SECTORS, MEMORY_SIZE, SECTOR_WORDS};

pub fn parse_imem(text: &str) -> [u64; MEMORY_SIZE] {
    let mut imem = [0u64; MEMORY_SIZE];
    for (slot, token) in imem.iter_mut().zip(text.split_whitespace()) {
        *slot = u64::from_str_radix(token, 16).unwrap_or(0);
    }
    imem
}

pub fn parse_dmem(text: &str) -> [i32; MEMORY_SIZE] {
    let mut dmem = [0i32; MEMORY_SIZE];
    for (slot, token) in dmem.iter_mut().zip(text.split_whitespace()) {
        *slot = u32::from_str_radix(token, 16).unwrap_or(0) as i32;
    }
    dmem
}

pub fn parse_disk(text: &str) -> [[u32; SECTOR_WORDS]; DISK_SECTORS] {
    let mut disk = [[0u32; SECTOR_WORDS]; DISK_SECTORS];
    let mut tokens = text.split_whitespace();
    for sector in &mut disk {
        for word in sector.iter_mut() {
            let Some(token) = tokens.next() else {
                return disk;
            };
            *word = u32::from_str_radix(token, 16).unwrap_or(0);
        }
    }
    disk
}

pub fn parse_irq2(text: &str) -> Vec<u64> {
    text.split_whitespace()
        .filter_map(|token| token.parse::<u64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_imem_file_is_zero_filled() {
        let imem = parse_imem("abc\ndef\n");
        assert_eq!(imem[0], 0xabc);
        assert_eq!(imem[1], 0xdef);
        assert_eq!(imem[2], 0);
    }

    #[test]
    fn dmem_parses_signed_overflow_as_bit_pattern() {
        let dmem = parse_dmem("ffffffff\n");
        assert_eq!(dmem[0], -1);
    }

    #[test]
    fn disk_fills_row_major_and_leaves_the_rest_zero() {
        let disk = parse_disk("1 2 3\n");
        assert_eq!(disk[0][0], 1);
        assert_eq!(disk[0][1], 2);
        assert_eq!(disk[0][2], 3);
        assert_eq!(disk[0][3], 0);
        assert_eq!(disk[1][0], 0);
    }

    #[test]
    fn irq2_schedule_parses_decimal_cycles() {
        assert_eq!(parse_irq2("10\n25\n100\n"), vec![10, 25, 100]);
    }
}
