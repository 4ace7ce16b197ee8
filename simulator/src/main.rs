//! `sim imemin dmemin diskin irq2in dmemout regout trace hwregtrace cycles
//! leds display7seg diskout monitor_txt monitor_yuv`

use std::fs;

use machine_vm22::{Disk, Imem, Machine};

mod loader;
mod writer;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 15 {
        eprintln!(
            "Usage: {} imemin dmemin diskin irq2in dmemout regout trace hwregtrace cycles leds display7seg diskout monitor_txt monitor_yuv",
            args[0]
        );
        std::process::exit(1);
    }

    let imem_text = read_or_exit(&args[1]);
    let dmem_text = read_or_exit(&args[2]);
    let disk_text = read_or_exit(&args[3]);
    let irq2_text = read_or_exit(&args[4]);

    let imem = Imem(loader::parse_imem(&imem_text));
    let dmem = loader::parse_dmem(&dmem_text);
    let disk = Disk::new(loader::parse_disk(&disk_text));
    let irq2_schedule = loader::parse_irq2(&irq2_text);

    let mut machine = Machine::new(imem, machine_vm22::Dmem(dmem), disk, irq2_schedule);

    if let Err(invalid) = machine.run_to_completion() {
        eprintln!("Error: invalid opcode {} at pc {}", invalid.0, machine.pc());
        std::process::exit(1);
    }

    write_or_exit(&args[5], writer::dmemout(&machine));
    write_or_exit(&args[6], writer::regout(&machine));
    write_or_exit(&args[7], writer::trace(&machine));
    write_or_exit(&args[8], writer::hwregtrace(&machine));
    write_or_exit(&args[9], writer::cycles(&machine));
    write_or_exit(&args[10], writer::leds(&machine));
    write_or_exit(&args[11], writer::display7seg(&machine));
    write_or_exit(&args[12], writer::diskout(&machine));
    write_or_exit(&args[13], writer::monitor_txt(&machine));
    write_bytes_or_exit(&args[14], writer::monitor_yuv(&machine));
}

fn read_or_exit(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error opening file '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_or_exit(path: &str, contents: String) {
    if let Err(e) = fs::write(path, contents) {
        eprintln!("Error opening file '{path}': {e}");
        std::process::exit(1);
    }
}

fn write_bytes_or_exit(path: &str, contents: Vec<u8>) {
    if let Err(e) = fs::write(path, contents) {
        eprintln!("Error opening file '{path}': {e}");
        std::process::exit(1);
    }
}
