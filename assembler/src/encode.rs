//! Pass 2: re-scan the source, apply `.word` directives to the data image,
//! and encode each instruction line into a 48-bit word.

use std::collections::HashMap;

use vm22_core::{encode_fields, Fields, Opcode, MEMORY_SIZE};

use crate::error::{AssembleError, ErrorKind};
use crate::immediate::resolve;
use crate::labels::strip_comment;
use crate::registers;

#[derive(Debug)]
pub struct Assembled {
    pub instructions: Vec<u64>,
    pub dmem: [i32; MEMORY_SIZE],
    /// Non-fatal `.word` problems: reported, directive skipped, assembly
    /// continues.
    pub warnings: Vec<AssembleError>,
}

pub fn run(source: &str, labels: &HashMap<String, u32>) -> Result<Assembled, AssembleError> {
    let mut instructions = Vec::new();
    let mut dmem = [0i32; MEMORY_SIZE];
    let mut warnings = Vec::new();

    for (lineno, raw_line) in source.lines().enumerate() {
        let line_no = lineno + 1;
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        if line.contains(".word") {
            if let Err(e) = apply_word_directive(line, &mut dmem, line_no) {
                warnings.push(e);
            }
            continue;
        }

        if line.contains(':') {
            continue;
        }

        instructions.push(encode_instruction(line, labels, line_no)?);
    }

    Ok(Assembled {
        instructions,
        dmem,
        warnings,
    })
}

fn apply_word_directive(line: &str, dmem: &mut [i32; MEMORY_SIZE], line_no: usize) -> Result<(), AssembleError> {
    let rest = line.trim_start().strip_prefix(".word").unwrap_or(line).trim();
    let mut parts = rest.split_whitespace();
    let (Some(addr_tok), Some(value_tok)) = (parts.next(), parts.next()) else {
        return Err(AssembleError {
            line: line_no,
            kind: ErrorKind::InvalidWordDirective(line.to_string()),
        });
    };

    let addr = parse_number(addr_tok).ok_or_else(|| AssembleError {
        line: line_no,
        kind: ErrorKind::InvalidWordDirective(line.to_string()),
    })?;
    let value = parse_number(value_tok).ok_or_else(|| AssembleError {
        line: line_no,
        kind: ErrorKind::InvalidWordDirective(line.to_string()),
    })?;

    if addr < 0 || addr as usize >= MEMORY_SIZE {
        return Err(AssembleError {
            line: line_no,
            kind: ErrorKind::WordAddressOutOfRange(addr),
        });
    }

    dmem[addr as usize] = value as i32;
    Ok(())
}

fn parse_number(token: &str) -> Option<i64> {
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16).ok();
    }
    if let Some(hex) = token.strip_prefix("-0x").or_else(|| token.strip_prefix("-0X")) {
        return i64::from_str_radix(hex, 16).ok().map(|v: i64| -v);
    }
    token.parse::<i64>().ok()
}

fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect()
}

fn encode_instruction(
    line: &str,
    labels: &HashMap<String, u32>,
    line_no: usize,
) -> Result<u64, AssembleError> {
    let mut tokens = tokenize(line);
    if tokens.is_empty() || tokens.len() > 7 {
        return Err(AssembleError {
            line: line_no,
            kind: ErrorKind::MalformedInstruction(line.to_string()),
        });
    }
    // Trailing operand tokens missing from the line (typically imm1/imm2)
    // default to empty, matching the reference's zero-initialized operand
    // struct: an empty register name is still fatal, an empty immediate
    // resolves to 0.
    tokens.resize(7, "");
    let mnemonic = tokens[0];
    let rd = tokens[1];
    let rs = tokens[2];
    let rt = tokens[3];
    let rm = tokens[4];
    let imm1 = tokens[5];
    let imm2 = tokens[6];

    let opcode = Opcode::from_mnemonic(mnemonic).ok_or_else(|| AssembleError {
        line: line_no,
        kind: ErrorKind::UnknownMnemonic(mnemonic.to_string()),
    })?;

    let reg = |name: &str| {
        registers::lookup(name).ok_or_else(|| AssembleError {
            line: line_no,
            kind: ErrorKind::UnknownRegister(name.to_string()),
        })
    };

    let fields = Fields {
        opcode: opcode.as_u8(),
        rd: reg(rd)?,
        rs: reg(rs)?,
        rt: reg(rt)?,
        rm: reg(rm)?,
        imm1: (resolve(imm1, labels, line_no)? as u32 & 0xFFF) as u16,
        imm2: (resolve(imm2, labels, line_no)? as u32 & 0xFFF) as u16,
    };

    Ok(encode_fields(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn encodes_a_simple_add() {
        let labels = HashMap::new();
        let result = run(
            "add $v0 $zero $zero $zero 0 0\n",
            &labels,
        )
        .unwrap();
        assert_eq!(result.instructions.len(), 1);
        assert_eq!(result.instructions[0] >> 40, 0);
    }

    #[test]
    fn word_directive_sets_dmem_and_does_not_emit_an_instruction() {
        let labels = HashMap::new();
        let result = run(".word 0x10 0x2A\n", &labels).unwrap();
        assert!(result.instructions.is_empty());
        assert_eq!(result.dmem[0x10], 0x2A);
    }

    #[test]
    fn label_line_is_skipped_in_the_second_pass() {
        let labels = HashMap::new();
        let result = run("LOOP:\nhalt $zero $zero $zero $zero 0 0\n", &labels).unwrap();
        assert_eq!(result.instructions.len(), 1);
    }

    #[test]
    fn out_of_range_word_address_is_a_warning_not_a_fatal_error() {
        let labels = HashMap::new();
        let result = run(".word 5000 1\nhalt $zero $zero $zero $zero 0 0\n", &labels).unwrap();
        assert_eq!(result.instructions.len(), 1);
        assert!(matches!(
            result.warnings[0].kind,
            ErrorKind::WordAddressOutOfRange(5000)
        ));
    }

    #[test]
    fn unknown_mnemonic_is_reported() {
        let labels = HashMap::new();
        let err = run("nop $zero $zero $zero $zero 0 0\n", &labels).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownMnemonic(_)));
    }

    #[test]
    fn a_trailing_missing_immediate_defaults_to_zero() {
        let labels = HashMap::new();
        let result = run("add $v0 $zero $zero $zero 5\n", &labels).unwrap();
        assert_eq!(result.instructions.len(), 1);
        assert_eq!(result.instructions[0] & 0xFFF, 0); // imm2 defaults to 0
    }

    #[test]
    fn a_missing_register_is_still_fatal() {
        let labels = HashMap::new();
        let err = run("add $v0 $zero $zero\n", &labels).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownRegister(ref r) if r.is_empty()));
    }

    #[test]
    fn branch_target_resolves_a_forward_label() {
        let mut labels = HashMap::new();
        labels.insert("END".to_string(), 3);
        let result = run("beq $zero $zero $zero $zero 0 END\n", &labels).unwrap();
        let word = result.instructions[0];
        assert_eq!(word & 0xFFF, 3);
    }
}
