//! Resolves an immediate operand token: signed decimal, `0x...` hex, or a
//! label name resolved against the instruction index it was collected at.

use std::collections::HashMap;

use crate::error::{AssembleError, ErrorKind};

pub fn resolve(
    token: &str,
    labels: &HashMap<String, u32>,
    line: usize,
) -> Result<i32, AssembleError> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(0);
    }

    let first = token.as_bytes()[0];
    if first.is_ascii_digit() || first == b'-' || first == b'+' {
        if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
            return i32::from_str_radix(hex, 16).map_err(|_| AssembleError {
                line,
                kind: ErrorKind::InvalidImmediate(token.to_string()),
            });
        }
        return token.parse::<i32>().map_err(|_| AssembleError {
            line,
            kind: ErrorKind::InvalidImmediate(token.to_string()),
        });
    }

    labels.get(token).map(|&addr| addr as i32).ok_or_else(|| AssembleError {
        line,
        kind: ErrorKind::UndefinedLabel(token.to_string()),
    })
}
