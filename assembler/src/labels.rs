//! Pass 1: collect `LABEL:` declarations and their instruction index.

use std::collections::HashMap;

use crate::error::{AssembleError, ErrorKind};

pub const MAX_LABEL_COUNT: usize = 100;

pub fn collect(source: &str) -> Result<HashMap<String, u32>, AssembleError> {
    let mut labels = HashMap::new();
    let mut instruction_index: u32 = 0;

    for (lineno, raw_line) in source.lines().enumerate() {
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some((name, _rest)) = line.split_once(':') {
            if labels.len() >= MAX_LABEL_COUNT {
                return Err(AssembleError {
                    line: lineno + 1,
                    kind: ErrorKind::TooManyLabels,
                });
            }
            labels.insert(name.trim().to_string(), instruction_index);
        } else if !line.contains(".word") {
            instruction_index += 1;
        }
    }

    Ok(labels)
}

pub fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_do_not_consume_an_instruction_slot() {
        let source = "LOOP:\nadd $v0 $zero $zero $zero 0 0\nbeq $zero $zero $v0 $zero 0 0\n";
        let labels = collect(source).unwrap();
        assert_eq!(labels["LOOP"], 0);
    }

    #[test]
    fn multiple_labels_can_point_to_the_same_instruction() {
        let source = "A:\nB:\nhalt $zero $zero $zero $zero 0 0\n";
        let labels = collect(source).unwrap();
        assert_eq!(labels["A"], 0);
        assert_eq!(labels["B"], 0);
    }

    #[test]
    fn word_directives_do_not_advance_the_instruction_index() {
        let source = ".word 0 5\nSTART:\nhalt $zero $zero $zero $zero 0 0\n";
        let labels = collect(source).unwrap();
        assert_eq!(labels["START"], 0);
    }

    #[test]
    fn comments_are_stripped_before_scanning() {
        let source = "# a comment\nSTART: # another\nhalt $zero $zero $zero $zero 0 0\n";
        let labels = collect(source).unwrap();
        assert_eq!(labels["START"], 0);
    }
}
