//! End-to-end assembly of small programs, in the style of the teacher's
//! fixture-driven integration tests (load a program, assert on the result).

#[test]
fn a_word_directive_and_a_branch_program_round_trips() {
    let source = "\
.word 4 7
START:
lw $v0 $zero $imm1 $zero 4 0
add $v0 $v0 $v0 $zero 0 0
beq $zero $zero $zero $imm1 0 0
halt $zero $zero $zero $zero 0 0
";
    let assembled = vm22_asm::assemble(source).unwrap();
    assert_eq!(assembled.dmem[4], 7);
    assert_eq!(assembled.instructions.len(), 4);

    // beq targets START (instruction index 0).
    let beq_word = assembled.instructions[2];
    assert_eq!(beq_word & 0xFFF, 0);
}

#[test]
fn unresolved_label_is_a_fatal_error() {
    let source = "jal $ra $zero $zero $zero 0 MISSING\n";
    assert!(vm22_asm::assemble(source).is_err());
}

#[test]
fn out_of_range_word_address_is_reported_and_other_lines_still_process() {
    let source = ".word 99999 1\nhalt $zero $zero $zero $zero 0 0\n";
    let assembled = vm22_asm::assemble(source).unwrap();
    assert_eq!(assembled.instructions.len(), 1);
    assert!(assembled.warnings[0].to_string().contains("out of bounds"));
}
