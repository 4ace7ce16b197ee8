//! The 22-instruction opcode set.

/// Number of valid opcodes (0..=21).
pub const OPCODE_COUNT: u8 = 22;

/// One of the 22 instructions the execute unit understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    Add = 0,
    Sub = 1,
    Mac = 2,
    And = 3,
    Or = 4,
    Xor = 5,
    Sll = 6,
    Sra = 7,
    Srl = 8,
    Beq = 9,
    Bne = 10,
    Blt = 11,
    Bgt = 12,
    Ble = 13,
    Bge = 14,
    Jal = 15,
    Lw = 16,
    Sw = 17,
    Reti = 18,
    In = 19,
    Out = 20,
    Halt = 21,
}

impl Opcode {
    /// Decodes the opcode field of an instruction word.
    ///
    /// Returns `None` for the reference design's invalid range (anything
    /// outside 0..=21), which the caller treats as a fatal decode error.
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        use Opcode::*;
        Some(match value {
            0 => Add,
            1 => Sub,
            2 => Mac,
            3 => And,
            4 => Or,
            5 => Xor,
            6 => Sll,
            7 => Sra,
            8 => Srl,
            9 => Beq,
            10 => Bne,
            11 => Blt,
            12 => Bgt,
            13 => Ble,
            14 => Bge,
            15 => Jal,
            16 => Lw,
            17 => Sw,
            18 => Reti,
            19 => In,
            20 => Out,
            21 => Halt,
            _ => return None,
        })
    }

    #[must_use]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parses an assembler mnemonic into its opcode.
    #[must_use]
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        use Opcode::*;
        Some(match mnemonic {
            "add" => Add,
            "sub" => Sub,
            "mac" => Mac,
            "and" => And,
            "or" => Or,
            "xor" => Xor,
            "sll" => Sll,
            "sra" => Sra,
            "srl" => Srl,
            "beq" => Beq,
            "bne" => Bne,
            "blt" => Blt,
            "bgt" => Bgt,
            "ble" => Ble,
            "bge" => Bge,
            "jal" => Jal,
            "lw" => Lw,
            "sw" => Sw,
            "reti" => Reti,
            "in" => In,
            "out" => Out,
            "halt" => Halt,
            _ => return None,
        })
    }

    #[must_use]
    pub fn mnemonic(self) -> &'static str {
        use Opcode::*;
        match self {
            Add => "add",
            Sub => "sub",
            Mac => "mac",
            And => "and",
            Or => "or",
            Xor => "xor",
            Sll => "sll",
            Sra => "sra",
            Srl => "srl",
            Beq => "beq",
            Bne => "bne",
            Blt => "blt",
            Bgt => "bgt",
            Ble => "ble",
            Bge => "bge",
            Jal => "jal",
            Lw => "lw",
            Sw => "sw",
            Reti => "reti",
            In => "in",
            Out => "out",
            Halt => "halt",
        }
    }
}
