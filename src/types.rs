//! Instruction representation and eBPF opcode constants
//!
//! The decoder that turns raw bytes into [`BpfInsn`] values lives outside
//! this crate and is responsible for rejecting malformed encodings and
//! register numbers outside 0..[`MAX_BPF_REG`]. Everything here assumes
//! well-formed instructions.

/// A single decoded eBPF instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BpfInsn {
    /// Opcode byte
    pub code: u8,
    /// Destination register (0-10)
    pub dst_reg: u8,
    /// Source register (0-10)
    pub src_reg: u8,
    /// Signed offset
    pub off: i16,
    /// Immediate value
    pub imm: i32,
}

impl BpfInsn {
    /// Create a new instruction
    pub fn new(code: u8, dst_reg: u8, src_reg: u8, off: i16, imm: i32) -> Self {
        Self {
            code,
            dst_reg,
            src_reg,
            off,
            imm,
        }
    }

    /// Get instruction class (low 3 bits of the opcode)
    pub fn class(&self) -> u8 {
        self.code & 0x07
    }

    /// Get instruction access size
    pub fn size(&self) -> u8 {
        self.code & 0x18
    }

    /// Get instruction mode
    pub fn mode(&self) -> u8 {
        self.code & 0xe0
    }

    /// Get the ALU/jump operation code (high 4 bits of the opcode)
    pub fn op(&self) -> u8 {
        self.code & 0xf0
    }

    /// Check if this instruction is in one of the two arithmetic classes
    pub fn is_alu(&self) -> bool {
        matches!(self.class(), BPF_ALU | BPF_ALU64)
    }

    /// Check if this is a move (either width, either source form)
    pub fn is_mov(&self) -> bool {
        self.is_alu() && self.op() == BPF_MOV
    }

    /// Check if this is the wide immediate load (`LDDW`)
    pub fn is_lddw(&self) -> bool {
        self.code == (BPF_LD | BPF_IMM | BPF_DW)
    }

    /// Check if this is a helper call
    pub fn is_call(&self) -> bool {
        self.code == (BPF_JMP | BPF_CALL)
    }
}

/// BPF instruction class: load from immediate
pub const BPF_LD: u8 = 0x00;
/// BPF instruction class: load from register
pub const BPF_LDX: u8 = 0x01;
/// BPF instruction class: store immediate
pub const BPF_ST: u8 = 0x02;
/// BPF instruction class: store register
pub const BPF_STX: u8 = 0x03;
/// BPF instruction class: 32-bit ALU operation
pub const BPF_ALU: u8 = 0x04;
/// BPF instruction class: 64-bit jump
pub const BPF_JMP: u8 = 0x05;
/// BPF instruction class: 32-bit jump
pub const BPF_JMP32: u8 = 0x06;
/// BPF instruction class: 64-bit ALU operation
pub const BPF_ALU64: u8 = 0x07;

/// BPF size: 32-bit word
pub const BPF_W: u8 = 0x00;
/// BPF size: 16-bit half-word
pub const BPF_H: u8 = 0x08;
/// BPF size: 8-bit byte
pub const BPF_B: u8 = 0x10;
/// BPF size: 64-bit double-word
pub const BPF_DW: u8 = 0x18;

/// BPF mode: immediate value
pub const BPF_IMM: u8 = 0x00;
/// BPF mode: memory access
pub const BPF_MEM: u8 = 0x60;

/// BPF ALU op: addition
pub const BPF_ADD: u8 = 0x00;
/// BPF ALU op: subtraction
pub const BPF_SUB: u8 = 0x10;
/// BPF ALU op: multiplication
pub const BPF_MUL: u8 = 0x20;
/// BPF ALU op: division
pub const BPF_DIV: u8 = 0x30;
/// BPF ALU op: bitwise OR
pub const BPF_OR: u8 = 0x40;
/// BPF ALU op: bitwise AND
pub const BPF_AND: u8 = 0x50;
/// BPF ALU op: left shift
pub const BPF_LSH: u8 = 0x60;
/// BPF ALU op: right shift (logical)
pub const BPF_RSH: u8 = 0x70;
/// BPF ALU op: negation
pub const BPF_NEG: u8 = 0x80;
/// BPF ALU op: modulo
pub const BPF_MOD: u8 = 0x90;
/// BPF ALU op: bitwise XOR
pub const BPF_XOR: u8 = 0xa0;
/// BPF ALU op: move
pub const BPF_MOV: u8 = 0xb0;
/// BPF ALU op: arithmetic right shift
pub const BPF_ARSH: u8 = 0xc0;
/// BPF ALU op: endianness conversion
pub const BPF_END: u8 = 0xd0;

/// BPF jump op: jump if equal
pub const BPF_JEQ: u8 = 0x10;
/// BPF jump op: jump if not equal
pub const BPF_JNE: u8 = 0x50;
/// BPF op: function call
pub const BPF_CALL: u8 = 0x80;

/// BPF source: immediate constant
pub const BPF_K: u8 = 0x00;
/// BPF source: register
pub const BPF_X: u8 = 0x08;

/// Return value register
pub const BPF_REG_0: u8 = 0;
/// First argument register; holds the context pointer at program entry
pub const BPF_REG_1: u8 = 1;
/// Last caller-saved argument register
pub const BPF_REG_5: u8 = 5;
/// Frame pointer (read-only, points just past the end of the stack frame)
pub const BPF_REG_FP: u8 = 10;
/// Number of registers
pub const MAX_BPF_REG: usize = 11;

/// Stack space available below the frame pointer, in bytes
pub const MAX_BPF_STACK: i32 = 512;
/// Size of the context region reachable through register 1, in bytes
pub const CTX_SIZE: i32 = 4096;
