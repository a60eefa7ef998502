use std::fmt::{Display, Formatter, Write};

use anyhow::Result;
use graupel_common::bug_report;


/// The fixed register file, in backend index order. Indices 0..N_REGS hold
/// symbolic-stack values; %eax and %edx are scratch for binary ops and
/// idiv; %ebp/%esp belong to the frame and never enter allocation.
pub const REGISTERS: [&str; 8] = ["%ebx", "%ecx", "%esi", "%edi", "%eax", "%edx", "%ebp", "%esp"];

/// Registers freely usable by the symbolic stack
pub const N_REGS: usize = 3;

pub const EAX: Operand = Operand::Reg(4);
pub const EDX: Operand = Operand::Reg(5);
pub const EBP: Operand = Operand::Reg(6);
pub const ESP: Operand = Operand::Reg(7);

/// A location (or literal) an instruction operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Hard register, by index into REGISTERS
    Reg(usize),
    /// n-th spill slot, addressed downward from %ebp
    Slot(usize),
    /// Named memory cell (a global)
    Mem(String),
    /// Immediate literal
    Imm(i32),
}

impl Operand {
    pub fn is_register(&self) -> bool {
        matches!(self, Operand::Reg(_))
    }

    pub fn is_memory(&self) -> bool {
        matches!(self, Operand::Slot(_) | Operand::Mem(_))
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Reg(index) => {
                match REGISTERS.get(*index) {
                    Some(name) => write!(f, "{}", name),
                    None => bug_report!("Register index {} is outside the register file", index),
                }
            }
            Operand::Slot(index) => write!(f, "-{}(%ebp)", (index + 1) * 4),
            Operand::Mem(name) => write!(f, "{}", name),
            Operand::Imm(value) => write!(f, "${}", value),
        }
    }
}

/// Two-operand ALU operations, AT&T `l`-suffixed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
    And,
    Or,
    Xor,
    Cmp,
}

impl AluOp {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            AluOp::Add => "addl",
            AluOp::Sub => "subl",
            AluOp::Mul => "imull",
            AluOp::And => "andl",
            AluOp::Or => "orl",
            AluOp::Xor => "xorl",
            AluOp::Cmp => "cmpl",
        }
    }
}

/// One emitted x86 instruction. `Meta` carries raw assembly text (section
/// directives, labels, comments, data lines) injected verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Mov(Operand, Operand),
    Binop(AluOp, Operand, Operand),
    IDiv(Operand),
    Cltd,
    Set(&'static str, &'static str),
    Push(Operand),
    Pop(Operand),
    Call(String),
    Ret,
    Meta(String),
}

pub struct AsmWriter<W> {
    _phantom: std::marker::PhantomData<W>,
}

impl<W> AsmWriter<W> where W: Write {
    pub fn write_program(writer: &mut W, instructions: &[Instruction]) -> Result<()> {
        for instruction in instructions {
            Self::write_instruction(writer, instruction)?;
        }

        Ok(())
    }

    /// One line per instruction: leading TAB, operands joined by `,\t`,
    /// trailing newline. `Meta` text goes out untouched.
    pub fn write_instruction(writer: &mut W, instruction: &Instruction) -> Result<()> {
        match instruction {
            Instruction::Mov(src, dst) => writeln!(writer, "\tmovl\t{},\t{}", src, dst)?,
            Instruction::Binop(op, src, dst) => writeln!(writer, "\t{}\t{},\t{}", op.mnemonic(), src, dst)?,
            Instruction::IDiv(src) => writeln!(writer, "\tidivl\t{}", src)?,
            Instruction::Cltd => writeln!(writer, "\tcltd")?,
            Instruction::Set(suffix, subreg) => writeln!(writer, "\tset{}\t{}", suffix, subreg)?,
            Instruction::Push(src) => writeln!(writer, "\tpushl\t{}", src)?,
            Instruction::Pop(dst) => writeln!(writer, "\tpopl\t{}", dst)?,
            Instruction::Call(name) => writeln!(writer, "\tcall\t{}", name)?,
            Instruction::Ret => writeln!(writer, "\tret")?,
            Instruction::Meta(text) => write!(writer, "{}", text)?,
        }

        Ok(())
    }
}
