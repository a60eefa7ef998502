use std::fmt::Write;

use anyhow::Result;

use crate::ir::sm::{SmInstruction, SmProgram};


pub struct SMWriter<W> {
    _phantom: std::marker::PhantomData<W>,
}

impl<W> SMWriter<W> where W: Write {
    pub fn write_program(writer: &mut W, program: &SmProgram) -> Result<()> {
        for instruction in program.iter() {
            Self::write_instruction(writer, instruction)?;
            writeln!(writer)?;
        }

        Ok(())
    }

    /// One instruction in its canonical textual form, no trailing newline
    pub fn write_instruction(writer: &mut W, instruction: &SmInstruction) -> Result<()> {
        match instruction {
            SmInstruction::Read => write!(writer, "READ")?,
            SmInstruction::Write => write!(writer, "WRITE")?,
            SmInstruction::Const(value) => write!(writer, "CONST {}", value)?,
            SmInstruction::Load(name) => write!(writer, "LD {}", name)?,
            SmInstruction::Store(name) => write!(writer, "ST {}", name)?,
            SmInstruction::Binary(op) => write!(writer, "BINOP {}", op)?,
        }

        Ok(())
    }
}
