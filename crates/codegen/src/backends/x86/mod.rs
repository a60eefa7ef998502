use anyhow::Result;
use graupel_front::ast::BinaryOpKind;
use graupel_middle::ir::sm::writer::SMWriter;
use graupel_middle::ir::sm::{SmInstruction, SmProgram};

pub mod environment;
pub mod instruction;

use self::environment::Environment;
use self::instruction::{AluOp, AsmWriter, Instruction, Operand, EAX, EBP, EDX, ESP};


/// Lowers a stack-machine program to a 32-bit x86 translation unit in AT&T
/// syntax. The unit defines `main`, keeps every source variable as a
/// zero-initialised word in `.data`, and leans on two external runtime
/// symbols: `Lread` returns an integer in %eax, `Lwrite` takes one cdecl
/// argument.
pub struct X86Codegen {
    instructions: Vec<Instruction>,
}

impl X86Codegen {
    pub fn new() -> Self {
        Self { instructions: Vec::new() }
    }

    /// Folds the opcode sequence through a fresh environment, then wraps
    /// the emitted body with the section headers, prologue and epilogue.
    pub fn generate(&mut self, program: &SmProgram) -> Result<()> {
        let mut body = Vec::new();
        let mut env = Environment::new();

        for instruction in program.iter() {
            env = self.compile_instruction(env, &mut body, instruction)?;
        }

        tracing::debug!(
            "Generated {} instructions for {} opcodes, {} spill slots",
            body.len(), program.len(), env.stack_size()
        );

        self.assemble_unit(&env, body);

        Ok(())
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn asm_output(&self) -> Result<String> {
        let mut output = String::new();
        AsmWriter::write_program(&mut output, &self.instructions)?;

        Ok(output)
    }

    /// Emits the x86 sequence for one opcode, prefixed by a `#` comment
    /// carrying the opcode's textual form
    fn compile_instruction(&self, env: Environment, code: &mut Vec<Instruction>, instruction: &SmInstruction) -> Result<Environment> {
        let mut comment = String::from("# ");
        SMWriter::write_instruction(&mut comment, instruction)?;
        comment.push('\n');
        code.push(Instruction::Meta(comment));

        let env = match instruction {
            SmInstruction::Read => {
                let (location, env) = env.allocate();

                code.push(Instruction::Call("Lread".to_string()));
                code.push(Instruction::Mov(EAX, location));

                env
            }
            SmInstruction::Write => {
                let (location, env) = env.pop();

                code.push(Instruction::Push(location));
                code.push(Instruction::Call("Lwrite".to_string()));
                // the popped value is a discard: cdecl argument cleanup
                code.push(Instruction::Pop(EAX));

                env
            }
            SmInstruction::Const(value) => {
                let (location, env) = env.allocate();
                Self::mov(code, Operand::Imm(*value), location);

                env
            }
            SmInstruction::Load(name) => {
                let env = env.add_global(name);
                let (location, env) = env.allocate();
                Self::mov(code, env.loc(name), location);

                env
            }
            SmInstruction::Store(name) => {
                let env = env.add_global(name);
                let (location, env) = env.pop();
                Self::mov(code, location, env.loc(name));

                env
            }
            SmInstruction::Binary(op) => {
                // right operand is the old top; the result reuses the left
                // operand's storage
                let (right, left, env) = env.pop2();
                Self::compile_binary_op(code, *op, &right, &left);

                env.push(left)
            }
        };

        Ok(env)
    }

    fn compile_binary_op(code: &mut Vec<Instruction>, op: BinaryOpKind, a: &Operand, b: &Operand) {
        match op {
            BinaryOpKind::Plus => Self::compile_op(code, AluOp::Add, a, b),
            BinaryOpKind::Minus => Self::compile_op(code, AluOp::Sub, a, b),
            BinaryOpKind::Multiply => Self::compile_op(code, AluOp::Mul, a, b),
            BinaryOpKind::And => Self::compile_op(code, AluOp::And, a, b),
            BinaryOpKind::Or => Self::compile_op(code, AluOp::Or, a, b),
            BinaryOpKind::Divide => Self::compile_div_op(code, EAX, a, b),
            BinaryOpKind::Modulo => Self::compile_div_op(code, EDX, a, b),
            BinaryOpKind::LessThan => Self::compile_compare(code, "l", a, b),
            BinaryOpKind::LessThanOrEqual => Self::compile_compare(code, "le", a, b),
            BinaryOpKind::Equals => Self::compile_compare(code, "e", a, b),
            BinaryOpKind::NotEquals => Self::compile_compare(code, "ne", a, b),
            BinaryOpKind::GreaterThanOrEqual => Self::compile_compare(code, "ge", a, b),
            BinaryOpKind::GreaterThan => Self::compile_compare(code, "g", a, b),
        }
    }

    /// x86 mov cannot take two memory operands; split through %eax.
    /// A same-source-and-destination mov still goes out as-is: no peephole.
    fn mov(code: &mut Vec<Instruction>, from: Operand, to: Operand) {
        if from.is_memory() && to.is_memory() {
            code.push(Instruction::Mov(from, EAX));
            code.push(Instruction::Mov(EAX, to));
        } else {
            code.push(Instruction::Mov(from, to));
        }
    }

    /// Two-operand ALU op; the destination has to be a register, so a
    /// memory destination round-trips through %eax
    fn compile_op(code: &mut Vec<Instruction>, op: AluOp, a: &Operand, b: &Operand) {
        if b.is_register() {
            code.push(Instruction::Binop(op, a.clone(), b.clone()));
        } else {
            Self::mov(code, b.clone(), EAX);
            code.push(Instruction::Binop(op, a.clone(), EAX));
            Self::mov(code, EAX, b.clone());
        }
    }

    /// cltd sign-extends %eax into %edx:%eax; idiv leaves the quotient in
    /// %eax and the remainder in %edx, and `result_reg` picks one of them.
    /// The divisor can never be an immediate: symbolic-stack entries all
    /// come out of `allocate`, which only hands out registers and slots.
    fn compile_div_op(code: &mut Vec<Instruction>, result_reg: Operand, a: &Operand, b: &Operand) {
        debug_assert!(!matches!(a, Operand::Imm(_)), "idiv cannot take an immediate divisor");

        Self::mov(code, b.clone(), EAX);
        code.push(Instruction::Cltd);
        code.push(Instruction::IDiv(a.clone()));
        Self::mov(code, result_reg, b.clone());
    }

    /// setcc writes only %al; the mov that follows copies the whole %eax,
    /// upper bits included, so consumers treat any nonzero value as true
    fn compile_compare(code: &mut Vec<Instruction>, suffix: &'static str, a: &Operand, b: &Operand) {
        Self::compile_op(code, AluOp::Cmp, a, b);
        code.push(Instruction::Set(suffix, "%al"));
        Self::mov(code, EAX, b.clone());
    }

    fn assemble_unit(&mut self, env: &Environment, body: Vec<Instruction>) {
        self.instructions.push(Instruction::Meta("\t.global\tmain\n".to_string()));

        self.instructions.push(Instruction::Meta("\t.data\n".to_string()));
        for global in env.globals() {
            self.instructions.push(Instruction::Meta(format!("{}:\t.int\t0\n", global)));
        }

        self.instructions.push(Instruction::Meta("\t.text\n".to_string()));
        self.instructions.push(Instruction::Meta("main:\n".to_string()));

        self.instructions.push(Instruction::Push(EBP));
        self.instructions.push(Instruction::Mov(ESP, EBP));
        self.instructions.push(Instruction::Binop(AluOp::Sub, Operand::Imm(4 * env.stack_size() as i32), ESP));

        self.instructions.extend(body);

        self.instructions.push(Instruction::Mov(EBP, ESP));
        self.instructions.push(Instruction::Pop(EBP));
        self.instructions.push(Instruction::Binop(AluOp::Xor, EAX, EAX));
        self.instructions.push(Instruction::Ret);
    }
}
