use graupel_common::bug_report;

use super::instruction::{Operand, N_REGS};


/// Compile-time model of the stack machine's evaluation stack: each entry
/// is the register or spill slot where that stack item lives at runtime.
///
/// The environment is a persistent value: every mutator returns a fresh
/// environment and the code generator threads it through its fold by
/// shadowing. Only `Reg(i)` with `i < N_REGS` and `Slot(n)` ever appear on
/// the symbolic stack.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    stack: Vec<Operand>,
    slots_high: usize,
    globals: Vec<String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses where the next value pushed on the symbolic stack will live,
    /// following the current top: registers first, then spill slots. Also
    /// bumps the spill high-water mark when a slot is taken.
    pub fn allocate(&self) -> (Operand, Environment) {
        let (location, slots_in_use) = match self.stack.last() {
            None => (Operand::Reg(0), 0),
            Some(Operand::Slot(index)) => (Operand::Slot(index + 1), index + 2),
            Some(Operand::Reg(index)) if index + 1 < N_REGS => (Operand::Reg(index + 1), 0),
            Some(_) => (Operand::Slot(0), 1),
        };

        let mut env = self.clone();
        env.slots_high = env.slots_high.max(slots_in_use);
        env.stack.push(location.clone());

        (location, env)
    }

    /// Returns a temporary result to the symbolic stack without allocating
    pub fn push(&self, operand: Operand) -> Environment {
        let mut env = self.clone();
        env.stack.push(operand);

        env
    }

    pub fn pop(&self) -> (Operand, Environment) {
        let mut env = self.clone();

        match env.stack.pop() {
            Some(operand) => (operand, env),
            None => bug_report!("Symbolic stack underflow; the stack-machine program is malformed"),
        }
    }

    /// Removes the two topmost entries: the first returned operand is the
    /// old top (the right-hand operand), the second the one below it.
    pub fn pop2(&self) -> (Operand, Operand, Environment) {
        let (top, env) = self.pop();
        let (below, env) = env.pop();

        (top, below, env)
    }

    /// Records a referenced global, deduplicating. The emitted symbol is
    /// the `global_`-prefixed name; insertion order is the order the data
    /// section is rendered in.
    pub fn add_global(&self, name: &str) -> Environment {
        let symbol = format!("global_{}", name);
        let mut env = self.clone();

        if !env.globals.contains(&symbol) {
            env.globals.push(symbol);
        }

        env
    }

    pub fn loc(&self, name: &str) -> Operand {
        Operand::Mem(format!("global_{}", name))
    }

    pub fn globals(&self) -> &[String] {
        &self.globals
    }

    /// The number of spill slots the prologue must reserve: the maximum
    /// number simultaneously live at any point of the fold
    pub fn stack_size(&self) -> usize {
        self.slots_high
    }
}
