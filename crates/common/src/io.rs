use std::collections::VecDeque;


/// The read/write channel the interpreters run against: reads pop the
/// front of the input queue, writes append to the output buffer.
#[derive(Debug, Default)]
pub struct IoBuffer {
    input: VecDeque<i32>,
    output: Vec<i32>,
}

impl IoBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: Vec<i32>) -> Self {
        Self { input: input.into(), output: vec![] }
    }

    pub fn read(&mut self) -> Option<i32> {
        self.input.pop_front()
    }

    pub fn write(&mut self, value: i32) {
        self.output.push(value);
    }

    pub fn output(&self) -> &[i32] {
        &self.output
    }
}
