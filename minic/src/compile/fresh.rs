use crate::tac::{Label, Operand};

/// Hands out `t0, t1, ..` and `L0, L1, ..` for one compilation.
#[derive(Debug, Default, Clone)]
pub struct Fresh {
    temp: usize,
    label: usize,
}

impl Fresh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn temp(&mut self) -> Operand {
        let idx = self.temp;
        self.temp += 1;
        Operand::Temp(idx)
    }

    pub fn label(&mut self) -> Label {
        let idx = self.label;
        self.label += 1;
        Label(format!("L{}", idx))
    }

    /// Number of temporaries handed out so far
    pub fn temps(&self) -> usize {
        self.temp
    }
}
