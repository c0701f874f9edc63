/// What the agent sees: its own cell and the terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Observation {
    pub cell: usize,
    pub terminal: usize,
}

impl Observation {
    /// Packs both cells into one number, `cell * 10^digits + terminal`.
    ///
    /// `digits` should be [`GridTopology::digits`](grid::GridTopology::digits)
    /// so that every terminal index fits below `10^digits`. Returns `None`
    /// if the packed value overflows a `u64`.
    #[must_use]
    pub fn encode(&self, digits: u32) -> Option<u64> {
        let cell = u64::try_from(self.cell).ok()?;
        let terminal = u64::try_from(self.terminal).ok()?;
        10u64.checked_pow(digits)?.checked_mul(cell)?.checked_add(terminal)
    }
}
