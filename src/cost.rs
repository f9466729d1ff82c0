use crate::moves::Move;

/// Weight charged for each direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CostTable {
    up: u32,
    down: u32,
    left: u32,
    right: u32,
}

impl CostTable {
    pub const UNIT: CostTable = CostTable::new(1, 1, 1, 1);

    /// Moving the blank up costs five times as much as any other direction.
    pub const UP_HEAVY: CostTable = CostTable::new(5, 1, 1, 1);

    pub const fn new(up: u32, down: u32, left: u32, right: u32) -> CostTable {
        CostTable {
            up,
            down,
            left,
            right,
        }
    }

    pub const fn cost(&self, mv: Move) -> u32 {
        match mv {
            Move::Up => self.up,
            Move::Down => self.down,
            Move::Left => self.left,
            Move::Right => self.right,
        }
    }

    pub fn with(mut self, mv: Move, cost: u32) -> CostTable {
        let slot = match mv {
            Move::Up => &mut self.up,
            Move::Down => &mut self.down,
            Move::Left => &mut self.left,
            Move::Right => &mut self.right,
        };
        *slot = cost;
        self
    }
}

impl Default for CostTable {
    fn default() -> Self {
        CostTable::UNIT
    }
}
