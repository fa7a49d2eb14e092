/// One grid square: ship presence plus hit state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    occupied: bool,
    hit: bool,
}

impl Cell {
    /// An empty, untouched cell.
    pub const fn new() -> Self {
        Cell {
            occupied: false,
            hit: false,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Record a guess against this cell. Repeated calls are harmless.
    pub fn mark_hit(&mut self) {
        self.hit = true;
    }

    // Only reachable through `BoardSetup`, before play starts.
    pub(crate) fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }

    /// Occupied and not yet hit.
    pub fn is_afloat(&self) -> bool {
        self.occupied && !self.hit
    }

    /// Display marker for this cell.
    pub fn marker(&self, reveal_ships: bool) -> char {
        match (self.hit, self.occupied) {
            (true, true) => 'H',
            (true, false) => 'X',
            (false, true) if reveal_ships => 'S',
            _ => '~',
        }
    }
}
