use crate::matrix::{KeyPos, ScanKey};

/// For each matrix position, the position of its mirror image on the other half.
pub type HandSwapTable<const ROWS: usize, const COLS: usize> = [[KeyPos; COLS]; ROWS];

/// Hand-swap state for a keyboard with a [HandSwapTable].
///
/// A key remembers whether it went down while swapped so releasing it after swap is switched off
/// still releases the position that was pressed.
pub struct HandSwap<'t, const ROWS: usize, const COLS: usize> {
    table: Option<&'t HandSwapTable<ROWS, COLS>>,
    enabled: bool,
    swapped_down: [[bool; COLS]; ROWS],
}

impl<'t, const ROWS: usize, const COLS: usize> HandSwap<'t, ROWS, COLS> {
    pub const fn new(table: Option<&'t HandSwapTable<ROWS, COLS>>) -> Self {
        Self {
            table,
            enabled: false,
            swapped_down: [[false; COLS]; ROWS],
        }
    }

    pub fn is_supported(&self) -> bool {
        self.table.is_some()
    }

    pub fn is_on(&self) -> bool {
        self.enabled
    }

    pub fn set(&mut self, enable: bool) {
        if enable && !self.is_supported() {
            crate::debug!("hand swap: no table");
        }
        self.enabled = enable && self.is_supported();
    }

    pub fn toggle(&mut self) {
        self.set(!self.enabled);
    }

    /// Map a switch change to the position the keymap should see.
    pub fn swap_key(&mut self, key: ScanKey) -> ScanKey {
        let Some(table) = self.table else {
            return key;
        };
        let pos = key.pos();
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= ROWS || col >= COLS {
            crate::warn!("hand swap: key out of matrix {:?}", (row, col));
            return key;
        }
        let swapped = if key.is_down() {
            self.swapped_down[row][col] = self.enabled;
            self.enabled
        } else {
            core::mem::replace(&mut self.swapped_down[row][col], false)
        };
        if swapped {
            key.moved_to(table[row][col])
        } else {
            key
        }
    }
}

/// Check every table entry is inside the matrix and the table is its own inverse.
pub fn is_valid_table<const ROWS: usize, const COLS: usize>(
    table: &HandSwapTable<ROWS, COLS>,
) -> bool {
    table.iter().enumerate().all(|(row, cols)| {
        cols.iter().enumerate().all(|(col, to)| {
            let (r, c) = (to.row as usize, to.col as usize);
            r < ROWS && c < COLS && table[r][c] == KeyPos::new(row as u8, col as u8)
        })
    })
}

#[cfg(test)]
#[path = "hand_swap_test.rs"]
mod test;
