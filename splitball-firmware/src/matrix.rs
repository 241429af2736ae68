/// A switch position in the key matrix and whether it is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanKey {
    row: u8,
    col: u8,
}
impl ScanKey {
    pub const fn new(row: u8, col: u8, is_down: bool) -> Self {
        Self {
            row: row | if is_down { 0x80 } else { 0 },
            col,
        }
    }

    pub fn row(&self) -> usize {
        (self.row & 0x7f) as usize
    }

    pub fn column(&self) -> usize {
        self.col as usize
    }

    pub fn is_down(&self) -> bool {
        self.row & 0x80 == 0x80
    }

    /// The same state at another position.
    pub fn moved_to(&self, pos: KeyPos) -> Self {
        Self::new(pos.row, pos.col, self.is_down())
    }

    pub fn pos(&self) -> KeyPos {
        KeyPos::new(self.row & 0x7f, self.col)
    }
}

/// A matrix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPos {
    pub row: u8,
    pub col: u8,
}
impl KeyPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// A key event as handed to [crate::Keyboard::process_record].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyRecord {
    pub key: ScanKey,
    /// in milliseconds
    pub time: u64,
}
impl KeyRecord {
    pub fn new(key: ScanKey, time: u64) -> Self {
        Self { key, time }
    }

    pub fn pressed(&self) -> bool {
        self.key.is_down()
    }
}

#[cfg(test)]
#[path = "matrix_test.rs"]
mod test;
