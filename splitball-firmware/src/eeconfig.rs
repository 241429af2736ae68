use embedded_storage::nor_flash::{self, NorFlash, ReadNorFlash};

const FORMAT_MAGIC_NUMBER: [u8; 4] = 0x5b1a_ee0cu32.to_be_bytes();
const FORMAT_VERSION: u8 = 1;

const BLOCK_LEN: usize = 16;
const VERSION_OFFSET: usize = 4;
const KB_OFFSET: usize = 8;
const USER_OFFSET: usize = 12;

#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EeconfigError {
    NotAligned,
    OutOfBounds,
    Unknown,
}

/// Persistent keyboard and user configuration words.
pub trait Eeconfig {
    /// Has [Self::initialize] ever been run on this storage.
    fn is_initialized(&mut self) -> Result<bool, EeconfigError>;
    /// Format the storage with both words zeroed.
    fn initialize(&mut self) -> Result<(), EeconfigError>;
    fn read_kb(&mut self) -> Result<u32, EeconfigError>;
    /// Store `value`; storage is only written when it differs from what is there.
    fn update_kb(&mut self, value: u32) -> Result<(), EeconfigError>;
    fn read_user(&mut self) -> Result<u32, EeconfigError>;
    fn update_user(&mut self, value: u32) -> Result<(), EeconfigError>;
}

/// [Eeconfig] kept in one erase sector of NOR flash starting at `BASE`.
///
/// Layout: `magic[4] version[1] reserved[3] kb[4 le] user[4 le]`.
pub struct FlashEeconfig<'d, F: NorFlash, const BASE: u32> {
    flash: &'d mut F,
}

const fn assert_params<const BASE: u32>(
    erase_size: usize,
    write_size: usize,
    read_size: usize,
) -> bool {
    assert!(BASE as usize % erase_size == 0);
    assert!(BLOCK_LEN <= erase_size);
    assert!(BLOCK_LEN % write_size == 0);
    assert!(BLOCK_LEN % read_size == 0);
    true
}

fn map_flash_error(err: impl nor_flash::NorFlashError) -> EeconfigError {
    match err.kind() {
        nor_flash::NorFlashErrorKind::NotAligned => EeconfigError::NotAligned,
        nor_flash::NorFlashErrorKind::OutOfBounds => EeconfigError::OutOfBounds,
        _ => EeconfigError::Unknown,
    }
}

impl<'d, F: NorFlash, const BASE: u32> FlashEeconfig<'d, F, BASE> {
    const OKAY: bool = assert_params::<BASE>(F::ERASE_SIZE, F::WRITE_SIZE, F::READ_SIZE);

    pub fn new(flash: &'d mut F) -> Self {
        assert!(Self::OKAY);
        Self { flash }
    }

    fn read_block(&mut self) -> Result<[u8; BLOCK_LEN], EeconfigError> {
        let mut block = [0; BLOCK_LEN];
        self.flash.read(BASE, &mut block).map_err(map_flash_error)?;
        Ok(block)
    }

    fn write_block(&mut self, block: &[u8; BLOCK_LEN]) -> Result<(), EeconfigError> {
        self.flash
            .erase(BASE, BASE + F::ERASE_SIZE as u32)
            .map_err(map_flash_error)?;
        self.flash.write(BASE, block).map_err(map_flash_error)
    }

    fn read_word(&mut self, offset: usize) -> Result<u32, EeconfigError> {
        let block = self.read_block()?;
        if !is_formatted(&block) {
            return Ok(0);
        }
        Ok(word_at(&block, offset))
    }

    fn update_word(&mut self, offset: usize, value: u32) -> Result<(), EeconfigError> {
        let mut block = self.read_block()?;
        if !is_formatted(&block) {
            block = blank_block();
        } else if word_at(&block, offset) == value {
            return Ok(());
        }
        block[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
        self.write_block(&block)
    }
}

impl<F: NorFlash, const BASE: u32> Eeconfig for FlashEeconfig<'_, F, BASE> {
    fn is_initialized(&mut self) -> Result<bool, EeconfigError> {
        Ok(is_formatted(&self.read_block()?))
    }

    fn initialize(&mut self) -> Result<(), EeconfigError> {
        crate::info!("formatting eeconfig at {}", BASE);
        self.write_block(&blank_block())
    }

    fn read_kb(&mut self) -> Result<u32, EeconfigError> {
        self.read_word(KB_OFFSET)
    }

    fn update_kb(&mut self, value: u32) -> Result<(), EeconfigError> {
        self.update_word(KB_OFFSET, value)
    }

    fn read_user(&mut self) -> Result<u32, EeconfigError> {
        self.read_word(USER_OFFSET)
    }

    fn update_user(&mut self, value: u32) -> Result<(), EeconfigError> {
        self.update_word(USER_OFFSET, value)
    }
}

fn blank_block() -> [u8; BLOCK_LEN] {
    let mut block = [0; BLOCK_LEN];
    block[..VERSION_OFFSET].copy_from_slice(&FORMAT_MAGIC_NUMBER);
    block[VERSION_OFFSET] = FORMAT_VERSION;
    block
}

fn is_formatted(block: &[u8; BLOCK_LEN]) -> bool {
    block[..VERSION_OFFSET] == FORMAT_MAGIC_NUMBER && block[VERSION_OFFSET] == FORMAT_VERSION
}

fn word_at(block: &[u8; BLOCK_LEN], offset: usize) -> u32 {
    let mut bytes = [0; 4];
    bytes.copy_from_slice(&block[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

#[cfg(test)]
#[path = "eeconfig_test.rs"]
mod test;
