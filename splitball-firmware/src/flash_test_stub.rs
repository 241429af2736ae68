use embedded_storage::nor_flash::{
    ErrorType, NorFlash, NorFlashError, NorFlashErrorKind, ReadNorFlash,
};

extern crate std;

use std::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlashStubError {
    NotAligned,
    OutOfBounds,
    Failed,
}

#[derive(Debug, PartialEq)]
pub enum Action {
    Erase(u32, u32),
    Write(u32, Vec<u8>),
}

/// An in-memory NOR flash that records every erase and write.
pub struct NorFlashStub<const FLASH_SIZE: usize> {
    pub buf: [u8; FLASH_SIZE],
    pub actions: Vec<Action>,
    /// When set every erase and write fails with this error.
    pub fail_with: Option<FlashStubError>,
    /// When set reads fail with this error once `good_reads` reads have succeeded.
    pub fail_reads: Option<FlashStubError>,
    pub good_reads: usize,
}
impl NorFlashError for FlashStubError {
    fn kind(&self) -> NorFlashErrorKind {
        match self {
            FlashStubError::NotAligned => NorFlashErrorKind::NotAligned,
            FlashStubError::OutOfBounds => NorFlashErrorKind::OutOfBounds,
            FlashStubError::Failed => NorFlashErrorKind::Other,
        }
    }
}
impl<const FLASH_SIZE: usize> ErrorType for NorFlashStub<FLASH_SIZE> {
    type Error = FlashStubError;
}
impl<const FLASH_SIZE: usize> ReadNorFlash for NorFlashStub<FLASH_SIZE> {
    const READ_SIZE: usize = 1;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        if let Some(err) = self.fail_reads {
            if self.good_reads == 0 {
                return Err(err);
            }
            self.good_reads -= 1;
        }
        let offset = offset as usize;
        let src = self
            .buf
            .get(offset..offset + bytes.len())
            .ok_or(FlashStubError::OutOfBounds)?;
        bytes.copy_from_slice(src);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.buf.len()
    }
}
impl<const FLASH_SIZE: usize> NorFlash for NorFlashStub<FLASH_SIZE> {
    const WRITE_SIZE: usize = 4;

    const ERASE_SIZE: usize = 256;

    fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
        if let Some(err) = self.fail_with {
            return Err(err);
        }
        if from as usize % Self::ERASE_SIZE != 0 || to as usize % Self::ERASE_SIZE != 0 {
            return Err(FlashStubError::NotAligned);
        }
        self.actions.push(Action::Erase(from, to));
        self.buf
            .get_mut(from as usize..to as usize)
            .ok_or(FlashStubError::OutOfBounds)?
            .fill(0xff);
        Ok(())
    }

    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        if let Some(err) = self.fail_with {
            return Err(err);
        }
        if offset as usize % Self::WRITE_SIZE != 0 || bytes.len() % Self::WRITE_SIZE != 0 {
            return Err(FlashStubError::NotAligned);
        }
        self.actions.push(Action::Write(offset, bytes.into()));
        let offset = offset as usize;
        for (t, f) in self
            .buf
            .get_mut(offset..offset + bytes.len())
            .ok_or(FlashStubError::OutOfBounds)?
            .iter_mut()
            .zip(bytes.iter())
        {
            *t &= *f;
        }
        Ok(())
    }
}
impl<const FLASH_SIZE: usize> NorFlashStub<FLASH_SIZE> {
    pub fn write_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, Action::Write(..)))
            .count()
    }
}
impl<const FLASH_SIZE: usize> Default for NorFlashStub<FLASH_SIZE> {
    fn default() -> Self {
        Self {
            buf: [0xff; FLASH_SIZE],
            actions: Vec::new(),
            fail_with: None,
            fail_reads: None,
            good_reads: 0,
        }
    }
}
