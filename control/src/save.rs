use core::mem;

use crc::{Crc, CRC_16_USB};

use crate::cache::{Cache, Modes, Parameters};

/// Snapshot of all persisted settings.
///
/// This is what a completed save-hold hands over to the flash collaborator
/// and what gets restored on boot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Save {
    pub parameters: Parameters,
    pub modes: Modes,
    pub led_brightness: u16,
}

impl Default for Save {
    fn default() -> Self {
        Cache::default().save()
    }
}

impl Save {
    const SIZE: usize = mem::size_of::<Self>();

    fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        unsafe { mem::transmute(bytes) }
    }

    fn to_bytes(self) -> [u8; Self::SIZE] {
        unsafe { mem::transmute(self) }
    }
}

// This constant is used to invalidate data when needed
const TOKEN: u16 = 1;
const CRC: Crc<u16> = Crc::<u16>::new(&CRC_16_USB);
pub struct InvalidData;

/// Durable image of a [`Save`], ready for the flash collaborator.
#[derive(Clone, Copy)]
pub struct Store {
    version: u32,
    token: u16,
    save_raw: [u8; Save::SIZE],
    crc: u16,
}

impl Store {
    pub const SIZE: usize = mem::size_of::<Self>();

    #[must_use]
    pub fn new(save: Save, version: u32) -> Self {
        let save_raw = save.to_bytes();
        let crc = CRC.checksum(&save_raw);
        Self {
            version,
            save_raw,
            crc,
            token: TOKEN,
        }
    }

    /// # Errors
    ///
    /// This fails with `InvalidData` when the recovered save does not pass
    /// the CRC check.
    pub fn from_bytes(bytes: [u8; Self::SIZE]) -> Result<Self, InvalidData> {
        let store: Self = unsafe { mem::transmute(bytes) };

        if store.token != TOKEN {
            return Err(InvalidData);
        }

        let crc = CRC.checksum(&store.save_raw);
        if crc == store.crc {
            Ok(store)
        } else {
            Err(InvalidData)
        }
    }

    #[must_use]
    pub fn to_bytes(self) -> [u8; Self::SIZE] {
        unsafe { mem::transmute(self) }
    }

    #[must_use]
    pub fn save(&self) -> Save {
        Save::from_bytes(self.save_raw)
    }

    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }
}
