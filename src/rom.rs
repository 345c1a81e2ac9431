use std::{fs::File, io::Read, path::Path};

use log::{info, warn};

use crate::{Error, Result, RomImage, ROM_SIZE};

const WORD_SIZE: usize = std::mem::size_of::<u32>();

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A read-only ROM backed by a [`RomImage`], as seen by code that executes from it.
pub struct Rom {
    image: RomImage,
}

impl Rom {
    /// Loads the ROM image at `path`.
    ///
    /// At most [`ROM_SIZE`] bytes are read. A shorter file leaves the rest of the ROM zeroed and
    /// any bytes past `ROM_SIZE` are ignored.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| Error::file_system(path, err))?;
        let mut image = RomImage::zeroed();
        let mut filled = 0;
        let mut reader = file.take(ROM_SIZE as u64);
        loop {
            match reader.read(&mut image.as_bytes_mut()[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(Error::file_system(path, err)),
            }
        }
        if filled < ROM_SIZE {
            warn!(
                "'{}' holds {filled} bytes, padding ROM with {} zeroes",
                path.display(),
                ROM_SIZE - filled
            );
        }
        info!("loaded ROM image '{}'", path.display());
        Ok(Self { image })
    }

    pub fn image(&self) -> &RomImage {
        &self.image
    }

    /// Reads the big-endian 32-bit word starting at `address`. Addresses whose word would run
    /// past the end of the ROM read as 0.
    ///
    /// # Example
    /// ```
    /// # use romgen::{Rom, RomImage};
    /// let mut bytes = [0u8; romgen::ROM_SIZE];
    /// bytes[..4].copy_from_slice(&[0x12, 0x34, 0x56, 0x78]);
    /// let rom = Rom::from(RomImage::try_from(&bytes[..]).unwrap());
    /// assert_eq!(rom.read_word(0), 0x1234_5678);
    /// assert_eq!(rom.read_word(0x180), 0);
    /// ```
    pub fn read_word(&self, address: u32) -> u32 {
        let start = address as usize;
        match self.image.as_bytes().get(start..start.saturating_add(WORD_SIZE)) {
            Some(&[a, b, c, d]) => u32::from_be_bytes([a, b, c, d]),
            _ => {
                warn!("read from unimplemented area {address:08X}, returning 0");
                0
            }
        }
    }

    /// The ROM is read-only: writes are logged and dropped.
    pub fn write_word(&mut self, address: u32, value: u32) {
        warn!("write of {value:08X} to read-only area {address:08X} ignored");
    }

    /// Iterates over `(address, word)` pairs at a word stride across the whole ROM.
    pub fn words(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..ROM_SIZE)
            .step_by(WORD_SIZE)
            .map(|address| (address as u32, self.read_word(address as u32)))
    }
}

impl From<RomImage> for Rom {
    fn from(image: RomImage) -> Self {
        Self { image }
    }
}
