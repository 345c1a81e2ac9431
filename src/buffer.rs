use std::fmt::{self, Write};

use rand::RngCore;

/// Size in bytes of a simulated ROM image.
pub const ROM_SIZE: usize = 0x180;

const DUMP_WIDTH: usize = 16;

#[derive(Clone, PartialEq, Eq)]
/// The staging buffer for one ROM image: exactly [`ROM_SIZE`] bytes.
pub struct RomImage {
    bytes: [u8; ROM_SIZE],
}

impl RomImage {
    /// Returns an image with every byte set to zero.
    pub fn zeroed() -> Self {
        Self {
            bytes: [0; ROM_SIZE],
        }
    }

    /// Returns an image with every byte drawn uniformly from `[0, 255]` using `rng`.
    ///
    /// # Example
    /// ```
    /// # use romgen::{RomImage, Rng, ROM_SIZE};
    /// let image = RomImage::random(&mut Rng::new());
    /// assert_eq!(image.as_bytes().len(), ROM_SIZE);
    /// ```
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut image = Self::zeroed();
        rng.fill_bytes(&mut image.bytes);
        image
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        ROM_SIZE
    }

    /// Formats the image as a hex dump, sixteen bytes per line prefixed with the offset.
    ///
    /// ```text
    /// 00000000: 3A 91 0F ...
    /// ```
    pub fn hex_dump(&self) -> String {
        let mut out = String::with_capacity(ROM_SIZE / DUMP_WIDTH * (10 + DUMP_WIDTH * 3));
        for (line, chunk) in self.bytes.chunks(DUMP_WIDTH).enumerate() {
            let hex = chunk
                .iter()
                .map(|byte| format!("{byte:02X}"))
                .collect::<Vec<_>>()
                .join(" ");
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{:08X}: {}", line * DUMP_WIDTH, hex);
        }
        out
    }
}

impl Default for RomImage {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl AsRef<[u8]> for RomImage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl TryFrom<&[u8]> for RomImage {
    type Error = String;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; ROM_SIZE] = value
            .try_into()
            .map_err(|_| format!("expected {} bytes, got {}", ROM_SIZE, value.len()))?;
        Ok(Self { bytes })
    }
}

impl fmt::Debug for RomImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RomImage")
            .field("len", &ROM_SIZE)
            .field("head", &&self.bytes[..DUMP_WIDTH])
            .finish()
    }
}

impl fmt::Display for RomImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_dump())
    }
}
