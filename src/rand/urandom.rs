//! `/dev/urandom` entropy source.

use std::fs::File;
use std::io::{self, Read};

use super::RandomSource;

const DEVICE: &str = "/dev/urandom";

/// CSPRNG backed by the kernel entropy device.
///
/// The file handle stays open for the lifetime of the source so bulk
/// generation does not reopen the device per draw.
pub struct DevUrandom {
    file: File,
}

impl DevUrandom {
    pub fn open() -> io::Result<Self> {
        Ok(Self {
            file: File::open(DEVICE)?,
        })
    }

    pub fn is_available() -> bool {
        std::path::Path::new(DEVICE).exists()
    }
}

impl RandomSource for DevUrandom {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.file.read_exact(buf)
    }
}
