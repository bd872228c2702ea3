//! The byte-stream handle returned by opening an asset.

use std::io::{self, Read, Seek, SeekFrom};

use crate::{Bytes, File};

/// A readable, seekable handle over one asset's content.
///
/// Each open call produces its own handle with its own cursor. Closing
/// drops the payload reference; further reads and seeks fail.
#[derive(Debug)]
pub struct AssetFile {
    data: Option<Bytes>,
    pos: u64,
}

impl AssetFile {
    pub(crate) fn new(data: Bytes) -> Self {
        Self {
            data: Some(data),
            pos: 0,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.data.is_none()
    }

    fn data(&self) -> io::Result<&[u8]> {
        match &self.data {
            Some(data) => Ok(data),
            None => Err(io::Error::other("file already closed")),
        }
    }
}

impl Read for AssetFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let data = self.data()?;
        // Seeking past the end is allowed; reads there return 0.
        let pos = usize::min(self.pos as usize, data.len());
        let n = usize::min(buf.len(), data.len() - pos);
        buf[..n].copy_from_slice(&data[pos..pos + n]);
        self.pos += n as u64;
        Ok(n)
    }
}

impl Seek for AssetFile {
    fn seek(&mut self, from: SeekFrom) -> io::Result<u64> {
        let len = self.data()?.len() as u64;
        let pos = match from {
            SeekFrom::Start(pos) => Some(pos),
            SeekFrom::End(off) => len.checked_add_signed(off),
            SeekFrom::Current(off) => self.pos.checked_add_signed(off),
        };
        match pos {
            Some(pos) => {
                self.pos = pos;
                Ok(pos)
            }
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid seek to a negative position",
            )),
        }
    }
}

impl File for AssetFile {
    fn close(&mut self) {
        self.data = None;
    }
}
