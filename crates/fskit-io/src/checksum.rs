//! Whole-file checksums
//!
//! Content is streamed through the selected digest and rendered as lowercase
//! hex: 32 characters for MD5, 40 for SHA-1, 64 for SHA-256.

use crate::{Error, Result};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Size of each read when streaming a file into a hasher.
const CHUNK_SIZE: usize = 64 * 1024;

/// Hash algorithm used for a checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumMethod {
    Md5,
    Sha1,
    Sha256,
}

impl ChecksumMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }

    /// Length of the hex digest this method produces.
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha256 => 64,
        }
    }
}

impl FromStr for ChecksumMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "").as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            _ => Err(Error::InvalidChecksumMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl TryFrom<u8> for ChecksumMethod {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Md5),
            1 => Ok(Self::Sha1),
            2 => Ok(Self::Sha256),
            other => Err(Error::InvalidChecksumMethod {
                method: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ChecksumMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Checksum of in-memory content.
pub fn checksum_bytes(data: &[u8], method: ChecksumMethod) -> String {
    match method {
        ChecksumMethod::Md5 => hex::encode(Md5::digest(data)),
        ChecksumMethod::Sha1 => hex::encode(Sha1::digest(data)),
        ChecksumMethod::Sha256 => hex::encode(Sha256::digest(data)),
    }
}

/// Checksum of everything a reader yields.
pub fn checksum_reader<R: Read>(reader: R, method: ChecksumMethod) -> std::io::Result<String> {
    match method {
        ChecksumMethod::Md5 => digest_reader::<Md5, R>(reader),
        ChecksumMethod::Sha1 => digest_reader::<Sha1, R>(reader),
        ChecksumMethod::Sha256 => digest_reader::<Sha256, R>(reader),
    }
}

/// Checksum of a file's contents.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the file is absent, or the underlying I/O
/// error if it cannot be opened or read.
pub fn checksum_file(path: &Path, method: ChecksumMethod) -> Result<String> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let digest = checksum_reader(file, method).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), %method, "Computed checksum");
    Ok(digest)
}

fn digest_reader<D: Digest, R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = D::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}
