//! Default [`FileIo`] implementation backed by `std::fs`

use crate::metadata::mode_of;
use crate::{
    ChecksumMethod, DirEntry, Error, FileInfo, FileIo, IoConfig, OperatingSystem, OsOverride,
    Result, checksum,
};
use std::fs::{self, DirBuilder, File};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Stateless façade over the operating system's file calls.
///
/// The only thing it carries is where to look for an operating system
/// override, which affects path string helpers and nothing else.
#[derive(Debug, Clone, Default)]
pub struct DefaultFileIo {
    os_override: OsOverride,
}

impl DefaultFileIo {
    /// Create an instance that honors `TEST_OS_OVERRIDE`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_os_override(os_override: OsOverride) -> Self {
        Self { os_override }
    }

    pub fn from_config(config: &IoConfig) -> Self {
        Self::with_os_override(config.os_override())
    }

    pub fn os_override(&self) -> &OsOverride {
        &self.os_override
    }
}

impl FileIo for DefaultFileIo {
    fn operating_system(&self) -> OperatingSystem {
        self.os_override.detect()
    }

    fn exists(&self, path: &Path) -> bool {
        stat_reports_present(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        if !self.exists(path) {
            return Err(Error::not_found(path));
        }

        let data = fs::read(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "Read file");
        Ok(data)
    }

    fn read_range(&self, path: &Path, from: u64, to: u64) -> Result<Vec<u8>> {
        if !self.exists(path) {
            return Err(Error::not_found(path));
        }

        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
        let size = file.metadata().map_err(|e| Error::io(path, e))?.len();

        let to = if to == 0 || to > size { size } else { to };
        let len = to
            .checked_sub(from)
            .and_then(|len| usize::try_from(len).ok())
            .ok_or(Error::InvalidRange { from, to })?;

        let mut buffer = vec![0u8; len];
        file.seek(SeekFrom::Start(from))
            .map_err(|e| Error::io(path, e))?;
        file.read_exact(&mut buffer)
            .map_err(|e| Error::io(path, e))?;

        tracing::debug!(path = %path.display(), from, to, "Read file range");
        Ok(buffer)
    }

    fn write(&self, path: &Path, data: &[u8], mode: u32) -> Result<()> {
        let mut file = File::create(path).map_err(|e| Error::io(path, e))?;
        file.write_all(data).map_err(|e| Error::io(path, e))?;
        set_file_mode(&file, mode).map_err(|e| Error::io(path, e))?;

        tracing::debug!(
            path = %path.display(),
            bytes = data.len(),
            mode = %format!("{mode:o}"),
            "Wrote file"
        );
        Ok(())
    }

    fn write_buffered(
        &self,
        path: &Path,
        data: &[u8],
        chunk_size: usize,
        mode: u32,
    ) -> Result<()> {
        if chunk_size == 0 {
            return Err(Error::InvalidChunkSize);
        }

        let mut file = File::create(path).map_err(|e| Error::io(path, e))?;
        set_file_mode(&file, mode).map_err(|e| Error::io(path, e))?;

        let mut chunks = 0usize;
        for chunk in data.chunks(chunk_size) {
            file.write_all(chunk).map_err(|e| Error::io(path, e))?;
            chunks += 1;
        }

        tracing::debug!(path = %path.display(), bytes = data.len(), chunks, "Wrote file in chunks");
        Ok(())
    }

    fn copy(&self, source: &Path, destination: &Path) -> Result<()> {
        let mut source_file = File::open(source).map_err(|e| Error::io(source, e))?;
        let mut destination_file =
            File::create(destination).map_err(|e| Error::io(destination, e))?;

        let bytes = std::io::copy(&mut source_file, &mut destination_file)
            .map_err(|e| Error::io(destination, e))?;

        destination_file
            .sync_all()
            .map_err(|e| Error::io(destination, e))?;

        let permissions = source_file
            .metadata()
            .map_err(|e| Error::io(source, e))?
            .permissions();
        fs::set_permissions(destination, permissions).map_err(|e| Error::io(destination, e))?;

        tracing::debug!(
            source = %source.display(),
            destination = %destination.display(),
            bytes,
            "Copied file"
        );
        Ok(())
    }

    fn delete(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), "Deleted file");
        Ok(())
    }

    fn info(&self, path: &Path) -> Result<FileInfo> {
        let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Ok(FileInfo::from_metadata(name, &metadata))
    }

    fn dir_exists(&self, path: &Path) -> bool {
        stat_reports_present(path)
    }

    fn create_dir(&self, path: &Path, mode: u32) -> Result<()> {
        dir_builder(mode, false)
            .create(path)
            .map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), "Created directory");
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| Error::io(path, e))? {
            let entry = entry.map_err(|e| Error::io(path, e))?;
            let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: file_type.is_dir(),
            });
        }
        Ok(entries)
    }

    fn copy_dir(&self, source: &Path, destination: &Path) -> Result<()> {
        let source_metadata = fs::metadata(source).map_err(|e| Error::io(source, e))?;

        dir_builder(mode_of(&source_metadata), true)
            .create(destination)
            .map_err(|e| Error::io(destination, e))?;

        // Iterate raw entries so names that are not valid UTF-8 survive.
        for entry in fs::read_dir(source).map_err(|e| Error::io(source, e))? {
            let entry = entry.map_err(|e| Error::io(source, e))?;
            let source_path = entry.path();
            let destination_path = destination.join(entry.file_name());
            let file_type = entry
                .file_type()
                .map_err(|e| Error::io(&source_path, e))?;

            if file_type.is_dir() {
                self.copy_dir(&source_path, &destination_path)?;
            } else {
                self.copy(&source_path, &destination_path)?;
            }
        }

        tracing::debug!(
            source = %source.display(),
            destination = %destination.display(),
            "Copied directory"
        );
        Ok(())
    }

    fn delete_dir(&self, path: &Path) -> Result<()> {
        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Directory already absent");
                return Ok(());
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        let removed = if metadata.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };

        match removed {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Deleted directory");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io(path, e)),
        }
    }

    fn checksum(&self, path: &Path, method: ChecksumMethod) -> Result<String> {
        checksum::checksum_file(path, method)
    }
}

/// Anything but an explicit not-found from stat counts as present.
fn stat_reports_present(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(e) => {
            tracing::trace!(
                path = %path.display(),
                error = %e,
                "Stat failed, treating path as present"
            );
            true
        }
    }
}

fn dir_builder(mode: u32, recursive: bool) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(recursive);
    apply_dir_mode(&mut builder, mode);
    builder
}

#[cfg(unix)]
fn apply_dir_mode(builder: &mut DirBuilder, mode: u32) {
    use std::os::unix::fs::DirBuilderExt;
    builder.mode(mode);
}

#[cfg(not(unix))]
fn apply_dir_mode(_builder: &mut DirBuilder, _mode: u32) {}

#[cfg(unix)]
fn set_file_mode(file: &File, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_file_mode(file: &File, mode: u32) -> std::io::Result<()> {
    let mut permissions = file.metadata()?.permissions();
    permissions.set_readonly(mode & 0o222 == 0);
    file.set_permissions(permissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn io() -> DefaultFileIo {
        DefaultFileIo::with_os_override(OsOverride::Host)
    }

    #[test]
    fn read_range_clamps_past_end() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"0123456789").unwrap();

        assert_eq!(io().read_range(&path, 2, 100).unwrap(), b"23456789");
        assert_eq!(io().read_range(&path, 0, 0).unwrap(), b"0123456789");
        assert_eq!(io().read_range(&path, 3, 5).unwrap(), b"34");
    }

    #[test]
    fn read_range_rejects_inverted_range() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"0123456789").unwrap();

        let err = io().read_range(&path, 8, 4).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { from: 8, to: 4 }));
    }

    #[test]
    fn write_buffered_rejects_zero_chunk() {
        let dir = tempdir().unwrap();
        let err = io()
            .write_buffered(&dir.path().join("f"), b"abc", 0, 0o644)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidChunkSize));
    }

    #[test]
    fn delete_dir_removes_plain_file_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.txt");
        fs::write(&path, "x").unwrap();

        io().delete_dir(&path).unwrap();
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn write_sets_requested_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("mode.txt");
        io().write(&path, b"content", 0o600).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn operating_system_follows_override() {
        let io = DefaultFileIo::with_os_override(OsOverride::fixed("windows"));
        assert_eq!(io.operating_system(), OperatingSystem::Windows);
        assert_eq!(io.path_separator(), "\\");
        assert_eq!(io.to_host_path("a/b"), "a\\b");
    }
}
