//! Whole-file reading.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads the entire file at `path` into a new buffer.
///
/// The returned buffer holds exactly the file's bytes. An empty file yields
/// an empty buffer. A file too large to buffer is an error, not an abort.
pub fn slurp(path: impl AsRef<Path>) -> Result<Vec<u8>, String> {
    let path = path.as_ref();
    read_all(path).map_err(|e| warn(format!("Couldn't read {}: {}", path.display(), e)))
}

/// Like [`slurp`], but also requires the content to be valid UTF-8.
pub fn slurp_to_string(path: impl AsRef<Path>) -> Result<String, String> {
    let path = path.as_ref();
    let bytes = slurp(path)?;
    String::from_utf8(bytes)
        .map_err(|e| warn(format!("{} is not valid UTF-8: {}", path.display(), e)))
}

fn warn(msg: String) -> String {
    log::warn!("{}", msg);
    msg
}

fn read_all(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut buf = alloc_buffer(file.metadata()?.len())?;
    file.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Reserves room for `len` bytes plus one, without aborting on failure.
fn alloc_buffer(len: u64) -> io::Result<Vec<u8>> {
    let capacity = usize::try_from(len)
        .ok()
        .and_then(|len| len.checked_add(1))
        .ok_or_else(|| io::Error::new(io::ErrorKind::OutOfMemory, "file too large to buffer"))?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|e| io::Error::new(io::ErrorKind::OutOfMemory, e))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("glbootstrap-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_slurp_returns_file_content() {
        let path = temp_path("content");
        let data: Vec<u8> = (0..=255u8).cycle().take(5000).collect();
        std::fs::write(&path, &data).unwrap();

        let buf = slurp(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(buf, data);
    }

    #[test]
    fn test_slurp_missing_file() {
        let path = temp_path("does-not-exist");
        let err = slurp(&path).unwrap_err();
        assert!(err.contains("does-not-exist"));
    }

    #[test]
    fn test_slurp_empty_file() {
        let path = temp_path("empty");
        std::fs::write(&path, b"").unwrap();

        let buf = slurp(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_slurp_to_string() {
        let path = temp_path("text");
        std::fs::write(&path, "#version 460 core\n").unwrap();
        assert_eq!(slurp_to_string(&path).unwrap(), "#version 460 core\n");

        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = slurp_to_string(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(err.contains("UTF-8"));
    }

    #[test]
    fn test_alloc_buffer_failure_is_an_error() {
        assert!(alloc_buffer(u64::MAX).is_err());
        assert!(alloc_buffer(1 << 62).is_err());
        assert!(alloc_buffer(16).unwrap().capacity() >= 17);
    }

    #[test]
    fn test_slurp_huge_sparse_file() {
        let path = temp_path("sparse");
        let file = File::create(&path).unwrap();
        // 128 TiB, more than a user address space can hold
        if file.set_len(1 << 47).is_err() {
            std::fs::remove_file(&path).unwrap();
            return;
        }
        drop(file);

        let result = slurp(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}
