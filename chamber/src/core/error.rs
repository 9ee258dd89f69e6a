use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChamberError {
    #[error("octree size {size} is too small, the root needs a half size of at least 1")]
    InvalidSize { size: i32 },
    #[error(
        "edit resolution {resolution} is invalid for a chamber of extent {max_extent} (both must be powers of two, 2 <= resolution <= extent)"
    )]
    InvalidEditResolution { resolution: i32, max_extent: i32 },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ChamberError::InvalidSize { size: 0 };
        assert_eq!(
            err.to_string(),
            "octree size 0 is too small, the root needs a half size of at least 1"
        );
    }

    #[test]
    fn test_from_io() {
        let err: ChamberError = std::io::Error::other("disk full").into();
        assert!(matches!(err, ChamberError::Io(_)));
        assert_eq!(err.to_string(), "i/o error: disk full");
    }
}
