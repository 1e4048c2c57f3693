use std::io;

use derive_more::Display;
use thiserror::Error;

#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("could not open {_0}: {_1}")]
    Open(String, io::Error),
    #[display("could not read partition table: {_0}")]
    PartitionTable(io::Error),
    #[display("{_0}")]
    Partition(&'static str),
    #[display("{_0}")]
    Install(#[from] fatboot::Error<io::Error>),
}

impl Error {
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Install(e) if e.is_partial())
    }

    /// Extra line for a volume left half installed
    pub fn warning(&self, device: &str) -> Option<String> {
        match self.is_partial() {
            true => Some(format!("New boot sector already written, {} is NOT bootable", device)),
            false => None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::io;

    use super::Error;

    #[test]
    fn test_partial_warning() {
        let denied = || io::Error::from(io::ErrorKind::PermissionDenied);
        let error = Error::from(fatboot::Error::WriteExtra(denied()));
        assert!(error.is_partial());
        let warning = error.warning("disk.img").unwrap();
        assert_eq!(warning, "New boot sector already written, disk.img is NOT bootable");
        assert_eq!(error.to_string(), "could not write extra boot sector: permission denied");

        let error = Error::from(fatboot::Error::Write(denied()));
        assert!(!error.is_partial());
        assert!(error.warning("disk.img").is_none());
        assert!(Error::Partition("Not MBR").warning("disk.img").is_none());
    }
}
