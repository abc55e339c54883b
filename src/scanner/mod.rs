mod directory_scanner;

pub use directory_scanner::{DirectoryScanner, ScanError};
