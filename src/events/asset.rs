use std::path::PathBuf;

/// Completion of one background bitmap load, sent back to the main thread.
#[derive(Debug)]
pub enum AssetMessage {
    Loaded {
        key: String,
        path: PathBuf,
        bytes: Vec<u8>,
    },
    LoadFailed {
        key: String,
        path: PathBuf,
        error: String,
    },
}
