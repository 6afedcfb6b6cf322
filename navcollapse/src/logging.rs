use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::{CollapseError, Result};

/// Route `log` output to a file.
///
/// The collapser only logs through the `log` facade; hosts that already
/// install a logger don't need this.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| CollapseError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}
