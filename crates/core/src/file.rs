use std::{fs, fs::File, io::Write, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum WriteFileError {
    #[error("Could not create dir: {0}")]
    CouldNotCreateDir(std::io::Error),

    #[error("Could not write to the file: {0}")]
    CouldNotWrite(std::io::Error),

    #[error("Could not create the file: {0}")]
    CouldNotCreateFile(std::io::Error),
}

/// Writes `contents` to `path`, creating parent directories as needed.
///
/// The file is written next to its destination first and then renamed over
/// it, so a crash mid-write never leaves a truncated config behind.
pub fn write_file(path: &Path, contents: &str) -> Result<(), WriteFileError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(WriteFileError::CouldNotCreateDir)?;
    }

    let staging_path = path.with_extension("tmp");
    let mut file = File::create(&staging_path).map_err(WriteFileError::CouldNotCreateFile)?;
    file.write_all(contents.as_bytes()).map_err(WriteFileError::CouldNotWrite)?;
    file.sync_all().map_err(WriteFileError::CouldNotWrite)?;
    drop(file);

    fs::rename(&staging_path, path).map_err(WriteFileError::CouldNotWrite)?;
    Ok(())
}
