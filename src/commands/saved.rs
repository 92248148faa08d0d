//! Saved command - dump the raw documents in the lists directory

use std::path::PathBuf;

use shoplist::output::{OutputMode, SavedView};

use super::session;

/// Print the namespace path and every document in it
pub fn saved(dir: Option<PathBuf>, mode: OutputMode) -> anyhow::Result<()> {
    let manager = session::open(dir)?;
    let documents = manager.store().saved_documents()?;

    SavedView { documents }.render(mode);
    Ok(())
}
