use crate::state::Site;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes discovered sites as an ordered JSON array
///
/// The destination is truncated first; each run owns the file outright.
/// Array order is the registry's discovery order.
pub fn write_sites(sites: &[Site], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, sites)?;
    writer.flush()?;
    Ok(())
}
