use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the result map to a CSV file
///
/// The file is UTF-8 with a `Source URL,Final URL` header row and one data
/// row per successfully fetched HTML page. No quoting or escaping is
/// performed: a URL containing a literal comma corrupts its row. This is a
/// known limitation of the format, kept rather than silently changed.
///
/// # Arguments
///
/// * `path` - Where to write the file (parent directory must exist)
/// * `rows` - The (source URL, final URL) rows
///
/// # Returns
///
/// * `Ok(())` - File written and flushed
/// * `Err(std::io::Error)` - Create or write failed
pub fn write_results(path: &Path, rows: &[(String, String)]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Source URL,Final URL")?;
    for (source, final_url) in rows {
        writeln!(writer, "{},{}", source, final_url)?;
    }

    writer.flush()
}
