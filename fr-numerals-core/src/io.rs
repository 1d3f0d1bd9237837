use std::io::{self, BufWriter, Write};

use log::info;

use crate::model::emission::Emission;

/// Streams emissions as fixture lines (`words<TAB>digits\n`).
///
/// - Buffers output and flushes once at the end
/// - Never holds more than one emission in memory
///
/// Returns the number of lines written.
///
/// # Errors
/// Propagates write errors, including `BrokenPipe` when the reader goes away.
pub fn write_tsv<W, I>(writer: W, emissions: I) -> io::Result<usize>
where
	W: Write,
	I: IntoIterator<Item = Emission>,
{
	let mut writer = BufWriter::new(writer);
	let mut count = 0;

	for emission in emissions {
		writeln!(writer, "{emission}")?;
		count += 1;
	}
	writer.flush()?;

	info!("wrote {count} fixture lines");
	Ok(count)
}
