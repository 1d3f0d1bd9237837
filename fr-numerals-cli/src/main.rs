use std::io::{self, ErrorKind};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use fr_numerals_core::io::write_tsv;
use fr_numerals_core::{Agreement, Conjunction, Magnitude, NumeralGenerator, Spelling};

/// Enumerate French cardinal spellings as `words<TAB>digits` fixture lines
#[derive(Parser, Debug)]
#[command(name = "fr-numerals", version)]
#[command(about = "Enumerate French cardinal spellings as tab-separated fixture lines", long_about = None)]
struct Args {
	/// Magnitude class: 100, 1000, 1000000 or 1000000000 (default)
	#[arg(value_name = "CLASS")]
	class: Option<String>,

	/// Emit "zéro\t0" before the range
	#[arg(long)]
	zero: bool,

	/// Joining of "et" in 21-71: spaced or hyphenated
	#[arg(long, default_value = "spaced")]
	conjunction: Conjunction,

	/// Plural of round 80: agree or invariant
	#[arg(long, default_value = "agree")]
	eighty: Agreement,

	/// Plural of round hundreds: agree or invariant
	#[arg(long, default_value = "agree")]
	hundreds: Agreement,
}

impl Args {
	fn magnitude(&self) -> Result<Magnitude> {
		match &self.class {
			None => Ok(Magnitude::default()),
			Some(class) => Ok(class.parse()?),
		}
	}

	fn spelling(&self) -> Spelling {
		Spelling {
			conjunction: self.conjunction,
			eighty: self.eighty,
			hundreds: self.hundreds,
		}
	}
}

fn main() -> Result<()> {
	env_logger::init();

	let args = Args::parse();
	let magnitude = args.magnitude()?;
	let generator = NumeralGenerator::new(magnitude, args.spelling()).with_zero(args.zero);
	info!("enumerating class {magnitude} with {:?}", generator.spelling());

	// A closed pipe (`| head`) is a normal way to stop reading fixtures
	match write_tsv(io::stdout().lock(), generator.emissions()) {
		Ok(_) => Ok(()),
		Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
		Err(e) => Err(e).context("failed to write fixtures to stdout"),
	}
}
