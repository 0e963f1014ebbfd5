#![allow(clippy::module_name_repetitions)]

use std::path::PathBuf;
use std::str::FromStr;

use argh::FromArgs;
use thiserror::Error;

/// Replay a script of queue operations against a bounded queue.
#[derive(FromArgs, Debug)]
pub struct Args {
	/// maximum number of elements the queue holds
	#[argh(option, short = 'c', default = "5")]
	pub capacity: usize,
	/// path to the script; `-` or nothing reads standard input
	#[argh(option, short = 's')]
	pub script: Option<PathBuf>,
	/// output format: text or json
	#[argh(option, short = 'f', default = "<_>::default()")]
	pub format: OutputFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
	#[default]
	Text,
	Json,
}

#[derive(Debug, Error)]
#[error("unrecognized output format; supported are: text, json")]
pub struct OutputFormatFromStrError;

impl FromStr for OutputFormat {
	type Err = OutputFormatFromStrError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"text" => Self::Text,
			"json" => Self::Json,
			_ => return Err(OutputFormatFromStrError),
		})
	}
}

impl Args {
	/// The script path, with `-` normalized to standard input.
	pub fn script_path(&self) -> Option<&PathBuf> {
		self.script.as_ref().filter(|path| path.as_os_str() != "-")
	}
}

pub fn load() -> Args {
	argh::from_env()
}
