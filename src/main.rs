use std::io::{Read as _, Write as _};

use anyhow::Context as _;

use crate::args::{Args, OutputFormat};
use crate::script::{Replay, Script};

mod args;
mod script;

fn read_script(args: &Args) -> anyhow::Result<Script> {
	let Some(path) = args.script_path() else {
		let mut raw = String::new();
		std::io::stdin()
			.read_to_string(&mut raw)
			.context("reading script from standard input")?;
		return raw
			.parse::<Script>()
			.context("parsing script from standard input");
	};

	let raw = std::fs::read_to_string(path).with_context(|| format!("reading script from {path:?}"))?;
	let script = if path.extension().is_some_and(|extension| extension == "json") {
		Script::from_json(&raw).with_context(|| format!("parsing JSON script {path:?}"))?
	} else {
		raw.parse::<Script>().with_context(|| format!("parsing script {path:?}"))?
	};
	Ok(script)
}

fn main() -> anyhow::Result<()> {
	env_logger::init();
	let args = args::load();

	let script = read_script(&args)?;
	let mut replay = Replay::new(args.capacity)
		.with_context(|| format!("creating a queue with capacity {}", args.capacity))?;
	log::info!(
		"replaying {} commands against a queue of capacity {}",
		script.0.len(),
		args.capacity,
	);

	let steps = replay.run_script(&script);

	let mut stdout = std::io::stdout().lock();
	match args.format {
		OutputFormat::Text => {
			for step in &steps {
				writeln!(stdout, "{step}")?;
			}
		}
		OutputFormat::Json => {
			serde_json::to_writer_pretty(&mut stdout, &steps).context("writing JSON report")?;
			writeln!(stdout)?;
		}
	}

	Ok(())
}
