use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use bqueue::{BoundedQueue, Error as QueueError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::command::{Command, ParseError, Verb};

mod command;

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Script(pub Vec<Command>);

#[derive(Debug, Error)]
#[error("line {line}: {source}")]
pub struct ScriptError {
	line: usize,
	#[source]
	source: ParseError,
}

/// Line-oriented form: one command per line, `#` starts a comment line.
impl FromStr for Script {
	type Err = ScriptError;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		raw
			.lines()
			.enumerate()
			.map(|(index, line)| (index + 1, line.trim()))
			.filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
			.map(|(line, raw)| raw.parse::<Command>().map_err(|source| ScriptError { line, source }))
			.collect::<Result<Vec<_>, _>>()
			.map(Self)
	}
}

impl Script {
	/// JSON form: an array of command strings.
	pub fn from_json(raw: &str) -> serde_json::Result<Self> {
		serde_json::from_str(raw)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
	Done,
	Element(Box<str>),
	Nothing,
	Count(usize),
	Flag(bool),
	Contents(Vec<Box<str>>),
	Failed(QueueError),
}

impl Display for Outcome {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Done => formatter.write_str("ok"),
			Self::Element(element) => formatter.write_str(element),
			Self::Nothing => formatter.write_str("none"),
			Self::Count(count) => count.fmt(formatter),
			Self::Flag(flag) => flag.fmt(formatter),
			Self::Contents(contents) => {
				formatter.write_str("[")?;
				let [first, rest @ ..] = contents.as_slice() else { return formatter.write_str("]"); };
				formatter.write_str(first)?;
				for element in rest {
					write!(formatter, ", {element}")?;
				}
				formatter.write_str("]")
			}
			Self::Failed(error) => write!(formatter, "error: {error}"),
		}
	}
}

#[derive(Debug, Serialize)]
pub struct Step {
	pub command: String,
	pub outcome: Outcome,
}

impl Display for Step {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "{} -> {}", self.command, self.outcome)
	}
}

/// Drives a queue of strings with script commands. A refused operation is recorded and the replay carries on.
#[derive(Debug)]
pub struct Replay {
	queue: BoundedQueue<Box<str>>,
}

impl Replay {
	pub fn new(capacity: usize) -> Result<Self, QueueError> {
		Ok(Self {
			queue: BoundedQueue::new(capacity)?,
		})
	}

	pub fn run(&mut self, command: &Command) -> Outcome {
		let queue = &mut self.queue;
		match command.verb {
			Verb::Put => match queue.put_opt(command.argument.clone()) {
				Ok(()) => Outcome::Done,
				Err(error) => Outcome::Failed(error),
			},
			Verb::Get => match queue.get() {
				Ok(element) => Outcome::Element(element),
				Err(error) => Outcome::Failed(error),
			},
			Verb::Peek => queue
				.peek()
				.map_or(Outcome::Nothing, |element| Outcome::Element(element.clone())),
			Verb::Size => Outcome::Count(queue.len()),
			Verb::Capacity => Outcome::Count(queue.capacity()),
			Verb::Empty => Outcome::Flag(queue.is_empty()),
			Verb::Full => Outcome::Flag(queue.is_full()),
			Verb::First => Outcome::Count(queue.first_index()),
			Verb::Last => Outcome::Count(queue.last_index()),
			Verb::Clear => {
				queue.clear();
				Outcome::Done
			}
			Verb::Dump => Outcome::Contents(queue.iter().cloned().collect()),
		}
	}

	pub fn run_script(&mut self, script: &Script) -> Vec<Step> {
		script
			.0
			.iter()
			.map(|command| {
				let outcome = self.run(command);
				log::debug!("{command} -> {outcome}");
				Step {
					command: command.to_string(),
					outcome,
				}
			})
			.collect()
	}
}
