use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use paste::paste;
use serde_with::DeserializeFromStr;
use thiserror::Error;

macro_rules! str_enum {
	(#[description = $descr:tt] $(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident = $variant_str:tt),* $(,)? }) => { paste! {
		$(#[$meta])* $vis enum $name {
			$($variant,)*
		}

		#[derive(Debug, Error)]
		#[error("unrecognized {} {0:?}", Self::DESCRIPTION)]
		pub struct [<$name FromStrError>](Box<str>);

		impl [<$name FromStrError>] {
			const DESCRIPTION: &str = $descr;
		}

		impl FromStr for $name {
			type Err = [<$name FromStrError>];

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Ok(match s {
					$($variant_str => Self::$variant,)*
					_ => return Err([<$name FromStrError>](s.into())),
				})
			}
		}

		impl $name {
			pub fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $variant_str,)*
				}
			}
		}
	} }
}

str_enum! {
#[description = "command"]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
	Put = "put",
	Get = "get",
	Peek = "peek",
	Size = "size",
	Capacity = "capacity",
	Empty = "empty",
	Full = "full",
	First = "first",
	Last = "last",
	Clear = "clear",
	Dump = "dump",
}
}

/// One line of a script. Only `put` takes an argument; a bare `put` submits an absent element.
#[derive(Debug, Clone, PartialEq, Eq, DeserializeFromStr)]
pub struct Command {
	pub verb: Verb,
	pub argument: Option<Box<str>>,
}

#[derive(Debug, Error)]
pub enum ParseError {
	#[error("empty command")]
	Empty,
	#[error(transparent)]
	Verb(#[from] VerbFromStrError),
	#[error("{verb} takes no argument, got {argument:?}")]
	UnexpectedArgument { verb: &'static str, argument: Box<str> },
}

impl FromStr for Command {
	type Err = ParseError;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		let raw = raw.trim();
		if raw.is_empty() {
			return Err(ParseError::Empty);
		}

		let (verb, argument) = match raw.split_once(char::is_whitespace) {
			Some((verb, argument)) => (verb, Some(argument.trim_start())),
			None => (raw, None),
		};
		let verb = verb.parse::<Verb>()?;

		match (verb, argument) {
			(Verb::Put, argument) => Ok(Self {
				verb,
				argument: argument.map(Box::from),
			}),
			(_, None) => Ok(Self {
				verb,
				argument: None,
			}),
			(_, Some(argument)) => Err(ParseError::UnexpectedArgument {
				verb: verb.as_str(),
				argument: argument.into(),
			}),
		}
	}
}

impl Display for Command {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str(self.verb.as_str())?;
		if let Some(argument) = &self.argument {
			write!(formatter, " {argument}")?;
		}
		Ok(())
	}
}
