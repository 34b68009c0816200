use serde::Serialize;
use setpoint::OutputController;
use std::fmt::Debug;
use std::io;
use std::io::Write;
use std::marker::PhantomData;

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
	topic: &'a str,
	msg: &'a T,
}

/// Writes each message as one JSON line on stdout, tagged with its topic.
/// Stands in for a real link when bridging to a simulator.
pub struct JsonLineOutputController<T> {
	topic: String,
	_message: PhantomData<T>,
}

impl<T> JsonLineOutputController<T> {
	pub fn new(topic: String) -> Self {
		Self {
			topic,
			_message: PhantomData,
		}
	}
}

impl<T: Serialize + Debug + Send + 'static> OutputController<T> for JsonLineOutputController<T> {
	fn write_output(&mut self, output: T) -> anyhow::Result<()> {
		let line = serde_json::to_string(&Envelope {
			topic: &self.topic,
			msg: &output,
		})?;

		let stdout = io::stdout();
		let mut handle = stdout.lock();
		writeln!(handle, "{}", line)?;

		Ok(())
	}
}
