use setpoint::{InputController, TargetReport};
use std::error::Error;
use std::io;
use std::io::BufRead;
use std::time::Duration;

/// Reads flight controller target reports as JSON lines on stdin, one
/// `TargetReport` per line.
pub struct JsonLineInputController {
	reader: io::BufReader<io::Stdin>,
}

impl JsonLineInputController {
	pub fn new() -> Self {
		Self {
			reader: io::BufReader::new(io::stdin()),
		}
	}
}

impl InputController for JsonLineInputController {
	const DELAY: Option<Duration> = None;

	fn read_input(&mut self) -> Result<TargetReport, Box<dyn Error>> {
		let mut line = String::new();

		loop {
			line.clear();

			let n = self.reader.read_line(&mut line)?;
			if n == 0 {
				// Stdin closed, nothing more will arrive.
				std::thread::sleep(Duration::from_secs(1));
				continue;
			}

			if line.trim().is_empty() {
				continue;
			}

			return Ok(serde_json::from_str::<TargetReport>(line.trim())?);
		}
	}
}
