use chrono::{Datelike, Timelike};
use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::{
	collections::VecDeque,
	fs::{File, OpenOptions},
	io::Write,
	thread,
	thread::JoinHandle,
	time::{Duration, Instant},
};
use std::error::Error;

lazy_static! {
	static ref FLIGHT_LOG_CHANNEL: (Sender<Message>, Receiver<Message>) = unbounded::<Message>();
	static ref FLIGHT_LOG_LOGGER: FlightLogLogger = FlightLogLogger {
		start_instant: Instant::now()
	};
}

enum Message {
	Line(String),
	Flush,
}

/// Buffered logger writing every record to stdout and a timestamped file.
pub struct FlightLog {
	file: File,
	buffer: VecDeque<String>,
}

impl FlightLog {
	pub fn new() -> Self {
		let log_file_name = {
			let now = chrono::offset::Local::now();

			format!(
				"offboard_{}-{}-{}_{}-{}-{}.log",
				now.time().hour(),
				now.time().minute(),
				now.time().second(),
				now.date().day(),
				now.date().month(),
				now.date().year()
			)
		};

		FlightLog {
			buffer: VecDeque::<String>::new(),
			file: OpenOptions::new()
				.write(true)
				.create(true)
				.truncate(true)
				.open(log_file_name)
				.unwrap(),
		}
	}

	fn flush(&mut self) -> Result<(), Box<dyn Error>> {
		while let Some(line) = self.buffer.pop_front() {
			println!("{}", line);
			writeln!(self.file, "{}", line)?;
		}
		Ok(())
	}

	fn try_flush(&mut self) {
		if let Err(e) = self.flush() {
			self.buffer
				.push_back(format!("Failed to flush flight log: {}", e));
		}
	}

	fn receive_loop(&mut self) {
		const RECEIVE_TIMEOUT: Duration = Duration::from_millis(500);
		const MAX_BUFFER_LEN: usize = 8;

		while let Ok(message) = FLIGHT_LOG_CHANNEL.1.recv_timeout(RECEIVE_TIMEOUT) {
			match message {
				Message::Line(content) => self.buffer.push_back(content),
				Message::Flush => self.try_flush(),
			}

			if self.buffer.len() > MAX_BUFFER_LEN {
				self.try_flush();
			}
		}

		if !self.buffer.is_empty() {
			self.try_flush();
		}
	}

	pub fn spawn(mut self, level_filter: LevelFilter) -> JoinHandle<()> {
		log::set_logger(&*FLIGHT_LOG_LOGGER)
			.map(|()| log::set_max_level(level_filter))
			.unwrap();

		thread::spawn(move || loop {
			self.receive_loop()
		})
	}
}

struct FlightLogLogger {
	start_instant: Instant,
}

impl Log for FlightLogLogger {
	fn enabled(&self, _: &Metadata) -> bool {
		true
	}

	fn log(&self, record: &Record) {
		let elapsed = (Instant::now() - self.start_instant).as_secs_f32();

		// Errors carry their source location.
		let formatted = if record.metadata().level() == Level::Error {
			format!(
				"[{:.3}][{:?}][{}] {} ({:?}:{:?})",
				elapsed,
				record.level(),
				record.module_path_static().unwrap_or("unknown"),
				record.args(),
				record.file_static().unwrap_or("unknown"),
				record.line().unwrap_or(0)
			)
		} else {
			format!(
				"[{:.3}][{:?}][{}] {}",
				elapsed,
				record.level(),
				record.module_path_static().unwrap_or("unknown"),
				record.args(),
			)
		};

		FLIGHT_LOG_CHANNEL.0.send(Message::Line(formatted)).unwrap();
	}

	fn flush(&self) {
		FLIGHT_LOG_CHANNEL.0.send(Message::Flush).unwrap();
	}
}
