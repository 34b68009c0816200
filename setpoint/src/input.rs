use crate::msg::{ActuatorControl, AttitudeTarget, PositionTarget};
use crossbeam_channel::Sender;
use serde::{Deserialize, Serialize};
use std::{error::Error, thread, thread::JoinHandle, time::Duration};

/// Target state reported by the flight controller, one variant per
/// inbound channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TargetReport {
	Position(PositionTarget),
	Attitude(AttitudeTarget),
	Actuator(ActuatorControl),
}

/// Controllers that import target reports from a link.
pub trait InputController
	where Self: Sized + Send + 'static {

	/// Minimum duration to wait between two successive `read_input` calls.
	const DELAY: Option<Duration>;

	fn read_input(&mut self) -> Result<TargetReport, Box<dyn Error>>;

	fn read_loop(&mut self, report_sender: Sender<TargetReport>) -> ! {
		loop {
			match self.read_input() {
				Ok(report) => {
					if let Err(e) = report_sender.send(report) {
						error!("{}", e);
					}
				}
				Err(e) => error!("{}", e),
			}

			if let Some(delay) = Self::DELAY {
				thread::sleep(delay);
			}
		}
	}

	fn spawn(mut self, report_sender: Sender<TargetReport>) -> JoinHandle<()> {
		thread::spawn(move || self.read_loop(report_sender))
	}
}
