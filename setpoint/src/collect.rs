use crate::input::TargetReport;
use crate::msg::ActuatorControl;
use crossbeam_channel::{Receiver, Sender};
use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use std::thread;
use std::thread::JoinHandle;

/// Last target state received from the flight controller. Each inbound
/// report overwrites the fields it owns wholesale; last write wins.
#[derive(Debug, Clone)]
pub struct AutopilotTarget {
	pub position: Vector3<f32>,
	pub velocity: Vector3<f32>,
	pub acceleration: Vector3<f32>,
	pub orientation: UnitQuaternion<f32>,
	/// Roll, pitch, yaw derived from `orientation`.
	pub euler: Vector3<f32>,
	pub body_rate: Vector3<f32>,
	pub thrust: f32,
	pub actuator: ActuatorControl,
}

impl Default for AutopilotTarget {
	fn default() -> Self {
		Self {
			position: Vector3::zeros(),
			velocity: Vector3::zeros(),
			acceleration: Vector3::zeros(),
			orientation: UnitQuaternion::identity(),
			euler: Vector3::zeros(),
			body_rate: Vector3::zeros(),
			thrust: 0.,
			actuator: ActuatorControl::default(),
		}
	}
}

/// Buffers target reports sent asynchronously by input controllers.
pub trait Collector
	where Self: Sized + Send + 'static {
	fn collect(&mut self, report: TargetReport) -> AutopilotTarget;

	fn spawn(mut self,
			 report_receiver: Receiver<TargetReport>,
			 target_sender: Sender<AutopilotTarget>) -> JoinHandle<()> {
		thread::spawn(move || {
			for report in report_receiver {
				let target = self.collect(report);
				trace!("{:?}", &target);

				if let Err(e) = target_sender.send(target) {
					error!("{}", e);
				}
			}
		})
	}
}

pub struct TargetCollector {
	target: AutopilotTarget,
}

impl TargetCollector {
	pub fn new() -> Self {
		Self {
			target: AutopilotTarget::default(),
		}
	}
}

impl Collector for TargetCollector {
	fn collect(&mut self, report: TargetReport) -> AutopilotTarget {
		match report {
			TargetReport::Position(msg) => {
				self.target.position = Vector3::from(msg.position);
				self.target.velocity = Vector3::from(msg.velocity);
				self.target.acceleration = Vector3::from(msg.acceleration_or_force);
			}
			TargetReport::Attitude(msg) => {
				let [w, x, y, z] = msg.orientation;
				self.target.orientation =
					UnitQuaternion::from_quaternion(Quaternion::new(w, x, y, z));

				let (roll, pitch, yaw) = self.target.orientation.euler_angles();
				self.target.euler = Vector3::new(roll, pitch, yaw);

				self.target.body_rate = Vector3::from(msg.body_rate);
				self.target.thrust = msg.thrust;
			}
			TargetReport::Actuator(msg) => self.target.actuator = msg,
		}

		self.target.clone()
	}
}
