#[macro_use]
extern crate anyhow;

#[macro_use]
extern crate log;

#[macro_use]
extern crate lazy_static;

use crossbeam_channel::unbounded;
use nalgebra::Vector3;
use std::error::Error;
use std::thread;
use std::time::{Duration, Instant};

use setpoint::{
	ActuatorControl, AttitudeTarget, AutopilotTarget, Collector, CommandBool, CommandRelay,
	Dispatcher, InputController, LocalPose, MountControl, OutputController, PositionTarget,
	SetMode, SetpointDispatcher, SetpointFrame, TargetCollector, TargetReport,
};

use crate::flight_log::FlightLog;
use crate::input_controllers::json_line_input_controller::JsonLineInputController;
use crate::output_controllers::json_line_output_controller::JsonLineOutputController;

mod flight_log;
mod input_controllers;
mod offboard_config;
mod output_controllers;

fn topic(prefix: &str, name: &str) -> String {
	if prefix.is_empty() {
		name.to_owned()
	} else {
		format!("{}/{}", prefix, name)
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	std::env::set_var("RUST_BACKTRACE", "full");

	// Command line arguments
	const IDLE_ONLY_ARG: &'static str = "idle-only";

	let args = clap::App::new("Offboard")
		.version(env!("CARGO_PKG_VERSION"))
		.arg(clap::Arg::new(IDLE_ONLY_ARG)
			.long("idle-only")
			.about("Stream idle setpoints instead of the takeoff position")
			.takes_value(false))
		.get_matches();

	// Configuration
	let config = offboard_config::read()?;

	FlightLog::new().spawn(config.log_level_filter);

	info!("Offboard relay {}", env!("CARGO_PKG_VERSION"));

	let prefix = config.link_prefix.as_str();

	// Output controllers, one per outbound channel
	let (local_pose_sender, local_pose_receiver) = unbounded::<LocalPose>();
	JsonLineOutputController::new(topic(prefix, "mavros/setpoint_position/local"))
		.spawn(local_pose_receiver);

	let (raw_local_sender, raw_local_receiver) = unbounded::<PositionTarget>();
	JsonLineOutputController::new(topic(prefix, "mavros/setpoint_raw/local"))
		.spawn(raw_local_receiver);

	let (raw_attitude_sender, raw_attitude_receiver) = unbounded::<AttitudeTarget>();
	JsonLineOutputController::new(topic(prefix, "mavros/setpoint_raw/attitude"))
		.spawn(raw_attitude_receiver);

	let (actuator_sender, actuator_receiver) = unbounded::<ActuatorControl>();
	JsonLineOutputController::new(topic(prefix, "mavros/actuator_control"))
		.spawn(actuator_receiver);

	let (mount_control_sender, mount_control_receiver) = unbounded::<MountControl>();
	JsonLineOutputController::new(topic(prefix, "mavros/mount_control/command"))
		.spawn(mount_control_receiver);

	// Service endpoints
	let (arming_sender, arming_receiver) = unbounded::<CommandBool>();
	JsonLineOutputController::new(topic(prefix, "mavros/cmd/arming"))
		.spawn(arming_receiver);

	let (set_mode_sender, set_mode_receiver) = unbounded::<SetMode>();
	JsonLineOutputController::new(topic(prefix, "mavros/set_mode"))
		.spawn(set_mode_receiver);

	// Dispatcher
	let (setpoint_sender, setpoint_receiver) = unbounded::<SetpointFrame>();

	let dispatcher = SetpointDispatcher {
		local_pose_sender,
		raw_local_sender,
		raw_attitude_sender,
		actuator_sender,
		mount_control_sender,
	};

	dispatcher.spawn(setpoint_receiver);

	// Relay
	let relay = CommandRelay::new(setpoint_sender, arming_sender, set_mode_sender);

	// Collector
	let (report_sender, report_receiver) = unbounded::<TargetReport>();
	let (target_sender, target_receiver) = unbounded::<AutopilotTarget>();

	TargetCollector::new().spawn(report_receiver, target_sender);

	// Input controller
	JsonLineInputController::new().spawn(report_sender);

	// Observability: drain the cached target updates
	thread::spawn(move || {
		for target in target_receiver {
			debug!("Autopilot target: {:?}", target);
		}
	});

	// Offboard sequence
	relay.set_mode(&config.offboard_mode);
	relay.arm();

	let period = Duration::from_secs_f32(1. / config.setpoint_rate_hz);
	let deadline = Instant::now() + Duration::from_secs_f32(config.hold_seconds);
	let idle_only = args.is_present(IDLE_ONLY_ARG);

	if idle_only {
		info!("Streaming idle setpoints for {} s", config.hold_seconds);
	} else {
		info!(
			"Streaming takeoff position (0, 0, {}) for {} s",
			config.takeoff_height, config.hold_seconds
		);
	}

	while Instant::now() < deadline {
		if idle_only {
			relay.idle();
		} else {
			relay.send_position_setpoint(Vector3::new(0., 0., config.takeoff_height), 0.);
		}

		thread::sleep(period);
	}

	relay.idle();
	relay.disarm();

	// Let the output controllers drain
	thread::sleep(Duration::from_millis(100));

	Ok(())
}
