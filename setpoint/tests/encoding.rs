use crossbeam_channel::{unbounded, Receiver};
use nalgebra::{UnitQuaternion, Vector3, Vector4};
use setpoint::{
	AttitudeReference, AttitudeTarget, CommandBool, CommandRelay, PositionTarget, SetMode,
	SetpointFrame,
};

struct Harness {
	relay: CommandRelay,
	frames: Receiver<SetpointFrame>,
	arming: Receiver<CommandBool>,
	modes: Receiver<SetMode>,
}

fn harness() -> Harness {
	let (setpoint_sender, frames) = unbounded();
	let (arming_sender, arming) = unbounded();
	let (set_mode_sender, modes) = unbounded();

	Harness {
		relay: CommandRelay::new(setpoint_sender, arming_sender, set_mode_sender),
		frames,
		arming,
		modes,
	}
}

fn recv_local(harness: &Harness) -> PositionTarget {
	match harness.frames.try_recv().expect("no frame sent") {
		SetpointFrame::Local(msg) => msg,
		other => panic!("expected a local setpoint, got {:?}", other),
	}
}

fn recv_attitude(harness: &Harness) -> AttitudeTarget {
	match harness.frames.try_recv().expect("no frame sent") {
		SetpointFrame::Attitude(msg) => msg,
		other => panic!("expected an attitude setpoint, got {:?}", other),
	}
}

#[test]
fn idle_streams_zero_velocity_and_yaw_rate() {
	let h = harness();
	h.relay.idle();

	let msg = recv_local(&h);
	assert_eq!(msg.coordinate_frame, 1);
	assert_eq!(msg.type_mask, 0b0101_1100_0111);
	assert_eq!(msg.velocity, [0., 0., 0.]);
	assert_eq!(msg.yaw_rate, 0.);
}

#[test]
fn position_setpoint_selects_position_and_yaw() {
	let h = harness();
	h.relay.send_position_setpoint(Vector3::new(1., -2., 3.), 0.5);

	let msg = recv_local(&h);
	assert_eq!(msg.coordinate_frame, 1);
	assert_eq!(msg.type_mask, 0b1001_1111_1000);
	assert_eq!(msg.position, [1., -2., 3.]);
	assert_eq!(msg.velocity, [0., 0., 0.]);
	assert_eq!(msg.yaw, 0.5);
}

#[test]
fn velocity_setpoint_selects_velocity_and_yaw() {
	let h = harness();
	h.relay.send_velocity_setpoint(Vector3::new(0.1, 0.2, -0.3), -1.);

	let msg = recv_local(&h);
	assert_eq!(msg.coordinate_frame, 1);
	assert_eq!(msg.type_mask, 0b1001_1100_0111);
	assert_eq!(msg.velocity, [0.1, 0.2, -0.3]);
	assert_eq!(msg.yaw, -1.);
}

#[test]
fn velocity_yaw_rate_setpoint_swaps_yaw_for_yaw_rate() {
	let h = harness();
	h.relay
		.send_velocity_setpoint_yaw_rate(Vector3::new(1., 1., 0.), 0.2);

	let msg = recv_local(&h);
	assert_eq!(msg.type_mask, 0b0101_1100_0111);
	assert_eq!(msg.velocity, [1., 1., 0.]);
	assert_eq!(msg.yaw_rate, 0.2);
	assert_eq!(msg.yaw, 0.);
}

#[test]
fn body_velocity_setpoint_uses_body_frame_and_position_slots() {
	let h = harness();
	h.relay
		.send_velocity_setpoint_body(Vector3::new(2., 0., -1.), 0.1);

	let msg = recv_local(&h);
	assert_eq!(msg.coordinate_frame, 8);
	assert_eq!(msg.type_mask, 0b1001_1100_0111);
	assert_eq!(msg.position, [2., 0., -1.]);
	assert_eq!(msg.velocity, [0., 0., 0.]);
	assert_eq!(msg.yaw, 0.1);
}

#[test]
fn velocity_xy_position_z_setpoint_splits_the_state_vector() {
	let h = harness();
	h.relay
		.send_velocity_xy_position_z_setpoint(Vector3::new(0.4, -0.4, 2.), 1.2);

	let msg = recv_local(&h);
	assert_eq!(msg.coordinate_frame, 1);
	assert_eq!(msg.type_mask, 0b1001_1100_0011);
	assert_eq!(msg.velocity, [0.4, -0.4, 0.]);
	assert_eq!(msg.position, [0., 0., 2.]);
	assert_eq!(msg.yaw, 1.2);
}

#[test]
fn velocity_xy_position_z_yaw_rate_setpoint_splits_the_state_vector() {
	let h = harness();
	h.relay
		.send_velocity_xy_position_z_setpoint_yaw_rate(Vector3::new(0.4, -0.4, 2.), -0.2);

	let msg = recv_local(&h);
	assert_eq!(msg.type_mask, 0b0101_1100_0011);
	assert_eq!(msg.velocity, [0.4, -0.4, 0.]);
	assert_eq!(msg.position, [0., 0., 2.]);
	assert_eq!(msg.yaw_rate, -0.2);
}

#[test]
fn position_velocity_setpoint_supplies_both_triplets() {
	let h = harness();
	h.relay.send_position_velocity_setpoint(
		Vector3::new(1., 2., 3.),
		Vector3::new(4., 5., 6.),
		0.7,
	);

	let msg = recv_local(&h);
	assert_eq!(msg.type_mask, 0b1001_1100_0000);
	assert_eq!(msg.position, [1., 2., 3.]);
	assert_eq!(msg.velocity, [4., 5., 6.]);
	assert_eq!(msg.yaw, 0.7);
}

#[test]
fn acceleration_setpoint_is_not_a_force_setpoint() {
	let h = harness();
	h.relay
		.send_acceleration_setpoint(Vector3::new(0., 0., 9.8), 0.);

	let msg = recv_local(&h);
	assert_eq!(msg.type_mask, 0b1000_0011_1111);
	// Bit 10 (force) clear.
	assert_eq!(msg.type_mask & (1 << 9), 0);
	assert_eq!(msg.acceleration_or_force, [0., 0., 9.8]);
}

#[test]
fn attitude_setpoint_supplies_orientation_and_throttle() {
	let h = harness();
	let reference = AttitudeReference {
		orientation: UnitQuaternion::from_euler_angles(0., 0., std::f32::consts::FRAC_PI_2),
		throttle: 0.55,
	};
	h.relay.send_attitude_setpoint(&reference);

	let msg = recv_attitude(&h);
	assert_eq!(msg.type_mask, 0b0011_1111);
	assert_eq!(msg.thrust, 0.55);
	assert_eq!(msg.body_rate, [0., 0., 0.]);

	// [w, x, y, z] of a 90 degree yaw rotation.
	let half = std::f32::consts::FRAC_PI_4;
	assert!((msg.orientation[0] - half.cos()).abs() < 1e-6);
	assert!((msg.orientation[3] - half.sin()).abs() < 1e-6);
}

#[test]
fn attitude_yaw_rate_setpoint_adds_the_z_body_rate() {
	let h = harness();
	let reference = AttitudeReference {
		orientation: UnitQuaternion::identity(),
		throttle: 0.4,
	};
	h.relay.send_attitude_setpoint_yaw_rate(&reference, 0.3);

	let msg = recv_attitude(&h);
	assert_eq!(msg.type_mask, 0b0011_1011);
	assert_eq!(msg.body_rate, [0., 0., 0.3]);
	assert_eq!(msg.thrust, 0.4);
}

#[test]
fn body_rate_setpoint_supplies_rates_and_thrust() {
	let h = harness();
	h.relay
		.send_body_rate_setpoint(Vector3::new(0.1, -0.1, 0.2), 0.6);

	let msg = recv_attitude(&h);
	assert_eq!(msg.type_mask, 0b1011_1000);
	assert_eq!(msg.body_rate, [0.1, -0.1, 0.2]);
	assert_eq!(msg.thrust, 0.6);
}

#[test]
fn actuator_setpoint_fills_the_first_four_slots() {
	let h = harness();
	h.relay
		.send_actuator_setpoint(Vector4::new(0.1, 0.2, 0.3, 0.4));

	let msg = match h.frames.try_recv().unwrap() {
		SetpointFrame::Actuator(msg) => msg,
		other => panic!("expected an actuator setpoint, got {:?}", other),
	};
	assert_eq!(msg.group_mix, 0);
	assert_eq!(msg.controls, [0.1, 0.2, 0.3, 0.4, 0., 0., 0., 0.]);
}

#[test]
fn mount_control_is_always_mavlink_targeting() {
	let h = harness();
	h.relay.send_mount_control(Vector3::new(-0.5, 0.1, 1.5));

	let msg = match h.frames.try_recv().unwrap() {
		SetpointFrame::Mount(msg) => msg,
		other => panic!("expected a mount command, got {:?}", other),
	};
	assert_eq!(msg.mode, 2);
	assert_eq!(msg.pitch, -0.5);
	assert_eq!(msg.roll, 0.1);
	assert_eq!(msg.yaw, 1.5);
}

#[test]
fn local_pose_passes_through() {
	let h = harness();
	h.relay
		.send_local_pose(Vector3::new(1., 2., 3.), UnitQuaternion::identity());

	let msg = match h.frames.try_recv().unwrap() {
		SetpointFrame::LocalPose(msg) => msg,
		other => panic!("expected a pose, got {:?}", other),
	};
	assert_eq!(msg.position, [1., 2., 3.]);
	assert_eq!(msg.orientation, [1., 0., 0., 0.]);
}

#[test]
fn arming_and_mode_requests_pass_through() {
	let h = harness();

	h.relay.arm();
	h.relay.disarm();
	h.relay.set_mode("OFFBOARD");

	assert_eq!(h.arming.try_recv().unwrap(), CommandBool { value: true });
	assert_eq!(h.arming.try_recv().unwrap(), CommandBool { value: false });
	assert_eq!(
		h.modes.try_recv().unwrap(),
		SetMode {
			base_mode: 0,
			custom_mode: "OFFBOARD".to_owned(),
		}
	);
}

#[test]
fn every_send_is_exactly_one_frame() {
	let h = harness();

	h.relay.idle();
	h.relay.send_position_setpoint(Vector3::zeros(), 0.);
	h.relay.send_velocity_setpoint(Vector3::zeros(), 0.);
	h.relay.send_actuator_setpoint(Vector4::zeros());
	h.relay.send_mount_control(Vector3::zeros());

	assert_eq!(h.frames.len(), 5);
}
