use crate::dispatch::SetpointFrame;
use crate::mask::{AttitudeTargetTypeMask, CoordinateFrame, PositionTargetTypeMask};
use crate::msg::{
	ActuatorControl, AttitudeTarget, CommandBool, LocalPose, MountControl, PositionTarget,
	SetMode, MOUNT_MODE_MAVLINK_TARGETING,
};
use crossbeam_channel::Sender;
use nalgebra::{UnitQuaternion, Vector3, Vector4};

/// Desired attitude produced by an outer-loop controller.
#[derive(Debug, Clone)]
pub struct AttitudeReference {
	pub orientation: UnitQuaternion<f32>,
	pub throttle: f32,
}

/// Encodes high-level motion commands into wire setpoints and hands them
/// to the dispatch channel. Every send operation is fire-and-forget:
/// given finite inputs it builds exactly one message; a closed channel is
/// logged and otherwise invisible to the caller.
pub struct CommandRelay {
	setpoint_sender: Sender<SetpointFrame>,
	arming_sender: Sender<CommandBool>,
	set_mode_sender: Sender<SetMode>,
}

fn vec3(v: &Vector3<f32>) -> [f32; 3] {
	[v.x, v.y, v.z]
}

fn quat(q: &UnitQuaternion<f32>) -> [f32; 4] {
	let c = &q.quaternion().coords;
	[c.w, c.x, c.y, c.z]
}

impl CommandRelay {
	pub fn new(setpoint_sender: Sender<SetpointFrame>,
			   arming_sender: Sender<CommandBool>,
			   set_mode_sender: Sender<SetMode>) -> Self {
		Self {
			setpoint_sender,
			arming_sender,
			set_mode_sender,
		}
	}

	fn send(&self, frame: SetpointFrame) {
		if let Err(e) = self.setpoint_sender.send(frame) {
			error!("Dropped setpoint frame: {}", e);
		}
	}

	/// Zero velocity, zero yaw rate. Keeps the offboard stream alive
	/// without commanding motion.
	pub fn idle(&self) {
		self.send(SetpointFrame::Local(PositionTarget {
			coordinate_frame: CoordinateFrame::LocalNed as u8,
			type_mask: PositionTargetTypeMask::VELOCITY_YAW_RATE.bits(),
			..PositionTarget::default()
		}));
	}

	/// Position xyz + yaw, local frame.
	pub fn send_position_setpoint(&self, position: Vector3<f32>, yaw: f32) {
		self.send(SetpointFrame::Local(PositionTarget {
			coordinate_frame: CoordinateFrame::LocalNed as u8,
			type_mask: PositionTargetTypeMask::POSITION_YAW.bits(),
			position: vec3(&position),
			yaw,
			..PositionTarget::default()
		}));
	}

	/// Velocity xyz + yaw, local frame.
	pub fn send_velocity_setpoint(&self, velocity: Vector3<f32>, yaw: f32) {
		self.send(SetpointFrame::Local(PositionTarget {
			coordinate_frame: CoordinateFrame::LocalNed as u8,
			type_mask: PositionTargetTypeMask::VELOCITY_YAW.bits(),
			velocity: vec3(&velocity),
			yaw,
			..PositionTarget::default()
		}));
	}

	/// Velocity xyz + yaw rate, local frame.
	pub fn send_velocity_setpoint_yaw_rate(&self, velocity: Vector3<f32>, yaw_rate: f32) {
		self.send(SetpointFrame::Local(PositionTarget {
			coordinate_frame: CoordinateFrame::LocalNed as u8,
			type_mask: PositionTargetTypeMask::VELOCITY_YAW_RATE.bits(),
			velocity: vec3(&velocity),
			yaw_rate,
			..PositionTarget::default()
		}));
	}

	/// Velocity xyz + yaw, body frame. The velocity rides in the position
	/// slots while the mask selects position.
	// TODO: verify against the flight stack that FRAME_BODY_NED expects
	// body velocity in the position fields; the mask/field pairing looks
	// like a slot mix-up.
	pub fn send_velocity_setpoint_body(&self, velocity: Vector3<f32>, yaw: f32) {
		self.send(SetpointFrame::Local(PositionTarget {
			coordinate_frame: CoordinateFrame::BodyNed as u8,
			type_mask: PositionTargetTypeMask::VELOCITY_YAW.bits(),
			position: vec3(&velocity),
			yaw,
			..PositionTarget::default()
		}));
	}

	/// Velocity xy + position z + yaw, local frame. `state` is
	/// interpreted as `[vx, vy, pz]`; vz is supplied as zero.
	pub fn send_velocity_xy_position_z_setpoint(&self, state: Vector3<f32>, yaw: f32) {
		self.send(SetpointFrame::Local(PositionTarget {
			coordinate_frame: CoordinateFrame::LocalNed as u8,
			type_mask: PositionTargetTypeMask::VELOCITY_XY_POSITION_Z_YAW.bits(),
			position: [0., 0., state.z],
			velocity: [state.x, state.y, 0.],
			yaw,
			..PositionTarget::default()
		}));
	}

	/// Velocity xy + position z + yaw rate, local frame. `state` is
	/// interpreted as `[vx, vy, pz]`; vz is supplied as zero.
	pub fn send_velocity_xy_position_z_setpoint_yaw_rate(&self,
														 state: Vector3<f32>,
														 yaw_rate: f32) {
		self.send(SetpointFrame::Local(PositionTarget {
			coordinate_frame: CoordinateFrame::LocalNed as u8,
			type_mask: PositionTargetTypeMask::VELOCITY_XY_POSITION_Z_YAW_RATE.bits(),
			position: [0., 0., state.z],
			velocity: [state.x, state.y, 0.],
			yaw_rate,
			..PositionTarget::default()
		}));
	}

	/// Position xyz + velocity xyz + yaw, local frame.
	pub fn send_position_velocity_setpoint(&self,
										   position: Vector3<f32>,
										   velocity: Vector3<f32>,
										   yaw: f32) {
		self.send(SetpointFrame::Local(PositionTarget {
			coordinate_frame: CoordinateFrame::LocalNed as u8,
			type_mask: PositionTargetTypeMask::POSITION_VELOCITY_YAW.bits(),
			position: vec3(&position),
			velocity: vec3(&velocity),
			yaw,
			..PositionTarget::default()
		}));
	}

	/// Acceleration xyz + yaw, local frame. Sent as acceleration, never
	/// as force.
	pub fn send_acceleration_setpoint(&self, acceleration: Vector3<f32>, yaw: f32) {
		self.send(SetpointFrame::Local(PositionTarget {
			coordinate_frame: CoordinateFrame::LocalNed as u8,
			type_mask: PositionTargetTypeMask::ACCELERATION_YAW.bits(),
			acceleration_or_force: vec3(&acceleration),
			yaw,
			..PositionTarget::default()
		}));
	}

	/// Pass-through pose for the position setpoint channel.
	pub fn send_local_pose(&self, position: Vector3<f32>, orientation: UnitQuaternion<f32>) {
		self.send(SetpointFrame::LocalPose(LocalPose {
			position: vec3(&position),
			orientation: quat(&orientation),
		}));
	}

	/// Orientation quaternion + throttle.
	pub fn send_attitude_setpoint(&self, reference: &AttitudeReference) {
		self.send(SetpointFrame::Attitude(AttitudeTarget {
			type_mask: AttitudeTargetTypeMask::ATTITUDE_THROTTLE.bits(),
			orientation: quat(&reference.orientation),
			thrust: reference.throttle,
			..AttitudeTarget::default()
		}));
	}

	/// Orientation quaternion + throttle + body yaw rate.
	pub fn send_attitude_setpoint_yaw_rate(&self,
										   reference: &AttitudeReference,
										   yaw_rate: f32) {
		self.send(SetpointFrame::Attitude(AttitudeTarget {
			type_mask: AttitudeTargetTypeMask::ATTITUDE_THROTTLE_YAW_RATE.bits(),
			orientation: quat(&reference.orientation),
			body_rate: [0., 0., yaw_rate],
			thrust: reference.throttle,
		}));
	}

	/// Body rates xyz + throttle.
	pub fn send_body_rate_setpoint(&self, body_rate: Vector3<f32>, thrust: f32) {
		self.send(SetpointFrame::Attitude(AttitudeTarget {
			type_mask: AttitudeTargetTypeMask::BODY_RATE_THROTTLE.bits(),
			body_rate: vec3(&body_rate),
			thrust,
			..AttitudeTarget::default()
		}));
	}

	/// Direct actuator mix, group 0. Slots 4 to 7 are always zero.
	pub fn send_actuator_setpoint(&self, actuator: Vector4<f32>) {
		self.send(SetpointFrame::Actuator(ActuatorControl {
			group_mix: 0,
			controls: [actuator.x, actuator.y, actuator.z, actuator.w, 0., 0., 0., 0.],
		}));
	}

	/// Gimbal angles, MAVLink targeting mode. Slots 0/1/2 map to
	/// pitch/roll/yaw.
	// TODO: confirm slot 1 really drives roll; the ground segment labels
	// that slot yaw.
	pub fn send_mount_control(&self, gimbal_attitude: Vector3<f32>) {
		self.send(SetpointFrame::Mount(MountControl {
			mode: MOUNT_MODE_MAVLINK_TARGETING,
			pitch: gimbal_attitude.x,
			roll: gimbal_attitude.y,
			yaw: gimbal_attitude.z,
		}));
	}

	pub fn arm(&self) {
		self.send_arming(true);
	}

	pub fn disarm(&self) {
		self.send_arming(false);
	}

	fn send_arming(&self, value: bool) {
		if let Err(e) = self.arming_sender.send(CommandBool { value }) {
			error!("Dropped arming request: {}", e);
		}
	}

	pub fn set_mode(&self, custom_mode: &str) {
		let request = SetMode {
			base_mode: 0,
			custom_mode: custom_mode.to_owned(),
		};

		if let Err(e) = self.set_mode_sender.send(request) {
			error!("Dropped mode request: {}", e);
		}
	}
}
