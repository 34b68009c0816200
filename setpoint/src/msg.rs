use serde::{Deserialize, Serialize};

/// Gimbal mount driven through MAVLink targeting angles.
pub const MOUNT_MODE_MAVLINK_TARGETING: u8 = 2;

/// SET_POSITION_TARGET_LOCAL_NED / POSITION_TARGET_LOCAL_NED payload.
/// Fields not selected by `type_mask` are meaningless to the receiver.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionTarget {
	pub coordinate_frame: u8,
	pub type_mask: u16,
	pub position: [f32; 3],
	pub velocity: [f32; 3],
	pub acceleration_or_force: [f32; 3],
	pub yaw: f32,
	pub yaw_rate: f32,
}

/// SET_ATTITUDE_TARGET / ATTITUDE_TARGET payload. Orientation is stored
/// as `[w, x, y, z]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttitudeTarget {
	pub type_mask: u8,
	pub orientation: [f32; 4],
	pub body_rate: [f32; 3],
	pub thrust: f32,
}

/// SET_ACTUATOR_CONTROL_TARGET / ACTUATOR_CONTROL_TARGET payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActuatorControl {
	pub group_mix: u8,
	pub controls: [f32; 8],
}

/// Mount (gimbal) angle command.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MountControl {
	pub mode: u8,
	pub pitch: f32,
	pub roll: f32,
	pub yaw: f32,
}

/// Plain pose for the position setpoint channel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalPose {
	pub position: [f32; 3],
	pub orientation: [f32; 4],
}

/// Arming / disarming service request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandBool {
	pub value: bool,
}

/// Flight mode switch service request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetMode {
	pub base_mode: u8,
	pub custom_mode: String,
}
