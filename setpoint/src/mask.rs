use bitflags::bitflags;

/// MAV_FRAME values accepted by SET_POSITION_TARGET_LOCAL_NED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CoordinateFrame {
	LocalNed = 1,
	BodyNed = 8,
}

bitflags! {
	/// Type mask of SET_POSITION_TARGET_LOCAL_NED. The convention is
	/// inverted: a set bit tells the flight controller to ignore the
	/// corresponding field. `FORCE_SET` must stay clear, the relay never
	/// sends force setpoints.
	pub struct PositionTargetTypeMask: u16 {
		const IGNORE_PX = 1 << 0;
		const IGNORE_PY = 1 << 1;
		const IGNORE_PZ = 1 << 2;
		const IGNORE_VX = 1 << 3;
		const IGNORE_VY = 1 << 4;
		const IGNORE_VZ = 1 << 5;
		const IGNORE_AFX = 1 << 6;
		const IGNORE_AFY = 1 << 7;
		const IGNORE_AFZ = 1 << 8;
		const FORCE_SET = 1 << 9;
		const IGNORE_YAW = 1 << 10;
		const IGNORE_YAW_RATE = 1 << 11;

		const IGNORE_POSITION = Self::IGNORE_PX.bits | Self::IGNORE_PY.bits | Self::IGNORE_PZ.bits;
		const IGNORE_VELOCITY = Self::IGNORE_VX.bits | Self::IGNORE_VY.bits | Self::IGNORE_VZ.bits;
		const IGNORE_ACCELERATION = Self::IGNORE_AFX.bits | Self::IGNORE_AFY.bits | Self::IGNORE_AFZ.bits;

		/// Supplies position xyz and yaw.
		const POSITION_YAW = Self::IGNORE_VELOCITY.bits
			| Self::IGNORE_ACCELERATION.bits
			| Self::IGNORE_YAW_RATE.bits;
		/// Supplies velocity xyz and yaw.
		const VELOCITY_YAW = Self::IGNORE_POSITION.bits
			| Self::IGNORE_ACCELERATION.bits
			| Self::IGNORE_YAW_RATE.bits;
		/// Supplies velocity xyz and yaw rate. Also the idle mask (all
		/// supplied values zero).
		const VELOCITY_YAW_RATE = Self::IGNORE_POSITION.bits
			| Self::IGNORE_ACCELERATION.bits
			| Self::IGNORE_YAW.bits;
		/// Supplies velocity xy, position z and yaw (vz sent as zero).
		const VELOCITY_XY_POSITION_Z_YAW = Self::IGNORE_PX.bits
			| Self::IGNORE_PY.bits
			| Self::IGNORE_ACCELERATION.bits
			| Self::IGNORE_YAW_RATE.bits;
		/// Supplies velocity xy, position z and yaw rate (vz sent as zero).
		const VELOCITY_XY_POSITION_Z_YAW_RATE = Self::IGNORE_PX.bits
			| Self::IGNORE_PY.bits
			| Self::IGNORE_ACCELERATION.bits
			| Self::IGNORE_YAW.bits;
		/// Supplies position xyz, velocity xyz and yaw.
		const POSITION_VELOCITY_YAW = Self::IGNORE_ACCELERATION.bits
			| Self::IGNORE_YAW_RATE.bits;
		/// Supplies acceleration xyz and yaw.
		const ACCELERATION_YAW = Self::IGNORE_POSITION.bits
			| Self::IGNORE_VELOCITY.bits
			| Self::IGNORE_YAW_RATE.bits;
	}
}

bitflags! {
	/// Type mask of SET_ATTITUDE_TARGET, same inverted convention. Bits 3
	/// and 4 are reserved by the protocol and sent set, as ground control
	/// stacks expect.
	pub struct AttitudeTargetTypeMask: u8 {
		const IGNORE_ROLL_RATE = 1 << 0;
		const IGNORE_PITCH_RATE = 1 << 1;
		const IGNORE_YAW_RATE = 1 << 2;
		const RESERVED_4 = 1 << 3;
		const RESERVED_5 = 1 << 4;
		const THRUST_BODY_SET = 1 << 5;
		const IGNORE_THRUST = 1 << 6;
		const IGNORE_ATTITUDE = 1 << 7;

		const IGNORE_BODY_RATE = Self::IGNORE_ROLL_RATE.bits
			| Self::IGNORE_PITCH_RATE.bits
			| Self::IGNORE_YAW_RATE.bits;

		/// Supplies orientation quaternion and throttle.
		const ATTITUDE_THROTTLE = Self::IGNORE_BODY_RATE.bits
			| Self::RESERVED_4.bits
			| Self::RESERVED_5.bits
			| Self::THRUST_BODY_SET.bits;
		/// Supplies orientation quaternion, throttle and body yaw rate
		/// (roll/pitch rates sent as zero).
		const ATTITUDE_THROTTLE_YAW_RATE = Self::IGNORE_ROLL_RATE.bits
			| Self::IGNORE_PITCH_RATE.bits
			| Self::RESERVED_4.bits
			| Self::RESERVED_5.bits
			| Self::THRUST_BODY_SET.bits;
		/// Supplies body rates xyz and throttle.
		const BODY_RATE_THROTTLE = Self::RESERVED_4.bits
			| Self::RESERVED_5.bits
			| Self::THRUST_BODY_SET.bits
			| Self::IGNORE_ATTITUDE.bits;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn position_masks_are_bit_exact() {
		assert_eq!(PositionTargetTypeMask::POSITION_YAW.bits(), 0b1001_1111_1000);
		assert_eq!(PositionTargetTypeMask::VELOCITY_YAW.bits(), 0b1001_1100_0111);
		assert_eq!(PositionTargetTypeMask::VELOCITY_YAW_RATE.bits(), 0b0101_1100_0111);
		assert_eq!(
			PositionTargetTypeMask::VELOCITY_XY_POSITION_Z_YAW.bits(),
			0b1001_1100_0011
		);
		assert_eq!(
			PositionTargetTypeMask::VELOCITY_XY_POSITION_Z_YAW_RATE.bits(),
			0b0101_1100_0011
		);
		assert_eq!(
			PositionTargetTypeMask::POSITION_VELOCITY_YAW.bits(),
			0b1001_1100_0000
		);
		assert_eq!(PositionTargetTypeMask::ACCELERATION_YAW.bits(), 0b1000_0011_1111);
	}

	#[test]
	fn force_bit_is_never_set() {
		for mask in &[
			PositionTargetTypeMask::POSITION_YAW,
			PositionTargetTypeMask::VELOCITY_YAW,
			PositionTargetTypeMask::VELOCITY_YAW_RATE,
			PositionTargetTypeMask::VELOCITY_XY_POSITION_Z_YAW,
			PositionTargetTypeMask::VELOCITY_XY_POSITION_Z_YAW_RATE,
			PositionTargetTypeMask::POSITION_VELOCITY_YAW,
			PositionTargetTypeMask::ACCELERATION_YAW,
		] {
			assert!(!mask.contains(PositionTargetTypeMask::FORCE_SET));
		}
	}

	#[test]
	fn attitude_masks_are_bit_exact() {
		assert_eq!(AttitudeTargetTypeMask::ATTITUDE_THROTTLE.bits(), 0b0011_1111);
		assert_eq!(
			AttitudeTargetTypeMask::ATTITUDE_THROTTLE_YAW_RATE.bits(),
			0b0011_1011
		);
		assert_eq!(AttitudeTargetTypeMask::BODY_RATE_THROTTLE.bits(), 0b1011_1000);
	}

	#[test]
	fn frame_values_match_protocol() {
		assert_eq!(CoordinateFrame::LocalNed as u8, 1);
		assert_eq!(CoordinateFrame::BodyNed as u8, 8);
	}
}
