use crate::msg::{ActuatorControl, AttitudeTarget, LocalPose, MountControl, PositionTarget};
use anyhow::anyhow;
use crossbeam_channel::{Receiver, Sender};
use std::fmt::Debug;
use std::thread;
use std::thread::JoinHandle;

pub trait OutputFrame: Debug {}

pub trait Dispatcher<T: OutputFrame + Send + Sized + 'static>
	where Self: Sized + Send + 'static {

	fn dispatch(&self, output_frame: T) -> anyhow::Result<()>;

	fn dispatch_loop(&self, output_frame_receiver: Receiver<T>) {
		for output_frame in output_frame_receiver {
			trace!("{:?}", &output_frame);
			if let Err(e) = self.dispatch(output_frame) {
				error!("{}", e);
			}
		}
	}

	fn spawn(self, output_frame_receiver: Receiver<T>) -> JoinHandle<()> {
		thread::spawn(move || self.dispatch_loop(output_frame_receiver))
	}
}

/// One encoded setpoint, tagged with the outbound channel it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum SetpointFrame {
	LocalPose(LocalPose),
	Local(PositionTarget),
	Attitude(AttitudeTarget),
	Actuator(ActuatorControl),
	Mount(MountControl),
}

impl OutputFrame for SetpointFrame {}

/// Fans setpoint frames out to one sender per outbound channel.
pub struct SetpointDispatcher {
	pub local_pose_sender: Sender<LocalPose>,
	pub raw_local_sender: Sender<PositionTarget>,
	pub raw_attitude_sender: Sender<AttitudeTarget>,
	pub actuator_sender: Sender<ActuatorControl>,
	pub mount_control_sender: Sender<MountControl>,
}

impl Dispatcher<SetpointFrame> for SetpointDispatcher {
	fn dispatch(&self, output_frame: SetpointFrame) -> anyhow::Result<()> {
		match output_frame {
			SetpointFrame::LocalPose(msg) => self
				.local_pose_sender
				.send(msg)
				.map_err(|e| anyhow!("local pose channel: {}", e)),
			SetpointFrame::Local(msg) => self
				.raw_local_sender
				.send(msg)
				.map_err(|e| anyhow!("raw local channel: {}", e)),
			SetpointFrame::Attitude(msg) => self
				.raw_attitude_sender
				.send(msg)
				.map_err(|e| anyhow!("raw attitude channel: {}", e)),
			SetpointFrame::Actuator(msg) => self
				.actuator_sender
				.send(msg)
				.map_err(|e| anyhow!("actuator channel: {}", e)),
			SetpointFrame::Mount(msg) => self
				.mount_control_sender
				.send(msg)
				.map_err(|e| anyhow!("mount control channel: {}", e)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crossbeam_channel::unbounded;

	#[test]
	fn frames_reach_their_own_channel_only() {
		let (local_pose_sender, local_pose_receiver) = unbounded();
		let (raw_local_sender, raw_local_receiver) = unbounded();
		let (raw_attitude_sender, raw_attitude_receiver) = unbounded();
		let (actuator_sender, actuator_receiver) = unbounded();
		let (mount_control_sender, mount_control_receiver) = unbounded();

		let dispatcher = SetpointDispatcher {
			local_pose_sender,
			raw_local_sender,
			raw_attitude_sender,
			actuator_sender,
			mount_control_sender,
		};

		let msg = PositionTarget {
			coordinate_frame: 1,
			..PositionTarget::default()
		};
		dispatcher.dispatch(SetpointFrame::Local(msg.clone())).unwrap();

		assert_eq!(raw_local_receiver.try_recv().unwrap(), msg);
		assert!(local_pose_receiver.try_recv().is_err());
		assert!(raw_attitude_receiver.try_recv().is_err());
		assert!(actuator_receiver.try_recv().is_err());
		assert!(mount_control_receiver.try_recv().is_err());

		dispatcher
			.dispatch(SetpointFrame::Mount(MountControl::default()))
			.unwrap();
		assert!(mount_control_receiver.try_recv().is_ok());
		assert!(raw_local_receiver.try_recv().is_err());
	}
}
