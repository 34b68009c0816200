use crossbeam_channel::Receiver;
use std::thread;
use std::thread::JoinHandle;

/// Controllers that export encoded messages to a link.
pub trait OutputController<T: Send + 'static>
	where Self: Sized + Send + 'static {

	/// Writes one message to the underlying transport.
	fn write_output(&mut self, output: T) -> anyhow::Result<()>;

	fn spawn(mut self, output_receiver: Receiver<T>) -> JoinHandle<()> {
		thread::spawn(move || {
			for output in output_receiver.iter() {
				self.write_output(output)
					.map_err(|e| error!("Failed to write output: {}", e))
					.unwrap_or_default();
			}
		})
	}
}
