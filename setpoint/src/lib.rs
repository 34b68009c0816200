#[macro_use]
extern crate log;

mod collect;
mod dispatch;
mod input;
mod mask;
mod msg;
mod output;
mod relay;

pub use collect::*;
pub use dispatch::*;
pub use input::*;
pub use mask::*;
pub use msg::*;
pub use output::*;
pub use relay::*;
