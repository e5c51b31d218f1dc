pub mod event_bus;
pub mod poll_loop;

pub use event_bus::{command_channel, MonitorCommandReceiver, MonitorCommandSender};
pub use poll_loop::ClipboardPollRuntime;
