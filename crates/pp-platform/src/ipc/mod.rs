mod command;

pub use command::MonitorCommand;
