use tokio::sync::mpsc;

use crate::ipc::MonitorCommand;

pub type MonitorCommandSender = mpsc::Sender<MonitorCommand>;
pub type MonitorCommandReceiver = mpsc::Receiver<MonitorCommand>;

pub fn command_channel(capacity: usize) -> (MonitorCommandSender, MonitorCommandReceiver) {
    mpsc::channel(capacity)
}
