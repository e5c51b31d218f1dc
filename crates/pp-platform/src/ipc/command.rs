#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorCommand {
    /// 立即执行一次强制清理
    CleanNow,
    /// 关闭
    Shutdown,
}
