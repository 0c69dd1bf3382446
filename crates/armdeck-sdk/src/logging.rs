//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 默认过滤规则（未设置 `RUST_LOG` 时）
const DEFAULT_FILTER: &str = "info";

/// 安装全局 tracing 订阅者，并把 `log` 记录桥接到 tracing
///
/// 过滤规则读取 `RUST_LOG`，未设置时为 `info`。
/// 重复调用是安全的：已安装时什么也不做，返回 `false`。
pub fn init_logger() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }
    // 其他 logger 已安装时忽略
    let _ = tracing_log::LogTracer::init();
    true
}
