use tracing_subscriber::EnvFilter;

/// 標準エラーへのログ出力を初期化（RUST_LOG があればそちらを優先）
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 既に初期化済みなら何もしない
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
        tracing::debug!("二回目の初期化でもパニックしない");
    }
}
