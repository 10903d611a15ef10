use std::sync::Arc;

use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, info, warn};

// 从 lib.rs 导入模块
use edu_admin_client::client::ApiClient;
use edu_admin_client::config::AppConfig;
use edu_admin_client::errors::Result;
use edu_admin_client::notify::ConsoleNotifier;
use edu_admin_client::refresh::Orchestrator;
use edu_admin_client::services::DerivedIdentity;
use edu_admin_client::views::MemoryViewRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    AppConfig::init()?;
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting client...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let client = Arc::new(ApiClient::from_app_config(Arc::new(ConsoleNotifier))?);
    info!("Using API at {}", client.base_url());
    let views = Arc::new(MemoryViewRegistry::with_standard_widgets());
    let orchestrator = Orchestrator::new(client.clone(), views.clone());

    let report = orchestrator.refresh_all().await;
    if report.is_complete() {
        info!("Refreshed {} view group(s)", report.completed.len());
    } else {
        warn!(
            "Refreshed {} view group(s), {} failed",
            report.completed.len(),
            report.failed.len()
        );
    }

    match client.resolve_current_student().await {
        DerivedIdentity::Direct(student_id) => info!("Signed in as student {}", student_id),
        identity @ DerivedIdentity::MatchedByName { .. } => {
            if identity.is_ambiguous() {
                warn!("Student identity derived from an ambiguous name match");
            }
            info!(
                "Signed in as student {} (matched by name)",
                identity.student_id().unwrap_or_default()
            );
        }
        DerivedIdentity::Unresolved => info!("No student identity for this session"),
    }

    println!("{}", views.render());

    debug!(
        "Finished in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    Ok(())
}
