use anyhow::Context;
use tracing::info;

use lms_config::LmsConfig;
use lms_db::service::LmsService;
use lms_server::LmsServer;

use crate::cli::ServeArgs;

/// Handle `lms serve`.
pub async fn handle(args: ServeArgs, mut config: LmsConfig) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(database) = args.database {
        config.database.path = database;
    }
    config.validate()?;

    let service = LmsService::new_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open item store at {}", config.database.path))?;

    info!(
        app = %config.general.app_name,
        database = %config.database.path,
        list = config.api.enable_list,
        tree = config.api.enable_tree,
        "starting"
    );

    LmsServer::new(service, &config)
        .start()
        .await
        .context("items API server failed")
}
