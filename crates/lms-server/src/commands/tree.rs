use anyhow::Context;

use lms_config::LmsConfig;
use lms_db::service::LmsService;

use crate::cli::TreeArgs;

/// Handle `lms tree`.
pub async fn handle(args: &TreeArgs, config: LmsConfig) -> anyhow::Result<()> {
    let path = args.database.as_deref().unwrap_or(&config.database.path);
    let service = LmsService::new_local(path)
        .await
        .with_context(|| format!("failed to open item store at {path}"))?;

    let tree = service
        .get_item_tree(args.id)
        .await
        .with_context(|| format!("failed to load item tree for {}", args.id))?;
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}
