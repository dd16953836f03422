// Command handlers - wire configuration, repository and use cases together
use crate::application::promote_service::PromoteService;
use crate::application::save_service::{SaveOptions, SaveService};
use crate::infrastructure::config::load_transfer_config;
use crate::infrastructure::grafana_repository::GrafanaRepository;
use crate::presentation::cli::{Cli, Command};
use std::sync::Arc;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_transfer_config(&cli.config_overrides())?;
    tracing::debug!("Using Grafana at {} as {}", config.root_url, config.user);

    let repository = Arc::new(GrafanaRepository::new(
        config.root_url,
        config.user,
        config.password,
    ));

    match cli.command {
        Command::Promote { dashboard_title, .. } => {
            let report = PromoteService::new(repository)
                .promote(&dashboard_title)
                .await?;
            tracing::info!("{}", report);
        }
        Command::Save {
            keep,
            title,
            dashboard_title,
            ..
        } => {
            let options = SaveOptions {
                folder: config.folder,
                title,
                out_dir: config.out_dir,
                keep_selections: keep,
            };
            let report = SaveService::new(repository)
                .save_wip(&dashboard_title, &options)
                .await?;
            tracing::info!("{}", report);
        }
    }

    Ok(())
}
