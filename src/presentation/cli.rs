// Command-line surface
use crate::domain::title::{REF_DASHBOARD_SUFFIX, WIP_DASHBOARD_SUFFIX};
use crate::infrastructure::config::ConfigOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dashboard-transfer", version)]
#[command(about = "Move Grafana dashboards between the provisioned area and editable WIP copies")]
pub struct Cli {
    /// TOML file with defaults for any of root_url, user, password, folder, out_dir
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct ServerArgs {
    /// Grafana root URL, default: http://localhost:3000
    #[arg(short = 'r', long)]
    pub root_url: Option<String>,

    /// Grafana user, default: admin
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Grafana password, default: vmi
    #[arg(short = 'p', long)]
    pub password: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Make an editable copy of a provisioned dashboard under the General folder
    Promote {
        #[command(flatten)]
        server: ServerArgs,

        #[arg(value_name = "DASHBOARD_TITLE")]
        dashboard_title: String,
    },

    /// Save a WIP dashboard into the provisioned area
    Save {
        #[command(flatten)]
        server: ServerArgs,

        /// Grafana folder, default: vmi-reference
        #[arg(short = 'f', long)]
        folder: Option<String>,

        /// Keep instance and hostname variable selections. By default they are
        /// either cleared or set to All if the latter is enabled.
        #[arg(short = 'k', long)]
        keep: bool,

        /// New title. Inferred from the WIP title when omitted.
        #[arg(short = 't', long, long_help = title_help())]
        title: Option<String>,

        /// Output dir, default: dashboards/ next to this executable
        #[arg(short = 'o', long)]
        out_dir: Option<PathBuf>,

        /// The reference or WIP title; the WIP suffix is appended as needed
        #[arg(value_name = "DASHBOARD_TITLE")]
        dashboard_title: String,
    },
}

fn title_help() -> String {
    format!(
        "New title. If not provided it is inferred from the WIP title with the \
         {WIP_DASHBOARD_SUFFIX:?} suffix removed and the {REF_DASHBOARD_SUFFIX:?} \
         suffix appended as needed."
    )
}

impl Cli {
    pub fn config_overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides {
            config_file: self.config.clone(),
            ..ConfigOverrides::default()
        };
        let server = match &self.command {
            Command::Promote { server, .. } => server,
            Command::Save {
                server,
                folder,
                out_dir,
                ..
            } => {
                overrides.folder = folder.clone();
                overrides.out_dir = out_dir.clone();
                server
            }
        };
        overrides.root_url = server.root_url.clone();
        overrides.user = server.user.clone();
        overrides.password = server.password.clone();
        overrides
    }
}
