use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use log::info;

use whatunga::config::Config;
use whatunga::file::{load_project, save_project};
use whatunga::model::project::{Project, PROJECT_FILE};
use whatunga::session::{share, Session};
use whatunga::shell;

/// Whatunga - An interactive shell to build and edit application server domain projects
#[derive(Parser)]
#[command(name = "whatunga")]
#[command(version)]
#[command(about = "An interactive shell to build and edit application server domain projects", long_about = None)]
struct Cli {
    /// Project directory containing whatunga.json (default: current directory)
    directory: Option<PathBuf>,

    /// Create a new project with this name if the directory has none
    #[arg(short, long)]
    name: Option<String>,

    /// Version of a newly created project
    #[arg(long = "project-version", default_value = "1.0")]
    project_version: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::load();
    let dir = cli.directory.unwrap_or_else(|| PathBuf::from("."));

    let project = if dir.join(PROJECT_FILE).is_file() {
        load_project(&dir)?
    } else if let Some(name) = cli.name {
        info!("Creating project {} in {}", name, dir.display());
        let project = Project::new(name, cli.project_version);
        save_project(&dir, &project, &config)?;
        project
    } else {
        bail!(
            "Missing project file {}. Use --name to create a new project.",
            dir.join(PROJECT_FILE).display()
        );
    };

    let project = share(project);
    shell::run(Session::new(project.clone()), &config)?;

    let project = project.read();
    save_project(&dir, &project, &config)
}
