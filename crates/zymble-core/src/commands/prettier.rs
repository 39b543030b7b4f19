//! `prettier` command

use super::{Outcome, Session};
use crate::error::{Result, ScaffoldError};
use crate::gateway::Gateway;
use crate::project::{
    evaluate_dependencies, find_prettier_configs, Manifest, PRETTIER, REACT, TYPESCRIPT,
};
use crate::runtime::{detect_package_manager, PackageManager};
use crate::templates::{render_config, ConfigFormat, PrettierConfig};
use std::path::{Path, PathBuf};

/// Presets for the prettier pipeline; anything left `None` is asked for
#[derive(Debug, Clone, Default)]
pub struct PrettierArgs {
    pub format: Option<ConfigFormat>,
    pub package_manager: Option<PackageManager>,
}

/// Write a formatter configuration next to the project's package.json.
///
/// Installs the formatter first when it is missing, and replaces any existing
/// configuration (files or the `prettier` key) only after confirmation.
pub async fn setup_prettier<G: Gateway>(
    session: &Session<'_, G>,
    args: PrettierArgs,
) -> Result<Outcome> {
    let gateway = session.gateway;
    let root = &session.workspace.root;

    // Parse errors are severe here, unlike in the probe
    let mut manifest = gateway
        .read_manifest(root, &session.conventions)
        .await?
        .ok_or_else(|| ScaffoldError::ManifestNotFound { root: root.clone() })?;
    let project_dir = manifest.dir().to_path_buf();

    let deps = evaluate_dependencies(&[REACT, TYPESCRIPT, PRETTIER], &manifest);
    let has = |name: &str| deps.get(name).is_some_and(Option::is_some);
    tracing::debug!(?deps, "evaluated dependencies");

    if !has(PRETTIER) {
        install_prettier(session, &project_dir, args.package_manager).await?;
    }

    replace_existing_config(session, &project_dir, &mut manifest).await?;

    let format = match args.format {
        Some(format) => format,
        None => choose_format(session).await?,
    };

    let config = PrettierConfig::for_project(has(REACT), has(TYPESCRIPT));
    let content = render_config(&config, format, manifest.module_type())?;
    let path = project_dir.join(format.file_name());
    gateway.write_file(&path, &content).await?;
    tracing::debug!(path = %path.display(), "wrote formatter config");

    gateway.notify_success("Prettier configuration complete!");
    Ok(Outcome::Config { path })
}

async fn install_prettier<G: Gateway>(
    session: &Session<'_, G>,
    project_dir: &Path,
    preset: Option<PackageManager>,
) -> Result<()> {
    if !session
        .confirm("Prettier is not installed. Do you want to install it now?")
        .await?
    {
        return Err(ScaffoldError::Cancelled {
            reason: "Prettier is not installed".to_string(),
        });
    }

    let manager = match preset.or_else(|| detect_package_manager(project_dir)) {
        Some(manager) => manager,
        None if session.assume_yes => PackageManager::Npm,
        None => {
            let options: Vec<String> = PackageManager::ALL
                .iter()
                .map(|m| m.binary().to_string())
                .collect();
            let choice = session
                .gateway
                .ask_choice("Which package manager do you use?", &options)
                .await?
                .ok_or_else(|| ScaffoldError::empty_input("Package manager"))?;
            PackageManager::ALL[choice]
        }
    };

    tracing::info!(manager = %manager, "installing prettier");
    session
        .gateway
        .install_packages(project_dir, manager, &[PRETTIER])
        .await
}

/// Remove existing configuration files and the manifest key once confirmed
async fn replace_existing_config<G: Gateway>(
    session: &Session<'_, G>,
    project_dir: &Path,
    manifest: &mut Manifest,
) -> Result<()> {
    let gateway = session.gateway;
    let files = find_prettier_configs(gateway, project_dir).await?;
    let has_key = manifest.has_prettier_key();
    if files.is_empty() && !has_key {
        return Ok(());
    }

    let shown: PathBuf = files
        .first()
        .cloned()
        .unwrap_or_else(|| manifest.path().to_path_buf());
    let confirmed =
        session.assume_yes || gateway.confirm_overwrite("Prettier configuration", &shown).await?;
    if !confirmed {
        return Err(ScaffoldError::OverwriteDeclined { path: shown });
    }

    for file in &files {
        gateway.remove_file(file).await?;
        tracing::debug!(path = %file.display(), "removed formatter config");
    }
    if has_key && manifest.remove_prettier_key() {
        gateway.write_file(manifest.path(), &manifest.to_json()).await?;
        tracing::debug!("removed prettier key from package.json");
    }
    Ok(())
}

async fn choose_format<G: Gateway>(session: &Session<'_, G>) -> Result<ConfigFormat> {
    if session.assume_yes {
        return Ok(ConfigFormat::Json);
    }
    let options: Vec<String> = ConfigFormat::ALL
        .iter()
        .map(|f| f.file_name().to_string())
        .collect();
    let choice = session
        .gateway
        .ask_choice("Choose a Prettier configuration file", &options)
        .await?
        .ok_or_else(|| ScaffoldError::empty_input("Configuration format"))?;
    Ok(ConfigFormat::ALL[choice])
}
