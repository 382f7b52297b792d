/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When AppConfig schema changes
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use std::path::PathBuf;

use task_analyzer_adapter::{DEFAULT_BASE_URL, KNOWN_STRATEGIES};
use task_analyzer_client::config::{AppConfig, ServiceConfig, UiConfig};

pub fn run_init(output: PathBuf) -> Result<()> {
    println!("{}", style("Welcome to Task Analyzer Init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a client configuration.").dim()
    );

    let theme = ColorfulTheme::default();

    if output.exists() {
        let overwrite = Confirm::with_theme(&theme)
            .with_prompt(format!("{} exists. Overwrite?", output.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("{}", style("Aborted; nothing written.").yellow());
            return Ok(());
        }
    }

    println!("\n{}", style("--- Service ---").bold());
    let base_url: String = Input::with_theme(&theme)
        .with_prompt("Analysis service base URL")
        .default(DEFAULT_BASE_URL.to_string())
        .interact_text()?;

    let connect_timeout_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Connect timeout (seconds)")
        .default(10)
        .interact_text()?;

    let request_timeout_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Request timeout in seconds (0 = none)")
        .default(0)
        .interact_text()?;

    println!("\n{}", style("--- Interface ---").bold());
    let strategy_selection = Select::with_theme(&theme)
        .with_prompt("Default strategy")
        .items(&KNOWN_STRATEGIES)
        .default(0)
        .interact()?;

    let notice_ttl_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Seconds to keep error notices visible")
        .default(5)
        .interact_text()?;

    let config = AppConfig {
        service: ServiceConfig {
            base_url,
            connect_timeout_secs,
            request_timeout_secs: (request_timeout_secs > 0).then_some(request_timeout_secs),
        },
        ui: UiConfig {
            default_strategy: KNOWN_STRATEGIES[strategy_selection].to_string(),
            notice_ttl_secs,
        },
    };
    config.validate()?;

    let yaml = config.to_yaml()?;
    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );

    Ok(())
}
