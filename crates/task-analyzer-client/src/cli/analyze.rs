/*
[INPUT]:  JSON task file, strategy override, loaded configuration
[OUTPUT]: Prioritized result printed to stdout, or the service's strategy suggestion
[POS]:    CLI headless analysis layer
[UPDATE]: When result printing or headless flow changes
*/

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use console::style;
use task_analyzer_adapter::Strategy;
use task_analyzer_client::render::{PriorityTier, ResultView};
use task_analyzer_client::{AnalyzerSession, AppConfig};
use tracing::info;

pub async fn run_analyze(
    config: &AppConfig,
    file: &Path,
    strategy: Option<String>,
    json: bool,
) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read tasks from {}", file.display()))?;
    let strategy = strategy
        .map(Strategy::new)
        .unwrap_or_else(|| config.default_strategy());

    let mut session = AnalyzerSession::new(strategy, config.notice_ttl());
    let count = session.load_json(&text)?;
    info!(count, file = %file.display(), "tasks loaded");

    let client = config.build_client()?;
    if let Err(err) = session.analyze(&client).await {
        eprintln!("{}", style(err.to_string()).red().bold());
        if let Some(detail) = err.detail() {
            eprintln!("{}", style(detail).red());
        }
        return Err(anyhow!("analysis failed"));
    }

    let Some(response) = session.result() else {
        return Err(anyhow!("no result received"));
    };
    if json {
        let raw = serde_json::to_string_pretty(response).context("serialize result")?;
        println!("{raw}");
        return Ok(());
    }

    if let Some(view) = session.result_view(Local::now().date_naive()) {
        print_view(&view);
    }
    Ok(())
}

pub async fn run_check(config: &AppConfig, strategy: Option<String>) -> Result<()> {
    let strategy = strategy
        .map(Strategy::new)
        .unwrap_or_else(|| config.default_strategy());
    let client = config.build_client()?;
    let suggestion = client
        .suggest_tasks(&strategy)
        .await
        .with_context(|| format!("service at {} did not answer", client.base_url()))?;

    println!(
        "{} {}",
        style("Service reachable:").bold().green(),
        style(client.base_url()).cyan()
    );
    println!("{} ({})", suggestion.message, suggestion.strategy);
    Ok(())
}

fn print_view(view: &ResultView) {
    println!(
        "{} {}  |  Total tasks: {}\n",
        style("Strategy:").bold(),
        style(&view.summary.strategy_label).cyan().bold(),
        view.summary.total_tasks
    );
    for card in &view.cards {
        let badge = format!("[{}] {}", card.tier.as_str().to_uppercase(), card.score);
        let badge = match card.tier {
            PriorityTier::High => style(badge).red().bold(),
            PriorityTier::Medium => style(badge).yellow().bold(),
            PriorityTier::Low => style(badge).green().bold(),
        };
        println!("{}. {}  {}", card.rank, style(&card.title).bold(), badge);
        println!(
            "   {} | {} | Importance {}",
            card.due_phrase, card.estimated_hours, card.importance
        );
        println!("   {}", style(&card.explanation).dim());
        if let Some(dependencies) = &card.dependencies {
            println!("   {dependencies}");
        }
        println!();
    }
}
