use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use bitd_mechanics::{
    DiceRollEvaluator, Outcome, RollDispatcher, RollEvaluator, RollFlowResult, RollOutcome,
    RollSession, RollSettings,
};

use crate::prompt::PromptDialog;

pub async fn run(
    file: &Path,
    key: &str,
    target: &str,
    dice: i64,
    seed: Option<u64>,
    settings: RollSettings,
) -> Result<(), String> {
    let registry = super::load_roster(file)?;
    let character = registry.find_character(key).map_err(|e| e.to_string())?;

    let evaluator: Arc<dyn RollEvaluator> = match seed {
        Some(seed) => Arc::new(DiceRollEvaluator::with_seed(seed)),
        None => Arc::new(DiceRollEvaluator::new()),
    };
    let dispatcher = RollDispatcher::new(evaluator);
    let dialog = PromptDialog::stdin();

    let result = RollSession::new(character, &registry, &dialog, &dispatcher)
        .with_settings(settings)
        .begin_roll(target, dice)
        .await
        .map_err(|e| e.to_string())?;

    match result {
        RollFlowResult::Dispatched(outcome) => print_outcome(&outcome),
        RollFlowResult::Cancelled => println!("\n  Roll cancelled."),
    }

    Ok(())
}

fn print_outcome(outcome: &RollOutcome) {
    let request = &outcome.request;
    println!();
    println!(
        "  {} {}d: {}",
        request.label.bold(),
        request.dice_count,
        outcome.roll
    );

    let verdict = outcome.outcome.to_string();
    let verdict = match outcome.outcome {
        Outcome::Critical => verdict.green().bold(),
        Outcome::Success => verdict.green(),
        Outcome::Partial => verdict.yellow(),
        Outcome::Failure => verdict.red(),
    };
    println!("  {verdict}");

    let mut context = Vec::new();
    if let Some(position) = request.position {
        context.push(format!("Position: {position}"));
    }
    if let Some(effect) = request.effect {
        context.push(format!("Effect: {effect}"));
    }
    if let Some(tier) = request.tier {
        context.push(format!("Tier: {tier}"));
    }
    if !context.is_empty() {
        println!("  {}", context.join(" | "));
    }
    if !request.note.is_empty() {
        println!("  Note: {}", request.note);
    }
}
