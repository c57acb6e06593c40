use std::path::Path;

use colored::Colorize;

use bitd_mechanics::{compute_dice_pools, list_actions};

pub fn run(file: &Path, key: &str) -> Result<(), String> {
    let registry = super::load_roster(file)?;
    let character = registry.find_character(key).map_err(|e| e.to_string())?;

    let groups = list_actions(character);
    if groups.is_empty() {
        println!("  No actions found.");
        return Ok(());
    }

    let pools = compute_dice_pools(character);
    let dice = |name: &str| pools.get(name).unwrap_or(0);

    for group in &groups {
        println!(
            "  {} {}d {}",
            group.attribute.bold(),
            dice(&group.attribute),
            "(resistance)".dimmed()
        );
        for action in &group.actions {
            println!("    {action:<12} {}d", dice(action));
        }
    }

    Ok(())
}
