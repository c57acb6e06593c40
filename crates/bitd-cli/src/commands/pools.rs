use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use bitd_mechanics::{CrewModifiers, compute_dice_pools, computed_attributes};

pub fn run(file: &Path, key: &str) -> Result<(), String> {
    let registry = super::load_roster(file)?;
    let character = registry.find_character(key).map_err(|e| e.to_string())?;

    let modifiers = CrewModifiers::resolve(character, &registry);
    let pools = compute_dice_pools(character);
    let attributes = computed_attributes(character, &modifiers);

    println!("  {}", character.name.bold());

    if attributes.is_empty() {
        println!("  No attributes.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Attribute", "Skill", "Dice", "Range"]);

    for attribute in &attributes {
        let dice = pools.get(&attribute.name).unwrap_or(0);
        table.add_row(vec![
            attribute.name.clone(),
            String::new(),
            format!("{dice}d"),
            String::new(),
        ]);
        for skill in &attribute.skills {
            table.add_row(vec![
                String::new(),
                skill.name.clone(),
                format!("{}d", skill.value),
                format!("{}-{}", skill.min, skill.max),
            ]);
        }
    }

    println!("{table}");
    println!();
    println!("  Vice: {}d", pools.vice());

    Ok(())
}
