use std::path::Path;

use bitd_core::ActorRegistry;
use colored::Colorize;

use bitd_mechanics::{CrewModifiers, has_mastery, healing_min, max_stress, max_trauma};

pub fn run(file: &Path, key: &str) -> Result<(), String> {
    let registry = super::load_roster(file)?;
    let character = registry.find_character(key).map_err(|e| e.to_string())?;

    let crew = character
        .crew_link()
        .and_then(|link| registry.lookup(&link.id))
        .and_then(|actor| actor.into_crew());
    let tier = CrewModifiers::resolve(character, &registry).tier;

    println!("  {}", character.name.bold());
    match crew {
        Some(crew) => println!("  Crew:        {} (tier {tier})", crew.name),
        None => println!("  Crew:        {}", "none".dimmed()),
    }
    println!(
        "  Stress:      {}/{}",
        character.stress.value,
        max_stress(character, &registry)
    );
    println!(
        "  Trauma:      {}/{}",
        character.trauma.value,
        max_trauma(character, &registry)
    );
    println!("  Healing min: {}", healing_min(character));
    println!(
        "  Mastery:     {}",
        if has_mastery(character, &registry) {
            "yes"
        } else {
            "no"
        }
    );

    Ok(())
}
