use clap::{Args, Subcommand};
use colored::Colorize;
use sprout_lib::{
    Repository,
    repository::{Light, Plant, PlantFields, PlantId, Room, WaterAmount},
};
use sysexits::ExitCode;

use crate::view;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show today's plants
    List,
    /// Set a reminder for a new plant
    Add(FieldArgs),
    /// Change a plant's details
    Edit {
        /// List position or id of the plant
        plant: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Mark a plant as watered, or as needing water again
    Water {
        /// List position or id of the plant
        plant: String,
    },
    /// Remove plants
    Remove {
        /// List positions or ids of the plants
        #[arg(required = true)]
        plants: Vec<String>,
    },
    /// Show how many plants still need water
    Status,
    /// List the choices for room, light and water
    Options,
}

/// Editable plant fields. Anything left out keeps its previous (or default) value.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Plant name
    #[arg(short, long)]
    name: Option<String>,
    /// Room the plant lives in
    #[arg(short, long)]
    room: Option<Room>,
    /// How much sunlight it gets
    #[arg(short, long)]
    light: Option<Light>,
    /// How much water it needs, e.g. "50-100 ml"
    #[arg(short, long)]
    water: Option<WaterAmount>,
}

impl FieldArgs {
    fn merge_into(self, fields: PlantFields) -> PlantFields {
        PlantFields {
            name: self.name.unwrap_or(fields.name),
            room: self.room.unwrap_or(fields.room),
            light: self.light.unwrap_or(fields.light),
            water_amount: self.water.unwrap_or(fields.water_amount),
        }
    }
}

pub fn handle(repo: &mut Repository, cmd: Command) -> ExitCode {
    match cmd {
        Command::List => view::print_list(repo),
        Command::Add(fields) => {
            let plant = repo.create(fields.merge_into(PlantFields::default()));
            println!("{} {}", "Added".green().bold(), plant.name());
        }
        Command::Edit { plant, fields } => {
            let Some(target) = resolve(repo, &plant) else {
                return unknown(&plant);
            };
            match edit(repo, &target, fields) {
                Some(updated) => println!("{} {}", "Updated".green().bold(), updated.name()),
                None => return unknown(&plant),
            }
        }
        Command::Water { plant } => {
            let Some(target) = resolve(repo, &plant) else {
                return unknown(&plant);
            };
            match repo.toggle_watered(target.id()) {
                Some(true) => println!("{} {}", "Watered".green().bold(), target.name()),
                Some(false) => println!("{} needs water again", target.name()),
                None => return unknown(&plant),
            }
            if repo.all_watered() {
                println!();
                view::print_all_done();
            }
        }
        Command::Remove { plants } => {
            let mut offsets = Vec::with_capacity(plants.len());
            for reference in &plants {
                match resolve_index(repo, reference) {
                    Some(index) => offsets.push(index),
                    None => return unknown(reference),
                }
            }
            let names: Vec<String> = repo
                .plants()
                .iter()
                .enumerate()
                .filter(|(index, _)| offsets.contains(index))
                .map(|(_, plant)| plant.name().clone())
                .collect();
            repo.delete_at(&offsets);
            for name in names {
                println!("{} {name}", "Removed".green().bold());
            }
        }
        Command::Status => view::print_status(repo),
        Command::Options => view::print_options(),
    }

    ExitCode::Ok
}

/// Apply the given field changes to `target`, returning the plant as it is after the edit.
fn edit(repo: &mut Repository, target: &Plant, fields: FieldArgs) -> Option<Plant> {
    let id = target.id();
    if !repo.update(id, fields.merge_into(target.fields())) {
        return None;
    }

    repo.get(id).cloned()
}

/// Find a plant's list index from a 1-based list position or an id.
fn resolve_index(repo: &Repository, reference: &str) -> Option<usize> {
    match reference.parse::<usize>() {
        Ok(position) => position
            .checked_sub(1)
            .filter(|index| *index < repo.plants().len()),
        Err(_) => {
            let id = reference.parse::<PlantId>().ok()?;
            repo.plants().iter().position(|p| p.id() == id)
        }
    }
}

fn resolve(repo: &Repository, reference: &str) -> Option<Plant> {
    resolve_index(repo, reference)
        .and_then(|index| repo.plants().get(index))
        .cloned()
}

fn unknown(reference: &str) -> ExitCode {
    eprintln!(
        "{} no plant matches '{reference}'",
        "error:".red().bold()
    );
    ExitCode::DataErr
}
