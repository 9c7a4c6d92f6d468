use std::fmt::Display;

use colored::Colorize;
use sprout_lib::{
    Repository,
    repository::{Light, Plant, Room, WaterAmount},
};
use strum::IntoEnumIterator;

pub fn print_list(repo: &Repository) {
    if repo.plants().is_empty() {
        print_empty();
        return;
    }

    if repo.all_watered() {
        print_all_done();
        return;
    }

    println!("{}", "My Plants 🌱".bold());
    println!("{}", "Today".dimmed());
    for (index, plant) in repo.plants().iter().enumerate() {
        println!("{}", row(index + 1, plant));
    }
}

pub fn print_status(repo: &Repository) {
    if repo.plants().is_empty() {
        print_empty();
    } else if repo.all_watered() {
        print_all_done();
    } else {
        println!("{}", summary(repo.remaining(), repo.plants().len()));
    }
}

pub fn print_all_done() {
    println!("{}", "All Done! 🎉".green().bold());
    println!("All Reminders Completed");
}

pub fn print_options() {
    println!("{}", option_line::<Room>("Room"));
    println!("{}", option_line::<Light>("Light"));
    println!("{}", option_line::<WaterAmount>("Water"));
}

fn print_empty() {
    println!("{}", "Start your plant journey!".bold());
    println!(
        "Now all your plants will be in one place and we will help you take care of them :) 🪴"
    );
    println!("Run {} to set a plant reminder", "sprout add".cyan());
}

fn row(position: usize, plant: &Plant) -> String {
    let marker = if plant.is_watered() {
        "●".green()
    } else {
        "○".normal()
    };

    let id = plant.id().to_string();
    let short_id = id.split('-').next().unwrap_or_default();

    format!(
        "{position:>3}. {marker} {}  in {} · {} · {}  {}",
        plant.name().as_str().bold(),
        plant.room(),
        plant.light(),
        plant.water_amount(),
        short_id.dimmed()
    )
}

fn summary(remaining: usize, total: usize) -> String {
    let noun = if total == 1 { "plant" } else { "plants" };
    let verb = if remaining == 1 { "needs" } else { "need" };
    format!("{remaining} of {total} {noun} still {verb} water")
}

fn option_line<T>(title: &str) -> String
where
    T: IntoEnumIterator + Display,
{
    let options: Vec<String> = T::iter().map(|option| option.to_string()).collect();
    format!("{:<7}{}", format!("{title}:"), options.join(", "))
}

#[cfg(test)]
mod test {
    use sprout_lib::repository::{PlantFields, PlantId};

    use super::*;

    #[test]
    fn test_row() {
        colored::control::set_override(false);
        let plant = Plant::new(
            "6f9619ff-8b86-d011-b42d-00cf4fc964ff".parse::<PlantId>().unwrap(),
            PlantFields {
                name: "Monstera".into(),
                room: Room::LivingRoom,
                light: Light::PartialSun,
                water_amount: WaterAmount::Ml100To200,
            },
        );

        assert_eq!(
            row(2, &plant),
            "  2. ○ Monstera  in Living Room · Partial Sun · 100-200 ml  6f9619ff"
        );
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary(1, 1), "1 of 1 plant still needs water");
        assert_eq!(summary(2, 3), "2 of 3 plants still need water");
    }

    #[test]
    fn test_option_line() {
        assert_eq!(
            option_line::<Light>("Light"),
            "Light: Full Sun, Partial Sun, Low Sun"
        );
        assert_eq!(
            option_line::<WaterAmount>("Water"),
            "Water: 20-50 ml, 50-100 ml, 100-200 ml, 200-300 ml"
        );
    }
}
