//! Researcher profile management.

use anyhow::{Context, Result};
use biolit_core::repository::ProfileRepository;
use biolit_core::UserProfile;
use biolit_infrastructure::JsonProfileRepository;
use colored::Colorize;

pub fn show() -> Result<()> {
    let repository = JsonProfileRepository::new()?;
    match repository.load() {
        Some(profile) => {
            print_profile(&profile);
            Ok(())
        }
        None => {
            println!("{}", "No profile stored. Run `biolit profile set`.".dimmed());
            Ok(())
        }
    }
}

pub fn set(
    email: String,
    field_of_study: String,
    institution: String,
    level: String,
    research_interests: String,
) -> Result<()> {
    let profile = UserProfile {
        email,
        field_of_study,
        institution,
        level,
        research_interests,
    };
    JsonProfileRepository::new()?
        .save(&profile)
        .context("saving the profile")?;
    println!("Profile saved.");
    Ok(())
}

pub fn clear() -> Result<()> {
    JsonProfileRepository::new()?
        .clear()
        .context("clearing the profile")?;
    println!("Profile cleared.");
    Ok(())
}

pub(super) fn print_profile(profile: &UserProfile) {
    println!("{}       {}", "Email:".bold(), profile.email);
    println!("{}       {}", "Field:".bold(), profile.field_of_study);
    println!("{} {}", "Institution:".bold(), profile.institution);
    println!("{}       {}", "Level:".bold(), profile.level);
    println!("{}   {}", "Interests:".bold(), profile.research_interests);
}
