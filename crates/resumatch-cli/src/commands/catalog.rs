//! The `resumatch roles` and `resumatch skills` commands.

use std::path::PathBuf;

use anyhow::Result;

use super::load_setup;

pub fn roles(config_path: Option<PathBuf>) -> Result<()> {
    let setup = load_setup(config_path.as_deref())?;

    for role in setup.catalog.roles() {
        let marker = if role.name == setup.config.default_role {
            " (default)"
        } else {
            ""
        };
        println!("{}{marker}", role.name);
        println!("  {}", setup.catalog.default_skills(&role.name).join(", "));
    }

    Ok(())
}

pub fn skills(config_path: Option<PathBuf>) -> Result<()> {
    let setup = load_setup(config_path.as_deref())?;

    for skill in setup.catalog.vocabulary() {
        println!("{skill}");
    }
    eprintln!("\n{} skills", setup.catalog.vocabulary().len());

    Ok(())
}
