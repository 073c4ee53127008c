//! The `resumatch init` command.

use std::path::Path;

use anyhow::Result;

use resumatch_core::catalog::SkillCatalog;

pub fn execute() -> Result<()> {
    if Path::new("resumatch.toml").exists() {
        println!("resumatch.toml already exists, skipping.");
    } else {
        std::fs::write("resumatch.toml", SAMPLE_CONFIG)?;
        println!("Created resumatch.toml");
    }

    std::fs::create_dir_all("catalogs")?;
    let catalog_path = Path::new("catalogs/roles.toml");
    if catalog_path.exists() {
        println!("catalogs/roles.toml already exists, skipping.");
    } else {
        let body = SkillCatalog::builtin().to_toml_string()?;
        std::fs::write(catalog_path, format!("{CATALOG_HEADER}{body}"))?;
        println!("Created catalogs/roles.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit catalogs/roles.toml with your roles and skills");
    println!("  2. Run: resumatch validate --catalog catalogs/roles.toml");
    println!("  3. Run: resumatch analyze resumes/ --format all");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# resumatch configuration

catalog = "catalogs/roles.toml"
default_role = "Data Scientist"

# "substring" or "word-boundary"
match_mode = "substring"

# Seed for placeholder candidate details
seed = 42

top_skills = 10
histogram_bins = 10
output_dir = "./resumatch-results"
"#;

const CATALOG_HEADER: &str = "# Job roles and their required skills.
# Skills listed under extra_skills are detected in resumes but belong to no role.

";
