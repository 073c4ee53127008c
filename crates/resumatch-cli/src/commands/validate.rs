//! The `resumatch validate` command.

use std::path::PathBuf;

use anyhow::Result;

use resumatch_core::catalog::{load_catalog, validate_catalog};

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = load_catalog(&catalog_path)?;

    println!(
        "Catalog: {} ({} roles, {} skills)",
        catalog_path.display(),
        catalog.roles().len(),
        catalog.vocabulary().len()
    );

    let warnings = validate_catalog(&catalog);
    for w in &warnings {
        let prefix = w
            .role
            .as_ref()
            .map(|role| format!("  [{role}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
