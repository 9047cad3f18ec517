use anyhow::Result;

use crate::config::HoloConfig;
use crate::db;

/// Insert the built-in companion personas into the configured database.
pub fn seed(config: &HoloConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = db::open_database(&db_path)?;

    let inserted = db::seed::seed_companions(&conn)?;
    if inserted > 0 {
        println!("Seeded {inserted} companions into {}", db_path.display());
    } else {
        println!("All companions already present in {}", db_path.display());
    }

    Ok(())
}
