use anyhow::Result;

use crate::config::HoloConfig;
use crate::store;

/// Display journal and companion statistics in the terminal.
pub fn stats(config: &HoloConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = crate::db::open_database(&db_path)?;

    let presence = store::state::get_state(&conn)?;
    let memory_count = store::memories::count_memories(&conn)?;
    let companions = store::companions::list_companions(&conn)?;

    println!("HoloMente Statistics");
    println!("{}", "=".repeat(40));
    println!("  Presence:            {}", presence.name);
    println!("  Awake since:         {}", presence.created_at);
    println!("  Memories:            {memory_count}");
    println!();

    println!("Companions:");
    for companion in &companions {
        let messages = store::companions::list_companion_messages(&conn, companion.id)?;
        println!("  {:<12} {} messages", companion.slug, messages.len());
    }

    Ok(())
}
