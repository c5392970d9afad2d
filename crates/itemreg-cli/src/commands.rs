use itemreg_store::{ItemStore, NewItem, SqliteStore};

type Result = std::result::Result<(), Box<dyn std::error::Error>>;

/// The records `itemreg seed` inserts into a fresh database.
const SEED_ITEMS: [(&str, &str); 2] = [
    ("Sample Item 1", "This is a sample item"),
    ("Sample Item 2", "Another sample item"),
];

/// `itemreg seed <db>` — Provision the database and insert sample records.
///
/// Opening the store creates the file and schema if absent. The sample
/// rows are appended unconditionally, so seeding twice leaves two copies.
pub fn seed(db_path: &str) -> Result {
    let mut store = SqliteStore::open(db_path)?;

    for (name, description) in SEED_ITEMS {
        let new = NewItem::new(name, Some(description.to_string()))?;
        let item = store.insert(&new)?;
        println!("  seeded item {}: {}", item.id, item.name);
    }

    println!("Database initialized: {db_path} ({} items)", store.count()?);
    Ok(())
}

/// `itemreg status <db>` — Show item count and database statistics.
pub fn status(db_path: &str) -> Result {
    let store = SqliteStore::open(db_path)?;
    let count = store.count()?;
    let size = store.file_size()?;
    let journal = store.journal_mode()?;

    println!("Database: {db_path} (SQLite, {journal} mode)");
    println!("Size: {}", format_bytes(size));
    println!();

    if count == 0 {
        println!("  (no items)");
        return Ok(());
    }

    println!("  {:>6}  {:<24}  {:<32}", "Id", "Name", "Description");
    println!("  {}", "-".repeat(66));
    for item in store.find_all()? {
        println!(
            "  {:>6}  {:<24}  {:<32}",
            item.id,
            truncate(&item.name, 24),
            truncate(item.description.as_deref().unwrap_or(""), 32),
        );
    }
    println!("  {}", "-".repeat(66));
    println!("  {count} items");

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_inserts_two_items() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("seed.db");
        let db = db_path.to_str().unwrap();

        seed(db).unwrap();

        let store = SqliteStore::open(db).unwrap();
        let items = store.find_all().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Sample Item 1");
        assert_eq!(items[1].name, "Sample Item 2");
        assert!(items[0].description.is_some());
    }

    #[test]
    fn seed_is_not_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("seed.db");
        let db = db_path.to_str().unwrap();

        // Re-running appends a second copy of the sample rows. Documented
        // behavior for now, not a bug to paper over here.
        seed(db).unwrap();
        seed(db).unwrap();

        let store = SqliteStore::open(db).unwrap();
        assert_eq!(store.count().unwrap(), 4);
    }

    #[test]
    fn status_runs_on_empty_and_seeded_db() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("status.db");
        let db = db_path.to_str().unwrap();

        status(db).unwrap();
        seed(db).unwrap();
        status(db).unwrap();
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 24), "short");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }
}
