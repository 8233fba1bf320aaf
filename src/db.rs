#[cfg(feature = "ssr")]
mod db_impl {
    use crate::models::item::{Category, Item, ItemType};
    use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::types::Type;
    use rusqlite::{Connection, Error};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    // Define a struct to represent a database connection
    #[derive(Debug)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Create a new database connection
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            logging::log!("Database connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        // Create the database schema
        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS items (
                    id TEXT PRIMARY KEY,
                    item_type TEXT NOT NULL CHECK (item_type IN ('lost', 'found')),
                    name TEXT NOT NULL,
                    description TEXT NOT NULL,
                    category TEXT NOT NULL,
                    location TEXT NOT NULL,
                    reporter_name TEXT NOT NULL,
                    email TEXT NOT NULL,
                    phone TEXT,
                    date TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    image_url TEXT
                );
                CREATE INDEX IF NOT EXISTS idx_items_created_at
                    ON items (created_at DESC);",
            )
            .map_err(|e| {
                eprintln!("Failed creating items table: {}", e);
                e
            })?;
            Ok(())
        }

        // Insert a new report. Items are immutable, so a duplicate id is an
        // error rather than an upsert.
        pub async fn insert_item(&self, item: &Item) -> Result<(), Error> {
            log!("[DB] Inserting item: {}", item.id);
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO items (
                    id, item_type, name, description, category, location,
                    reporter_name, email, phone, date, created_at, image_url
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    &item.id,
                    item.item_type.as_str(),
                    &item.name,
                    &item.description,
                    item.category.as_str(),
                    &item.location,
                    &item.reporter_name,
                    &item.email,
                    &item.phone,
                    item.date.to_string(),
                    // Fixed-width timestamps so text order matches time order
                    item.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
                    &item.image_url,
                ],
            )?;
            log!("[DB] Item inserted: {}", item.id);
            Ok(())
        }

        // Retrieve all reports, newest first
        pub async fn get_items(&self) -> Result<Vec<Item>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT id, item_type, name, description, category, location,
                        reporter_name, email, phone, date, created_at, image_url
                 FROM items
                 ORDER BY created_at DESC",
            )?;

            let rows = stmt.query_map([], |row| {
                let item_type: String = row.get(1)?;
                let category: String = row.get(4)?;
                let date: String = row.get(9)?;
                let created_at: String = row.get(10)?;
                Ok(Item {
                    id: row.get(0)?,
                    item_type: item_type.parse::<ItemType>().map_err(|e| {
                        Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
                    })?,
                    name: row.get(2)?,
                    description: row.get(3)?,
                    category: category.parse::<Category>().map_err(|e| {
                        Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
                    })?,
                    location: row.get(5)?,
                    reporter_name: row.get(6)?,
                    email: row.get(7)?,
                    phone: row.get(8)?,
                    date: NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
                        Error::FromSqlConversionFailure(9, Type::Text, Box::new(e))
                    })?,
                    created_at: DateTime::parse_from_rfc3339(&created_at)
                        .map(|dt| dt.with_timezone(&Utc))
                        .map_err(|e| {
                            Error::FromSqlConversionFailure(10, Type::Text, Box::new(e))
                        })?,
                    image_url: row.get(11)?,
                })
            })?;

            let mut items = Vec::new();
            for row in rows {
                items.push(row?);
            }
            logging::log!("Fetched {} items from the database", items.len());
            Ok(items)
        }
    }

}

#[cfg(feature = "ssr")]
pub use db_impl::Database;
