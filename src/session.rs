use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

use crate::log_debug;

const USERNAME_KEY: &str = "username";
const USER_ID_KEY: &str = "userId";
const COOKIE_KEY: &str = "cookie";

/// Who is using the client. Either fully anonymous (`""`, `0`) or fully
/// populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub user_id: i64,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.username.is_empty()
    }
}

/// Client-local persistent storage for the session identity
///
/// The store is read once when opened. After that the in-memory copy is
/// authoritative and only `login`/`logout` write through to disk.
pub struct SessionStore {
    conn: Connection,
    current: Session,
}

impl SessionStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open session store {}", path.display()))?;
        Self::from_connection(conn)
    }

    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let mut store = SessionStore {
            conn,
            current: Session::anonymous(),
        };
        store.init_schema()?;
        store.current = store.load()?;
        log_debug(&format!(
            "DEBUG [session]: loaded session username={:?} user_id={}",
            store.current.username, store.current.user_id
        ));
        Ok(store)
    }

    /// Default location: `<data_dir>/chump/session.db`
    pub fn default_path() -> PathBuf {
        if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("chump").join("session.db")
        } else {
            crate::utils::get_fallback_data_path().join("session.db")
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            ) WITHOUT ROWID;
            ",
        )?;

        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let result = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            });

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Read the stored identity. Partial or corrupt entries load as anonymous.
    fn load(&self) -> Result<Session> {
        let username = self.get(USERNAME_KEY)?;
        let user_id = self.get(USER_ID_KEY)?;

        let session = match (username, user_id) {
            (Some(username), Some(id)) if !username.is_empty() => match id.parse::<i64>() {
                Ok(user_id) => Session { username, user_id },
                Err(_) => {
                    log_debug(&format!("DEBUG [session]: ignoring bad stored userId {:?}", id));
                    Session::anonymous()
                }
            },
            _ => Session::anonymous(),
        };

        Ok(session)
    }

    pub fn session(&self) -> &Session {
        &self.current
    }

    pub fn username(&self) -> &str {
        &self.current.username
    }

    pub fn user_id(&self) -> i64 {
        self.current.user_id
    }

    /// Persist the identity, then make it current
    pub fn login(&mut self, username: &str, user_id: i64) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![USERNAME_KEY, username],
        )?;
        tx.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![USER_ID_KEY, user_id.to_string()],
        )?;
        tx.commit()?;

        self.current = Session {
            username: username.to_string(),
            user_id,
        };
        Ok(())
    }

    /// Remove the stored identity (and server cookie), then go anonymous
    pub fn logout(&mut self) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "DELETE FROM kv WHERE key IN (?1, ?2, ?3)",
            params![USERNAME_KEY, USER_ID_KEY, COOKIE_KEY],
        )?;
        tx.commit()?;

        self.current = Session::anonymous();
        Ok(())
    }

    pub fn save_cookie(&self, cookie: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![COOKIE_KEY, cookie],
        )?;
        Ok(())
    }

    pub fn cookie(&self) -> Result<Option<String>> {
        self.get(COOKIE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store_is_anonymous() {
        let store = SessionStore::in_memory().unwrap();
        assert!(store.session().is_anonymous());
        assert_eq!(store.username(), "");
        assert_eq!(store.user_id(), 0);
    }

    #[test]
    fn test_login_then_logout() {
        let mut store = SessionStore::in_memory().unwrap();
        store.login("cian", 7).unwrap();
        assert_eq!(
            store.session(),
            &Session {
                username: "cian".to_string(),
                user_id: 7
            }
        );
        assert_eq!(store.get(USER_ID_KEY).unwrap().as_deref(), Some("7"));

        store.logout().unwrap();
        assert!(store.session().is_anonymous());
        assert_eq!(store.get(USERNAME_KEY).unwrap(), None);
        assert_eq!(store.get(USER_ID_KEY).unwrap(), None);
    }

    #[test]
    fn test_partial_entry_loads_anonymous() {
        let store = SessionStore::in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)",
                params![USERNAME_KEY, "cian"],
            )
            .unwrap();
        assert!(store.load().unwrap().is_anonymous());
    }

    #[test]
    fn test_bad_user_id_loads_anonymous() {
        let store = SessionStore::in_memory().unwrap();
        store
            .conn
            .execute_batch(
                "INSERT INTO kv (key, value) VALUES ('username', 'cian');
                 INSERT INTO kv (key, value) VALUES ('userId', 'seven');",
            )
            .unwrap();
        assert!(store.load().unwrap().is_anonymous());
    }

    #[test]
    fn test_cookie_cleared_on_logout() {
        let mut store = SessionStore::in_memory().unwrap();
        store.login("cian", 7).unwrap();
        store.save_cookie("rabble-session=abc").unwrap();
        assert_eq!(store.cookie().unwrap().as_deref(), Some("rabble-session=abc"));

        store.logout().unwrap();
        assert_eq!(store.cookie().unwrap(), None);
    }
}
