//! SQLite storage of locations, users, ratings and user lists.

#[macro_use]
extern crate diesel;

use std::{
    cell::{RefCell, RefMut},
    ops::Deref,
    sync::Arc,
};

use anyhow::Result as Fallible;
use diesel::{r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use voyageur_core::{repositories as repo, usecases as uc};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

const PRAGMAS: &[&str] = &[
    "PRAGMA journal_mode = WAL",
    "PRAGMA synchronous = NORMAL",
    "PRAGMA wal_checkpoint(TRUNCATE)",
    "PRAGMA foreign_keys = 1",
    "PRAGMA defer_foreign_keys = 1",
    "PRAGMA encoding = 'UTF-8'",
];

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

/// A pooled connection that keeps the pool locked while it is alive.
///
/// Read locks are shared, the write lock is exclusive. This keeps
/// concurrent writers from running into `SQLITE_LOCKED`.
pub struct LockedConnection<L> {
    // Declared first to return the connection before the lock is released.
    conn: RefCell<PooledConnection>,
    _pool_lock: L,
}

pub type DbReadOnly<'a> = LockedConnection<RwLockReadGuard<'a, ConnectionPool>>;
pub type DbReadWrite<'a> = LockedConnection<RwLockWriteGuard<'a, ConnectionPool>>;

impl<L> LockedConnection<L>
where
    L: Deref<Target = ConnectionPool>,
{
    fn try_new(pool_lock: L, access: &str) -> Fallible<Self> {
        let conn = pool_lock.get().inspect_err(|err| {
            log::error!("No pooled database connection available for {access} access: {err}");
        })?;
        Ok(Self {
            conn: RefCell::new(conn),
            _pool_lock: pool_lock,
        })
    }
}

/// A connection inside of a running transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl DbReadWrite<'_> {
    /// Runs `f` in a transaction that is rolled back if `f` fails.
    pub fn transaction<T, F, E>(&self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        let mut failure = None;
        let res = self.conn.borrow_mut().transaction(|conn| {
            let tx = DbConnection {
                conn: RefCell::new(conn),
            };
            f(&tx).map_err(|err| {
                failure = Some(err.into());
                diesel::result::Error::RollbackTransaction
            })
        });
        res.map_err(|err| match failure {
            Some(err) => err,
            None => uc::Error::Repo(repo_impl::from_diesel_err(err)),
        })
    }

    fn sqlite_conn(&self) -> RefMut<PooledConnection> {
        self.conn.borrow_mut()
    }
}

#[derive(Clone)]
pub struct Connections {
    pool: Arc<RwLock<ConnectionPool>>,
}

/// Applies the connection settings.
///
/// The text encoding only takes effect on a freshly created database.
pub fn initialize_database(connection: &mut SqliteConnection) -> Fallible<()> {
    use diesel::connection::SimpleConnection as _;
    connection.batch_execute(&PRAGMAS.join(";\n"))?;
    Ok(())
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // Fail early on unreachable databases.
        {
            use diesel::Connection as _;
            SqliteConnection::establish(url)?;
        }
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .build(ConnectionManager::new(url))?;
        initialize_database(&mut *pool.get()?)?;
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        LockedConnection::try_new(self.pool.read(), "read-only")
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        LockedConnection::try_new(self.pool.write(), "read/write")
    }
}

pub fn run_embedded_database_migrations(db: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    let mut conn = db.sqlite_conn();
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow::anyhow!("Failed to run database migrations: {err}"))?;
    for version in applied {
        log::debug!("Applied migration {version}");
    }
    Ok(())
}
