//! `SeaORM` entities for the `SQLite` store.

pub(crate) mod record;
