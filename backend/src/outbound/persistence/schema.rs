//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations/` exactly; regenerate with
//! `diesel print-schema` after changing the DDL.

diesel::table! {
    /// User records. `id` is a serial primary key assigned by the store.
    users (id) {
        id -> Int4,
        firstname -> Varchar,
        lastname -> Varchar,
    }
}
