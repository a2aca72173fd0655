//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them to
//! domain types.

use diesel::prelude::*;

use crate::domain::{User, UserId};

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::new(row.id), row.firstname, row.lastname)
    }
}

/// Insertable struct for creating user records; the id is store-generated.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub firstname: &'a str,
    pub lastname: &'a str,
}
