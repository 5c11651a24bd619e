// Copyright 2023 Remi Bernotavicius

use derive_more::Display;
use diesel::associations::{Associations, Identifiable};
use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql, FromSqlRow, Queryable};
use diesel::expression::{AsExpression, Selectable};
use diesel::prelude::Insertable;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Integer;
use diesel::sqlite::Sqlite;
use diesel_derive_newtype::DieselNewType;

#[derive(DieselNewType, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct TagId(i32);

impl TagId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, PartialEq, Eq, Clone)]
#[diesel(table_name = crate::database::schema::tags)]
pub struct Tag {
    pub id: TagId,
    pub likes: i32,
}

#[derive(DieselNewType, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct RecipeId(i32);

impl RecipeId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, PartialEq, Eq, Clone)]
#[diesel(table_name = crate::database::schema::recipes)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
}

#[derive(Associations, Queryable, Selectable, Identifiable, Insertable, Debug, PartialEq, Eq, Clone)]
#[diesel(belongs_to(Recipe))]
#[diesel(primary_key(recipe_id))]
#[diesel(table_name = crate::database::schema::previous_recipes)]
pub struct PreviousRecipe {
    pub recipe_id: RecipeId,
}

#[derive(Associations, Queryable, Selectable, Identifiable, Insertable, Debug, PartialEq, Eq, Clone)]
#[diesel(belongs_to(Recipe))]
#[diesel(belongs_to(Tag))]
#[diesel(primary_key(recipe_id, tag_id))]
#[diesel(table_name = crate::database::schema::recipe_tags)]
pub struct RecipeTag {
    pub recipe_id: RecipeId,
    pub tag_id: TagId,
}

/// Stored in the integer `mode` column of the `data` table. A text mapping
/// would break the `INT UNSIGNED DEFAULT 0` column contract, so the
/// conversions are written out by hand instead of using a derived enum
/// mapping.
#[derive(AsExpression, FromSqlRow, Display, Debug, Hash, Copy, Clone, PartialEq, Eq)]
#[diesel(sql_type = Integer)]
pub enum Mode {
    #[display("prepare")]
    Prepare = 0,
    #[display("review")]
    Review = 1,
}

impl FromSql<Integer, Sqlite> for Mode {
    fn from_sql(value: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        match i32::from_sql(value)? {
            0 => Ok(Self::Prepare),
            1 => Ok(Self::Review),
            v => Err(format!("unexpected value {v} for mode").into()),
        }
    }
}

impl ToSql<Integer, Sqlite> for Mode {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(*self as i32);
        Ok(IsNull::No)
    }
}

/// The single row of the `data` table.
#[derive(Queryable, Selectable, Insertable, Debug, PartialEq, Eq, Clone)]
#[diesel(table_name = crate::database::schema::data)]
pub struct PlannerState {
    pub mode: Mode,
    pub offset: i32,
}
