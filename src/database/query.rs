use crate::database;
use crate::database::models::{Mode, PlannerState, Recipe, RecipeId, Tag, TagId};
use diesel::prelude::OptionalExtension as _;
use diesel::ExpressionMethods as _;
use diesel::QueryDsl as _;
use diesel::QueryResult;
use diesel::RunQueryDsl as _;
use diesel::SelectableHelper as _;

pub fn is_initialized(conn: &mut database::Connection) -> QueryResult<bool> {
    use database::schema::data::dsl::*;

    Ok(data
        .select(PlannerState::as_select())
        .first(conn)
        .optional()?
        .is_some())
}

pub fn initialize_planner_state(conn: &mut database::Connection) -> QueryResult<()> {
    use database::schema::data::dsl::*;
    use diesel::insert_into;

    insert_into(data).default_values().execute(conn)?;
    Ok(())
}

pub fn planner_state(conn: &mut database::Connection) -> QueryResult<PlannerState> {
    use database::schema::data::dsl::*;

    data.select(PlannerState::as_select()).first(conn)
}

pub fn set_mode(conn: &mut database::Connection, new_mode: Mode) -> QueryResult<()> {
    use database::schema::data::dsl::*;
    use diesel::update;

    update(data).set(mode.eq(new_mode)).execute(conn)?;
    Ok(())
}

pub fn advance_offset(conn: &mut database::Connection, n: i32) -> QueryResult<()> {
    use database::schema::data::dsl::*;
    use diesel::update;

    update(data).set(offset.eq(offset + n)).execute(conn)?;
    Ok(())
}

pub fn add_tag(conn: &mut database::Connection, new_id: TagId) -> QueryResult<()> {
    use database::schema::tags::dsl::*;
    use diesel::insert_or_ignore_into;

    insert_or_ignore_into(tags)
        .values(Tag {
            id: new_id,
            likes: 0,
        })
        .execute(conn)?;
    Ok(())
}

pub fn adjust_tag_likes(conn: &mut database::Connection, tag: TagId, delta: i32) -> QueryResult<()> {
    use database::schema::tags::dsl::*;
    use diesel::update;

    update(tags.filter(id.eq(tag)))
        .set(likes.eq(likes + delta))
        .execute(conn)?;
    Ok(())
}

/// Inserts the recipe if its id is unseen, then records its tag
/// associations. Tags are created on first use with a zero likes count.
pub fn add_recipe(
    conn: &mut database::Connection,
    new_recipe: &Recipe,
    tag_ids: &[TagId],
) -> QueryResult<()> {
    use diesel::insert_or_ignore_into;

    insert_or_ignore_into(database::schema::recipes::dsl::recipes)
        .values(new_recipe)
        .execute(conn)?;

    for &tag in tag_ids {
        add_tag(conn, tag)?;
        add_recipe_tag(conn, new_recipe.id, tag)?;
    }

    Ok(())
}

pub fn recipe_exists(conn: &mut database::Connection, recipe: RecipeId) -> QueryResult<bool> {
    use database::schema::recipes::dsl::*;

    Ok(recipes
        .filter(id.eq(recipe))
        .select(Recipe::as_select())
        .first(conn)
        .optional()?
        .is_some())
}

/// The schema has no uniqueness constraint on `(recipe_id, tag_id)`, so
/// inserting the same pair twice succeeds and both rows are kept.
pub fn add_recipe_tag(
    conn: &mut database::Connection,
    recipe: RecipeId,
    tag: TagId,
) -> QueryResult<()> {
    use database::schema::recipe_tags::dsl::*;
    use diesel::insert_into;

    insert_into(recipe_tags)
        .values((recipe_id.eq(recipe), tag_id.eq(tag)))
        .execute(conn)?;
    Ok(())
}

pub fn tags_for_recipe(conn: &mut database::Connection, recipe: RecipeId) -> QueryResult<Vec<Tag>> {
    use database::schema::{recipe_tags, tags};

    recipe_tags::table
        .inner_join(tags::table)
        .filter(recipe_tags::recipe_id.eq(recipe))
        .select(Tag::as_select())
        .load(conn)
}

pub fn add_previous_recipe(conn: &mut database::Connection, recipe: RecipeId) -> QueryResult<()> {
    use database::schema::previous_recipes::dsl::*;
    use diesel::insert_into;

    insert_into(previous_recipes)
        .values(recipe_id.eq(recipe))
        .execute(conn)?;
    Ok(())
}

/// One `Recipe` per stored history row. The table has no primary key, so a
/// recipe planned twice shows up twice.
pub fn get_previous_recipes(conn: &mut database::Connection) -> QueryResult<Vec<Recipe>> {
    use database::schema::{previous_recipes, recipes};

    previous_recipes::table
        .inner_join(recipes::table)
        .select(Recipe::as_select())
        .load(conn)
}

pub fn clear_previous_recipes(conn: &mut database::Connection) -> QueryResult<()> {
    use database::schema::previous_recipes::dsl::*;
    use diesel::delete;

    delete(previous_recipes).execute(conn)?;
    Ok(())
}
