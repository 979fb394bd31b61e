//! Repository for the `parties` and `pokemon` tables.

use partydex_core::party::{PartyInput, PartyUpdate, StoredPokemon};
use partydex_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::party::{LeagueCount, Party, PartyDetail, PartyFilter, Pokemon};

/// Column lists shared across queries to avoid repetition.
const PARTY_COLUMNS: &str = "id, title, league, custom_league, party_image_url, \
    cropped_image_url, created_at, updated_at";

const POKEMON_COLUMNS: &str =
    "id, party_id, pokemon_order, normal_move, special_move_1, special_move_2, created_at";

/// Provides CRUD operations for parties and their pokemon rows.
///
/// Multi-row writes run in a single transaction; reads are plain
/// queries. Errors propagate as `sqlx::Error` — mapping them to
/// transport responses is the HTTP layer's job.
pub struct PartyRepo;

impl PartyRepo {
    /// List parties (without pokemon rows) matching the filter, newest
    /// first.
    pub async fn find_all(pool: &PgPool, filter: &PartyFilter) -> Result<Vec<Party>, sqlx::Error> {
        let (conditions, bind_idx) = filter_conditions(filter);
        let where_clause = where_clause(&conditions);

        let limit_clause = if filter.limit.is_some() {
            format!("LIMIT ${bind_idx}")
        } else {
            String::new()
        };

        let query = format!(
            "SELECT {PARTY_COLUMNS} FROM parties {where_clause} \
             ORDER BY created_at DESC {limit_clause}"
        );

        let mut q = sqlx::query_as::<_, Party>(&query);

        // Bind dynamic parameters in condition order.
        if let Some(ref league) = filter.league {
            q = q.bind(league);
        }
        if let Some(ref title) = filter.title {
            q = q.bind(format!("%{title}%"));
        }
        if let Some(limit) = filter.limit {
            q = q.bind(limit);
        }

        q.fetch_all(pool).await
    }

    /// Count parties matching the filter (same semantics as `find_all`;
    /// the limit does not apply).
    pub async fn count(pool: &PgPool, filter: &PartyFilter) -> Result<i64, sqlx::Error> {
        let (conditions, _) = filter_conditions(filter);
        let where_clause = where_clause(&conditions);

        let query = format!("SELECT COUNT(*) FROM parties {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(ref league) = filter.league {
            q = q.bind(league);
        }
        if let Some(ref title) = filter.title {
            q = q.bind(format!("%{title}%"));
        }

        q.fetch_one(pool).await
    }

    /// Fetch a party with its pokemon rows ordered by `pokemon_order`.
    /// Returns `None` when the id does not exist.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PartyDetail>, sqlx::Error> {
        let query = format!("SELECT {PARTY_COLUMNS} FROM parties WHERE id = $1");
        let party = match sqlx::query_as::<_, Party>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        {
            Some(party) => party,
            None => return Ok(None),
        };

        let query = format!(
            "SELECT {POKEMON_COLUMNS} FROM pokemon \
             WHERE party_id = $1 ORDER BY pokemon_order ASC"
        );
        let pokemon = sqlx::query_as::<_, Pokemon>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(PartyDetail { party, pokemon }))
    }

    /// Insert a party and its pokemon rows in one transaction, returning
    /// the created detail. Any failed insert rolls everything back.
    pub async fn create(pool: &PgPool, input: &PartyInput) -> Result<PartyDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO parties (title, league, custom_league, party_image_url, cropped_image_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {PARTY_COLUMNS}"
        );
        let party = sqlx::query_as::<_, Party>(&query)
            .bind(&input.title)
            .bind(input.league.as_str())
            .bind(&input.custom_league)
            .bind(&input.party_image_url)
            .bind(&input.cropped_image_url)
            .fetch_one(&mut *tx)
            .await?;

        let mut pokemon = Vec::with_capacity(input.pokemon.len());
        for row in &input.pokemon {
            pokemon.push(Self::insert_pokemon(&mut tx, party.id, row).await?);
        }

        tx.commit().await?;
        Ok(PartyDetail { party, pokemon })
    }

    /// Apply a partial update inside one transaction.
    ///
    /// Unset fields keep their stored value, explicit nulls clear the
    /// column, and a present pokemon array replaces every existing row
    /// for the party (delete then reinsert). Any write bumps
    /// `updated_at`; an empty patch is a plain read and does not.
    /// Returns `None` when the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        update: &PartyUpdate,
    ) -> Result<Option<PartyDetail>, sqlx::Error> {
        if update.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE parties SET
                title = CASE WHEN $2 THEN $3 ELSE title END,
                league = COALESCE($4, league),
                custom_league = CASE WHEN $5 THEN $6 ELSE custom_league END,
                party_image_url = CASE WHEN $7 THEN $8 ELSE party_image_url END,
                cropped_image_url = CASE WHEN $9 THEN $10 ELSE cropped_image_url END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {PARTY_COLUMNS}"
        );
        let party = match sqlx::query_as::<_, Party>(&query)
            .bind(id)
            .bind(update.title.is_some())
            .bind(update.title.clone().flatten())
            .bind(update.league.map(|league| league.as_str()))
            .bind(update.custom_league.is_some())
            .bind(update.custom_league.clone().flatten())
            .bind(update.party_image_url.is_some())
            .bind(update.party_image_url.clone().flatten())
            .bind(update.cropped_image_url.is_some())
            .bind(update.cropped_image_url.clone().flatten())
            .fetch_optional(&mut *tx)
            .await?
        {
            Some(party) => party,
            // Dropping the transaction rolls it back; nothing was written.
            None => return Ok(None),
        };

        let pokemon = match &update.pokemon {
            Some(rows) => {
                sqlx::query("DELETE FROM pokemon WHERE party_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;

                let mut inserted = Vec::with_capacity(rows.len());
                for row in rows {
                    inserted.push(Self::insert_pokemon(&mut tx, id, row).await?);
                }
                inserted
            }
            None => {
                let query = format!(
                    "SELECT {POKEMON_COLUMNS} FROM pokemon \
                     WHERE party_id = $1 ORDER BY pokemon_order ASC"
                );
                sqlx::query_as::<_, Pokemon>(&query)
                    .bind(id)
                    .fetch_all(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(Some(PartyDetail { party, pokemon }))
    }

    /// Delete a party; pokemon rows follow via `ON DELETE CASCADE`.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM parties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Parties-per-league counts, most popular league first.
    pub async fn league_stats(pool: &PgPool) -> Result<Vec<LeagueCount>, sqlx::Error> {
        sqlx::query_as::<_, LeagueCount>(
            "SELECT league, COUNT(*) AS count FROM parties \
             GROUP BY league ORDER BY count DESC",
        )
        .fetch_all(pool)
        .await
    }

    async fn insert_pokemon(
        tx: &mut Transaction<'_, Postgres>,
        party_id: DbId,
        row: &StoredPokemon,
    ) -> Result<Pokemon, sqlx::Error> {
        let query = format!(
            "INSERT INTO pokemon (party_id, pokemon_order, normal_move, special_move_1, special_move_2)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {POKEMON_COLUMNS}"
        );
        sqlx::query_as::<_, Pokemon>(&query)
            .bind(party_id)
            .bind(row.pokemon_order)
            .bind(&row.normal_move)
            .bind(&row.special_move_1)
            .bind(&row.special_move_2)
            .fetch_one(&mut **tx)
            .await
    }
}

/// Dynamic WHERE clauses for the list/count filters, with the next free
/// bind index. Bind order must match condition order.
fn filter_conditions(filter: &PartyFilter) -> (Vec<String>, u32) {
    let mut conditions = Vec::new();
    let mut bind_idx = 1u32;

    if filter.league.is_some() {
        conditions.push(format!("league = ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.title.is_some() {
        conditions.push(format!("title ILIKE ${bind_idx}"));
        bind_idx += 1;
    }

    (conditions, bind_idx)
}

fn where_clause(conditions: &[String]) -> String {
    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}
