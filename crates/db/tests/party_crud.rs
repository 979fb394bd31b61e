//! Integration tests for party CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Create with three pokemon rows, fetch round-trip
//! - List filters (league exact, title substring, limit) and count
//! - Tri-state partial update and full pokemon replacement
//! - Cascade delete
//! - League stats grouping

use partydex_core::league::League;
use partydex_core::party::{
    form_to_input, PartyForm, PartyInput, PartyUpdate, PokemonForm, StoredPokemon,
};
use partydex_db::models::party::PartyFilter;
use partydex_db::repositories::PartyRepo;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn move_row(order: i16, normal: &str, special1: &str, special2: &str) -> StoredPokemon {
    let stored = |s: &str| {
        if s.is_empty() {
            None
        } else {
            Some(s.to_owned())
        }
    };
    StoredPokemon {
        pokemon_order: order,
        normal_move: stored(normal),
        special_move_1: stored(special1),
        special_move_2: stored(special2),
    }
}

fn new_input(title: &str, league: League, rows: Vec<StoredPokemon>) -> PartyInput {
    PartyInput {
        title: if title.is_empty() {
            None
        } else {
            Some(title.to_owned())
        },
        league,
        custom_league: None,
        party_image_url: None,
        cropped_image_url: None,
        pokemon: rows,
    }
}

fn empty_rows() -> Vec<StoredPokemon> {
    vec![
        StoredPokemon::empty(1),
        StoredPokemon::empty(2),
        StoredPokemon::empty(3),
    ]
}

// ---------------------------------------------------------------------------
// Create / fetch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_detail_and_find_by_id_round_trips(pool: PgPool) {
    let input = new_input(
        "晴れパ",
        League::Super,
        vec![
            move_row(1, "ひのこ", "かえんほうしゃ", "だいもんじ"),
            move_row(2, "はっぱカッター", "ソーラービーム", ""),
            move_row(3, "", "", ""),
        ],
    );

    let created = PartyRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.party.title.as_deref(), Some("晴れパ"));
    assert_eq!(created.party.league, League::Super);
    assert_eq!(created.pokemon.len(), 3);

    let fetched = PartyRepo::find_by_id(&pool, created.party.id)
        .await
        .unwrap()
        .expect("created party should be fetchable");

    assert_eq!(fetched.party.id, created.party.id);
    let orders: Vec<i16> = fetched.pokemon.iter().map(|p| p.pokemon_order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert_eq!(fetched.pokemon[0].normal_move.as_deref(), Some("ひのこ"));
    assert_eq!(
        fetched.pokemon[1].special_move_1.as_deref(),
        Some("ソーラービーム")
    );
    assert_eq!(fetched.pokemon[1].special_move_2, None);
    assert_eq!(fetched.pokemon[2].normal_move, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_single_move_scenario(pool: PgPool) {
    // Party with one move on slot 1 and nothing else.
    let input = new_input(
        "Test",
        League::Super,
        vec![
            move_row(1, "はかいこうせん", "", ""),
            StoredPokemon::empty(2),
            StoredPokemon::empty(3),
        ],
    );

    let created = PartyRepo::create(&pool, &input).await.unwrap();
    let fetched = PartyRepo::find_by_id(&pool, created.party.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched.pokemon.len(), 3);
    assert_eq!(
        fetched.pokemon[0].normal_move.as_deref(),
        Some("はかいこうせん")
    );
    for row in &fetched.pokemon[1..] {
        assert_eq!(row.normal_move, None);
        assert_eq!(row.special_move_1, None);
        assert_eq!(row.special_move_2, None);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_custom_league_stores_sentinel_and_converts_back(pool: PgPool) {
    let form = PartyForm {
        league: "MyCustomCup".to_owned(),
        ..PartyForm::default()
    };
    let created = PartyRepo::create(&pool, &form_to_input(&form)).await.unwrap();

    assert_eq!(created.party.league, League::Other);
    assert_eq!(created.party.custom_league.as_deref(), Some("MyCustomCup"));

    let fetched = PartyRepo::find_by_id(&pool, created.party.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.to_form().league, "MyCustomCup");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_to_form_round_trips_created_form(pool: PgPool) {
    let form = PartyForm {
        title: "雨パ".to_owned(),
        league: "ハイパーリーグ".to_owned(),
        pokemon1: Some(PokemonForm {
            normal_move: "あわ".to_owned(),
            special_move1: "ハイドロポンプ".to_owned(),
            special_move2: String::new(),
        }),
        image: "data:image/png;base64,abc".to_owned(),
        ..PartyForm::default()
    };

    let created = PartyRepo::create(&pool, &form_to_input(&form)).await.unwrap();
    let back = created.to_form();

    assert_eq!(back.league, form.league);
    assert_eq!(back.title, form.title);
    assert_eq!(back.image, form.image);
    assert_eq!(back.slots(), form.slots());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_missing_returns_none(pool: PgPool) {
    let found = PartyRepo::find_by_id(&pool, Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// List / count
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_all_orders_newest_first_and_limits(pool: PgPool) {
    for title in ["first", "second", "third"] {
        PartyRepo::create(&pool, &new_input(title, League::Super, empty_rows()))
            .await
            .unwrap();
    }

    let all = PartyRepo::find_all(&pool, &PartyFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].title.as_deref(), Some("third"));
    assert_eq!(all[2].title.as_deref(), Some("first"));

    let limited = PartyRepo::find_all(
        &pool,
        &PartyFilter {
            limit: Some(2),
            ..PartyFilter::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].title.as_deref(), Some("third"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_all_filters_by_league_and_title(pool: PgPool) {
    PartyRepo::create(&pool, &new_input("Rain Team", League::Super, empty_rows()))
        .await
        .unwrap();
    PartyRepo::create(&pool, &new_input("Sun Team", League::Hyper, empty_rows()))
        .await
        .unwrap();

    let supers = PartyRepo::find_all(
        &pool,
        &PartyFilter {
            league: Some("スーパーリーグ".to_owned()),
            ..PartyFilter::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(supers.len(), 1);
    assert_eq!(supers[0].title.as_deref(), Some("Rain Team"));

    // Substring match is case-insensitive.
    let rains = PartyRepo::find_all(
        &pool,
        &PartyFilter {
            title: Some("rain".to_owned()),
            ..PartyFilter::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(rains.len(), 1);

    // An unknown league matches nothing rather than erroring.
    let none = PartyRepo::find_all(
        &pool,
        &PartyFilter {
            league: Some("無名リーグ".to_owned()),
            ..PartyFilter::default()
        },
    )
    .await
    .unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn count_applies_same_filters(pool: PgPool) {
    PartyRepo::create(&pool, &new_input("Rain Team", League::Super, empty_rows()))
        .await
        .unwrap();
    PartyRepo::create(&pool, &new_input("Sun Team", League::Super, empty_rows()))
        .await
        .unwrap();
    PartyRepo::create(&pool, &new_input("Cup Team", League::Little, empty_rows()))
        .await
        .unwrap();

    let total = PartyRepo::count(&pool, &PartyFilter::default()).await.unwrap();
    assert_eq!(total, 3);

    let supers = PartyRepo::count(
        &pool,
        &PartyFilter {
            league: Some("スーパーリーグ".to_owned()),
            ..PartyFilter::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(supers, 2);

    let teams = PartyRepo::count(
        &pool,
        &PartyFilter {
            title: Some("team".to_owned()),
            ..PartyFilter::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(teams, 3);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_title_only_leaves_everything_else(pool: PgPool) {
    let mut input = new_input(
        "before",
        League::Little,
        vec![
            move_row(1, "たいあたり", "のしかかり", ""),
            StoredPokemon::empty(2),
            StoredPokemon::empty(3),
        ],
    );
    input.party_image_url = Some("data:image/png;base64,img".to_owned());
    let created = PartyRepo::create(&pool, &input).await.unwrap();

    let update = PartyUpdate {
        title: Some(Some("after".to_owned())),
        ..PartyUpdate::default()
    };
    let updated = PartyRepo::update(&pool, created.party.id, &update)
        .await
        .unwrap()
        .expect("party exists");

    assert_eq!(updated.party.title.as_deref(), Some("after"));
    assert_eq!(updated.party.league, League::Little);
    assert_eq!(
        updated.party.party_image_url.as_deref(),
        Some("data:image/png;base64,img")
    );
    assert_eq!(updated.pokemon.len(), 3);
    assert_eq!(updated.pokemon[0].normal_move.as_deref(), Some("たいあたり"));
    assert!(updated.party.updated_at > created.party.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_explicit_null_clears_columns(pool: PgPool) {
    let mut input = new_input("titled", League::Super, empty_rows());
    input.party_image_url = Some("data:image/png;base64,img".to_owned());
    let created = PartyRepo::create(&pool, &input).await.unwrap();

    let update = PartyUpdate {
        title: Some(None),
        party_image_url: Some(None),
        ..PartyUpdate::default()
    };
    let updated = PartyRepo::update(&pool, created.party.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.party.title, None);
    assert_eq!(updated.party.party_image_url, None);
    assert_eq!(updated.party.league, League::Super);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_pokemon_rows_fully(pool: PgPool) {
    let created = PartyRepo::create(
        &pool,
        &new_input(
            "party",
            League::Super,
            vec![
                move_row(1, "ひのこ", "", ""),
                move_row(2, "あわ", "", ""),
                move_row(3, "つつく", "", ""),
            ],
        ),
    )
    .await
    .unwrap();

    let update = PartyUpdate {
        pokemon: Some(vec![
            move_row(1, "りゅうのいぶき", "げきりん", ""),
            StoredPokemon::empty(2),
            StoredPokemon::empty(3),
        ]),
        ..PartyUpdate::default()
    };
    let updated = PartyRepo::update(&pool, created.party.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.pokemon.len(), 3);
    assert_eq!(
        updated.pokemon[0].normal_move.as_deref(),
        Some("りゅうのいぶき")
    );
    assert_eq!(updated.pokemon[1].normal_move, None);
    assert_eq!(updated.pokemon[2].normal_move, None);

    // Old rows are gone, not merged: exactly three rows remain.
    let row_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM pokemon WHERE party_id = $1")
            .bind(created.party.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(row_count, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_without_pokemon_keeps_existing_rows(pool: PgPool) {
    let created = PartyRepo::create(
        &pool,
        &new_input(
            "party",
            League::Super,
            vec![
                move_row(1, "ひのこ", "", ""),
                StoredPokemon::empty(2),
                StoredPokemon::empty(3),
            ],
        ),
    )
    .await
    .unwrap();
    let original_row_ids: Vec<_> = created.pokemon.iter().map(|p| p.id).collect();

    let update = PartyUpdate {
        title: Some(Some("renamed".to_owned())),
        ..PartyUpdate::default()
    };
    let updated = PartyRepo::update(&pool, created.party.id, &update)
        .await
        .unwrap()
        .unwrap();

    let kept_ids: Vec<_> = updated.pokemon.iter().map(|p| p.id).collect();
    assert_eq!(kept_ids, original_row_ids);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_switching_custom_to_preset_clears_custom_league(pool: PgPool) {
    let form = PartyForm {
        league: "MyCup".to_owned(),
        ..PartyForm::default()
    };
    let created = PartyRepo::create(&pool, &form_to_input(&form)).await.unwrap();
    assert_eq!(created.party.custom_league.as_deref(), Some("MyCup"));

    let update = PartyUpdate {
        league: Some(League::Master),
        custom_league: Some(None),
        ..PartyUpdate::default()
    };
    let updated = PartyRepo::update(&pool, created.party.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.party.league, League::Master);
    assert_eq!(updated.party.custom_league, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_update_reads_without_bumping_updated_at(pool: PgPool) {
    let created = PartyRepo::create(&pool, &new_input("party", League::Super, empty_rows()))
        .await
        .unwrap();

    let noop = PartyRepo::update(&pool, created.party.id, &PartyUpdate::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(noop.party.updated_at, created.party.updated_at);
    assert_eq!(noop.pokemon.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_id_returns_none_without_side_effects(pool: PgPool) {
    let update = PartyUpdate {
        title: Some(Some("ghost".to_owned())),
        ..PartyUpdate::default()
    };
    let result = PartyRepo::update(&pool, Uuid::new_v4(), &update).await.unwrap();
    assert!(result.is_none());

    let total = PartyRepo::count(&pool, &PartyFilter::default()).await.unwrap();
    assert_eq!(total, 0);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_party_and_cascades_pokemon(pool: PgPool) {
    let created = PartyRepo::create(&pool, &new_input("party", League::Super, empty_rows()))
        .await
        .unwrap();

    let removed = PartyRepo::delete(&pool, created.party.id).await.unwrap();
    assert!(removed);

    assert!(PartyRepo::find_by_id(&pool, created.party.id)
        .await
        .unwrap()
        .is_none());

    let orphan_rows: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM pokemon WHERE party_id = $1")
            .bind(created.party.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(orphan_rows, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_returns_false(pool: PgPool) {
    let removed = PartyRepo::delete(&pool, Uuid::new_v4()).await.unwrap();
    assert!(!removed);
}

// ---------------------------------------------------------------------------
// League stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn league_stats_groups_and_orders_by_count(pool: PgPool) {
    for title in ["a", "b"] {
        PartyRepo::create(&pool, &new_input(title, League::Super, empty_rows()))
            .await
            .unwrap();
    }
    PartyRepo::create(&pool, &new_input("c", League::Hyper, empty_rows()))
        .await
        .unwrap();

    let stats = PartyRepo::league_stats(&pool).await.unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].league, League::Super);
    assert_eq!(stats[0].count, 2);
    assert_eq!(stats[1].league, League::Hyper);
    assert_eq!(stats[1].count, 1);
}
