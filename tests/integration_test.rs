use chrono::TimeZone;
use chrono::Utc;
use ragequit::database::Database;
use ragequit::models::*;
use ragequit::recompute;
use ragequit::scoring;
use ragequit::Result;
use sqlx::SqlitePool;

async fn setup_test_db() -> Result<Database> {
    // Fresh in-memory database per test
    let pool = SqlitePool::connect("sqlite::memory:").await?;

    let db = Database::new(pool);

    // Initialize schema
    db.init_schema().await?;

    Ok(db)
}

async fn seed_game(db: &Database, app_id: i64, name: &str, slug: &str) -> Result<Game> {
    db.upsert_game(&UpsertGameRequest {
        steam_app_id: app_id,
        name: name.to_string(),
        slug: slug.to_string(),
    })
    .await
}

#[tokio::test]
async fn test_upsert_game_is_idempotent() -> Result<()> {
    let db = setup_test_db().await?;

    let first = seed_game(&db, 1245620, "ELDEN RING", "elden-ring").await?;
    let second = seed_game(&db, 1245620, "Elden Ring", "elden-ring").await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Elden Ring");
    assert_eq!(db.list_games().await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_duplicate_reviews_skipped() -> Result<()> {
    let db = setup_test_db().await?;
    let game = seed_game(&db, 268910, "Cuphead", "cuphead").await?;

    let request = InsertReviewRequest {
        game_id: game.id,
        steam_review_id: "rev_1".to_string(),
        is_positive: false,
        language: Some("en".to_string()),
        review_text: Some("unfair bullshit".to_string()),
        created_at_steam: None,
    };

    assert!(db.insert_review(&request).await?);
    assert!(!db.insert_review(&request).await?);
    assert_eq!(db.list_reviews(game.id).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_recompute_persists_pipeline_output() -> Result<()> {
    let db = setup_test_db().await?;
    let game = seed_game(&db, 1245620, "Elden Ring", "elden-ring").await?;

    db.insert_review(&InsertReviewRequest {
        game_id: game.id,
        steam_review_id: "rev_1".to_string(),
        is_positive: false,
        language: Some("en".to_string()),
        review_text: Some("This boss is unfair, total bullshit".to_string()),
        created_at_steam: None,
    })
    .await?;

    for (api_name, display_name, percent) in [
        ("start_game", "First Steps", 85.0),
        ("beat_margit", "Margit Felled", 60.0),
        ("beat_malenia", "Defeat Malenia", 18.0),
    ] {
        db.upsert_achievement(&InsertAchievementRequest {
            game_id: game.id,
            api_name: api_name.to_string(),
            display_name: Some(display_name.to_string()),
            description: None,
            percent,
        })
        .await?;
    }

    recompute::compute_all_scores(&db).await?;

    let score = db.get_rage_score(game.id).await?.expect("score persisted");

    // Same inputs through the pure pipeline must match the persisted row
    let expected = scoring::compute_breakdown(
        &[scoring::ReviewEntry {
            is_positive: false,
            text: Some("This boss is unfair, total bullshit".to_string()),
        }],
        &[
            scoring::AchievementEntry {
                api_name: "start_game".to_string(),
                display_name: Some("First Steps".to_string()),
                percent: 85.0,
            },
            scoring::AchievementEntry {
                api_name: "beat_margit".to_string(),
                display_name: Some("Margit Felled".to_string()),
                percent: 60.0,
            },
            scoring::AchievementEntry {
                api_name: "beat_malenia".to_string(),
                display_name: Some("Defeat Malenia".to_string()),
                percent: 18.0,
            },
        ],
    );

    assert!((score.rage_score - expected.rage_score).abs() < 1e-9);
    assert!((score.difficulty_rage - expected.difficulty_rage).abs() < 1e-9);
    assert_eq!(score.max_achievement_drop, Some(42.0));
    assert_eq!(score.max_drop_from, Some(60.0));
    assert_eq!(score.max_drop_to, Some(18.0));
    assert_eq!(
        score.max_drop_achievement.as_deref(),
        Some("Defeat Malenia")
    );

    Ok(())
}

#[tokio::test]
async fn test_recompute_overwrites_wholesale() -> Result<()> {
    let db = setup_test_db().await?;
    let game = seed_game(&db, 413150, "Stardew Valley", "stardew-valley").await?;

    // First pass: two achievements produce a drop
    for (api_name, percent) in [("a", 80.0), ("b", 40.0)] {
        db.upsert_achievement(&InsertAchievementRequest {
            game_id: game.id,
            api_name: api_name.to_string(),
            display_name: None,
            description: None,
            percent,
        })
        .await?;
    }
    recompute::compute_all_scores(&db).await?;
    let first = db.get_rage_score(game.id).await?.unwrap();
    assert!(first.max_achievement_drop.is_some());

    // Second pass: flatten the curve; the drop fields must be cleared,
    // not left over from the previous record
    db.upsert_achievement(&InsertAchievementRequest {
        game_id: game.id,
        api_name: "b".to_string(),
        display_name: None,
        description: None,
        percent: 80.0,
    })
    .await?;
    recompute::compute_all_scores(&db).await?;
    let second = db.get_rage_score(game.id).await?.unwrap();

    assert_eq!(second.max_achievement_drop, None);
    assert_eq!(second.max_drop_achievement, None);
    assert_eq!(second.rage_score, 0.0);

    Ok(())
}

#[tokio::test]
async fn test_reddit_posts_counted_as_negative() -> Result<()> {
    let db = setup_test_db().await?;
    let game = seed_game(&db, 1091500, "Cyberpunk 2077", "cyberpunk-2077").await?;

    db.insert_reddit_post(&InsertRedditPostRequest {
        game_id: game.id,
        reddit_id: "abc123".to_string(),
        title: Some("Constant crashes".to_string()),
        body: Some("buggy mess".to_string()),
        upvotes: Some(120),
        num_comments: Some(30),
        created_utc: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
    })
    .await?;

    recompute::compute_all_scores(&db).await?;
    let score = db.get_rage_score(game.id).await?.unwrap();

    // One negative-leaning entry with technical hits: nonzero rage
    assert!(score.rage_score > 0.0);
    assert!(score.technical_rage > 0.0);

    Ok(())
}

#[tokio::test]
async fn test_leaderboard_orderings() -> Result<()> {
    let db = setup_test_db().await?;

    let ragey = seed_game(&db, 1, "Ragey", "ragey").await?;
    let chill = seed_game(&db, 2, "Chill", "chill").await?;

    db.insert_review(&InsertReviewRequest {
        game_id: ragey.id,
        steam_review_id: "r1".to_string(),
        is_positive: false,
        language: None,
        review_text: Some("unfair lag toxic clunky".to_string()),
        created_at_steam: None,
    })
    .await?;
    db.insert_review(&InsertReviewRequest {
        game_id: chill.id,
        steam_review_id: "c1".to_string(),
        is_positive: true,
        language: None,
        review_text: Some("lovely and relaxing".to_string()),
        created_at_steam: None,
    })
    .await?;

    recompute::compute_all_scores(&db).await?;

    let most_rage = db.list_leaderboard(Leaderboard::MostRage, 10).await?;
    assert_eq!(most_rage[0].slug, "ragey");

    let cozy = db.list_leaderboard(Leaderboard::Cozy, 10).await?;
    assert_eq!(cozy[0].slug, "chill");

    Ok(())
}
