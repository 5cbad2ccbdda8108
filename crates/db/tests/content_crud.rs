//! Integration tests for content CRUD: slug behavior, uniqueness
//! conflicts, search/facet filtering, pagination, landing sections, and
//! site settings.

use sqlx::PgPool;

use rynvlabs_db::models::landing_section::UpdateLandingSection;
use rynvlabs_db::models::media::CreateMedia;
use rynvlabs_db::models::project::{CreateProject, UpdateProject};
use rynvlabs_db::repositories::media_repo::MediaKind;
use rynvlabs_db::repositories::ordered::{Facet, ListFilter};
use rynvlabs_db::repositories::{
    CategoryRepo, LandingSectionRepo, MediaRepo, ProjectRepo, SiteSettingRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str, category: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        slug: None,
        description: "A test project".to_string(),
        category: category.to_string(),
        image: None,
        tech_stack: None,
        challenge: None,
        solution: None,
        deep_dive: None,
        gallery: None,
        stats: None,
        sort_order: None,
        is_published: Some(true),
    }
}

// ---------------------------------------------------------------------------
// Slug behavior
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_slug_generated_from_title(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Line Follower Robot", "IOT"))
        .await
        .unwrap();
    assert_eq!(project.slug, "line-follower-robot");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_explicit_slug_wins(pool: PgPool) {
    let mut input = new_project("Line Follower Robot", "IOT");
    input.slug = Some("line-follower".to_string());
    let project = ProjectRepo::create(&pool, &input).await.unwrap();
    assert_eq!(project.slug, "line-follower");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unchanged_title_preserves_slug(pool: PgPool) {
    let mut input = new_project("Line Follower Robot", "IOT");
    input.slug = Some("custom-slug".to_string());
    let project = ProjectRepo::create(&pool, &input).await.unwrap();

    // Re-submitting the same title must not regenerate the slug.
    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            title: Some("Line Follower Robot".to_string()),
            description: Some("Updated description".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.slug, "custom-slug");
    assert_eq!(updated.description, "Updated description");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_changed_title_recomputes_slug(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Old Name", "IOT"))
        .await
        .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            title: Some("Brand New Name".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.slug, "brand-new-name");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_slug_is_a_constraint_violation(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("Same Title", "IOT"))
        .await
        .unwrap();

    let err = ProjectRepo::create(&pool, &new_project("Same Title", "SOFTWARE"))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_projects_slug"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_slug(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("Findable", "IOT"))
        .await
        .unwrap();

    let found = ProjectRepo::find_by_slug(&pool, "findable").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);

    assert!(ProjectRepo::find_by_slug(&pool, "missing").await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Search and facet filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_matches_title_and_description(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("Conveyor SCADA", "AUTOMATION"))
        .await
        .unwrap();
    let mut fish = new_project("Fish Pond Monitor", "IOT");
    fish.description = "Aquaculture conveyor-free telemetry".to_string();
    ProjectRepo::create(&pool, &fish).await.unwrap();
    ProjectRepo::create(&pool, &new_project("QR SaaS", "SOFTWARE"))
        .await
        .unwrap();

    // Case-insensitive substring over title OR description.
    let filter = ListFilter {
        search: Some("conveyor".to_string()),
        facet: None,
    };
    let (data, total) = ProjectRepo::list_public(&pool, &filter, 1, 50).await.unwrap();
    assert_eq!(total, 2);
    assert_eq!(data.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_facet_filters_exactly(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("A", "IOT")).await.unwrap();
    ProjectRepo::create(&pool, &new_project("B", "SOFTWARE")).await.unwrap();

    let filter = ListFilter::facet("category", Facet::Text("IOT".to_string()));
    let (data, total) = ProjectRepo::list_public(&pool, &filter, 1, 50).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(data[0].title, "A");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pagination_slices_and_counts(pool: PgPool) {
    for i in 1..=5 {
        ProjectRepo::create(&pool, &new_project(&format!("Project {i}"), "IOT"))
            .await
            .unwrap();
    }

    let (page1, total) = ProjectRepo::list_public(&pool, &ListFilter::default(), 1, 2)
        .await
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(page1.len(), 2);
    assert_eq!(page1[0].title, "Project 1");

    let (page3, _) = ProjectRepo::list_public(&pool, &ListFilter::default(), 3, 2)
        .await
        .unwrap();
    assert_eq!(page3.len(), 1);
    assert_eq!(page3[0].title, "Project 5");
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_type_filter_is_case_insensitive(pool: PgPool) {
    // Three PROJECT categories are seeded by migration.
    let all = CategoryRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 3);

    let projects = CategoryRepo::list(&pool, Some("project")).await.unwrap();
    assert_eq!(projects.len(), 3);

    let none = CategoryRepo::list(&pool, Some("PRODUCT")).await.unwrap();
    assert!(none.is_empty());
}

// ---------------------------------------------------------------------------
// Landing sections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_landing_sections_seeded_and_ordered(pool: PgPool) {
    let sections = LandingSectionRepo::list_all(&pool).await.unwrap();
    assert_eq!(sections.len(), 8);
    assert_eq!(sections[0].section_key, "hero");
    assert!(sections.windows(2).all(|w| w[0].sort_order <= w[1].sort_order));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_landing_section_visibility_toggle(pool: PgPool) {
    // Explicit hide.
    let hidden = LandingSectionRepo::set_visibility_by_key(&pool, "services", Some(false))
        .await
        .unwrap()
        .unwrap();
    assert!(!hidden.is_visible);

    let visible = LandingSectionRepo::list_visible(&pool).await.unwrap();
    assert!(visible.iter().all(|s| s.section_key != "services"));

    // Omitted value inverts back.
    let shown = LandingSectionRepo::set_visibility_by_key(&pool, "services", None)
        .await
        .unwrap()
        .unwrap();
    assert!(shown.is_visible);

    // Unknown key.
    assert!(LandingSectionRepo::set_visibility_by_key(&pool, "missing", None)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_landing_section_update_by_key(pool: PgPool) {
    let updated = LandingSectionRepo::update_by_key(
        &pool,
        "hero",
        &UpdateLandingSection {
            title: Some("New Hero Title".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title, "New Hero Title");
    // Untouched fields survive.
    assert!(updated.subtitle.is_some());
}

// ---------------------------------------------------------------------------
// Site settings
// ---------------------------------------------------------------------------

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_media_list_newest_first_with_mime_facet(pool: PgPool) {
    for (filename, mime) in [
        ("a.jpg", "image/jpeg"),
        ("b.pdf", "application/pdf"),
        ("c.png", "image/png"),
    ] {
        MediaRepo::create(
            &pool,
            &CreateMedia {
                filename: filename.to_string(),
                original_name: filename.to_string(),
                mime_type: mime.to_string(),
                size: 1024,
                path: format!("/uploads/{filename}"),
            },
        )
        .await
        .unwrap();
    }

    let (all, total) = MediaRepo::list(&pool, None, 1, 50).await.unwrap();
    assert_eq!(total, 3);
    // Newest first; same-instant rows fall back to descending id.
    assert_eq!(all[0].filename, "c.png");

    let (images, total) = MediaRepo::list(&pool, Some(MediaKind::Image), 1, 50)
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert!(images.iter().all(|m| m.mime_type.starts_with("image/")));

    let (documents, total) = MediaRepo::list(&pool, Some(MediaKind::Document), 1, 50)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(documents[0].filename, "b.pdf");

    // Delete removes the row.
    assert!(MediaRepo::delete(&pool, documents[0].id).await.unwrap());
    let (_, total) = MediaRepo::list(&pool, None, 1, 50).await.unwrap();
    assert_eq!(total, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_site_setting_upsert_create_then_replace(pool: PgPool) {
    let created = SiteSettingRepo::upsert(&pool, "tagline", &serde_json::json!("first"))
        .await
        .unwrap();
    assert_eq!(created.value, serde_json::json!("first"));

    let replaced = SiteSettingRepo::upsert(&pool, "tagline", &serde_json::json!("second"))
        .await
        .unwrap();
    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.value, serde_json::json!("second"));
}
