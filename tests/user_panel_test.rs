//! User panel tests: listing, permission gates and the save branch.

mod common;

use common::{acting_as, seeded, user_names};
use rbac_console::models::user::{DedupRule, NewUser, UserDraft, UserStatus};
use rbac_console::panels::{ModalRequest, PanelMode, SaveError, Saved, UserPanel};

fn draft(name: &str, email: &str, role: &str) -> UserDraft {
    UserDraft {
        id: None,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        status: UserStatus::Active,
    }
}

#[tokio::test]
async fn test_list_shows_seed_users_and_roles() {
    let store = seeded();
    let panel = UserPanel::new(&store, DedupRule::Legacy);
    let listing = panel.list().await;
    assert_eq!(user_names(&listing.users), vec!["Alice", "Bob"]);
    assert_eq!(listing.roles.len(), 2);
}

#[tokio::test]
async fn test_legacy_dedup_hides_full_repeats_only() {
    let store = seeded();
    // Repeats Alice's name, email and role
    store
        .add_user(NewUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            role: "Admin".to_string(),
            status: UserStatus::Active,
        })
        .await;
    // Shares only a role with Bob
    store
        .add_user(NewUser {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            role: "Editor".to_string(),
            status: UserStatus::Active,
        })
        .await;

    let legacy = UserPanel::new(&store, DedupRule::Legacy).list().await;
    assert_eq!(user_names(&legacy.users), vec!["Alice", "Bob", "Dana"]);

    let all = UserPanel::new(&store, DedupRule::None).list().await;
    assert_eq!(user_names(&all.users), vec!["Alice", "Bob", "Alice", "Dana"]);
}

#[tokio::test]
async fn test_add_requires_write() {
    let store = seeded();
    let panel = UserPanel::new(&store, DedupRule::default());

    let nobody = acting_as(&store, "").await;
    let notice = panel.open_add(&nobody).unwrap_err();
    assert_eq!(notice.message(), "You do not have permission to add users.");

    let editor = acting_as(&store, "Editor").await;
    assert_eq!(panel.open_add(&editor), Ok(PanelMode::AwaitingSave(UserDraft::default())));
}

#[tokio::test]
async fn test_edit_prefills_current_values() {
    let store = seeded();
    let panel = UserPanel::new(&store, DedupRule::default());
    let admin = acting_as(&store, "Admin").await;

    let mode = panel.open(&admin, ModalRequest::Edit(2)).await.unwrap();
    let form = mode.into_draft().expect("form is open");
    assert_eq!(form.id, Some(2));
    assert_eq!(form.name, "Bob");
    assert_eq!(form.email, "bob@example.com");
    assert_eq!(form.role, "Editor");
    assert_eq!(form.status, UserStatus::Inactive);
}

#[tokio::test]
async fn test_edit_denied_without_write() {
    let store = seeded();
    let panel = UserPanel::new(&store, DedupRule::default());
    let viewer = acting_as(&store, "Viewer").await;

    let notice = panel.open_edit(&viewer, 1).await.unwrap_err();
    assert_eq!(notice.message(), "You do not have permission to edit users.");
}

#[tokio::test]
async fn test_edit_unknown_user() {
    let store = seeded();
    let panel = UserPanel::new(&store, DedupRule::default());
    let admin = acting_as(&store, "Admin").await;
    assert_eq!(panel.open_edit(&admin, 99).await.unwrap_err().message(), "User not found.");
}

#[tokio::test]
async fn test_delete_requires_delete_permission() {
    let store = seeded();
    let panel = UserPanel::new(&store, DedupRule::default());

    let editor = acting_as(&store, "Editor").await;
    let notice = panel.delete(&editor, 2).await.unwrap_err();
    assert_eq!(notice.message(), "You do not have permission to delete users.");
    assert_eq!(store.fetch_users().await.len(), 2);

    let admin = acting_as(&store, "Admin").await;
    panel.delete(&admin, 2).await.unwrap();
    assert_eq!(user_names(&panel.list().await.users), vec!["Alice"]);
}

#[tokio::test]
async fn test_save_without_id_creates_with_new_id() {
    let store = seeded();
    let panel = UserPanel::new(&store, DedupRule::default());
    let editor = acting_as(&store, "Editor").await;
    let max_before = store.fetch_users().await.iter().map(|u| u.id).max().unwrap();

    let saved = panel
        .save(&editor, draft(" Carol ", "carol@example.com", "Editor"))
        .await
        .unwrap();

    let Saved::Created(user) = saved else {
        panic!("expected a created record");
    };
    assert!(user.id > max_before);
    assert_eq!(user.name, "Carol");
    assert_eq!(store.fetch_users().await.last(), Some(&user));
}

#[tokio::test]
async fn test_save_with_id_updates() {
    let store = seeded();
    let panel = UserPanel::new(&store, DedupRule::default());
    let admin = acting_as(&store, "Admin").await;

    let mut edit = draft("Robert", "bob@example.com", "Editor");
    edit.id = Some(2);
    let saved = panel.save(&admin, edit).await.unwrap();
    assert!(matches!(saved, Saved::Updated(ref u) if u.name == "Robert"));

    let users = store.fetch_users().await;
    assert_eq!(user_names(&users), vec!["Alice", "Robert"]);
}

#[tokio::test]
async fn test_save_with_unknown_id_changes_nothing() {
    let store = seeded();
    let panel = UserPanel::new(&store, DedupRule::default());
    let admin = acting_as(&store, "Admin").await;
    let before = store.fetch_users().await;

    let mut ghost = draft("Ghost", "ghost@example.com", "Editor");
    ghost.id = Some(50);
    panel.save(&admin, ghost).await.unwrap();

    assert_eq!(store.fetch_users().await, before);
}

#[tokio::test]
async fn test_save_requires_all_fields() {
    let store = seeded();
    let panel = UserPanel::new(&store, DedupRule::default());
    let admin = acting_as(&store, "Admin").await;

    let err = panel.save(&admin, draft("Eve", "  ", "")).await.unwrap_err();
    match err {
        SaveError::Invalid { draft, errors } => {
            assert_eq!(draft.name, "Eve");
            assert_eq!(errors, vec!["Email is required", "Role is required"]);
        }
        other => panic!("expected validation errors, got {other:?}"),
    }
    assert_eq!(store.fetch_users().await.len(), 2);
}

#[tokio::test]
async fn test_save_accepts_unchecked_email_and_role() {
    // Only presence is checked: no email format, no role lookup.
    let store = seeded();
    let panel = UserPanel::new(&store, DedupRule::default());
    let admin = acting_as(&store, "Admin").await;

    let saved = panel.save(&admin, draft("Eve", "not-an-email", "Nonexistent")).await;
    assert!(saved.is_ok());
}

#[tokio::test]
async fn test_save_denied_without_write() {
    let store = seeded();
    let panel = UserPanel::new(&store, DedupRule::default());
    let nobody = acting_as(&store, "").await;

    let err = panel.save(&nobody, draft("Eve", "eve@example.com", "Editor")).await.unwrap_err();
    assert!(matches!(err, SaveError::Denied(_)));
    assert_eq!(store.fetch_users().await.len(), 2);
}
