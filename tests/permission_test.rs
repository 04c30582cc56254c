mod common;

use common::{acting_as, seeded};
use rbac_console::auth::permissions::{ActivePermissions, has_permission, resolve_permissions};
use rbac_console::models::permission::Permission;
use rbac_console::store::seed;

#[test]
fn test_unknown_roles_resolve_to_empty_set() {
    let roles = seed::roles();
    for name in ["Viewer", "admin", "Admin ", "", "Editor, Admin"] {
        assert!(
            resolve_permissions(name, &roles).is_empty(),
            "'{name}' should resolve to no permissions"
        );
    }
}

#[test]
fn test_admin_seed_permissions() {
    let admin = resolve_permissions("Admin", &seed::roles());
    assert!(has_permission(Permission::Read, &admin));
    assert!(has_permission(Permission::Write, &admin));
    assert!(has_permission(Permission::Delete, &admin));
    assert!(!has_permission(Permission::Execute, &admin));
}

#[test]
fn test_editor_seed_permissions() {
    let editor = resolve_permissions("Editor", &seed::roles());
    assert!(has_permission(Permission::Write, &editor));
    assert!(!has_permission(Permission::Delete, &editor));
}

#[test]
fn test_no_selection_allows_nothing() {
    let active = ActivePermissions::resolve(None, &seed::roles());
    assert_eq!(active.role_name(), "");
    for p in Permission::CHECKLIST {
        assert!(!active.allows(p));
    }
}

#[test]
fn test_template_token_check() {
    let active = ActivePermissions::resolve(Some("Editor"), &seed::roles());
    assert!(active.has("Write"));
    assert!(!active.has("Delete"));
    assert!(!active.has("Everything"));
}

#[tokio::test]
async fn test_require_returns_denial_notice() {
    let store = seeded();
    let editor = acting_as(&store, "Editor").await;

    assert!(editor.require(Permission::Write, "no write").is_ok());
    let notice = editor.require(Permission::Delete, "no delete").unwrap_err();
    assert_eq!(notice.message(), "no delete");
}

#[tokio::test]
async fn test_resolution_follows_store_changes() {
    let store = seeded();
    let mut editor = store.find_role(2).await.expect("Editor is seeded");
    editor.permissions.insert(Permission::Delete);
    store.update_role(editor).await;

    let active = acting_as(&store, "Editor").await;
    assert!(active.allows(Permission::Delete));
}
