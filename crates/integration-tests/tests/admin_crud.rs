//! End-to-end tests for the admin CRUD controllers against the stub
//! backend: create/edit/delete with re-fetch, confirm-before-delete, and
//! the gateway's 204 and error handling.

use greenmind_app::{AuthFlow, ContentAdmin, ContentForm, ContentItem, ContentList, UserAdmin};
use greenmind_client::types::{TipDraft, UserDraft};
use greenmind_client::{ApiClient, ClientConfig, SessionStore};
use greenmind_core::ContentKind;
use greenmind_core::validation::form::LoginForm;
use greenmind_integration_tests::{ADMIN_EMAIL, ADMIN_PASSWORD, TestBackend};

/// Log in as the seeded admin and return a client carrying the session.
async fn admin_client(backend: &TestBackend) -> (ApiClient, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let config =
        ClientConfig::new(&backend.base_url(), dir.path().join("session")).expect("config");
    let session = SessionStore::new(&config.session_file);
    let client = ApiClient::new(&config, session.clone()).expect("client");

    let mut flow = AuthFlow::new(client.clone(), session);
    let form = LoginForm {
        email: ADMIN_EMAIL.to_string(),
        password: ADMIN_PASSWORD.to_string(),
    };
    flow.submit_login(&form).await.expect("valid form");
    assert!(flow.state().authenticated, "admin login failed");

    (client, dir)
}

#[tokio::test]
async fn test_mission_create_edit_delete_cycle() {
    let backend = TestBackend::spawn().await;
    let (client, _dir) = admin_client(&backend).await;
    let mut admin = ContentAdmin::new(client);
    assert_eq!(admin.active_kind(), ContentKind::Missions);

    // Create.
    if let ContentForm::Mission(draft) = admin.form_mut() {
        draft.title = "Car-free week".to_string();
        draft.description = "Commute without a car".to_string();
        draft.category = "transport".to_string();
        draft.duration = "7 days".to_string();
        draft.difficulty = "Moyen".to_string();
        draft.points = 100;
        draft.co2_impact = 12.5;
        draft.total = 7;
    }
    admin.submit().await.expect("create mission");
    assert_eq!(admin.reload_counter(), 1);

    // The list reflects server state after the signalled re-fetch.
    let list = admin.reload().await.expect("reload");
    let ContentList::Missions(missions) = list else {
        panic!("expected missions list");
    };
    assert_eq!(missions.len(), 1);
    let mission = missions.into_iter().next().expect("created mission");
    assert_eq!(mission.title, "Car-free week");
    assert!(mission.id > 0);

    // Edit: the form is a copy of the item, update goes to its id.
    let id = mission.id;
    admin.start_edit(&ContentItem::Mission(mission));
    assert_eq!(admin.editing_id(), Some(id));
    if let ContentForm::Mission(draft) = admin.form_mut() {
        draft.points = 150;
    }
    admin.submit().await.expect("update mission");
    assert_eq!(admin.reload_counter(), 2);

    let ContentList::Missions(missions) = admin.reload().await.expect("reload") else {
        panic!("expected missions list");
    };
    assert_eq!(missions.first().expect("mission").points, 150);

    // Delete with confirmation; the list is empty afterwards.
    admin.request_delete(ContentKind::Missions, id);
    admin.confirm_delete().await.expect("delete mission");
    assert_eq!(admin.reload_counter(), 3);

    let list = admin.reload().await.expect("reload");
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_kind_switch_keeps_collections_separate() {
    let backend = TestBackend::spawn().await;
    let (client, _dir) = admin_client(&backend).await;
    let mut admin = ContentAdmin::new(client);

    admin.select_kind(ContentKind::Tips);
    if let ContentForm::Tip(draft) = admin.form_mut() {
        draft.title = "Shorter showers".to_string();
        draft.content = "Five minutes saves water".to_string();
        draft.category = "water".to_string();
        draft.impact = "high".to_string();
    }
    admin.submit().await.expect("create tip");

    // The missions tab stays empty; the tips tab shows the new item.
    admin.select_kind(ContentKind::Missions);
    assert!(admin.reload().await.expect("reload missions").is_empty());

    admin.select_kind(ContentKind::Quizzes);
    assert!(admin.reload().await.expect("reload quizzes").is_empty());

    admin.select_kind(ContentKind::Tips);
    let ContentList::Tips(tips) = admin.reload().await.expect("reload tips") else {
        panic!("expected tips list");
    };
    assert_eq!(tips.len(), 1);
    assert_eq!(tips.first().expect("tip").title, "Shorter showers");
}

#[tokio::test]
async fn test_unauthenticated_mutation_is_rejected() {
    let backend = TestBackend::spawn().await;

    // Fresh client with no login at all.
    let dir = tempfile::tempdir().expect("temp dir");
    let config =
        ClientConfig::new(&backend.base_url(), dir.path().join("session")).expect("config");
    let session = SessionStore::new(&config.session_file);
    let client = ApiClient::new(&config, session).expect("client");

    let mut admin = ContentAdmin::new(client);
    let result = admin.submit().await;

    let err = result.expect_err("mutation without a session");
    assert_eq!(err.to_string(), "Unauthorized");
    assert_eq!(admin.reload_counter(), 0);
}

#[tokio::test]
async fn test_tip_like_handles_no_content_response() {
    let backend = TestBackend::spawn().await;
    let (client, _dir) = admin_client(&backend).await;

    let tip = client
        .create_tip(&TipDraft {
            title: "Unplug chargers".to_string(),
            content: "Standby still draws power".to_string(),
            category: "energy".to_string(),
            impact: "low".to_string(),
        })
        .await
        .expect("create tip");

    // 204 responses come back as the Empty marker, not a decode error.
    client.like_tip(tip.id).await.expect("first like");
    client.like_tip(tip.id).await.expect("second like");

    let tips = client.list_tips().await.expect("list tips");
    assert_eq!(tips.first().expect("tip").likes, 2);
}

#[tokio::test]
async fn test_user_admin_cycle() {
    let backend = TestBackend::spawn().await;
    let (client, _dir) = admin_client(&backend).await;
    let mut admin = UserAdmin::new(client);

    assert!(admin.reload().await.expect("initial list").is_empty());

    // Create.
    *admin.form_mut() = UserDraft {
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
    };
    admin.submit().await.expect("create user");
    assert_eq!(admin.reload_counter(), 1);

    let users = admin.reload().await.expect("reload");
    assert_eq!(users.len(), 1);
    let user = users.into_iter().next().expect("created user");
    assert_eq!(user.email, "grace@example.com");

    // Edit only the name; the email is kept from the copied record.
    admin.start_edit(&user);
    admin.form_mut().name = "Rear Admiral Grace Hopper".to_string();
    admin.submit().await.expect("update user");

    let users = admin.reload().await.expect("reload");
    let updated = users.first().expect("user");
    assert_eq!(updated.name, "Rear Admiral Grace Hopper");
    assert_eq!(updated.email, "grace@example.com");

    // Delete with confirmation.
    admin.request_delete(user.id);
    admin.confirm_delete().await.expect("delete user");
    assert!(admin.reload().await.expect("reload").is_empty());
}

#[tokio::test]
async fn test_not_found_error_uses_error_field() {
    let backend = TestBackend::spawn().await;
    let (client, _dir) = admin_client(&backend).await;
    let mut admin = ContentAdmin::new(client);

    // Deleting a missing item surfaces the body's `error` field.
    admin.request_delete(ContentKind::Missions, 999);
    let err = admin.confirm_delete().await.expect_err("missing item");
    assert_eq!(err.to_string(), "Mission not found");
    assert_eq!(admin.reload_counter(), 0);
}

#[tokio::test]
async fn test_failed_update_keeps_form_for_retry() {
    let backend = TestBackend::spawn().await;
    let (client, _dir) = admin_client(&backend).await;
    let mut admin = ContentAdmin::new(client);

    // Editing an item that no longer exists on the server.
    admin.select_kind(ContentKind::Tips);
    admin.start_edit(&ContentItem::Tip(greenmind_client::types::Tip {
        id: 424242,
        title: "Ghost tip".to_string(),
        content: "Deleted elsewhere".to_string(),
        category: "misc".to_string(),
        impact: "low".to_string(),
        likes: 0,
    }));

    let err = admin.submit().await.expect_err("update of missing tip");
    assert_eq!(err.to_string(), "Tip not found");

    // The operator's input survives the failure.
    assert_eq!(admin.editing_id(), Some(424242));
    match admin.form() {
        ContentForm::Tip(draft) => assert_eq!(draft.title, "Ghost tip"),
        other => panic!("unexpected form variant: {other:?}"),
    }
}
