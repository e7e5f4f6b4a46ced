use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::json;
use tfe::client::MEDIA_TYPE;
use tfe::{
    ApiError, CreateWorkspaceInput, DeleteWorkspaceInput, DeleteWorkspaceOutput, ListOptions,
    ModifyWorkspaceInput, ValidationError, WorkspaceApi,
};

use crate::support::{client, error_body, workspace_resource, AUTHORIZATION};

#[tokio::test]
async fn list_returns_every_workspace_of_the_organization() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/api/v2/organizations/acme/workspaces"),
            request::headers(contains(("authorization", AUTHORIZATION))),
            request::headers(contains(("accept", MEDIA_TYPE))),
        ])
        .respond_with(json_encoded(json!({
            "data": [
                workspace_resource("ws-2", "zeta", "acme"),
                workspace_resource("ws-1", "alpha", "acme"),
            ]
        }))),
    );

    let client = client(&server);
    let mut workspaces = client.workspaces().list("acme").await.unwrap();
    workspaces.sort_by(|a, b| a.name.cmp(&b.name));

    let names: Vec<&str> = workspaces.iter().map(|ws| ws.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
    assert!(workspaces
        .iter()
        .all(|ws| ws.organization.as_deref() == Some("acme")));
}

#[tokio::test]
async fn list_forwards_page_options() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/api/v2/organizations/acme/workspaces"),
            request::query(url_decoded(contains(("page[number]", "2")))),
            request::query(url_decoded(contains(("page[size]", "5")))),
        ])
        .respond_with(json_encoded(json!({"data": []}))),
    );

    let options = ListOptions {
        page_number: Some(2),
        page_size: Some(5),
    };
    let workspaces = client(&server)
        .workspaces()
        .list_with_options("acme", &options)
        .await
        .unwrap();
    assert!(workspaces.is_empty());
}

#[tokio::test]
async fn list_of_missing_organization_is_not_found() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/api/v2/organizations/nope/workspaces",
        ))
        .respond_with(status_code(404)),
    );

    let err = client(&server).workspaces().list("nope").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn create_sends_set_attributes_and_matches_a_later_get() {
    let server = Server::run();
    let mut created = workspace_resource("ws-abc", "foo", "acme");
    created["attributes"]["auto-apply"] = json!(true);
    created["attributes"]["terraform-version"] = json!("0.11.0");
    created["attributes"]["working-directory"] = json!("bar/");

    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/api/v2/organizations/acme/workspaces"),
            request::headers(contains(("content-type", MEDIA_TYPE))),
            request::body(json_decoded(eq(json!({
                "data": {
                    "type": "workspaces",
                    "attributes": {
                        "name": "foo",
                        "auto-apply": true,
                        "terraform-version": "0.11.0",
                        "working-directory": "bar/"
                    }
                }
            })))),
        ])
        .respond_with(
            status_code(201)
                .insert_header("content-type", MEDIA_TYPE)
                .body(json!({ "data": created.clone() }).to_string()),
        ),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/v2/organizations/acme/workspaces/foo"))
            .respond_with(json_encoded(json!({ "data": created }))),
    );

    let client = client(&server);
    let input = CreateWorkspaceInput {
        auto_apply: Some(true),
        terraform_version: Some("0.11.0".to_string()),
        working_directory: Some("bar/".to_string()),
        ..CreateWorkspaceInput::new("acme", "foo")
    };
    let ws = client.workspaces().create(&input).await.unwrap();
    let refreshed = client.workspaces().get("acme", "foo").await.unwrap();

    assert_eq!(ws, refreshed);
    assert_eq!(ws.name, "foo");
    assert!(ws.auto_apply);
    assert_eq!(ws.terraform_version, "0.11.0");
    assert_eq!(ws.working_directory.as_deref(), Some("bar/"));
}

#[tokio::test]
async fn create_without_organization_or_name_never_reaches_the_server() {
    // No expectations: any request fails the server's verification on drop.
    let server = Server::run();
    let client = client(&server);
    let workspaces = client.workspaces();

    let err = workspaces
        .create(&CreateWorkspaceInput {
            name: Some("foo".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Organization is required");

    let err = workspaces
        .create(&CreateWorkspaceInput {
            organization: Some("acme".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::NameRequired)
    ));
    assert_eq!(err.to_string(), "Name is required");

    let err = workspaces.get("", "foo").await.unwrap_err();
    assert!(err.is_validation());
    let err = workspaces
        .delete(&DeleteWorkspaceInput::new("acme", ""))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Name is required");
}

#[tokio::test]
async fn modify_without_organization_or_name_never_reaches_the_server() {
    let server = Server::run();
    let client = client(&server);
    let workspaces = client.workspaces();

    let err = workspaces
        .modify(&ModifyWorkspaceInput {
            name: Some("foo".to_string()),
            terraform_version: Some("0.10.0".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Organization is required");

    let err = workspaces
        .modify(&ModifyWorkspaceInput {
            organization: Some("acme".to_string()),
            rename: Some("bar".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::NameRequired)
    ));
    assert_eq!(err.to_string(), "Name is required");
}

#[tokio::test]
async fn rejected_modify_surfaces_the_remote_message() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "PATCH",
            "/api/v2/organizations/acme/workspaces/foo",
        ))
        .respond_with(
            status_code(422).body(error_body(&["Terraform version is not a valid version"])),
        ),
    );

    let input = ModifyWorkspaceInput {
        terraform_version: Some("nope".to_string()),
        ..ModifyWorkspaceInput::new("acme", "foo")
    };
    let err = client(&server)
        .workspaces()
        .modify(&input)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Remote { status: 422, .. }));
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.to_string(), "Terraform version is not a valid version");
}

#[tokio::test]
async fn dot_names_never_reach_the_server() {
    // Any request would target the collection and fail verification on drop.
    let server = Server::run();
    let client = client(&server);

    let err = client
        .workspaces()
        .delete(&DeleteWorkspaceInput::new("acme", ".."))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::DotSegment)
    ));

    let err = client.workspaces().get("acme", ".").await.unwrap_err();
    assert!(err.is_validation());

    let err = client.workspaces().list("..").await.unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn rejected_create_surfaces_the_remote_message() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "POST",
            "/api/v2/organizations/acme/workspaces",
        ))
        .respond_with(
            status_code(422).body(error_body(&["Terraform version is not a valid version"])),
        ),
    );

    let input = CreateWorkspaceInput {
        terraform_version: Some("nope".to_string()),
        ..CreateWorkspaceInput::new("acme", "foo")
    };
    let err = client(&server)
        .workspaces()
        .create(&input)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(err.to_string(), "Terraform version is not a valid version");
}

#[tokio::test]
async fn modify_sends_only_set_fields() {
    let server = Server::run();
    let mut updated = workspace_resource("ws-abc", "foo", "acme");
    updated["attributes"]["terraform-version"] = json!("0.10.0");

    server.expect(
        Expectation::matching(all_of![
            request::method_path("PATCH", "/api/v2/organizations/acme/workspaces/foo"),
            request::body(json_decoded(eq(json!({
                "data": {
                    "type": "workspaces",
                    "attributes": {"terraform-version": "0.10.0"}
                }
            })))),
        ])
        .respond_with(json_encoded(json!({ "data": updated }))),
    );

    let input = ModifyWorkspaceInput {
        terraform_version: Some("0.10.0".to_string()),
        ..ModifyWorkspaceInput::new("acme", "foo")
    };
    let ws = client(&server)
        .workspaces()
        .modify(&input)
        .await
        .unwrap();

    assert_eq!(ws.terraform_version, "0.10.0");
    assert_eq!(ws.name, "foo");
    assert!(!ws.auto_apply);
}

#[tokio::test]
async fn rename_keeps_id_and_moves_the_lookup_key() {
    let server = Server::run();
    let mut renamed = workspace_resource("ws-abc", "bar", "acme");
    renamed["attributes"]["auto-apply"] = json!(true);

    server.expect(
        Expectation::matching(all_of![
            request::method_path("PATCH", "/api/v2/organizations/acme/workspaces/foo"),
            request::body(json_decoded(eq(json!({
                "data": {
                    "type": "workspaces",
                    "attributes": {"name": "bar", "auto-apply": true}
                }
            })))),
        ])
        .respond_with(json_encoded(json!({ "data": renamed.clone() }))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/v2/organizations/acme/workspaces/bar"))
            .respond_with(json_encoded(json!({ "data": renamed }))),
    );

    let client = client(&server);
    let input = ModifyWorkspaceInput {
        rename: Some("bar".to_string()),
        auto_apply: Some(true),
        ..ModifyWorkspaceInput::new("acme", "foo")
    };
    let ws = client.workspaces().modify(&input).await.unwrap();
    let refreshed = client.workspaces().get("acme", "bar").await.unwrap();

    assert_eq!(ws.id, "ws-abc");
    assert_eq!(refreshed.id, ws.id);
    assert_eq!(refreshed.name, "bar");
}

#[tokio::test]
async fn deleted_workspace_is_not_found() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("DELETE", "/api/v2/organizations/acme/workspaces/foo"))
            .respond_with(status_code(204)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/v2/organizations/acme/workspaces/foo"))
            .respond_with(status_code(404).body(r#"{"errors":[{"status":"404","title":"not found"}]}"#)),
    );

    let client = client(&server);
    let output = client
        .workspaces()
        .delete(&DeleteWorkspaceInput::new("acme", "foo"))
        .await
        .unwrap();
    assert_eq!(output, DeleteWorkspaceOutput);

    let err = client.workspaces().get("acme", "foo").await.unwrap_err();
    assert_eq!(err.to_string(), "Resource not found");
}

#[tokio::test]
async fn workspace_permissions_are_decoded() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/v2/organizations/acme/workspaces/foo"))
            .respond_with(json_encoded(
                json!({ "data": workspace_resource("ws-abc", "foo", "acme") }),
            )),
    );

    let ws = client(&server)
        .workspaces()
        .get("acme", "foo")
        .await
        .unwrap();
    assert!(ws.permissions.can("destroy"));
    assert!(!ws.permissions.can("force-unlock"));
    assert_eq!(ws.working_directory, None);
}

#[tokio::test]
async fn names_are_escaped_in_paths() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/api/v2/organizations/my%20org/workspaces/foo",
        ))
        .respond_with(json_encoded(
            json!({ "data": workspace_resource("ws-abc", "foo", "my org") }),
        )),
    );

    let ws = client(&server)
        .workspaces()
        .get("my org", "foo")
        .await
        .unwrap();
    assert_eq!(ws.organization.as_deref(), Some("my org"));
}

#[tokio::test]
async fn bad_token_is_unauthorized() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/api/v2/organizations/acme/workspaces",
        ))
        .respond_with(status_code(401)),
    );

    let err = client(&server).workspaces().list("acme").await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}
