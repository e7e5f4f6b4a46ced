use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::json;
use tfe::{
    ApiError, CreateOrganizationInput, DeleteOrganizationOutput, ModifyOrganizationInput,
    OrganizationApi, ValidationError,
};

use crate::support::{client, error_body, organization_resource};

#[tokio::test]
async fn create_then_get_organization() {
    let server = Server::run();
    let org = organization_resource("acme", "ops@acme.test");
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/api/v2/organizations"),
            request::body(json_decoded(eq(json!({
                "data": {
                    "type": "organizations",
                    "attributes": {"name": "acme", "email": "ops@acme.test"}
                }
            })))),
        ])
        .respond_with(status_code(201).body(json!({ "data": org.clone() }).to_string())),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/v2/organizations/acme"))
            .respond_with(json_encoded(json!({ "data": org }))),
    );

    let client = client(&server);
    let created = client
        .organizations()
        .create(&CreateOrganizationInput::new("acme", "ops@acme.test"))
        .await
        .unwrap();
    let fetched = client.organizations().get("acme").await.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.email, "ops@acme.test");
    assert!(fetched.permissions.can("destroy"));
}

#[tokio::test]
async fn create_without_email_is_rejected_locally() {
    let server = Server::run();
    let err = client(&server)
        .organizations()
        .create(&CreateOrganizationInput {
            name: Some("acme".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Email is required");

    let err = client(&server).organizations().delete("").await.unwrap_err();
    assert_eq!(err.to_string(), "Name is required");

    let err = client(&server).organizations().delete("..").await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::DotSegment)
    ));
}

#[tokio::test]
async fn list_and_rename_organization() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/v2/organizations")).respond_with(
            json_encoded(json!({
                "data": [
                    organization_resource("acme", "ops@acme.test"),
                    organization_resource("globex", "it@globex.test"),
                ]
            })),
        ),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("PATCH", "/api/v2/organizations/acme"),
            request::body(json_decoded(eq(json!({
                "data": {"type": "organizations", "attributes": {"name": "acme-corp"}}
            })))),
        ])
        .respond_with(json_encoded(
            json!({ "data": organization_resource("acme-corp", "ops@acme.test") }),
        )),
    );

    let client = client(&server);
    let orgs = client.organizations().list().await.unwrap();
    assert_eq!(orgs.len(), 2);

    let input = ModifyOrganizationInput {
        rename: Some("acme-corp".to_string()),
        ..ModifyOrganizationInput::new("acme")
    };
    let renamed = client.organizations().modify(&input).await.unwrap();
    assert_eq!(renamed.name, "acme-corp");
}

#[tokio::test]
async fn duplicate_name_surfaces_every_remote_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/api/v2/organizations"))
            .respond_with(status_code(422).body(error_body(&[
                "Name has already been taken",
                "Email is invalid",
            ]))),
    );

    let err = client(&server)
        .organizations()
        .create(&CreateOrganizationInput::new("acme", "nope"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert_eq!(
        err.to_string(),
        "Name has already been taken\nEmail is invalid"
    );
}

#[tokio::test]
async fn delete_organization() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("DELETE", "/api/v2/organizations/acme"))
            .respond_with(status_code(204)),
    );

    let output = client(&server).organizations().delete("acme").await.unwrap();
    assert_eq!(output, DeleteOrganizationOutput);
}
