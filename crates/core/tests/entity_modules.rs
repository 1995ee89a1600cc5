//! Entity module behaviour: full re-fetch after every mutation

mod support;

use std::sync::Arc;

use bizhub_core::{EntityModule, RemoveOutcome};
use bizhub_domain::forms::{ClientForm, TeamMemberForm};
use bizhub_domain::{Client, EditableResource, FormRecord, TeamMember};
use support::gateways::FakeEntityGateway;
use support::interaction::ScriptedInteraction;

fn client_from(id: &str, form: &ClientForm) -> Client {
    Client {
        id: id.to_string(),
        name: form.name.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
        company: form.company.clone(),
        address: form.address.clone(),
        created_at: None,
        updated_at: None,
    }
}

fn member_from(id: &str, form: &TeamMemberForm) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: form.name.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
        role: form.role.clone(),
        member_type: form.member_type,
        hourly_rate: form.hourly_rate,
        created_at: None,
        updated_at: None,
    }
}

fn acme() -> ClientForm {
    ClientForm {
        name: "Acme Corp".into(),
        email: "ops@acme.test".into(),
        phone: None,
        company: Some("Acme".into()),
        address: None,
    }
}

fn module(
    gateway: &Arc<FakeEntityGateway<Client>>,
    interaction: ScriptedInteraction,
) -> EntityModule<Client> {
    EntityModule::new(gateway.clone(), Arc::new(interaction))
}

#[tokio::test]
async fn create_relists_and_contains_submitted_fields() {
    let gateway = Arc::new(FakeEntityGateway::new(client_from));
    let clients = module(&gateway, ScriptedInteraction::new());

    let created = clients.create(&acme()).await.unwrap();

    assert_eq!(gateway.calls(), vec!["create", "list"]);
    let listed = clients.items();
    let row = listed.iter().find(|c| c.id == created.id).unwrap();
    assert_eq!(row.name, "Acme Corp");
    assert_eq!(row.email, "ops@acme.test");
    assert_eq!(row.company.as_deref(), Some("Acme"));
}

#[tokio::test]
async fn update_relists_with_new_values() {
    let gateway = Arc::new(FakeEntityGateway::seeded(
        member_from,
        vec![member_from(
            "tm-1",
            &TeamMemberForm {
                name: "Jo".into(),
                email: "jo@example.com".into(),
                role: "Designer".into(),
                member_type: Default::default(),
                phone: None,
                hourly_rate: None,
            },
        )],
    ));
    let team = EntityModule::new(gateway.clone(), Arc::new(ScriptedInteraction::new()));
    team.list().await.unwrap();

    let mut form = TeamMemberForm::from_fields(&team.cached("tm-1").unwrap().form_fields()).unwrap();
    form.role = "Lead Designer".into();
    form.hourly_rate = Some(85.0);
    team.update("tm-1", &form).await.unwrap();

    assert_eq!(gateway.calls(), vec!["list", "update:tm-1", "list"]);
    let member = team.cached("tm-1").unwrap();
    assert_eq!(member.role, "Lead Designer");
    assert_eq!(member.hourly_rate, Some(85.0));
}

#[tokio::test]
async fn confirmed_remove_deletes_and_drops_identifier() {
    let gateway = Arc::new(FakeEntityGateway::seeded(client_from, vec![client_from("c-1", &acme())]));
    let clients = module(&gateway, ScriptedInteraction::confirming(true));
    clients.list().await.unwrap();

    let outcome = clients.remove("c-1").await.unwrap();

    assert_eq!(outcome, RemoveOutcome::Removed);
    assert_eq!(gateway.count("delete:c-1"), 1);
    assert!(clients.items().iter().all(|c| c.id != "c-1"));
}

#[tokio::test]
async fn declined_remove_sends_nothing() {
    let gateway = Arc::new(FakeEntityGateway::seeded(client_from, vec![client_from("c-1", &acme())]));
    let interaction = Arc::new(ScriptedInteraction::confirming(false));
    let clients = EntityModule::new(gateway.clone(), interaction.clone());

    let outcome = clients.remove("c-1").await.unwrap();

    assert_eq!(outcome, RemoveOutcome::Declined);
    assert!(gateway.calls().is_empty());
    assert_eq!(interaction.questions(), vec!["Are you sure you want to delete this client?"]);
}

#[tokio::test]
async fn failed_list_keeps_previous_state() {
    let gateway = Arc::new(FakeEntityGateway::seeded(client_from, vec![client_from("c-1", &acme())]));
    let clients = module(&gateway, ScriptedInteraction::new());
    clients.list().await.unwrap();

    gateway.set_offline(true);
    assert!(clients.list().await.is_err());

    assert_eq!(clients.items().len(), 1);
    assert_eq!(clients.items()[0].id, "c-1");
}

#[tokio::test]
async fn failed_create_does_not_relist() {
    let gateway = Arc::new(FakeEntityGateway::new(client_from));
    gateway.set_offline(true);
    let clients = module(&gateway, ScriptedInteraction::new());

    assert!(clients.create(&acme()).await.is_err());
    assert_eq!(gateway.calls(), vec!["create"]);
}
