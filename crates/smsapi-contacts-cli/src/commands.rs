/*
[INPUT]:  Parsed command, configured credentials and an SMSAPI client
[OUTPUT]: JSON value describing the command result
[POS]:    CLI layer - command execution
[UPDATE]: When adding subcommands
*/

use anyhow::{Context, Result};
use serde_json::{Value, json};
use smsapi_contacts::SmsapiClient;
use tracing::info;

use crate::cli::{Command, ContactFilter, ContactsCommand, FieldsCommand, GroupsCommand, NewContact};
use crate::config::Credentials;

/// Log in with the configured credentials and return what the server reported
pub async fn login(client: &SmsapiClient, credentials: &Credentials) -> Result<Value> {
    let auth = client.authentication();
    let result = match credentials {
        Credentials::Password { username, password } => {
            serde_json::to_value(auth.login(username, password).await.context("login")?)?
        }
        Credentials::PasswordHash {
            username,
            password_hash,
        } => serde_json::to_value(
            auth.login_hashed(username, password_hash)
                .await
                .context("login")?,
        )?,
        Credentials::OAuth { token } => {
            serde_json::to_value(auth.login_oauth(token).await.context("login")?)?
        }
    };
    Ok(result)
}

/// Run a command on a logged-in client
pub async fn run(client: &SmsapiClient, command: &Command) -> Result<Value> {
    match command {
        Command::Login => Ok(json!({ "logged_in": client.session().is_authenticated() })),
        Command::Contacts(cmd) => contacts(client, cmd).await,
        Command::Groups(cmd) => groups(client, cmd).await,
        Command::Fields(FieldsCommand::List) => {
            let fields = client.contacts().fields().list().execute().await?;
            Ok(serde_json::to_value(fields)?)
        }
    }
}

async fn contacts(client: &SmsapiClient, command: &ContactsCommand) -> Result<Value> {
    let contacts = client.contacts();
    let value = match command {
        ContactsCommand::List(filter) => serde_json::to_value(
            list_contacts(client, filter)
                .await
                .context("list contacts")?,
        )?,
        ContactsCommand::Get { id } => serde_json::to_value(
            contacts
                .get(id)
                .execute()
                .await
                .with_context(|| format!("get contact {id}"))?,
        )?,
        ContactsCommand::Add(new) => serde_json::to_value(
            add_contact(client, new).await.context("add contact")?,
        )?,
        ContactsCommand::Delete { id } => {
            contacts
                .delete(id)
                .execute()
                .await
                .with_context(|| format!("delete contact {id}"))?;
            info!(id = %id, "contact deleted");
            json!({ "deleted": id })
        }
    };
    Ok(value)
}

async fn list_contacts(
    client: &SmsapiClient,
    filter: &ContactFilter,
) -> smsapi_contacts::Result<smsapi_contacts::Collection<smsapi_contacts::Contact>> {
    let mut list = client.contacts().list();
    if let Some(query) = &filter.query {
        list = list.q(query.as_str());
    }
    if let Some(phone_number) = &filter.phone_number {
        list = list.phone_number(phone_number.as_str());
    }
    if let Some(email) = &filter.email {
        list = list.email(email.as_str());
    }
    if let Some(limit) = filter.limit {
        list = list.limit(limit);
    }
    if let Some(offset) = filter.offset {
        list = list.offset(offset);
    }
    list.execute().await
}

async fn add_contact(
    client: &SmsapiClient,
    new: &NewContact,
) -> smsapi_contacts::Result<smsapi_contacts::Contact> {
    let mut add = client.contacts().add().phone_number(new.phone_number.as_str());
    if let Some(first_name) = &new.first_name {
        add = add.first_name(first_name.as_str());
    }
    if let Some(last_name) = &new.last_name {
        add = add.last_name(last_name.as_str());
    }
    if let Some(email) = &new.email {
        add = add.email(email.as_str());
    }
    add.execute().await
}

async fn groups(client: &SmsapiClient, command: &GroupsCommand) -> Result<Value> {
    let groups = client.contacts().groups();
    let value = match command {
        GroupsCommand::List { name } => {
            let mut list = groups.list();
            if let Some(name) = name {
                list = list.name(name.as_str());
            }
            serde_json::to_value(list.execute().await.context("list groups")?)?
        }
        GroupsCommand::Get { id } => serde_json::to_value(
            groups
                .get(id)
                .execute()
                .await
                .with_context(|| format!("get group {id}"))?,
        )?,
        GroupsCommand::Add { name, description } => {
            let mut add = groups.add().name(name.as_str());
            if let Some(description) = description {
                add = add.description(description.as_str());
            }
            serde_json::to_value(add.execute().await.context("add group")?)?
        }
        GroupsCommand::Delete { id } => {
            groups
                .delete(id)
                .execute()
                .await
                .with_context(|| format!("delete group {id}"))?;
            info!(id = %id, "group deleted");
            json!({ "deleted": id })
        }
    };
    Ok(value)
}
