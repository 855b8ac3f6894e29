/*
[INPUT]:  SMSAPI credentials from the environment
[OUTPUT]: A contact created, grouped and removed again
[POS]:    Examples - contacts flow demonstration
[UPDATE]: When the contacts flow changes
*/

use smsapi_contacts::*;

/// Example: contacts flow
///
/// 1. Log in with SMSAPI_USERNAME / SMSAPI_PASSWORD
/// 2. Create a group and a contact
/// 3. Put the contact into the group
/// 4. Clean up
#[tokio::main]
async fn main() {
    println!("=== SMSAPI Contacts Example ===\n");

    let (Ok(username), Ok(password)) = (
        std::env::var("SMSAPI_USERNAME"),
        std::env::var("SMSAPI_PASSWORD"),
    ) else {
        eprintln!("Set SMSAPI_USERNAME and SMSAPI_PASSWORD to run this example");
        return;
    };
    let phone_number = std::env::var("SMSAPI_TEST_NUMBER").unwrap_or_else(|_| "48500000000".to_string());

    let client = match SmsapiClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    match client.authentication().login(&username, &password).await {
        Ok(account) => println!("✓ Logged in, {} points left", account.points),
        Err(e) => {
            eprintln!("Login failed: {}", e);
            return;
        }
    }

    if let Err(e) = run(&client, &phone_number).await {
        eprintln!("Example failed: {}", e);
        return;
    }

    client.authentication().logout();
    println!("\n✓ Contacts example complete");
}

async fn run(client: &SmsapiClient, phone_number: &str) -> Result<()> {
    let groups = client.contacts().groups();

    let group = groups.add().name("example-group").execute().await?;
    println!("✓ Group created: {} ({})", group.name, group.id);

    let contact = client
        .contacts()
        .add()
        .phone_number(phone_number)
        .first_name("Example")
        .gender(Gender::Female)
        .execute()
        .await?;
    println!("✓ Contact created: {}", contact.id);

    groups.members().add(&group.id, &contact.id).execute().await?;
    let assigned = groups.assignments().list(&contact.id).execute().await?;
    for g in &assigned {
        println!("  member of {}", g.name);
    }

    client.contacts().delete(&contact.id).execute().await?;
    groups.delete(&group.id).execute().await?;
    println!("✓ Cleaned up");

    Ok(())
}
