//! Create, fetch and delete one account against a running accounts API.
//!
//! Expects `CRESTBANK_API_URL` to point at the service, e.g.
//! `CRESTBANK_API_URL=http://localhost:8080 cargo run --example quickstart`

use crestbank_client::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Client::from_env()?;

    let organisation_id = uuid::Uuid::new_v4().to_string();
    let account_id = uuid::Uuid::new_v4().to_string();

    let created = client
        .create_account()
        .with_organisation_id(organisation_id.as_str())
        .with_account_id(account_id.as_str())
        .with_country("GB")
        .with_bank_id("000006")
        .with_bank_id_code("GBDSC")
        .with_bic("NWBKGB22")
        .with_account_classification("Personal")
        .with_name("Samantha Holder")
        .request()
        .outcome()
        .await;

    let payload = match created {
        Ok(payload) => payload,
        Err(errors) => {
            for err in &errors {
                eprintln!("create failed: {err}");
            }
            return Err("account creation failed".into());
        }
    };

    println!(
        "created account {} (number {}, iban {})",
        payload.data.id, payload.data.attributes.account_number, payload.data.attributes.iban
    );

    let fetched = client
        .fetch_account()
        .with_account_id(account_id.as_str())
        .request()
        .outcome()
        .await;

    match fetched {
        Ok(payload) => println!("fetched version {}", payload.data.version),
        Err(errors) => eprintln!("fetch failed: {errors:?}"),
    }

    let deleted = client
        .delete_account()
        .with_account_id(account_id.as_str())
        .with_version(payload.data.version)
        .request()
        .outcome()
        .await;

    match deleted {
        Ok(()) => println!("deleted account {account_id}"),
        Err(errors) => eprintln!("delete failed: {errors:?}"),
    }

    Ok(())
}
