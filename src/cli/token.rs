//! CLI handlers for the `swifty token` commands.

use crate::auth::TokenStatus;
use crate::client::TokenedClient;
use crate::error::SwiftyError;

/// Handle `swifty token info`.
pub async fn handle_info(client: &TokenedClient) -> Result<(), SwiftyError> {
    let info = client.token_info().await?;
    println!("🔐 Token info\n");
    println!("  Application:  {}", info.application.uid);
    println!("  Scopes:       {}", info.scopes.join(", "));
    println!("  Expires in:   {}s", info.expires_in_seconds);
    match info.resource_owner_id {
        Some(owner) => println!("  Owner:        {owner}"),
        None => println!("  Owner:        (application token)"),
    }
    Ok(())
}

/// Handle `swifty token status`.
pub async fn handle_status(client: &TokenedClient) -> Result<(), SwiftyError> {
    if !client.is_configured() {
        return Err(SwiftyError::Configuration(
            "CLIENT_ID / CLIENT_SECRET not set".to_string(),
        ));
    }
    client.get_access_token().await?;
    println!("{}", describe_status(&client.token_status()));
    Ok(())
}

/// Handle `swifty token refresh-demo`: expire the token and show that the
/// next request refreshes it without the caller noticing.
pub async fn handle_refresh_demo(client: &TokenedClient, login: &str) -> Result<(), SwiftyError> {
    client.get_access_token().await?;
    println!("📊 Before:          {}", describe_status(&client.token_status()));

    client.force_token_expiration();
    println!("⏰ After expiring:  {}", describe_status(&client.token_status()));

    let user = client.get_user_details(login).await?;
    println!("🔄 Fetched {} ({})", user.login, user.display_name());
    println!("📊 After refresh:   {}", describe_status(&client.token_status()));
    println!("✅ Token refreshed transparently");
    Ok(())
}

pub fn describe_status(status: &TokenStatus) -> String {
    match (status.has_token, status.is_expired) {
        (false, _) => "no token cached".to_string(),
        (true, true) => "token cached, expired".to_string(),
        (true, false) => format!("token cached, valid for {}s", status.expires_in_secs),
    }
}
