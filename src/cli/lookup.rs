//! CLI handlers for `swifty user` and `swifty search`.

use crate::client::TokenedClient;
use crate::error::SwiftyError;

use super::render::{render_profile, RenderOptions};

/// Handle `swifty user <login>`.
pub async fn handle_user(
    client: &TokenedClient,
    login: &str,
    json: bool,
    opts: RenderOptions,
) -> Result<(), SwiftyError> {
    let user = client.get_user_details(login).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
    } else {
        print!("{}", render_profile(&user, opts));
    }
    Ok(())
}

/// Handle `swifty search <query>`.
pub async fn handle_search(client: &TokenedClient, query: &str) -> Result<(), SwiftyError> {
    let users = client.search_users(query).await?;
    if users.is_empty() {
        println!("No users match \"{}\".", query.trim());
        return Ok(());
    }
    for user in users {
        println!("{:<16} {}", user.login, user.display_name());
    }
    Ok(())
}
