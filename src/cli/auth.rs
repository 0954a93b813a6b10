use dialoguer::{Input, Password};

use crate::{
    cli::{load_session, spinner},
    error,
    remote::ApiClient,
    success,
    types::Credentials,
    warning,
};

pub async fn login(email: Option<String>, password: Option<String>, verbose: bool) {
    let client = match ApiClient::from_env() {
        Ok(c) => c.with_verbose(verbose),
        Err(e) => error!("Cannot reach the service: {}", e),
    };
    let mut session = load_session().await;

    let credentials = match prompt_credentials(email, password) {
        Ok(c) => c,
        Err(e) => error!("Cannot read credentials: {}", e),
    };

    let pb = spinner("Signing in...");
    let result = session.login(&client, &credentials).await;
    pb.finish_and_clear();

    match result {
        Ok(_) => success!("Login successful!"),
        Err(e) => warning!("{}", e),
    }
}

pub async fn logout() {
    let mut session = load_session().await;
    if !session.is_logged_in() {
        warning!("Not logged in.");
        return;
    }

    match session.logout().await {
        Ok(()) => success!("Logged out."),
        Err(e) => warning!("Failed to clear the stored token: {}", e),
    }
}

fn prompt_credentials(
    email: Option<String>,
    password: Option<String>,
) -> Result<Credentials, dialoguer::Error> {
    let email = match email {
        Some(e) => e,
        None => Input::<String>::new().with_prompt("Email").interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    Ok(Credentials { email, password })
}
