//! Admin credential commands.

use millbrook_site::services::auth;

/// Hash a password and print the PHC string for `ADMIN_PASSWORD_HASH`.
///
/// # Errors
///
/// Returns an error if hashing fails.
pub fn hash_password(password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let hash = auth::hash_password(password)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{hash}");
    }

    Ok(())
}
