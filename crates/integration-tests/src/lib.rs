//! Integration tests for the Millbrook site.
//!
//! # Running Tests
//!
//! ```bash
//! # Prepare a throwaway database and start the server
//! export SITE_DATABASE_URL=sqlite:/tmp/millbrook-test.db
//! export SITE_SESSION_SECRET=$(head -c 32 /dev/urandom | base64)
//! export ADMIN_USERNAME=admin
//! export ADMIN_PASSWORD_HASH=$(cargo run -p millbrook-cli -- admin hash-password -p admin-test-pass)
//! cargo run -p millbrook-site &
//!
//! # Run the ignored tests
//! cargo test -p millbrook-integration-tests -- --ignored
//! ```
//!
//! Tests assume the credentials above; override the base URL with
//! `SITE_BASE_URL` if the server is not on localhost:3000.
