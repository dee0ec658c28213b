pub mod shamir_secret_sharing;
