// Business domains
pub mod accounts;
pub mod auth;
pub mod invites;
