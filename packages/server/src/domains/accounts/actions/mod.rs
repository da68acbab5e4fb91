//! Accounts domain actions - business logic functions

mod get_or_create_account;

pub use get_or_create_account::{
    get_or_create_account, get_or_create_account_with, MAX_INVITE_CODE_ATTEMPTS,
};
