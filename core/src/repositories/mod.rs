//! Repository interfaces for the account store.

pub mod account;

pub use account::{
    AccountChanges, AccountField, AccountRepository, FieldValue, MockAccountRepository, Predicate,
};
