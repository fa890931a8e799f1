//! Data models for the contacts manager.

pub mod contact;

pub use contact::Contact;
