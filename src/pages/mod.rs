//! Routed page components.

pub mod branches;
pub mod dashboard;
pub mod invoices;
pub mod login;
pub mod staff;
