//! Clients for remote services

pub mod transactions;
