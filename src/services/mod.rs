// Service module exports

pub mod countdown;
pub mod schedule;
pub mod settings;
