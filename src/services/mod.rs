// Service module exports

pub mod agenda;
pub mod event;
pub mod index;
pub mod layout;
pub mod navigation;
pub mod settings;
