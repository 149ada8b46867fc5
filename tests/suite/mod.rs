mod config;
mod contact_flow;
mod mail;
mod tracker;
mod validation;
