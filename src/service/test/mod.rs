mod config;
mod reaction_role;
