mod auth_mode;
mod builder;
