mod support;

mod auth;
mod params;
