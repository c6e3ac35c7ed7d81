pub mod app_config;
pub mod mail_config;
pub mod recommendation_config;
pub mod server_config;

/// Reads configuration values by name. `std::env::var` in production.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
