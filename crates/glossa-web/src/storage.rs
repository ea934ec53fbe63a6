use glossa_core::config::Config;

const TOKEN_STORAGE_KEY: &str =
  "glossa.token";
const CONFIG_TOML: &str =
  include_str!("../assets/glossa.toml");

/// Session token written by the external login flow, if any.
pub fn load_token() -> Option<String> {
  web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
    })
    .map(|token| token.trim().to_string())
    .filter(|token| !token.is_empty())
}

pub fn load_config() -> Config {
  Config::from_toml_or_default(
    CONFIG_TOML
  )
}
