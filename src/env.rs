pub const DEFAULT_SETTINGS_PATH: &str = "config";

type EnvError = Box<dyn std::error::Error + Send + Sync>;
type EnvResult<T> = Result<T, EnvError>;

/// Gets the Discord bot token from environment
pub fn discord_token() -> EnvResult<String> {
    dotenvy::var("DISCORD_TOKEN").map_err(|e| Box::new(e) as EnvError)
}

/// Path of the guild settings file, without extension (`ATRIUM_SETTINGS` overrides)
pub fn settings_path() -> String {
    dotenvy::var("ATRIUM_SETTINGS").unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string())
}
