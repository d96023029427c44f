use crate::Error;
use config::Config;
use poise::serenity_prelude as serenity;
use serde::Deserialize;
use serenity::{ChannelId, GuildId, MessageId, RoleId};

/// Where a guild keeps its directory message.
///
/// The message itself is created out-of-band; the bot only rewrites its embed.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct DirectoryLocation {
    pub channel: ChannelId,
    pub message: MessageId,
}

/// Per-guild configuration, loaded once at startup.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GuildSettings {
    pub guild: GuildId,
    /// Absent means the guild has no thread directory.
    #[serde(default)]
    pub directory: Option<DirectoryLocation>,
    /// Feedback servers keep a single wait-ordered list instead of
    /// grouping threads by parent channel.
    #[serde(default)]
    pub feedback: bool,
    /// Members holding this role are mentioned into new threads.
    #[serde(default)]
    pub ping_role: Option<RoleId>,
    /// Threads under these parents are never tracked.
    #[serde(default)]
    pub blocked_parents: Vec<ChannelId>,
}

impl GuildSettings {
    pub fn is_blocked_parent(&self, parent: ChannelId) -> bool {
        self.blocked_parents.contains(&parent)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub guilds: Vec<GuildSettings>,
}

impl Settings {
    /// Loads the settings file (`<path>.toml`), with `ATRIUM_*` environment overrides.
    pub fn load(path: &str) -> Result<Settings, Error> {
        let config = Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("ATRIUM"))
            .build()?;
        Ok(config.try_deserialize::<Settings>()?)
    }

    pub fn guild(&self, id: GuildId) -> Option<&GuildSettings> {
        self.guilds.iter().find(|guild| guild.guild == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [[guilds]]
        guild = 915333299981934692
        feedback = true
        ping_role = 941942976429559808
        blocked_parents = [959525754297778216, 1057420004380921856]

        [guilds.directory]
        channel = 922938837049683968
        message = 1121089178122330276

        [[guilds]]
        guild = 849650258786779196
    "#;

    fn load_sample() -> Settings {
        let config = Config::builder()
            .add_source(config::File::from_str(SAMPLE, config::FileFormat::Toml))
            .build()
            .unwrap();
        config.try_deserialize().unwrap()
    }

    #[test]
    fn parses_guild_table() {
        let settings = load_sample();
        assert_eq!(settings.guilds.len(), 2);

        let guild = settings.guild(GuildId::new(915333299981934692)).unwrap();
        assert!(guild.feedback);
        assert_eq!(guild.ping_role, Some(RoleId::new(941942976429559808)));
        let directory = guild.directory.unwrap();
        assert_eq!(directory.channel, ChannelId::new(922938837049683968));
        assert_eq!(directory.message, MessageId::new(1121089178122330276));
    }

    #[test]
    fn directory_is_optional() {
        let settings = load_sample();
        let guild = settings.guild(GuildId::new(849650258786779196)).unwrap();
        assert_eq!(guild.directory, None);
        assert!(!guild.feedback);
        assert!(guild.blocked_parents.is_empty());
    }

    #[test]
    fn unknown_guild_has_no_settings() {
        let settings = load_sample();
        assert!(settings.guild(GuildId::new(1)).is_none());
    }

    #[test]
    fn blocked_parent_lookup() {
        let settings = load_sample();
        let guild = settings.guild(GuildId::new(915333299981934692)).unwrap();
        assert!(guild.is_blocked_parent(ChannelId::new(959525754297778216)));
        assert!(!guild.is_blocked_parent(ChannelId::new(922938837049683968)));
    }
}
