//! Thread validation and new-thread setup.

use crate::{Error, functions::embeds, settings::Settings};
use poise::serenity_prelude as serenity;
use serenity::{
    AutoArchiveDuration, ChannelType, CreateMessage, EditMessage, EditThread, GuildChannel, Http,
    Mentionable,
};

/// Discord's hard limit on message content length.
const MAX_CONTENT_LENGTH: usize = 2000;
/// Mentions written per edit of the ping message.
const MENTION_CHUNK: usize = 10;

pub fn is_thread(channel: &GuildChannel) -> bool {
    matches!(
        channel.kind,
        ChannelType::PublicThread | ChannelType::PrivateThread | ChannelType::NewsThread
    )
}

/// Whether a channel is a thread the bot should track for its guild.
pub fn is_tracked(settings: &Settings, channel: &GuildChannel) -> bool {
    if !is_thread(channel) {
        return false;
    }
    let Some(guild) = settings.guild(channel.guild_id) else {
        return false;
    };
    match channel.parent_id {
        Some(parent) => !guild.is_blocked_parent(parent),
        None => false,
    }
}

/// Joins a fresh thread, maxes out its auto-archive window, and pulls in
/// every member holding the guild's ping role.
///
/// Mentions are flushed into a single message in chunks so each edit stays
/// under Discord's content limit.
pub async fn add_members(
    http: &Http,
    settings: &Settings,
    thread: &GuildChannel,
) -> Result<(), Error> {
    thread.id.join_thread(http).await?;
    thread
        .id
        .edit_thread(
            http,
            EditThread::new().auto_archive_duration(AutoArchiveDuration::OneWeek),
        )
        .await?;

    let Some(ping_role) = settings
        .guild(thread.guild_id)
        .and_then(|guild| guild.ping_role)
    else {
        return Ok(());
    };

    let members = thread.guild_id.members(http, None, None).await?;
    let mentions: Vec<String> = members
        .iter()
        .filter(|member| member.roles.contains(&ping_role))
        .map(|member| member.user.mention().to_string())
        .collect();
    if mentions.is_empty() {
        return Ok(());
    }

    let mut ping_message = thread
        .id
        .send_message(
            http,
            CreateMessage::new().embed(embeds::progress(
                "Adding Members",
                "Adding members to the thread...",
            )),
        )
        .await?;

    for chunk in mention_chunks(&mentions) {
        ping_message
            .edit(http, EditMessage::new().content(chunk))
            .await?;
    }

    ping_message
        .edit(
            http,
            EditMessage::new()
                .embed(embeds::success(
                    "Members Added",
                    "Successfully added people to the thread and set auto-archive duration to the max!",
                ))
                .content(""),
        )
        .await?;

    Ok(())
}

/// Splits mentions into message-sized batches: a batch closes after ten
/// mentions, or earlier if the next mention would overflow the content limit.
fn mention_chunks(mentions: &[String]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut content = String::new();
    let mut count = 0;

    for mention in mentions {
        if count == MENTION_CHUNK || content.len() + mention.len() > MAX_CONTENT_LENGTH {
            chunks.push(content);
            content = format!("{mention} ");
            count = 1;
        } else {
            content.push_str(mention);
            content.push(' ');
            count += 1;
        }
    }
    if !content.is_empty() {
        chunks.push(content);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mention(id: u64) -> String {
        format!("<@{id}>")
    }

    #[test]
    fn few_mentions_fit_one_chunk() {
        let mentions: Vec<String> = (1..=3).map(mention).collect();
        let chunks = mention_chunks(&mentions);
        assert_eq!(chunks, vec!["<@1> <@2> <@3> ".to_string()]);
    }

    #[test]
    fn chunks_close_at_ten_mentions() {
        let mentions: Vec<String> = (1..=25).map(mention).collect();
        let chunks = mention_chunks(&mentions);
        assert_eq!(chunks.len(), 3);
        for chunk in &chunks[..2] {
            assert_eq!(chunk.matches("<@").count(), 10);
        }
        assert_eq!(chunks[2].matches("<@").count(), 5);
    }

    #[test]
    fn chunks_respect_content_limit() {
        // Long mentions force a flush well before the ten-mention mark.
        let long: Vec<String> = (0..5).map(|i| format!("<@{:0>600}>", i)).collect();
        let chunks = mention_chunks(&long);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.len() <= MAX_CONTENT_LENGTH + 1);
        }
    }

    #[test]
    fn no_mentions_no_chunks() {
        assert!(mention_chunks(&[]).is_empty());
    }
}
