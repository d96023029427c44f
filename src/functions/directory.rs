//! Thread directory bookkeeping.
//!
//! Each configured guild owns one long-lived "directory" message whose embed
//! fields are the persisted state: one bullet line per tracked thread,
//! grouped into fields by parent channel. Feedback guilds instead keep a
//! single field ordered by how long a thread has been waiting.
//!
//! The line format is load-bearing. Whatever this module writes it must be
//! able to read back, so encoding and decoding live here as a pinned pair.

use crate::{
    Data, Error,
    constants::colors,
    functions::embeds,
    settings::DirectoryLocation,
};
use poise::serenity_prelude as serenity;
use serenity::{ChannelId, CreateEmbed, EditMessage, GuildChannel, GuildId, Http, Message};

const LINE_PREFIX: &str = "- <#";
const LINE_SUFFIX: char = '>';

/// Adds a thread to its guild's directory message.
///
/// Returns `false` when the guild has no directory configured. Re-adding a
/// tracked thread is a no-op in grouped mode and a move-to-back in feedback
/// mode. Platform errors propagate to the caller untouched.
pub async fn add_thread(http: &Http, data: &Data, thread: &GuildChannel) -> Result<bool, Error> {
    let Some(guild) = data.settings.guild(thread.guild_id) else {
        return Ok(false);
    };
    let Some(location) = guild.directory else {
        return Ok(false);
    };

    let _guard = data.directory_lock.lock().await;
    let mut message = fetch_directory_message(http, location).await?;
    let mut ids = tracked_ids(&message)?;

    if !apply_add(&mut ids, thread.id.get(), guild.feedback) {
        return Ok(true);
    }

    let embed = if guild.feedback {
        feedback_embed(&ids)
    } else {
        grouped_embed(http, &ids).await?
    };
    message
        .edit(http, EditMessage::new().embed(embed).content(""))
        .await?;
    Ok(true)
}

/// Removes a thread from its guild's directory message.
///
/// Returns `false` when the guild has no directory configured or the thread
/// is not currently tracked; the message is left untouched in both cases.
pub async fn remove_thread(
    http: &Http,
    data: &Data,
    guild_id: GuildId,
    thread_id: ChannelId,
) -> Result<bool, Error> {
    let Some(guild) = data.settings.guild(guild_id) else {
        return Ok(false);
    };
    let Some(location) = guild.directory else {
        return Ok(false);
    };

    let _guard = data.directory_lock.lock().await;
    let mut message = fetch_directory_message(http, location).await?;
    let mut ids = tracked_ids(&message)?;

    if !apply_remove(&mut ids, thread_id.get()) {
        return Ok(false);
    }

    let embed = if guild.feedback {
        feedback_embed(&ids)
    } else {
        grouped_embed(http, &ids).await?
    };
    message
        .edit(http, EditMessage::new().embed(embed).content(""))
        .await?;
    Ok(true)
}

async fn fetch_directory_message(
    http: &Http,
    location: DirectoryLocation,
) -> Result<Message, Error> {
    Ok(location.channel.message(http, location.message).await?)
}

/// Reads the tracked thread ids out of the directory message's embed.
///
/// A message without an embed (or with an empty one) is an empty directory.
fn tracked_ids(message: &Message) -> Result<Vec<u64>, Error> {
    match message.embeds.first() {
        Some(embed) => decode_fields(embed.fields.iter().map(|field| field.value.as_str())),
        None => Ok(Vec::new()),
    }
}

/// Applies an add mutation, returning whether the embed needs rewriting.
fn apply_add(ids: &mut Vec<u64>, id: u64, feedback: bool) -> bool {
    if feedback {
        // Feedback order is "waiting longest first": touching a thread
        // resets it to the back of the queue.
        ids.retain(|&tracked| tracked != id);
        ids.push(id);
        true
    } else if ids.contains(&id) {
        false
    } else {
        ids.push(id);
        true
    }
}

/// Applies a remove mutation, returning whether the id was tracked.
fn apply_remove(ids: &mut Vec<u64>, id: u64) -> bool {
    let before = ids.len();
    ids.retain(|&tracked| tracked != id);
    ids.len() != before
}

fn decode_line(line: &str) -> Result<u64, Error> {
    let id = line
        .strip_prefix(LINE_PREFIX)
        .and_then(|rest| rest.strip_suffix(LINE_SUFFIX))
        .ok_or_else(|| format!("malformed directory line: {line:?}"))?;
    Ok(id.parse()?)
}

fn decode_fields<'a>(values: impl IntoIterator<Item = &'a str>) -> Result<Vec<u64>, Error> {
    let mut ids = Vec::new();
    for value in values {
        for line in value.lines() {
            ids.push(decode_line(line)?);
        }
    }
    Ok(ids)
}

fn encode_lines(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| format!("{LINE_PREFIX}{id}{LINE_SUFFIX}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Groups tracked threads by parent channel, parents in first-seen order,
/// threads within a parent in tracking order.
fn group_by_parent(entries: &[(u64, u64)]) -> Vec<(u64, Vec<u64>)> {
    let mut groups: Vec<(u64, Vec<u64>)> = Vec::new();
    for &(thread, parent) in entries {
        match groups.iter_mut().find(|(group, _)| *group == parent) {
            Some((_, threads)) => threads.push(thread),
            None => groups.push((parent, vec![thread])),
        }
    }
    groups
}

fn grouped_fields(entries: &[(u64, u64)]) -> Vec<(String, String)> {
    group_by_parent(entries)
        .into_iter()
        .map(|(parent, threads)| (format!("<#{parent}>"), encode_lines(&threads)))
        .collect()
}

/// Looks up the current parent channel of every tracked thread.
async fn thread_parents(http: &Http, ids: &[u64]) -> Result<Vec<(u64, u64)>, Error> {
    let mut entries = Vec::with_capacity(ids.len());
    for &id in ids {
        let channel = ChannelId::new(id).to_channel(http).await?;
        let parent = channel
            .guild()
            .and_then(|channel| channel.parent_id)
            .ok_or_else(|| format!("tracked channel {id} is not a thread"))?;
        entries.push((id, parent.get()));
    }
    Ok(entries)
}

async fn grouped_embed(http: &Http, ids: &[u64]) -> Result<CreateEmbed, Error> {
    let entries = thread_parents(http, ids).await?;
    let mut embed = embeds::stamped()
        .title("Thread Directory")
        .description(
            "A list of all threads of this server, sorted by the parent channels of the threads.",
        )
        .colour(colors::BLURPLE);
    for (name, value) in grouped_fields(&entries) {
        embed = embed.field(name, value, false);
    }
    Ok(embed)
}

fn feedback_embed(ids: &[u64]) -> CreateEmbed {
    let mut embed = embeds::stamped()
        .title("Feedback Thread Directory")
        .description(
            "A list of all feedback threads of this server, sorted by the time they have been \
             waiting for feedback. The threads at the top have been waiting the longest.",
        )
        .colour(colors::BLURPLE);
    // An empty queue gets no field; Discord rejects empty field values.
    if !ids.is_empty() {
        embed = embed.field("Feedback Threads", encode_lines(ids), false);
    }
    embed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format_round_trips() {
        let ids = [42_u64, 99, 7];
        let encoded = encode_lines(&ids);
        assert_eq!(encoded, "- <#42>\n- <#99>\n- <#7>");
        assert_eq!(decode_fields([encoded.as_str()]).unwrap(), ids);
    }

    #[test]
    fn decode_spans_multiple_fields() {
        let fields = ["- <#1>\n- <#2>", "- <#3>"];
        assert_eq!(decode_fields(fields).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn decode_rejects_malformed_lines() {
        assert!(decode_line("<#42>").is_err());
        assert!(decode_line("- <#42").is_err());
        assert!(decode_line("- <#notanid>").is_err());
        assert!(decode_fields(["- <#1>\njunk"]).is_err());
    }

    #[test]
    fn add_is_idempotent_in_grouped_mode() {
        let mut ids = vec![5, 9];
        assert!(apply_add(&mut ids, 2, false));
        assert_eq!(ids, vec![5, 9, 2]);
        // Second add changes nothing and needs no rewrite.
        assert!(!apply_add(&mut ids, 2, false));
        assert_eq!(ids, vec![5, 9, 2]);
    }

    #[test]
    fn feedback_add_moves_to_back() {
        let mut ids = vec![5, 9, 2];
        assert!(apply_add(&mut ids, 9, true));
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn add_then_remove_restores_set() {
        let mut ids = vec![5, 9];
        apply_add(&mut ids, 2, false);
        assert!(apply_remove(&mut ids, 2));
        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn remove_of_untracked_id_reports_miss() {
        let mut ids = vec![5, 9];
        assert!(!apply_remove(&mut ids, 123));
        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn groups_keep_first_seen_parent_order() {
        let entries = [(1, 70), (2, 80), (3, 70), (4, 90)];
        let groups = group_by_parent(&entries);
        assert_eq!(
            groups,
            vec![(70, vec![1, 3]), (80, vec![2]), (90, vec![4])]
        );
    }

    #[test]
    fn single_thread_renders_one_field() {
        // Empty directory plus one thread under parent 7.
        let mut ids = Vec::new();
        assert!(apply_add(&mut ids, 42, false));
        let fields = grouped_fields(&[(42, 7)]);
        assert_eq!(fields, vec![("<#7>".to_string(), "- <#42>".to_string())]);
    }

    #[test]
    fn removal_keeps_siblings_and_drops_empty_parents() {
        let mut ids = decode_fields(["- <#42>\n- <#99>"]).unwrap();
        assert!(apply_remove(&mut ids, 42));
        let fields = grouped_fields(&[(99, 7)]);
        assert_eq!(fields, vec![("<#7>".to_string(), "- <#99>".to_string())]);

        // The last thread under a parent takes the field with it.
        assert!(apply_remove(&mut ids, 99));
        assert!(grouped_fields(&[]).is_empty());
    }
}
