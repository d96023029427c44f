use crate::{
    Context, Error,
    functions::{directory, embeds, threads},
};
use poise::serenity_prelude as serenity;
use serenity::GuildChannel;

/// Manage the server's thread directory by hand.
#[poise::command(
    slash_command,
    rename = "directory",
    category = "Threads",
    guild_only,
    default_member_permissions = "MANAGE_THREADS",
    on_error = "crate::commands::util::command_error_handler",
    subcommands("directory_add", "directory_remove", "directory_members")
)]
pub async fn directory(_: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Add a thread to the thread directory.
#[poise::command(slash_command, rename = "add", category = "Threads")]
pub async fn directory_add(
    ctx: Context<'_>,
    #[description = "Thread to add (defaults to the current channel)"]
    #[channel_types("PublicThread", "PrivateThread", "NewsThread")]
    thread: Option<GuildChannel>,
) -> Result<(), Error> {
    ctx.defer_ephemeral().await?;
    let Some(thread) = resolve_thread(&ctx, thread).await? else {
        return Ok(());
    };

    if !threads::is_tracked(&ctx.data().settings, &thread) {
        ctx.send(
            poise::CreateReply::default()
                .embed(embeds::error(
                    "Error",
                    "This thread cannot be added to the thread directory.",
                ))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let http = &ctx.serenity_context().http;
    let embed = if directory::add_thread(http, ctx.data(), &thread).await? {
        embeds::success("Thread Added", "The thread is now in the thread directory.")
    } else {
        embeds::error(
            "Error",
            "This server has no thread directory configured.",
        )
    };
    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}

/// Remove a thread from the thread directory.
#[poise::command(slash_command, rename = "remove", category = "Threads")]
pub async fn directory_remove(
    ctx: Context<'_>,
    #[description = "Thread to remove (defaults to the current channel)"]
    #[channel_types("PublicThread", "PrivateThread", "NewsThread")]
    thread: Option<GuildChannel>,
) -> Result<(), Error> {
    ctx.defer_ephemeral().await?;
    let Some(thread) = resolve_thread(&ctx, thread).await? else {
        return Ok(());
    };

    let http = &ctx.serenity_context().http;
    let embed = if directory::remove_thread(http, ctx.data(), thread.guild_id, thread.id).await? {
        embeds::success(
            "Thread Removed",
            "The thread is no longer in the thread directory.",
        )
    } else {
        embeds::error("Error", "This thread is not in the thread directory.")
    };
    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}

/// Pull the ping-role members into a thread.
#[poise::command(slash_command, rename = "members", category = "Threads")]
pub async fn directory_members(
    ctx: Context<'_>,
    #[description = "Thread to fill (defaults to the current channel)"]
    #[channel_types("PublicThread", "PrivateThread", "NewsThread")]
    thread: Option<GuildChannel>,
) -> Result<(), Error> {
    ctx.defer_ephemeral().await?;
    let Some(thread) = resolve_thread(&ctx, thread).await? else {
        return Ok(());
    };

    threads::add_members(&ctx.serenity_context().http, &ctx.data().settings, &thread).await?;
    ctx.send(
        poise::CreateReply::default()
            .embed(embeds::success(
                "Members Added",
                "Everyone holding the ping role has been added to the thread.",
            ))
            .ephemeral(true),
    )
    .await?;

    Ok(())
}

/// Falls back to the invoking channel and rejects anything that is not a
/// thread with an ephemeral error embed.
async fn resolve_thread(
    ctx: &Context<'_>,
    thread: Option<GuildChannel>,
) -> Result<Option<GuildChannel>, Error> {
    let channel = match thread {
        Some(channel) => Some(channel),
        None => ctx.guild_channel().await,
    };

    match channel {
        Some(channel) if threads::is_thread(&channel) => Ok(Some(channel)),
        _ => {
            ctx.send(
                poise::CreateReply::default()
                    .embed(embeds::error(
                        "Error",
                        "This command can only be used in threads!",
                    ))
                    .ephemeral(true),
            )
            .await?;
            Ok(None)
        }
    }
}
