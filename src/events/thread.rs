use crate::{
    Data, Error,
    functions::{directory, threads},
};
use poise::{self, BoxFuture, serenity_prelude as serenity};
use tracing::{info, warn};

pub fn event_handler<'a>(
    ctx: &'a serenity::Context,
    event: &'a serenity::FullEvent,
    _framework: poise::FrameworkContext<'a, Data, Error>,
    data: &'a Data,
) -> BoxFuture<'a, Result<(), Error>> {
    Box::pin(async move { handle_thread_event(ctx, event, data).await })
}

async fn handle_thread_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    data: &Data,
) -> Result<(), Error> {
    let http = &ctx.http;

    match event {
        serenity::FullEvent::ThreadCreate { thread } => {
            if !threads::is_tracked(&data.settings, thread) {
                return Ok(());
            }
            // A failed member pass should not keep the thread out of the
            // directory.
            if let Err(err) = threads::add_members(http, &data.settings, thread).await {
                warn!(thread = thread.id.get(), "thread setup failed: {err}");
            }
            if directory::add_thread(http, data, thread).await? {
                info!(thread = thread.id.get(), "thread added to directory");
            }
        }
        serenity::FullEvent::ThreadUpdate { old, new } => {
            if !threads::is_thread(new) {
                return Ok(());
            }
            let was_archived = old
                .as_ref()
                .and_then(|thread| thread.thread_metadata.as_ref())
                .map(|metadata| metadata.archived);
            let archived = new
                .thread_metadata
                .as_ref()
                .map(|metadata| metadata.archived)
                .unwrap_or(false);

            if archived {
                if directory::remove_thread(http, data, new.guild_id, new.id).await? {
                    info!(
                        thread = new.id.get(),
                        "archived thread removed from directory"
                    );
                }
            } else if was_archived == Some(true)
                && threads::is_tracked(&data.settings, new)
                && directory::add_thread(http, data, new).await?
            {
                info!(
                    thread = new.id.get(),
                    "unarchived thread re-added to directory"
                );
            }
        }
        serenity::FullEvent::ThreadDelete {
            thread,
            full_thread_data: _,
        } => {
            if directory::remove_thread(http, data, thread.guild_id, thread.id).await? {
                info!(
                    thread = thread.id.get(),
                    "deleted thread removed from directory"
                );
            }
        }
        _ => {}
    }

    Ok(())
}
