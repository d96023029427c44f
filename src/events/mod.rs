use crate::{Data, Error};
use poise::{self, BoxFuture, serenity_prelude as serenity};

pub mod thread;

pub type EventHandler = for<'a> fn(
    &'a serenity::Context,
    &'a serenity::FullEvent,
    poise::FrameworkContext<'a, Data, Error>,
    &'a Data,
) -> BoxFuture<'a, Result<(), Error>>;

/// Returns the list of registered event handlers
pub fn load_all() -> &'static [EventHandler] {
    &[thread::event_handler]
}

/// Dispatches the incoming event to every registered handler in order
pub fn dispatch<'a>(
    ctx: &'a serenity::Context,
    event: &'a serenity::FullEvent,
    framework: poise::FrameworkContext<'a, Data, Error>,
    data: &'a Data,
) -> BoxFuture<'a, Result<(), Error>> {
    Box::pin(async move {
        for handler in load_all() {
            handler(ctx, event, framework, data).await?;
        }
        Ok(())
    })
}
