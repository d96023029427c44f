use crate::{Data, Error, functions::embeds};
use poise::FrameworkError;
use tracing::error;

/// Default error handler for application commands
pub async fn command_error_handler(error: FrameworkError<'_, Data, Error>) {
    match error {
        FrameworkError::Command { ctx, error, .. } => {
            error!("Command `{}` failed: {error:?}", ctx.command().name);

            let _ = ctx
                .send(
                    poise::CreateReply::default()
                        .embed(embeds::error(
                            "Error",
                            "Something went wrong while running this command. \
                             Try again in a moment.",
                        ))
                        .ephemeral(true),
                )
                .await;
        }
        other => {
            if let Err(err) = poise::builtins::on_error(other).await {
                error!("Error while handling command error: {err:?}");
            }
        }
    }
}
