use crate::{
    Context, Error,
    constants::tags,
    functions::embeds,
};

/// Look up a community resource by tag.
#[poise::command(
    slash_command,
    prefix_command,
    track_edits,
    category = "Utility",
    guild_only
)]
pub async fn tag(
    ctx: Context<'_>,
    #[description = "Name of the tag to look up"]
    #[autocomplete = "tag_autocomplete"]
    name: String,
) -> Result<(), Error> {
    match tags::find(&name) {
        Some(content) => {
            ctx.send(poise::CreateReply::default().embed(embeds::success(name, content)))
                .await?;
        }
        None => {
            ctx.send(
                poise::CreateReply::default()
                    .embed(embeds::error(
                        "Unknown Tag",
                        format!("There is no tag called `{name}`."),
                    ))
                    .ephemeral(true),
            )
            .await?;
        }
    }

    Ok(())
}

async fn tag_autocomplete(_ctx: Context<'_>, partial: &str) -> impl Iterator<Item = String> {
    let lowercase = partial.to_ascii_lowercase();
    tags::TAGS
        .iter()
        .map(|(name, _)| *name)
        .filter(move |name| name.to_ascii_lowercase().contains(&lowercase))
        .take(25)
        .map(str::to_string)
}
