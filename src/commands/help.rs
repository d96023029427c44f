use crate::{Context, Error, functions::embeds};
use poise::serenity_prelude as serenity;
use serenity::collector::ComponentInteractionCollector;
use serenity::{
    ComponentInteractionDataKind, CreateActionRow, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};
use std::time::Duration;

const SELECT_TIMEOUT: Duration = Duration::from_secs(120);
const FALLBACK_CATEGORY: &str = "Other";

/// View my commands, grouped by category.
#[poise::command(
    slash_command,
    prefix_command,
    track_edits,
    category = "General",
    guild_only
)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let categories = collect_categories(&ctx);
    let embed = overview_embed(&ctx).await;

    let select_id = format!("{}_help_category", ctx.id());
    let options: Vec<CreateSelectMenuOption> = categories
        .iter()
        .map(|(category, _)| CreateSelectMenuOption::new(category.clone(), category.clone()))
        .collect();
    let components = vec![CreateActionRow::SelectMenu(
        CreateSelectMenu::new(select_id, CreateSelectMenuKind::String { options })
            .placeholder("Choose a category"),
    )];

    let reply = ctx
        .send(
            poise::CreateReply::default()
                .embed(embed)
                .components(components),
        )
        .await?;
    let message = reply.message().await?;

    while let Some(interaction) = ComponentInteractionCollector::new(ctx.serenity_context())
        .author_id(ctx.author().id)
        .message_id(message.id)
        .timeout(SELECT_TIMEOUT)
        .await
    {
        let ComponentInteractionDataKind::StringSelect { values } = &interaction.data.kind else {
            continue;
        };
        let Some(selected) = values.first() else {
            continue;
        };
        let Some((category, commands)) = categories
            .iter()
            .find(|(category, _)| category == selected)
        else {
            continue;
        };

        let response = CreateInteractionResponseMessage::new()
            .embed(category_embed(category, commands))
            .ephemeral(true);
        interaction
            .create_response(
                ctx.serenity_context(),
                CreateInteractionResponse::Message(response),
            )
            .await?;
    }

    Ok(())
}

/// Top-level commands grouped by category, categories in first-seen order.
fn collect_categories(ctx: &Context<'_>) -> Vec<(String, Vec<(String, String)>)> {
    let mut categories: Vec<(String, Vec<(String, String)>)> = Vec::new();

    for command in &ctx.framework().options.commands {
        if command.hide_in_help || command.name == "help" {
            continue;
        }
        let category = command
            .category
            .clone()
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());
        let description = command
            .description
            .clone()
            .unwrap_or_else(|| "No description".to_string());
        let entry = (command.name.clone(), description);

        match categories.iter_mut().find(|(name, _)| *name == category) {
            Some((_, commands)) => commands.push(entry),
            None => categories.push((category, vec![entry])),
        }
    }

    categories
}

async fn overview_embed(ctx: &Context<'_>) -> CreateEmbed {
    let cache = &ctx.serenity_context().cache;
    let (bot_name, avatar_url) = {
        let current = cache.current_user();
        let avatar = current
            .avatar_url()
            .unwrap_or_else(|| current.default_avatar_url());
        (current.name.clone(), avatar)
    };
    let guild_count = cache.guild_count();
    let user_count = cache.user_count();
    let latency = gateway_latency(ctx).await;

    embeds::success(bot_name, "Use the menu below to view commands.")
        .thumbnail(avatar_url)
        .field("Server Count", guild_count.to_string(), true)
        .field("User Count", user_count.to_string(), true)
        .field("Ping", format!("{} ms", latency.as_millis()), true)
}

async fn gateway_latency(ctx: &Context<'_>) -> Duration {
    let manager = ctx.data().shard_manager.clone();
    let runners = manager.runners.lock().await;
    let shard_id = ctx.serenity_context().shard_id;
    runners
        .get(&shard_id)
        .and_then(|runner| runner.latency)
        .unwrap_or_default()
}

fn category_embed(category: &str, commands: &[(String, String)]) -> CreateEmbed {
    let description = commands
        .iter()
        .map(|(name, description)| format!("`/{name}`: {description}"))
        .collect::<Vec<_>>()
        .join("\n");

    embeds::success(format!("{category} Commands"), description)
}
