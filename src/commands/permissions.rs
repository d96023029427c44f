use crate::{
    Context, Error,
    functions::{embeds, format::format_permissions},
};
use poise::serenity_prelude as serenity;
use serenity::{Guild, Member, Permissions, RoleId};

/// See a member's server-level permissions.
#[poise::command(
    slash_command,
    prefix_command,
    category = "Utility",
    guild_only
)]
pub async fn permissions(
    ctx: Context<'_>,
    #[description = "Member to inspect (defaults to you)"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let user = match user {
        Some(user) => user,
        None => ctx.author().clone(),
    };
    let guild_id = ctx
        .guild_id()
        .ok_or("This command can only be used in a server")?;
    let member = guild_id.member(ctx.serenity_context(), user.id).await?;

    let permissions = {
        let guild = ctx.guild().ok_or("Guild is not cached")?;
        guild_permissions(&guild, &member)
    };

    ctx.send(
        poise::CreateReply::default()
            .embed(embeds::success(
                format!("Permissions for {}", user.name),
                format_permissions(permissions, Permissions::empty()),
            ))
            .ephemeral(true),
    )
    .await?;

    Ok(())
}

/// Guild-level permissions: the owner has everything, everyone else gets
/// the union of their role permissions on top of @everyone.
fn guild_permissions(guild: &Guild, member: &Member) -> Permissions {
    if guild.owner_id == member.user.id {
        return Permissions::all();
    }

    let everyone = RoleId::new(guild.id.get());
    let mut permissions = guild
        .roles
        .get(&everyone)
        .map(|role| role.permissions)
        .unwrap_or_default();
    for role_id in &member.roles {
        if let Some(role) = guild.roles.get(role_id) {
            permissions |= role.permissions;
        }
    }

    permissions
}
