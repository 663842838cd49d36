// Focus commands - choose the channel whose links get titles

use poise::serenity_prelude as serenity;
use tracing::info;

use crate::models::conversation::ConversationId;
use crate::utils::config::colors;
use crate::{Context, Error};

/// Announce link titles in this channel
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    required_permissions = "MANAGE_CHANNELS"
)]
pub async fn focus(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = match ctx.guild_id() {
        Some(id) => id,
        None => {
            ctx.say("This command can only be used in a server.").await?;
            return Ok(());
        }
    };

    let conversation = ConversationId::new(guild_id.to_string(), ctx.channel_id().to_string());
    let previous = ctx.data().host.set_focus(Some(conversation.clone()));
    info!("Focus moved from {:?} to {}", previous, conversation);

    let mut description = format!(
        "Links posted in <#{}> will now get their titles announced.",
        ctx.channel_id()
    );
    if let Some(prev) = previous.filter(|p| *p != conversation) {
        description.push_str(&format!("\nPreviously focused: <#{}>", prev.channel));
    }

    let embed = serenity::CreateEmbed::new()
        .title("🔗 Focus set")
        .description(description)
        .color(colors::SUCCESS);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Stop announcing link titles anywhere
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    required_permissions = "MANAGE_CHANNELS"
)]
pub async fn unfocus(ctx: Context<'_>) -> Result<(), Error> {
    let previous = ctx.data().host.set_focus(None);
    info!("Focus cleared (was {:?})", previous);

    let description = match previous {
        Some(prev) => format!("No longer watching <#{}>.", prev.channel),
        None => "No channel was focused.".to_string(),
    };

    let embed = serenity::CreateEmbed::new()
        .title("🔕 Focus cleared")
        .description(description)
        .color(colors::WARNING);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
