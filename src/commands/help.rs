// Help command - show usage guide

use poise::serenity_prelude as serenity;
use crate::{Context, Error};
use crate::utils::config::colors;

/// Show help and usage guide
#[poise::command(slash_command, prefix_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let pending = ctx.data().registry.len();

    let embed = serenity::CreateEmbed::new()
        .title("🔗 URL Title Bot - Help")
        .description("Announces the title of the first link in each message of the focused channel")
        .color(colors::PRIMARY)
        .field(
            "🎯 Focus",
            "`/focus` - Watch links in this channel\n\
            `/unfocus` - Stop watching",
            false,
        )
        .field(
            "📄 Titles",
            "• Pages: the `<title>` from the first 4 KB\n\
            • Videos: `(category) title` from the metadata feed\n\
            • Images, media, archives and executables are skipped",
            false,
        )
        .field(
            "🤫 Quiet failures",
            "Links that fail, time out (15s) or have no title produce no reply",
            false,
        )
        .footer(serenity::CreateEmbedFooter::new(format!(
            "{} lookup(s) in flight • Built with Serenity & Poise",
            pending
        )));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
