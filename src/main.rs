// URL Title Bot
// Announces the titles of links posted in the focused Discord channel

mod api;
mod commands;
mod error;
mod features;
mod models;
mod utils;

use std::env;
use std::sync::Arc;

use poise::serenity_prelude as serenity;
use tracing::{info, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::http_fetcher::{Fetcher, HttpFetcher};
use crate::features::discord_host::DiscordHost;
use crate::features::fetch_dispatcher::FetchDispatcher;
use crate::features::message_handler::MessageHandler;
use crate::features::registry::ResolutionRegistry;
use crate::features::result_dispatcher::ResultDispatcher;
use crate::utils::config::Settings;

/// User data shared across all commands
pub struct Data {
    pub host: Arc<DiscordHost>,
    pub registry: Arc<ResolutionRegistry>,
    pub messages: MessageHandler,
}

// Manual Debug impl since the pipeline holds trait objects
impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("host", &"DiscordHost")
            .field("pending_lookups", &self.registry.len())
            .finish()
    }
}

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

/// Register all slash commands
fn get_commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        commands::focus::focus(),
        commands::focus::unfocus(),
        commands::help::help(),
    ]
}

async fn event_handler(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!("Logged in as {}", data_about_bot.user.name);
        }
        serenity::FullEvent::Message { new_message } => {
            handle_message(new_message, data);
        }
        _ => {}
    }
    Ok(())
}

/// Feed a guild message into the lookup pipeline without waiting on it
fn handle_message(msg: &serenity::Message, data: &Data) {
    // Ignore bots, including our own title lines
    if msg.author.bot {
        return;
    }

    let guild_id = match msg.guild_id {
        Some(id) => id,
        None => return,
    };

    // Detached; the lookup task delivers its own result
    let _ = data.messages.on_message(
        &guild_id.to_string(),
        &msg.channel_id.to_string(),
        &msg.content,
    );
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "url_title_bot=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let token = env::var("DISCORD_TOKEN").expect("DISCORD_TOKEN must be set");
    let settings = Settings::from_env().expect("Invalid URL_TITLE_* configuration");

    info!("Starting URL Title Bot...");
    info!(
        "Fetch timeout {:?}, read limit {} bytes, video metadata {}",
        settings.fetch_timeout,
        settings.read_limit,
        if settings.video_metadata { "on" } else { "off" }
    );

    // Build HTTP client for page fetches
    let fetcher: Arc<dyn Fetcher> = Arc::new(
        HttpFetcher::new(&settings.user_agent).expect("Failed to create HTTP client"),
    );
    let registry = Arc::new(ResolutionRegistry::new());

    // Setup framework
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: get_commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some("u!".into()),
                ..Default::default()
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            on_error: |error| {
                Box::pin(async move {
                    match error {
                        poise::FrameworkError::Command { error, ctx, .. } => {
                            error!("Command error: {:?}", error);
                            let _ = ctx.say(format!("❌ Error: {}", error)).await;
                        }
                        err => {
                            error!("Framework error: {:?}", err);
                        }
                    }
                })
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                info!("Bot is ready! Registering commands...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Commands registered successfully!");

                if let Some(focus) = &settings.focus {
                    info!("Initial focus: {}", focus);
                }

                let host = Arc::new(DiscordHost::new(ctx.http.clone(), settings.focus.clone()));
                let results = Arc::new(ResultDispatcher::new(
                    registry.clone(),
                    host.clone(),
                    settings.theme.clone(),
                ));
                let dispatcher = Arc::new(FetchDispatcher::new(
                    registry.clone(),
                    fetcher,
                    results,
                    settings,
                ));
                let messages = MessageHandler::new(host.clone(), dispatcher);

                Ok(Data {
                    host,
                    registry,
                    messages,
                })
            })
        })
        .build();

    // MESSAGE_CONTENT is privileged, enable it in the Discord Dev Portal
    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .expect("Failed to create client");

    // Run with graceful shutdown
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to register Ctrl+C handler");
        info!("Shutting down...");
        shard_manager.shutdown_all().await;
    });

    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }

    info!("Goodbye!");
}
