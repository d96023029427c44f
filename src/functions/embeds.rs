use crate::constants::colors;
use poise::serenity_prelude as serenity;
use serenity::{CreateEmbed, Timestamp};

/// Base embed stamped with the current time; every styled embed starts here.
pub fn stamped() -> CreateEmbed {
    CreateEmbed::new().timestamp(Timestamp::now())
}

pub fn success(title: impl Into<String>, description: impl Into<String>) -> CreateEmbed {
    stamped()
        .title(title)
        .description(description)
        .colour(colors::GREEN)
}

pub fn warning(title: impl Into<String>, description: impl Into<String>) -> CreateEmbed {
    stamped()
        .title(title)
        .description(description)
        .colour(colors::YELLOW)
}

pub fn error(title: impl Into<String>, description: impl Into<String>) -> CreateEmbed {
    stamped()
        .title(title)
        .description(description)
        .colour(colors::RED)
}

pub fn progress(title: impl Into<String>, description: impl Into<String>) -> CreateEmbed {
    stamped()
        .title(title)
        .description(description)
        .colour(colors::BLURPLE)
}
