use crate::{Data, Error};

pub mod directory;
pub mod help;
pub mod permissions;
pub mod tag;
pub mod util;

pub fn load_all() -> Vec<poise::Command<Data, Error>> {
    vec![
        help::help(),
        tag::tag(),
        permissions::permissions(),
        directory::directory(),
    ]
}
