mod args;
mod prompt;

pub(crate) use args::Cli;
pub(crate) use prompt::{pick_game, prompt_username};
