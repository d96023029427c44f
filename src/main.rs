/*

Copyright 2026 the Atrium authors

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.

*/

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

mod atrium;
mod commands;
mod constants;
mod env;
mod events;
mod functions;
mod settings;

pub use atrium::{Context, Data, Error};
pub use settings::Settings;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let token = env::discord_token()?;
    let settings = Settings::load(&env::settings_path())?;
    let intents = atrium::gateway_intents();
    let prefix_options = atrium::prefix_options();

    let framework = atrium::build_framework(prefix_options, settings);
    atrium::run_client(token, intents, framework).await
}
