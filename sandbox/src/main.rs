// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Phosphor Sandbox
// Plays one loading session in the terminal.

mod console_sink;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use phosphor_agents::{LoadingOrchestrator, LoadingState};
use phosphor_io::{load_session_config, FileSystemResolver, GltfSceneLoader, ImageResourceLoader};

use console_sink::ConsoleSink;

#[derive(Parser, Debug)]
#[command(name = "sandbox", version, about = "Plays a loading session in the terminal")]
struct Cli {
    /// Session configuration file.
    #[arg(long, default_value = "sandbox/Session.toml")]
    config: PathBuf,

    /// Destroy the session after this many milliseconds, as a host navigating away would.
    #[arg(long)]
    abort_after_ms: Option<u64>,

    /// Length of one host frame.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = load_session_config(&cli.config)
        .with_context(|| format!("Cannot start a session from '{}'", cli.config.display()))?;

    let resolver = FileSystemResolver::new(&config.asset_root);
    let scene_loader = GltfSceneLoader::new(resolver.clone());
    let resource_loader = ImageResourceLoader::new(resolver);

    let mut orchestrator = LoadingOrchestrator::new(&config, ConsoleSink::default(), || {
        log::info!("Session complete, handing over to the scene.");
    })?;
    log::info!(
        "Closing transition takes {} ms once loading completes.",
        config.transition.total().as_millis()
    );
    orchestrator.start(&scene_loader, &resource_loader);

    let frame = Duration::from_millis(cli.frame_ms.max(1));
    let mut elapsed = Duration::ZERO;
    while !orchestrator.is_finished() {
        orchestrator.update(frame);
        thread::sleep(frame);
        elapsed += frame;

        if let Some(limit) = cli.abort_after_ms {
            if elapsed >= Duration::from_millis(limit) {
                log::warn!("Aborting the session after {} ms.", elapsed.as_millis());
                orchestrator.destroy();
            }
        }
    }

    match orchestrator.state() {
        LoadingState::Error => {
            orchestrator.destroy();
            match orchestrator.last_error() {
                Some(error) => bail!("Scene failed to load: {error}"),
                None => bail!("Scene failed to load"),
            }
        }
        LoadingState::Done => {
            if let Some(report) = orchestrator.patch_report() {
                log::info!(
                    "{} material(s) patched, {} left as authored.",
                    report.patched,
                    report.materials_visited - report.patched
                );
            }
        }
        state => log::info!("Session stopped in state {state}."),
    }
    Ok(())
}
