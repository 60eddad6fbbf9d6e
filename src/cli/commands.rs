use std::io::Write;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::Shell;
use tracing::{debug, info, instrument};

use crate::application::services::{RenderResult, RenderService};
use crate::application::{format_result, to_svg, write_output, ApplicationError, CurveState};
use crate::cli::args::{Cli, Commands, ConfigCommands, RenderArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{format_number, CurveTable};

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Render(args)) => _render(args, settings),
        Some(Commands::Gallery {
            depth,
            thickness,
            color,
            out_dir,
        }) => _gallery(
            *depth,
            *thickness,
            color.as_deref(),
            out_dir.as_deref(),
            settings,
        ),
        Some(Commands::List) => _list(),
        Some(Commands::Info { curve }) => _info(curve),
        Some(Commands::Config { command }) => _config(command, settings, cli.config.as_deref()),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => _render(&RenderArgs::default(), settings),
    }
}

/// Settings first, then `--state`, then explicit flags.
pub fn resolve_state(args: &RenderArgs, settings: &Settings) -> CliResult<CurveState> {
    let defaults = settings.default_state();
    let mut state = match &args.state {
        Some(encoded) => CurveState::decode_with_defaults(encoded, &defaults)?,
        None => defaults,
    };
    if let Some(curve) = &args.curve {
        state.name = curve.clone();
    }
    if let Some(depth) = args.depth {
        state.depth = depth;
    }
    if let Some(thickness) = args.thickness {
        state.thickness = thickness;
    }
    if let Some(color) = &args.color {
        state.color = color.clone();
    }
    Ok(state)
}

/// The state that reproduces `result` exactly (depth after clamping).
fn rendered_state(state: CurveState, result: &RenderResult) -> CurveState {
    CurveState {
        name: result.curve.clone(),
        depth: i64::from(result.depth),
        ..state
    }
}

#[instrument(skip(settings))]
fn _render(args: &RenderArgs, settings: &Settings) -> CliResult<()> {
    let state = resolve_state(args, settings)?;
    debug!("state: {}", state);

    let service = RenderService::builtin(settings.depth_policy);
    let result = service.render(&state.to_request())?;

    if args.download {
        let target = settings
            .output_dir
            .join(rendered_state(state, &result).file_name());
        write_output(&target, &to_svg(&result))?;
        output::success(&format!("Downloaded {}", target.display()));
        return Ok(());
    }

    let format = args.format.unwrap_or(settings.format);
    let text = format_result(&result, format)?;
    match &args.output {
        Some(path) => {
            write_output(path, &text)?;
            output::success(&format!("Wrote {}", path.display()));
        }
        None => output::info(&text),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _gallery(
    depth: Option<i64>,
    thickness: Option<f64>,
    color: Option<&str>,
    out_dir: Option<&Path>,
    settings: &Settings,
) -> CliResult<()> {
    let dir = out_dir.unwrap_or(settings.output_dir.as_path());
    if dir.exists() && !dir.is_dir() {
        return Err(CliError::InvalidArgs(format!(
            "not a directory: {}",
            dir.display()
        )));
    }

    let service = RenderService::builtin(settings.depth_policy);
    let states: Vec<CurveState> = service
        .table()
        .names()
        .map(|name| CurveState {
            name: name.to_string(),
            depth: depth.unwrap_or(settings.depth),
            thickness: thickness.unwrap_or(settings.thickness),
            color: color.unwrap_or(settings.color.as_str()).to_string(),
        })
        .collect();
    let requests: Vec<_> = states.iter().map(CurveState::to_request).collect();
    let results = service.render_all(&requests)?;

    output::header(&format!("Gallery in {}", dir.display()));
    for (state, result) in states.into_iter().zip(&results) {
        let target = dir.join(rendered_state(state, result).file_name());
        write_output(&target, &to_svg(result))?;
        output::success_detail(&format!(
            "{} ({} segments)",
            target.display(),
            result.path.segment_count()
        ));
    }
    info!("gallery: wrote {} curves to {}", results.len(), dir.display());
    Ok(())
}

#[instrument]
fn _list() -> CliResult<()> {
    let table = CurveTable::builtin();
    let width = table.names().map(str::len).max().unwrap_or(0);
    output::header("Curves");
    for curve in table.iter() {
        output::field(
            curve.name(),
            width,
            &format!("depth 0..={}", curve.max_user_depth()),
        );
    }
    Ok(())
}

#[instrument]
fn _info(curve: &str) -> CliResult<()> {
    const WIDTH: usize = 7;
    let definition = CurveTable::builtin()
        .get(curve)
        .map_err(ApplicationError::from)?;
    let spec = definition.spec();

    output::header(definition.name());
    output::field("axiom", WIDTH, &spec.axiom);
    for (key, replacement) in &spec.rules {
        output::field("rule", WIDTH, &format!("{key} -> {replacement}"));
    }
    output::field(
        "angle",
        WIDTH,
        &format!("{}°", format_number(spec.angle.to_degrees())),
    );
    let heading = format!("{}°", format_number(spec.initial_heading.to_degrees()));
    if spec.turn_by_depth {
        output::field("heading", WIDTH, &format!("{heading} x depth"));
    } else {
        output::field("heading", WIDTH, &heading);
    }
    output::field("growth", WIDTH, &spec.growth_base);
    output::field(
        "depth",
        WIDTH,
        &format!(
            "0..={} (internal {}..={})",
            definition.max_user_depth(),
            spec.min_depth,
            spec.max_depth
        ),
    );
    Ok(())
}

#[instrument(skip(settings))]
fn _config(
    command: &ConfigCommands,
    settings: &Settings,
    config_file: Option<&Path>,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::field("global", 6, &describe_path(&path)),
                None => output::field("global", 6, &"unavailable (no home directory)"),
            }
            if let Some(path) = config_file {
                output::field("file", 6, &describe_path(path));
            }
        }
    }
    Ok(())
}

fn describe_path(path: &Path) -> String {
    let status = if path.exists() { "exists" } else { "not found" };
    format!("{} ({status})", path.display())
}

#[instrument]
fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, name, &mut buf);
    std::io::stdout()
        .write_all(&buf)
        .map_err(|e| CliError::io("write completions", e))
}
