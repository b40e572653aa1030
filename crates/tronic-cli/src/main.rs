//! Tronic demo - drive a toggle button group from the command line.

use clap::{Parser, ValueEnum};
use std::error::Error;
use std::path::PathBuf;
use tronic_core::{
    collect_redraws, Constraints, Event, EventContext, Rect, RecordingCanvas, SystemColors, Widget,
};
use tronic_widgets::{ToggleButton, ToggleButtonGroup, ToggleChanged, ToggleStyle};

/// Horizontal space between buttons.
const GAP: i32 = 4;

#[derive(Parser)]
#[command(name = "tronic-demo")]
#[command(about = "Build a toggle button group, replay clicks and print the result")]
#[command(version)]
struct Cli {
    /// Number of toggle buttons in the group
    #[arg(short, long, default_value_t = 3)]
    buttons: usize,

    /// Rendering style
    #[arg(short, long, value_enum, default_value_t = StyleArg::Classic)]
    style: StyleArg,

    /// Click the button at INDEX (repeatable, applied in order)
    #[arg(short, long = "click", value_name = "INDEX")]
    clicks: Vec<usize>,

    /// System palette file (.yaml, .yml or .toml)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Print the recorded draw commands as JSON
    #[arg(long)]
    commands: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Classic,
    Slider,
}

impl From<StyleArg> for ToggleStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Classic => Self::Classic,
            StyleArg::Slider => Self::Slider,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    run(&cli).map_err(|err| {
        log::error!("{err}");
        err
    })
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let colors = match &cli.theme {
        Some(path) => SystemColors::load(path)?,
        None => SystemColors::default(),
    };

    let mut group = build_group(cli.buttons, cli.style.into(), colors);
    let size = group.measure(Constraints::unbounded());
    group.layout(Rect::from_size(size));
    collect_redraws(&mut group);

    for &index in &cli.clicks {
        if let Some(changed) = click_button(&mut group, index)? {
            log::info!("button {index} ({}) is now {}", changed.id, on_off(changed.on));
        }
        let redrawn = collect_redraws(&mut group);
        log::debug!("click on {index} repainted {} widget(s)", redrawn.len());
    }

    for (index, on) in button_states(&group).into_iter().enumerate() {
        println!("button {index}: {}", on_off(on));
    }

    if cli.commands {
        let mut canvas = RecordingCanvas::new();
        group.paint(&mut canvas);
        println!("{}", serde_json::to_string_pretty(canvas.commands())?);
    }

    Ok(())
}

fn build_group(count: usize, style: ToggleStyle, colors: SystemColors) -> ToggleButtonGroup {
    let step = style.min_size().width + GAP;
    let mut group = ToggleButtonGroup::new().background(colors.control);
    let mut x = GAP;
    for _ in 0..count {
        group = group.child(
            ToggleButton::new()
                .style(style)
                .system_colors(colors)
                .location(x, GAP),
        );
        x = x.saturating_add(step);
    }
    group
}

fn click_button(
    group: &mut ToggleButtonGroup,
    index: usize,
) -> Result<Option<ToggleChanged>, Box<dyn Error>> {
    let count = group.children().len();
    let target = group
        .children()
        .get(index)
        .ok_or_else(|| format!("button index {index} out of range (group has {count})"))?
        .bounds()
        .center();

    let message = group.event(&Event::click(target), &mut EventContext::root());
    Ok(message
        .and_then(|m| m.downcast::<ToggleChanged>().ok())
        .map(|m| *m))
}

fn button_states(group: &ToggleButtonGroup) -> Vec<bool> {
    group
        .children()
        .iter()
        .filter_map(|c| c.as_any().downcast_ref::<ToggleButton>())
        .map(ToggleButton::is_on)
        .collect()
}

const fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}
