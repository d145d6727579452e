//! MD2 model command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use console::style;
use std::path::{Path, PathBuf};

use q2_md2::{
    ANIMATIONS, Animation, Md2Model, Md2Player, REQUIRED_FRAME_COUNT, Vertex, validate_model,
};

use crate::utils::{
    add_table_row, create_table, format_bytes, format_magic, format_vec3, print_table,
};

#[derive(Subcommand)]
pub enum Md2Commands {
    /// Display information about an MD2 model file
    Info {
        /// Path to the MD2 file
        file: PathBuf,

        /// Show the raw header
        #[arg(short, long)]
        detailed: bool,
    },

    /// List the keyframes of an MD2 model
    Frames {
        /// Path to the MD2 file
        file: PathBuf,

        /// Only show frames of this animation (name or index)
        #[arg(short, long)]
        animation: Option<String>,
    },

    /// Check triangle, texture coordinate and normal indices
    Validate {
        /// Path to the MD2 file
        file: PathBuf,
    },

    /// Play an animation and print the generated vertex stream
    Vertices {
        /// Path to the MD2 file
        file: PathBuf,

        /// Animation to play (name or index)
        #[arg(short, long, default_value = "stand")]
        animation: String,

        /// Seconds of playback before sampling
        #[arg(short, long, default_value_t = 0.0)]
        time: f32,

        /// Playback speed multiplier (non-negative)
        #[arg(short, long, env = "MD2_SPEED", default_value_t = 1.0)]
        speed: f32,

        /// Maximum number of vertices to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub fn execute(command: Md2Commands) -> Result<()> {
    match command {
        Md2Commands::Info { file, detailed } => execute_info(&file, detailed),
        Md2Commands::Frames { file, animation } => execute_frames(&file, animation.as_deref()),
        Md2Commands::Validate { file } => execute_validate(&file),
        Md2Commands::Vertices {
            file,
            animation,
            time,
            speed,
            limit,
            json,
        } => execute_vertices(&file, &animation, time, speed, limit, json),
    }
}

/// Resolve an animation by name (case-insensitive) or table index
pub fn parse_animation(value: &str) -> Result<Animation> {
    let value = value.trim();
    if let Some(animation) = Animation::ALL
        .into_iter()
        .find(|a| a.name().eq_ignore_ascii_case(value))
    {
        return Ok(animation);
    }

    match value.parse::<usize>() {
        Ok(index) => Animation::from_index(index).with_context(|| {
            format!(
                "Animation index {index} out of range (0-{})",
                ANIMATIONS.len() - 1
            )
        }),
        Err(_) => anyhow::bail!("Unknown animation: {}", value),
    }
}

fn load_model(path: &Path) -> Result<Md2Model> {
    Md2Model::load(path).with_context(|| format!("Failed to load MD2 model: {}", path.display()))
}

fn execute_info(path: &Path, detailed: bool) -> Result<()> {
    let model = load_model(path)?;
    let header = model.header();
    let size = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata: {}", path.display()))?
        .len();

    println!("\n{}", style("MD2 Model Information").bold().underlined());
    println!("File: {}", style(path.display()).cyan());
    println!("Size: {}", format_bytes(size));
    println!(
        "Ident: {} (version {})",
        style(format_magic(header.magic())).yellow(),
        style(header.version).yellow()
    );
    println!(
        "Skin Size: {}x{}",
        style(model.skin_width()).green(),
        style(model.skin_height()).green()
    );
    println!("Vertices: {}", style(model.vertex_count()).green());
    println!("Texture Coordinates: {}", style(model.tex_coord_count()).green());
    println!("Triangles: {}", style(model.triangle_count()).green());
    println!(
        "Frames: {}/{}",
        style(model.frame_count()).green(),
        style(REQUIRED_FRAME_COUNT).dim()
    );
    println!(
        "GL Commands: {} {}",
        style(header.glcmd_count).green(),
        style("(not decoded)").dim()
    );

    let stream_len = model.vertex_stream_len();
    println!(
        "Vertex Stream: {} records ({})",
        style(stream_len).green(),
        format_bytes((stream_len * size_of::<Vertex>()) as u64)
    );

    if !model.skins().is_empty() {
        println!("\n{}", style("Skins").bold());
        for (i, skin) in model.skins().iter().enumerate() {
            println!("  [{i}] {}", skin.name);
        }
    }

    if detailed {
        println!("\n{}", style("Header").bold());
        println!("{header:#?}");
    }

    Ok(())
}

/// Print the fixed animation table
pub fn execute_animations() -> Result<()> {
    let mut table = create_table(&["Index", "Name", "Start", "End", "Frames", "FPS"]);

    for animation in Animation::ALL {
        let descriptor = animation.descriptor();
        add_table_row(
            &mut table,
            vec![
                animation.index().to_string(),
                descriptor.name.to_string(),
                descriptor.start.to_string(),
                descriptor.end.to_string(),
                descriptor.frame_count().to_string(),
                format!("{}", descriptor.fps),
            ],
        );
    }

    table.printstd();
    Ok(())
}

fn execute_frames(path: &Path, animation: Option<&str>) -> Result<()> {
    let filter = animation.map(parse_animation).transpose()?;
    let model = load_model(path)?;

    let mut table = create_table(&["Index", "Name", "Animation", "Scale", "Translation"]);

    for (i, frame) in model.frames().iter().enumerate() {
        if let Some(filter) = filter {
            if !filter.descriptor().contains(i) {
                continue;
            }
        }

        let owner = ANIMATIONS
            .iter()
            .find(|d| d.contains(i))
            .map_or("-", |d| d.name);

        add_table_row(
            &mut table,
            vec![
                i.to_string(),
                frame.name.clone(),
                owner.to_string(),
                format_vec3(frame.scale.to_array()),
                format_vec3(frame.translation.to_array()),
            ],
        );
    }

    print_table(&table, "No frames");
    Ok(())
}

fn execute_validate(path: &Path) -> Result<()> {
    let model = load_model(path)?;
    let report = validate_model(&model);

    if report.is_valid() {
        println!(
            "✓ MD2 file '{}' is valid",
            style(path.display()).cyan()
        );
        return Ok(());
    }

    println!(
        "✗ MD2 file '{}' has {} problem(s):",
        style(path.display()).cyan(),
        style(report.issues.len()).red()
    );
    for issue in &report.issues {
        println!("  - {issue}");
    }

    anyhow::bail!("Validation failed: {} issue(s)", report.issues.len())
}

fn execute_vertices(
    path: &Path,
    animation: &str,
    time: f32,
    speed: f32,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    if !time.is_finite() || time < 0.0 {
        anyhow::bail!("Playback time must be a non-negative number of seconds");
    }
    if !speed.is_finite() || speed < 0.0 {
        anyhow::bail!("Playback speed must be a non-negative number, got {}", speed);
    }

    let animation = parse_animation(animation)?;

    // Out-of-range indices would make generation panic
    let mut player = Md2Player::load(path)
        .with_context(|| format!("Failed to load MD2 model: {}", path.display()))?;
    let report = validate_model(player.model());
    if !report.is_valid() {
        anyhow::bail!(
            "Model has {} invalid index(es); run `validate` for details",
            report.issues.len()
        );
    }

    let playback = player.playback_mut();
    playback.set_animation(animation);
    playback.set_speed(speed);
    player.update(time);

    let mut vertices = vec![Vertex::default(); player.vertex_stream_len()];
    player.generate_vertices(&mut vertices);

    let shown = limit.map_or(vertices.len(), |n| n.min(vertices.len()));
    let interpolation = player.playback().interpolation();

    if json {
        let output = serde_json::json!({
            "animation": player.active_animation_name(),
            "cursor": player.playback().cursor(),
            "frame_a": interpolation.frame_a,
            "frame_b": interpolation.frame_b,
            "lerp": interpolation.lerp,
            "vertex_count": vertices.len(),
            "vertices": &vertices[..shown],
        });
        let text =
            serde_json::to_string_pretty(&output).context("Failed to serialize vertex stream")?;
        println!("{text}");
        return Ok(());
    }

    println!(
        "Animation: {} at frame {:.3} (blend {} -> {}, {:.3})",
        style(player.active_animation_name()).yellow(),
        player.playback().cursor(),
        interpolation.frame_a,
        interpolation.frame_b,
        interpolation.lerp
    );

    let mut table = create_table(&["Index", "Position", "Normal", "UV"]);
    for (i, vertex) in vertices.iter().take(shown).enumerate() {
        add_table_row(
            &mut table,
            vec![
                i.to_string(),
                format_vec3(vertex.position),
                format_vec3(vertex.normal),
                format!("({:.3}, {:.3})", vertex.tex_coord[0], vertex.tex_coord[1]),
            ],
        );
    }
    print_table(&table, "No vertices shown");

    if shown < vertices.len() {
        println!("... {} more", vertices.len() - shown);
    }

    Ok(())
}
