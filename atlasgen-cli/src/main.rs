use anyhow::{Context, Result};
use atlasgen_core::font::{self, FontAtlasConfig, FontdueGlyphs};
use atlasgen_core::{compose, layout, persist, sfx, AtlasLayout, SpriteLibrary, VERSION};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "atlasgen", version = VERSION, about = "Procedural sprite atlas, font and sfx generator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

/// Which layout to use: a bundled preset or a YAML manifest.
#[derive(Args, Debug)]
struct LayoutArgs {
    /// Built-in layout preset (game, classic)
    #[arg(long, default_value = "game")]
    layout: String,
    /// YAML layout manifest; overrides --layout
    #[arg(long)]
    manifest: Option<PathBuf>,
}

impl LayoutArgs {
    fn resolve(&self) -> Result<AtlasLayout> {
        match &self.manifest {
            Some(path) => layout::load_from_path(path)
                .with_context(|| format!("loading layout manifest {}", path.display())),
            None => AtlasLayout::preset(&self.layout)
                .with_context(|| format!("unknown layout preset '{}' (expected game or classic)", self.layout)),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose the sprite atlas and write PNG (plus optional JSON metadata)
    Atlas {
        #[command(flatten)]
        layout: LayoutArgs,
        #[arg(long, default_value = "assets/atlas.png")]
        out: PathBuf,
        /// Write sprite UV metadata as JSON
        #[arg(long)]
        meta: Option<PathBuf>,
    },
    /// Rasterize printable ASCII into a 16x16 glyph atlas
    Font {
        /// Font files to try in order (defaults to a monospace fallback chain)
        #[arg(long = "font")]
        fonts: Vec<PathBuf>,
        #[arg(long, default_value_t = 14.0)]
        size: f32,
        #[arg(long, default_value = "assets/font.png")]
        out: PathBuf,
    },
    /// Synthesize the sound effects as WAV files
    Sfx {
        #[arg(long, default_value = "assets/sfx")]
        out_dir: PathBuf,
    },
    /// Print the resolved grid and placements of a layout
    Inspect {
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// List available sprites (built-ins plus any a manifest defines)
    Sprites {
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Atlas { layout, out, meta } => {
            let layout = layout.resolve()?;
            let atlas = compose(&layout)?;
            atlas.save(&out).with_context(|| format!("writing atlas {}", out.display()))?;
            let c = atlas.canvas();
            println!("Wrote {}x{} atlas to {}", c.width(), c.height(), out.display());
            if let Some(meta_path) = meta {
                atlas.meta()?.save(&meta_path).with_context(|| format!("writing metadata {}", meta_path.display()))?;
                println!("Wrote metadata to {}", meta_path.display());
            }
        }
        Command::Font { fonts, size, out } => {
            let chain = if fonts.is_empty() { font::default_font_chain() } else { fonts };
            let glyphs = FontdueGlyphs::load_first(&chain, size).context("loading font")?;
            let canvas = font::compose_font_atlas(&glyphs, &FontAtlasConfig::default())?;
            persist::write_atomic(&out, &canvas.encode_png()?)
                .with_context(|| format!("writing font atlas {}", out.display()))?;
            println!("Wrote {}x{} font atlas to {}", canvas.width(), canvas.height(), out.display());
        }
        Command::Sfx { out_dir } => {
            let written = sfx::generate_all(&out_dir)
                .with_context(|| format!("generating sfx in {}", out_dir.display()))?;
            for path in &written {
                println!("Wrote {}", path.display());
            }
        }
        Command::Inspect { layout } => {
            let layout = layout.resolve()?;
            let grid = layout.grid()?;
            println!("Grid: {}x{} cells of {}px ({}x{} image)", grid.columns, grid.rows, grid.cell_size, grid.width(), grid.height());
            for p in &layout.cells {
                let origin = grid.origin(p.cell())?;
                println!("  ({}, {}) @ {:>3},{:>3}  {}", p.col, p.row, origin.x, origin.y, p.sprite);
            }
            if !layout.sprites.is_empty() {
                let names: Vec<&str> = layout.sprites.iter().map(|s| s.name.as_str()).collect();
                println!("  custom sprites: {}", names.join(", "));
            }
        }
        Command::Sprites { manifest } => {
            let mut library = SpriteLibrary::builtin();
            if let Some(path) = manifest {
                let layout = layout::load_from_path(&path)
                    .with_context(|| format!("loading layout manifest {}", path.display()))?;
                for sprite in layout.sprites {
                    library.insert(sprite);
                }
            }
            for name in library.names() {
                println!("{name}");
            }
        }
    }
    Ok(())
}
