use clap::{Parser, Subcommand};
use glam::Vec2;
use gridwalk_game::{Game, GameConfig};
use gridwalk_input::{InputEvent, MoveKey};
use gridwalk_render::{Camera, Compositor, DrawCmd, RecordingSurface};
use gridwalk_world::{Map, Player};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridwalk-cli", about = "CLI tool for gridwalk operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the chunks visible from a world position
    Cull {
        /// Player x position in world units
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        x: f32,
        /// Player y position in world units
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        y: f32,
    },
    /// Run the same walk twice and verify the frames match
    Walk {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "10")]
        ticks: u64,
        /// Keys held for the whole walk, e.g. "wd"
        #[arg(short, long, default_value = "d")]
        keys: String,
    },
    /// Record one frame at a position and dump its draw commands
    Frame {
        /// Player x position in world units
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        x: f32,
        /// Player y position in world units
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        y: f32,
        /// Maximum commands to print, 0 prints everything
        #[arg(short, long, default_value = "40")]
        limit: usize,
    },
}

fn parse_keys(keys: &str) -> anyhow::Result<Vec<MoveKey>> {
    keys.chars()
        .map(|c| match c {
            'w' => Ok(MoveKey::Up),
            's' => Ok(MoveKey::Down),
            'a' => Ok(MoveKey::Left),
            'd' => Ok(MoveKey::Right),
            other => Err(anyhow::anyhow!("unknown key '{other}', expected w/a/s/d")),
        })
        .collect()
}

fn run_session(ticks: u64, held: &[MoveKey]) -> (Game, Vec<DrawCmd>) {
    let mut game = Game::new(GameConfig::default());
    for &key in held {
        game.push_input(InputEvent::KeyDown(key));
    }
    for _ in 0..ticks {
        game.update();
    }
    let mut surface = RecordingSurface::new();
    game.render(&mut surface);
    (game, surface.take_commands())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("gridwalk-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("world: {}", gridwalk_world::crate_info());
            println!("render: {}", gridwalk_render::crate_info());
            println!("input: {}", gridwalk_input::crate_info());
            println!("game: {}", gridwalk_game::crate_info());
        }
        Commands::Cull { x, y } => {
            let mut map = Map::new(GameConfig::default().map);
            map.update(Vec2::new(x, y));

            println!("Position: ({x}, {y})");
            match map.player_chunk() {
                Some(chunk) => println!("Player chunk: {chunk}"),
                None => println!("Player chunk: outside the map"),
            }
            println!(
                "Visible: {} of {} chunks",
                map.active().len(),
                map.chunk_count()
            );
            let center = map.player_chunk();
            for coord in map.active() {
                match center {
                    Some(c) => println!("  {coord} d={}", c.chebyshev(*coord)),
                    None => println!("  {coord}"),
                }
            }
        }
        Commands::Walk { ticks, keys } => {
            let held = parse_keys(&keys)?;
            println!("Deterministic walk: keys={keys:?}, ticks={ticks}");

            // Two fresh sessions fed the same inputs must agree on both
            // simulation state and the rendered frame.
            let (g1, frame1) = run_session(ticks, &held);
            let (g2, frame2) = run_session(ticks, &held);

            let p1 = g1.player().position();
            let p2 = g2.player().position();
            println!(
                "Run 1: position=({:.1}, {:.1}), commands={}",
                p1.x,
                p1.y,
                frame1.len()
            );
            println!(
                "Run 2: position=({:.1}, {:.1}), commands={}",
                p2.x,
                p2.y,
                frame2.len()
            );
            println!(
                "Match: {}",
                if frame1 == frame2 { "OK" } else { "MISMATCH" }
            );
        }
        Commands::Frame { x, y, limit } => {
            let config = GameConfig::default();
            let mut map = Map::new(config.map);
            let player = Player::new(config.player, Vec2::new(x, y));
            let camera = Camera::new(config.viewport(), player.position());
            map.update(player.position());

            let mut surface = RecordingSurface::new();
            Compositor::new().render(&mut surface, &camera, &[&map, &player]);
            let commands = surface.take_commands();

            println!("Frame at ({x}, {y}): {} commands", commands.len());
            for (i, cmd) in commands.iter().enumerate() {
                if limit != 0 && i == limit {
                    println!("  ... {} more", commands.len() - limit);
                    break;
                }
                println!("  [{i:3}] {cmd}");
            }
        }
    }

    Ok(())
}
