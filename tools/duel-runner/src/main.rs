//! duel-runner: headless AI-vs-AI SHELLSHOCK battles.
//!
//! Usage:
//!   duel-runner --seed 7 --difficulty hard
//!   duel-runner --terrain hill --max-shots 50 --json > final.json
//!
//! Set RUST_LOG=debug to follow every shot.

use std::process;

use log::{debug, info};

use shellshock_ai::TargetingAi;
use shellshock_core::commands::Action;
use shellshock_core::constants::DT;
use shellshock_core::enums::{ActionKind, Difficulty, Outcome, Phase, TerrainKind};
use shellshock_core::types::Side;
use shellshock_sim::{BattleConfig, CombatRules};

/// Ticks a single shot may take before the run is abandoned.
const MAX_FLIGHT_TICKS: u32 = 10_000;

/// Actions per turn before the runner forces a shot.
const MAX_TURN_ACTIONS: u32 = 200;

struct Options {
    seed: u64,
    difficulty: Difficulty,
    max_shots: u32,
    terrain: Option<TerrainKind>,
    json: bool,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        print_usage();
        return;
    }

    let options = parse_options(&args);
    run_duel(&options);
}

fn print_usage() {
    eprintln!(
        "duel-runner: SHELLSHOCK AI-vs-AI battle runner\n\
         \n\
         Options:\n\
         \n\
           --seed <N>            RNG seed for terrain, wind and AI (default: 42)\n\
           --difficulty <level>  easy | medium | hard (default: medium)\n\
           --max-shots <N>       Stop after N shots (default: 200)\n\
           --terrain <kind>      flat | hill | curvy | valley (default: random)\n\
           --json                Print the final battlefield snapshot as JSON\n\
         \n\
         Examples:\n\
         \n\
           duel-runner --seed 7 --difficulty hard\n\
           duel-runner --terrain valley --json\n"
    );
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    print_usage();
    process::exit(1);
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag {
            match args.get(i + 1) {
                Some(value) => return Some(value.as_str()),
                None => fail(&format!("{flag} needs a value")),
            }
        }
    }
    None
}

fn parse_difficulty(value: &str) -> Option<Difficulty> {
    match value.to_ascii_lowercase().as_str() {
        "easy" => Some(Difficulty::Easy),
        "medium" => Some(Difficulty::Medium),
        "hard" => Some(Difficulty::Hard),
        _ => None,
    }
}

fn parse_terrain(value: &str) -> Option<TerrainKind> {
    match value.to_ascii_lowercase().as_str() {
        "flat" => Some(TerrainKind::Flat),
        "hill" => Some(TerrainKind::Hill),
        "curvy" => Some(TerrainKind::Curvy),
        "valley" => Some(TerrainKind::Valley),
        _ => None,
    }
}

fn parse_options(args: &[String]) -> Options {
    const KNOWN: [&str; 5] = ["--seed", "--difficulty", "--max-shots", "--terrain", "--json"];
    let mut expect_value = false;
    for arg in args {
        if expect_value {
            expect_value = false;
            continue;
        }
        if !KNOWN.contains(&arg.as_str()) {
            fail(&format!("Unknown argument: {arg}"));
        }
        expect_value = arg != "--json";
    }

    let seed = match flag_value(args, "--seed") {
        Some(v) => v
            .parse::<u64>()
            .unwrap_or_else(|_| fail(&format!("--seed expects an integer, got {v}"))),
        None => 42,
    };
    let difficulty = match flag_value(args, "--difficulty") {
        Some(v) => parse_difficulty(v)
            .unwrap_or_else(|| fail(&format!("Unknown difficulty: {v}"))),
        None => Difficulty::default(),
    };
    let max_shots = match flag_value(args, "--max-shots") {
        Some(v) => v
            .parse::<u32>()
            .unwrap_or_else(|_| fail(&format!("--max-shots expects an integer, got {v}"))),
        None => 200,
    };
    let terrain = flag_value(args, "--terrain")
        .map(|v| parse_terrain(v).unwrap_or_else(|| fail(&format!("Unknown terrain: {v}"))));

    Options {
        seed,
        difficulty,
        max_shots,
        terrain,
        json: args.iter().any(|a| a == "--json"),
    }
}

// --- Battle loop ---

fn run_duel(options: &Options) {
    let mut rules = CombatRules::new(BattleConfig {
        seed: options.seed,
        terrain: options.terrain,
        ..Default::default()
    });
    let mut pilots = [
        TargetingAi::new(options.difficulty, options.seed.wrapping_add(1)),
        TargetingAi::new(options.difficulty, options.seed.wrapping_add(2)),
    ];

    info!(
        "Seed {}, {:?} pilots, {} terrain",
        options.seed,
        options.difficulty,
        rules.terrain().kind().as_str()
    );
    rules.apply_action(Action::start(Side::A));

    let mut shots = 0;
    while shots < options.max_shots && rules.phase() == Phase::Turn {
        let side = rules.active_side();
        take_turn(&mut rules, &mut pilots[side.index()], side);
        shots += 1;

        let mut ticks = 0;
        while rules.phase() == Phase::InFlight {
            if ticks >= MAX_FLIGHT_TICKS {
                eprintln!("Error: shell {shots} never came down");
                process::exit(1);
            }
            rules.tick(DT);
            ticks += 1;
        }

        for event in rules.take_events() {
            debug!("{event:?}");
        }
    }

    if options.json {
        match serde_json::to_string_pretty(&rules.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize snapshot: {e}");
                process::exit(1);
            }
        }
        return;
    }

    let a = rules.tank(Side::A);
    let b = rules.tank(Side::B);
    println!("Terrain: {}", rules.terrain().kind().as_str());
    println!("Health:  A {}  B {}", a.health(), b.health());
    match rules.check_winner() {
        Outcome::Won(side) => println!("Winner:  {side:?} after {shots} shots"),
        Outcome::Ongoing => println!("No winner after {shots} shots"),
    }
}

/// Let `pilot` adjust and fire. Ends with a shot either way.
fn take_turn(rules: &mut CombatRules, pilot: &mut TargetingAi, side: Side) {
    for _ in 0..MAX_TURN_ACTIONS {
        let Some(ctx) = rules.targeting_context(side) else {
            return;
        };
        let kind = pilot.next_action(&ctx);
        rules.apply_action(Action::new(side, kind));
        if kind == ActionKind::Fire {
            return;
        }
    }
    rules.apply_action(Action::fire(side));
}
