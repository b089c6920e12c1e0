use std::io::{self, BufRead, Write};

use bjbot::msg::{ActionResponse, ExecuteMsg, QueryMsg};
use bjbot::state::Config;
use bjbot::view::{describe, TableView};
use bjbot::Table;
use blackjack::{MemoryStore, OwnerId, SessionStore};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bjbot-console", about = "Play fixed-ace blackjack against the dealer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively on stdin
    Play {
        /// Player id used as the session owner
        #[arg(long, env = "BJ_PLAYER_ID", default_value = "1")]
        player_id: OwnerId,

        /// Maximum bet; larger bets are clamped
        #[arg(long, env = "BJ_MAX_BET", default_value = "100000")]
        max_bet: u64,

        /// Seconds since a game started before it is settled as it stands
        #[arg(long, env = "BJ_TIMEOUT_SECONDS", default_value = "300")]
        timeout_seconds: u64,

        /// Re-deal attempts for an opening hand over 21
        #[arg(long, env = "BJ_MAX_DEAL_ATTEMPTS", default_value = "20")]
        max_deal_attempts: u32,

        /// Fixed shuffle seed for reproducible games
        #[arg(long, env = "BJ_SEED")]
        seed: Option<u64>,
    },

    /// Print the JSON schemas of the table messages and config
    Schema,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            player_id,
            max_bet,
            timeout_seconds,
            max_deal_attempts,
            seed,
        } => {
            let config = Config {
                max_bet,
                max_deal_attempts,
                timeout_seconds,
            };
            let table = match seed {
                Some(seed) => Table::with_seed(config, MemoryStore::new(), seed),
                None => Table::new(config, MemoryStore::new()),
            };
            let mut table = match table {
                Ok(table) => table,
                Err(e) => {
                    log::error!("Failed to open table: {e}");
                    std::process::exit(1);
                }
            };
            if let Err(e) = run(&mut table, player_id) {
                log::error!("Console failed: {e}");
                std::process::exit(1);
            }
        }
        Command::Schema => {
            let schemas = [
                ("execute_msg", schemars::schema_for!(bjbot::msg::ExecuteMsg)),
                ("query_msg", schemars::schema_for!(bjbot::msg::QueryMsg)),
                ("config", schemars::schema_for!(Config)),
            ];
            for (name, schema) in schemas {
                match serde_json::to_string_pretty(&schema) {
                    Ok(json) => println!("// {name}\n{json}"),
                    Err(e) => log::error!("Failed to render {name} schema: {e}"),
                }
            }
        }
    }
}

fn run(table: &mut Table, player_id: OwnerId) -> io::Result<()> {
    log::info!("Table open for player {player_id}, max bet {}", table.config().max_bet);
    println!("Commands: bj <amount|all>, hit, stand, stop, status, quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        for expired in table.sweep_expired_now() {
            println!("Your game timed out.");
            print_response(&expired);
        }

        let mut words = line.split_whitespace();
        let msg = match (words.next(), words.next()) {
            (None, _) => continue,
            (Some("quit" | "exit"), _) => break,
            (Some("bj"), Some(bet)) => ExecuteMsg::Start {
                bet: bet.to_string(),
            },
            (Some("bj"), None) => {
                println!("Usage: bj <amount> or bj all");
                continue;
            }
            (Some("hit"), _) => ExecuteMsg::Hit { owner: player_id },
            (Some("stand"), _) => ExecuteMsg::Stand { owner: player_id },
            (Some("stop"), _) => ExecuteMsg::Stop {},
            (Some("status"), _) => {
                print_status(table, player_id);
                continue;
            }
            (Some(other), _) => {
                println!("Unknown command '{other}'");
                continue;
            }
        };

        match table.execute(player_id, msg) {
            Ok(response) => print_response(&response),
            Err(e) => println!("{e}"),
        }
    }

    if !table.store().list_all().is_empty() {
        if let Ok(response) = table.execute(player_id, ExecuteMsg::Stop {}) {
            println!("Game abandoned.");
            print_response(&response);
        }
    }
    Ok(())
}

fn print_response(response: &ActionResponse) {
    if let Some(card) = response.drawn {
        println!("You drew {}", card.label());
    }
    println!("{}", response.view);
    if let Some(settlement) = &response.settlement {
        println!("Result: {}", describe(settlement));
    }
}

fn print_status(table: &Table, player_id: OwnerId) {
    let view = table
        .query(QueryMsg::GetSession { owner: player_id })
        .map_err(|e| e.to_string())
        .and_then(|json| {
            serde_json::from_str::<Option<TableView>>(&json).map_err(|e| e.to_string())
        });
    match view {
        Ok(Some(view)) => println!("{view}"),
        Ok(None) => println!("You have no game in progress."),
        Err(e) => log::error!("Status query failed: {e}"),
    }
}
